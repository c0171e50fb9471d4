//! [`RemoteBackend`] backed by `PostgreSQL` through a diesel-async pool.

use futures::future::BoxFuture;
use serde::Serialize;
use uuid::Uuid;

use super::connection::DbPool;
use super::records::{from_row, to_row};
use super::{Filter, RemoteBackend, Row, Table, query};
use crate::error::{DbError, DbResult};

#[derive(Clone)]
pub struct PgBackend {
    pool: DbPool,
}

impl PgBackend {
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn into_rows<T: Serialize>(table: Table, records: &[T]) -> DbResult<Vec<Row>> {
    records.iter().map(|record| to_row(table, record)).collect()
}

fn expect_one(table: Table, id: Uuid, affected: usize) -> DbResult<()> {
    if affected == 0 {
        Err(DbError::NotFound { table, id })
    } else {
        Ok(())
    }
}

impl PgBackend {
    #[tracing::instrument(skip(self), fields(table = %table))]
    async fn select_rows(&self, table: Table, filter: Filter) -> DbResult<Vec<Row>> {
        let mut conn = self.pool.get().await?;
        let rows = match table {
            Table::Weddings => into_rows(table, &query::weddings::load(&mut conn, filter).await?)?,
            Table::Backgrounds => {
                into_rows(table, &query::backgrounds::load(&mut conn, filter).await?)?
            }
            Table::Events => into_rows(table, &query::events::load(&mut conn, filter).await?)?,
            Table::Guests => into_rows(table, &query::guests::load(&mut conn, filter).await?)?,
            Table::Gifts => into_rows(table, &query::gifts::load(&mut conn, filter).await?)?,
            Table::Music => into_rows(table, &query::music::load(&mut conn, filter).await?)?,
        };
        tracing::debug!(count = rows.len(), "Selected rows");
        Ok(rows)
    }

    #[tracing::instrument(skip(self, record), fields(table = %table))]
    async fn insert_row(&self, table: Table, record: Row) -> DbResult<Row> {
        let mut conn = self.pool.get().await?;
        let stored = match table {
            Table::Weddings => to_row(
                table,
                &query::weddings::insert(&mut conn, &from_row(record)?).await?,
            )?,
            Table::Backgrounds => to_row(
                table,
                &query::backgrounds::insert(&mut conn, &from_row(record)?).await?,
            )?,
            Table::Events => to_row(
                table,
                &query::events::insert(&mut conn, &from_row(record)?).await?,
            )?,
            Table::Guests => to_row(
                table,
                &query::guests::insert(&mut conn, &from_row(record)?).await?,
            )?,
            Table::Gifts => to_row(
                table,
                &query::gifts::insert(&mut conn, &from_row(record)?).await?,
            )?,
            Table::Music => to_row(
                table,
                &query::music::insert(&mut conn, &from_row(record)?).await?,
            )?,
        };
        tracing::debug!(id = ?stored.get("id"), "Inserted row");
        Ok(stored)
    }

    #[tracing::instrument(skip(self, partial), fields(table = %table))]
    async fn update_row(&self, table: Table, id: Uuid, partial: Row) -> DbResult<()> {
        let mut conn = self.pool.get().await?;
        let affected = match table {
            Table::Weddings => query::weddings::update(&mut conn, id, &from_row(partial)?).await?,
            Table::Backgrounds => {
                query::backgrounds::update(&mut conn, id, &from_row(partial)?).await?
            }
            Table::Events => query::events::update(&mut conn, id, &from_row(partial)?).await?,
            Table::Guests => query::guests::update(&mut conn, id, &from_row(partial)?).await?,
            Table::Gifts => query::gifts::update(&mut conn, id, &from_row(partial)?).await?,
            Table::Music => query::music::update(&mut conn, id, &from_row(partial)?).await?,
        };
        expect_one(table, id, affected)
    }

    #[tracing::instrument(skip(self), fields(table = %table))]
    async fn delete_row(&self, table: Table, id: Uuid) -> DbResult<()> {
        let mut conn = self.pool.get().await?;
        let affected = match table {
            Table::Weddings => query::weddings::delete(&mut conn, id).await?,
            Table::Backgrounds => query::backgrounds::delete(&mut conn, id).await?,
            Table::Events => query::events::delete(&mut conn, id).await?,
            Table::Guests => query::guests::delete(&mut conn, id).await?,
            Table::Gifts => query::gifts::delete(&mut conn, id).await?,
            Table::Music => query::music::delete(&mut conn, id).await?,
        };
        expect_one(table, id, affected)
    }
}

impl RemoteBackend for PgBackend {
    fn select(&self, table: Table, filter: Filter) -> BoxFuture<'_, DbResult<Vec<Row>>> {
        Box::pin(self.select_rows(table, filter))
    }

    fn insert(&self, table: Table, record: Row) -> BoxFuture<'_, DbResult<Row>> {
        Box::pin(self.insert_row(table, record))
    }

    fn update(&self, table: Table, id: Uuid, partial: Row) -> BoxFuture<'_, DbResult<()>> {
        Box::pin(self.update_row(table, id, partial))
    }

    fn delete(&self, table: Table, id: Uuid) -> BoxFuture<'_, DbResult<()>> {
        Box::pin(self.delete_row(table, id))
    }
}
