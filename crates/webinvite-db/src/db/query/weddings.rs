//! Query composition for `weddings`.

use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::connection::DbConnection;
use crate::db::schema::weddings;
use crate::db::{Filter, Table};
use crate::error::{DbError, DbResult};
use crate::model::{Wedding, WeddingChangeset};

/// ## Summary
/// Invitations owned by `user_id`, newest first.
#[must_use]
pub fn by_owner(user_id: Uuid) -> weddings::BoxedQuery<'static, Pg> {
    weddings::table
        .filter(weddings::user_id.eq(user_id))
        .order(weddings::created_at.desc())
        .into_boxed()
}

/// ## Summary
/// Boxed query for the given filter.
///
/// ## Errors
/// Returns `UnsupportedFilter` for [`Filter::Wedding`], which has no meaning for this table.
pub fn by_filter(filter: Filter) -> DbResult<weddings::BoxedQuery<'static, Pg>> {
    match filter {
        Filter::Owner(user_id) => Ok(by_owner(user_id)),
        Filter::Id(id) => Ok(weddings::table.find(id).into_boxed()),
        Filter::Wedding(_) => Err(DbError::UnsupportedFilter {
            table: Table::Weddings,
            column: filter.column(),
        }),
    }
}

/// ## Summary
/// Loads the rows matching `filter`.
///
/// ## Errors
/// Returns an error if the filter does not apply to this table or the query fails.
pub async fn load(conn: &mut DbConnection<'_>, filter: Filter) -> DbResult<Vec<Wedding>> {
    Ok(by_filter(filter)?
        .select(Wedding::as_select())
        .load(conn)
        .await?)
}

/// ## Summary
/// Inserts a row and returns it as stored.
///
/// ## Errors
/// Returns an error if the database operation fails.
pub async fn insert(conn: &mut DbConnection<'_>, wedding: &Wedding) -> QueryResult<Wedding> {
    diesel::insert_into(weddings::table)
        .values(wedding)
        .returning(Wedding::as_returning())
        .get_result(conn)
        .await
}

/// ## Summary
/// Applies `changes` to the row with `id` and bumps `updated_at`.
///
/// Returns the number of rows touched.
///
/// ## Errors
/// Returns an error if the database operation fails.
pub async fn update(
    conn: &mut DbConnection<'_>,
    id: Uuid,
    changes: &WeddingChangeset,
) -> QueryResult<usize> {
    diesel::update(weddings::table.find(id))
        .set((changes, weddings::updated_at.eq(diesel::dsl::now)))
        .execute(conn)
        .await
}

/// ## Summary
/// Deletes the row with `id`, returning the number of rows removed.
///
/// ## Errors
/// Returns an error if the database operation fails.
pub async fn delete(conn: &mut DbConnection<'_>, id: Uuid) -> QueryResult<usize> {
    diesel::delete(weddings::table.find(id)).execute(conn).await
}
