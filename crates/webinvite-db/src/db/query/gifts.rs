//! Query composition for `gifts`.

use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::connection::DbConnection;
use crate::db::schema::gifts;
use crate::db::{Filter, Table};
use crate::error::{DbError, DbResult};
use crate::model::{Gift, GiftChangeset};

/// ## Summary
/// Rows of one invitation, in creation order.
#[must_use]
pub fn by_wedding(wedding_id: Uuid) -> gifts::BoxedQuery<'static, Pg> {
    gifts::table
        .filter(gifts::wedding_id.eq(wedding_id))
        .order(gifts::created_at.asc())
        .into_boxed()
}

/// ## Summary
/// Boxed query for the given filter.
///
/// ## Errors
/// Returns `UnsupportedFilter` for [`Filter::Owner`], which only applies to invitations.
pub fn by_filter(filter: Filter) -> DbResult<gifts::BoxedQuery<'static, Pg>> {
    match filter {
        Filter::Wedding(wedding_id) => Ok(by_wedding(wedding_id)),
        Filter::Id(id) => Ok(gifts::table.find(id).into_boxed()),
        Filter::Owner(_) => Err(DbError::UnsupportedFilter {
            table: Table::Gifts,
            column: filter.column(),
        }),
    }
}

/// ## Summary
/// Loads the rows matching `filter`.
///
/// ## Errors
/// Returns an error if the filter does not apply to this table or the query fails.
pub async fn load(conn: &mut DbConnection<'_>, filter: Filter) -> DbResult<Vec<Gift>> {
    Ok(by_filter(filter)?
        .select(Gift::as_select())
        .load(conn)
        .await?)
}

/// ## Summary
/// Inserts a row and returns it as stored.
///
/// ## Errors
/// Returns an error if the database operation fails.
pub async fn insert(conn: &mut DbConnection<'_>, gift: &Gift) -> QueryResult<Gift> {
    diesel::insert_into(gifts::table)
        .values(gift)
        .returning(Gift::as_returning())
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
    changes: &GiftChangeset,
) -> QueryResult<usize> {
    diesel::update(gifts::table.find(id))
        .set((changes, gifts::updated_at.eq(diesel::dsl::now)))
        .execute(conn)
        .await
}

/// ## Summary
/// Deletes the row with `id`, returning the number of rows removed.
///
/// ## Errors
/// Returns an error if the database operation fails.
pub async fn delete(conn: &mut DbConnection<'_>, id: Uuid) -> QueryResult<usize> {
    diesel::delete(gifts::table.find(id)).execute(conn).await
}
