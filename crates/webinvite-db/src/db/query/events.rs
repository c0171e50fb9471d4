//! Query composition for `events`.

use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::connection::DbConnection;
use crate::db::schema::events;
use crate::db::{Filter, Table};
use crate::error::{DbError, DbResult};
use crate::model::{Event, EventChangeset};

/// ## Summary
/// Rows of one invitation, ordered by start time.
#[must_use]
pub fn by_wedding(wedding_id: Uuid) -> events::BoxedQuery<'static, Pg> {
    events::table
        .filter(events::wedding_id.eq(wedding_id))
        .order(events::event_time.asc())
        .then_order_by(events::created_at.asc())
        .into_boxed()
}

/// ## Summary
/// Boxed query for the given filter.
///
/// ## Errors
/// Returns `UnsupportedFilter` for [`Filter::Owner`], which only applies to invitations.
pub fn by_filter(filter: Filter) -> DbResult<events::BoxedQuery<'static, Pg>> {
    match filter {
        Filter::Wedding(wedding_id) => Ok(by_wedding(wedding_id)),
        Filter::Id(id) => Ok(events::table.find(id).into_boxed()),
        Filter::Owner(_) => Err(DbError::UnsupportedFilter {
            table: Table::Events,
            column: filter.column(),
        }),
    }
}

/// ## Summary
/// Loads the rows matching `filter`.
///
/// ## Errors
/// Returns an error if the filter does not apply to this table or the query fails.
pub async fn load(conn: &mut DbConnection<'_>, filter: Filter) -> DbResult<Vec<Event>> {
    Ok(by_filter(filter)?
        .select(Event::as_select())
        .load(conn)
        .await?)
}

/// ## Summary
/// Inserts a row and returns it as stored.
///
/// ## Errors
/// Returns an error if the database operation fails.
pub async fn insert(conn: &mut DbConnection<'_>, event: &Event) -> QueryResult<Event> {
    diesel::insert_into(events::table)
        .values(event)
        .returning(Event::as_returning())
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
    changes: &EventChangeset,
) -> QueryResult<usize> {
    diesel::update(events::table.find(id))
        .set((changes, events::updated_at.eq(diesel::dsl::now)))
        .execute(conn)
        .await
}

/// ## Summary
/// Deletes the row with `id`, returning the number of rows removed.
///
/// ## Errors
/// Returns an error if the database operation fails.
pub async fn delete(conn: &mut DbConnection<'_>, id: Uuid) -> QueryResult<usize> {
    diesel::delete(events::table.find(id)).execute(conn).await
}
