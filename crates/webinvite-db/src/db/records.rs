//! Typed access on top of [`RemoteBackend`]'s JSON rows.

use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::{Filter, RemoteBackend, Row, Table};
use crate::error::{DbError, DbResult};
use crate::model::{Background, Event, Gift, Guest, Music, Wedding};

/// A record type stored in exactly one backend table.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const TABLE: Table;

    /// Backend id, `None` while the record is an unsaved draft.
    fn id(&self) -> Option<Uuid>;

    fn set_id(&mut self, id: Uuid);
}

macro_rules! impl_record {
    ($ty:ty, $table:expr) => {
        impl Record for $ty {
            const TABLE: Table = $table;

            fn id(&self) -> Option<Uuid> {
                self.id
            }

            fn set_id(&mut self, id: Uuid) {
                self.id = Some(id);
            }
        }
    };
}

impl_record!(Wedding, Table::Weddings);
impl_record!(Background, Table::Backgrounds);
impl_record!(Event, Table::Events);
impl_record!(Guest, Table::Guests);
impl_record!(Gift, Table::Gifts);
impl_record!(Music, Table::Music);

/// ## Summary
/// Serializes `value` into a row.
///
/// ## Errors
/// Returns an error if `value` does not serialize to a JSON object.
pub fn to_row<T: Serialize + ?Sized>(table: Table, value: &T) -> DbResult<Row> {
    match serde_json::to_value(value)? {
        serde_json::Value::Object(row) => Ok(row),
        other => Err(DbError::InvalidRow {
            table,
            reason: format!("expected an object, got {other}"),
        }),
    }
}

/// ## Summary
/// Deserializes a row into a typed value.
///
/// ## Errors
/// Returns an error if the row does not match the shape of `T`.
pub fn from_row<T: DeserializeOwned>(row: Row) -> DbResult<T> {
    Ok(serde_json::from_value(serde_json::Value::Object(row))?)
}

/// ## Summary
/// Loads every record matching `filter`.
///
/// ## Errors
/// Returns an error if the backend call fails or a row cannot be decoded.
pub async fn fetch_all<T: Record>(backend: &dyn RemoteBackend, filter: Filter) -> DbResult<Vec<T>> {
    backend
        .select(T::TABLE, filter)
        .await?
        .into_iter()
        .map(from_row)
        .collect()
}

/// ## Summary
/// Loads the first record matching `filter`, if any.
///
/// ## Errors
/// Returns an error if the backend call fails or the row cannot be decoded.
pub async fn fetch_optional<T: Record>(
    backend: &dyn RemoteBackend,
    filter: Filter,
) -> DbResult<Option<T>> {
    backend
        .select(T::TABLE, filter)
        .await?
        .into_iter()
        .next()
        .map(from_row)
        .transpose()
}

/// ## Summary
/// Inserts `record` and returns the stored copy with its assigned id.
///
/// ## Errors
/// Returns an error if the backend rejects the insert.
pub async fn insert_record<T: Record>(backend: &dyn RemoteBackend, record: &T) -> DbResult<T> {
    let mut row = to_row(T::TABLE, record)?;
    row.remove("id");
    from_row(backend.insert(T::TABLE, row).await?)
}

/// ## Summary
/// Writes every column of a persisted `record` back to the backend.
///
/// ## Errors
/// Returns an error if `record` has no id or the backend rejects the update.
pub async fn update_record<T: Record>(backend: &dyn RemoteBackend, record: &T) -> DbResult<()> {
    let id = record.id().ok_or(DbError::CoreError(
        webinvite_core::error::CoreError::InvariantViolation("cannot update an unsaved record"),
    ))?;
    let mut row = to_row(T::TABLE, record)?;
    row.remove("id");
    row.remove("wedding_id");
    backend.update(T::TABLE, id, row).await
}

/// ## Summary
/// Sends only the fields present in `patch` to the row with `id`.
///
/// ## Errors
/// Returns an error if the backend rejects the update.
pub async fn update_partial<P: Serialize + ?Sized>(
    backend: &dyn RemoteBackend,
    table: Table,
    id: Uuid,
    patch: &P,
) -> DbResult<()> {
    backend.update(table, id, to_row(table, patch)?).await
}

/// ## Summary
/// Inserts `record` if it has no id yet, otherwise updates it.
///
/// Returns the record as it now exists remotely.
///
/// ## Errors
/// Returns an error if the backend call fails.
pub async fn save_record<T: Record>(backend: &dyn RemoteBackend, record: &T) -> DbResult<T> {
    if record.id().is_some() {
        update_record(backend, record).await?;
        Ok(record.clone())
    } else {
        insert_record(backend, record).await
    }
}

/// ## Summary
/// Deletes the record of type `T` with `id`.
///
/// ## Errors
/// Returns an error if the backend call fails.
pub async fn delete_record<T: Record>(backend: &dyn RemoteBackend, id: Uuid) -> DbResult<()> {
    backend.delete(T::TABLE, id).await
}
