use std::fmt;

use futures::future::BoxFuture;
use uuid::Uuid;

use crate::error::DbResult;

pub mod connection;
pub mod enums;
pub mod memory;
pub mod pg;
pub mod query;
pub mod records;
pub mod schema;

/// A row as exchanged with the remote backend: a JSON object keyed by column name.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Tables of the remote backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Weddings,
    Backgrounds,
    Events,
    Guests,
    Gifts,
    Music,
}

impl Table {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weddings => "weddings",
            Self::Backgrounds => "backgrounds",
            Self::Events => "events",
            Self::Guests => "guests",
            Self::Gifts => "gifts",
            Self::Music => "music",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row selection for [`RemoteBackend::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// Rows belonging to one invitation (`wedding_id = ?`).
    Wedding(Uuid),
    /// Invitations owned by a user (`user_id = ?`); only meaningful for [`Table::Weddings`].
    Owner(Uuid),
    /// A single row by primary key.
    Id(Uuid),
}

impl Filter {
    /// Column the filter compares against.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Wedding(_) => "wedding_id",
            Self::Owner(_) => "user_id",
            Self::Id(_) => "id",
        }
    }

    #[must_use]
    pub const fn value(self) -> Uuid {
        match self {
            Self::Wedding(id) | Self::Owner(id) | Self::Id(id) => id,
        }
    }
}

/// The table-oriented data service invitation data is persisted to.
///
/// Rows are ordered per table: weddings newest first, events by time, every
/// other table in creation order.
pub trait RemoteBackend: Send + Sync {
    /// Returns all rows of `table` matching `filter`.
    fn select(&self, table: Table, filter: Filter) -> BoxFuture<'_, DbResult<Vec<Row>>>;

    /// Inserts `record` and returns the stored row, including its assigned id.
    fn insert(&self, table: Table, record: Row) -> BoxFuture<'_, DbResult<Row>>;

    /// Applies the columns present in `partial` to the row with `id`.
    fn update(&self, table: Table, id: Uuid, partial: Row) -> BoxFuture<'_, DbResult<()>>;

    /// Removes the row with `id`.
    fn delete(&self, table: Table, id: Uuid) -> BoxFuture<'_, DbResult<()>>;
}
