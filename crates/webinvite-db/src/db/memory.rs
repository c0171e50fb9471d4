//! In-process [`RemoteBackend`] used for demos and tests.
//!
//! Rows live in a map per table. Every call is recorded, and individual
//! operations can be made to fail to exercise error paths.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use futures::future::{BoxFuture, ready};
use serde_json::Value;
use uuid::Uuid;

use super::{Filter, RemoteBackend, Row, Table};
use crate::error::{DbError, DbResult};

/// Kind of backend operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Select,
    Insert,
    Update,
    Delete,
}

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendCall {
    pub operation: Operation,
    pub table: Table,
    /// Row id for update/delete, filter value for select, `None` for insert.
    pub id: Option<Uuid>,
}

#[derive(Default)]
struct State {
    tables: HashMap<Table, Vec<Row>>,
    calls: Vec<BackendCall>,
    failures: HashSet<(Operation, Table)>,
}

#[derive(Clone, Default)]
pub struct MemoryBackend {
    state: Arc<Mutex<State>>,
}

fn row_uuid(row: &Row, column: &str) -> Option<Uuid> {
    row.get(column)
        .and_then(Value::as_str)
        .and_then(|s| Uuid::parse_str(s).ok())
}

fn sort_key(row: &Row) -> Option<DateTime<Utc>> {
    row.get("event_time")
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|t| t.with_timezone(&Utc))
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Make every subsequent `operation` on `table` fail until [`Self::heal`] is called.
    pub fn fail_on(&self, operation: Operation, table: Table) {
        self.lock().failures.insert((operation, table));
    }

    /// Clear all injected failures.
    pub fn heal(&self) {
        self.lock().failures.clear();
    }

    /// Calls made so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<BackendCall> {
        self.lock().calls.clone()
    }

    /// Number of recorded calls of `operation` on `table`.
    #[must_use]
    pub fn count(&self, operation: Operation, table: Table) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|call| call.operation == operation && call.table == table)
            .count()
    }

    /// Snapshot of every row currently stored in `table`.
    #[must_use]
    pub fn rows(&self, table: Table) -> Vec<Row> {
        self.lock().tables.get(&table).cloned().unwrap_or_default()
    }

    fn begin(
        &self,
        operation: Operation,
        table: Table,
        id: Option<Uuid>,
    ) -> DbResult<MutexGuard<'_, State>> {
        let mut state = self.lock();
        state.calls.push(BackendCall {
            operation,
            table,
            id,
        });
        if state.failures.contains(&(operation, table)) {
            tracing::debug!(?operation, %table, "Injected backend failure");
            return Err(DbError::Unavailable(format!(
                "{operation:?} on {table} is failing"
            )));
        }
        Ok(state)
    }

    fn select_now(&self, table: Table, filter: Filter) -> DbResult<Vec<Row>> {
        let state = self.begin(Operation::Select, table, Some(filter.value()))?;
        let supported = match filter {
            Filter::Id(_) => true,
            Filter::Owner(_) => table == Table::Weddings,
            Filter::Wedding(_) => table != Table::Weddings,
        };
        if !supported {
            return Err(DbError::UnsupportedFilter {
                table,
                column: filter.column(),
            });
        }

        let mut rows: Vec<Row> = state
            .tables
            .get(&table)
            .map(|rows| {
                rows.iter()
                    .filter(|row| row_uuid(row, filter.column()) == Some(filter.value()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        match table {
            Table::Weddings => rows.reverse(),
            // Rows without a time sort last, as in PostgreSQL's ascending order.
            Table::Events => rows.sort_by(|a, b| match (sort_key(a), sort_key(b)) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            }),
            _ => {}
        }
        Ok(rows)
    }

    fn insert_now(&self, table: Table, mut record: Row) -> DbResult<Row> {
        let mut state = self.begin(Operation::Insert, table, None)?;
        let id = row_uuid(&record, "id").unwrap_or_else(Uuid::new_v4);
        record.insert("id".to_string(), Value::String(id.to_string()));
        state.tables.entry(table).or_default().push(record.clone());
        Ok(record)
    }

    fn update_now(&self, table: Table, id: Uuid, partial: Row) -> DbResult<()> {
        let mut state = self.begin(Operation::Update, table, Some(id))?;
        let row = state
            .tables
            .get_mut(&table)
            .and_then(|rows| rows.iter_mut().find(|row| row_uuid(row, "id") == Some(id)))
            .ok_or(DbError::NotFound { table, id })?;
        for (column, value) in partial {
            if column != "id" {
                row.insert(column, value);
            }
        }
        Ok(())
    }

    fn delete_now(&self, table: Table, id: Uuid) -> DbResult<()> {
        let mut state = self.begin(Operation::Delete, table, Some(id))?;
        let rows = state.tables.entry(table).or_default();
        let before = rows.len();
        rows.retain(|row| row_uuid(row, "id") != Some(id));
        if rows.len() == before {
            return Err(DbError::NotFound { table, id });
        }
        Ok(())
    }
}

impl RemoteBackend for MemoryBackend {
    fn select(&self, table: Table, filter: Filter) -> BoxFuture<'_, DbResult<Vec<Row>>> {
        Box::pin(ready(self.select_now(table, filter)))
    }

    fn insert(&self, table: Table, record: Row) -> BoxFuture<'_, DbResult<Row>> {
        Box::pin(ready(self.insert_now(table, record)))
    }

    fn update(&self, table: Table, id: Uuid, partial: Row) -> BoxFuture<'_, DbResult<()>> {
        Box::pin(ready(self.update_now(table, id, partial)))
    }

    fn delete(&self, table: Table, id: Uuid) -> BoxFuture<'_, DbResult<()>> {
        Box::pin(ready(self.delete_now(table, id)))
    }
}
