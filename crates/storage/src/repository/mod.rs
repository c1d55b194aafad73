//! Generic record store: the one seam between query services and the
//! database.

pub mod filter;
pub mod memory;
pub mod postgres;

use std::sync::Arc;

pub use filter::{Filter, ResolvedFilter};

use crate::error::{Result, StorageError};
use crate::models::{Entity, Record};

#[async_trait::async_trait]
pub trait RecordStore: Send + Sync {
    /// Creates any missing tables. Safe to call on every start.
    async fn ensure_schema(&self) -> Result<()>;

    /// All records of the filter's table matching every condition, in no
    /// particular order.
    async fn query(&self, filter: &ResolvedFilter) -> Result<Vec<Record>>;
}

/// Store handle shared across request handlers.
pub type SharedStore = Arc<dyn RecordStore>;

/// Typed query: resolves `filter` against `E`'s table and returns the
/// matching records.
pub async fn query<E: Entity>(store: &dyn RecordStore, filter: &Filter) -> Result<Vec<E>> {
    let resolved = filter.resolve(E::TABLE)?;
    let records = store.query(&resolved).await?;

    records
        .into_iter()
        .map(|record| {
            let table = record.table();
            E::from_record(record).ok_or_else(|| {
                StorageError::schema_violation(format!(
                    "expected a {} record, store returned one from {}",
                    E::TABLE.name(),
                    table.name()
                ))
            })
        })
        .collect()
}
