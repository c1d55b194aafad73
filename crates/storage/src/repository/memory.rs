use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use super::{RecordStore, ResolvedFilter};
use crate::error::{Result, StorageError};
use crate::models::{Entity, Record};
use crate::schema::Table;

/// In-process [`RecordStore`] that keeps records in insertion order.
///
/// It can be switched offline to reproduce a lost database connection:
/// while unavailable every operation fails the way an exhausted pool does.
#[derive(Debug)]
pub struct InMemoryStore {
    tables: RwLock<HashMap<Table, Vec<Record>>>,
    available: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
            available: AtomicBool::new(true),
        }
    }

    pub fn insert<E: Entity>(&self, entity: E) {
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        tables.entry(E::TABLE).or_default().push(entity.into_record());
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StorageError::Database(sqlx::Error::PoolTimedOut))
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl RecordStore for InMemoryStore {
    async fn ensure_schema(&self) -> Result<()> {
        self.check_available()?;

        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        for table in Table::ALL {
            tables.entry(table).or_default();
        }

        Ok(())
    }

    async fn query(&self, filter: &ResolvedFilter) -> Result<Vec<Record>> {
        self.check_available()?;

        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        let records: Vec<Record> = tables
            .get(&filter.table())
            .map(|records| {
                records
                    .iter()
                    .filter(|record| filter.matches(record))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        Ok(records)
    }
}
