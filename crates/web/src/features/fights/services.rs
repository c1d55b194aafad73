use storage::{RecordStore, dto::fight::FightQuery, error::Result, models::Fight, query};

/// Fights matching every field set on `filter`
pub async fn list_fights(store: &dyn RecordStore, filter: &FightQuery) -> Result<Vec<Fight>> {
    query(store, &filter.to_filter()).await
}
