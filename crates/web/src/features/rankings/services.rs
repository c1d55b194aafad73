use storage::{
    Filter, RecordStore,
    dto::ranking::RankingSnapshot,
    error::Result,
    models::{Division, RankingEntry},
    query,
};

/// Ranked fighters of one division, best first
pub async fn get_division_ranking(
    store: &dyn RecordStore,
    division: Division,
) -> Result<Vec<RankingEntry>> {
    let mut entries: Vec<RankingEntry> = query(
        store,
        &Filter::new().eq("weight_class", division.as_str()),
    )
    .await?;

    entries.sort_by_key(|entry| entry.rank_position);

    Ok(entries)
}

/// Every rank position with the fighter holding it in each division
pub async fn get_ranking_table(store: &dyn RecordStore) -> Result<Vec<RankingSnapshot>> {
    let entries: Vec<RankingEntry> = query(store, &Filter::new()).await?;

    Ok(RankingSnapshot::from_entries(entries))
}
