use storage::{
    Filter, RecordStore, dto::fighter::FighterName, error::Result, models::Fighter, query,
};

fn weight_class_filter(weight_class: &str) -> Filter {
    Filter::new().eq("weight_class", weight_class)
}

/// Names of all fighters whose weight class equals `weight_class` exactly,
/// in the order the store returns them.
pub async fn select_fighters(
    store: &dyn RecordStore,
    weight_class: &str,
) -> Result<Vec<FighterName>> {
    let fighters = list_fighters(store, weight_class).await?;

    Ok(fighters.into_iter().map(FighterName::from).collect())
}

/// Full fighter records for a weight class
pub async fn list_fighters(store: &dyn RecordStore, weight_class: &str) -> Result<Vec<Fighter>> {
    let fighters: Vec<Fighter> = query(store, &weight_class_filter(weight_class)).await?;

    tracing::debug!(weight_class, count = fighters.len(), "Fighters selected");

    Ok(fighters)
}
