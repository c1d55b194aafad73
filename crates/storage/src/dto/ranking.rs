use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Division, RankingEntry};

/// The fighter holding one rank position in each division.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct RankingSnapshot {
    pub rank: i32,
    pub flyweight: Option<String>,
    pub bantamweight: Option<String>,
    pub featherweight: Option<String>,
    pub lightweight: Option<String>,
    pub welterweight: Option<String>,
    pub middleweight: Option<String>,
    pub light_heavyweight: Option<String>,
    pub heavyweight: Option<String>,
}

impl RankingSnapshot {
    pub fn new(rank: i32) -> Self {
        Self {
            rank,
            ..Default::default()
        }
    }

    fn slot(&mut self, division: Division) -> &mut Option<String> {
        match division {
            Division::Flyweight => &mut self.flyweight,
            Division::Bantamweight => &mut self.bantamweight,
            Division::Featherweight => &mut self.featherweight,
            Division::Lightweight => &mut self.lightweight,
            Division::Welterweight => &mut self.welterweight,
            Division::Middleweight => &mut self.middleweight,
            Division::LightHeavyweight => &mut self.light_heavyweight,
            Division::Heavyweight => &mut self.heavyweight,
        }
    }

    /// Pivots per-division entries into one row per rank, ordered by rank.
    /// Entries whose weight class is not a known division are skipped.
    pub fn from_entries(entries: impl IntoIterator<Item = RankingEntry>) -> Vec<Self> {
        let mut rows: BTreeMap<i32, Self> = BTreeMap::new();

        for entry in entries {
            let Some(division) = entry.division() else {
                tracing::warn!(
                    weight_class = %entry.weight_class,
                    "Skipping ranking entry with unknown division"
                );
                continue;
            };

            let rank = entry.rank_position;
            let row = rows.entry(rank).or_insert_with(|| Self::new(rank));
            *row.slot(division) = Some(entry.fighter_name);
        }

        rows.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pivot_orders_by_rank() {
        let snapshots = RankingSnapshot::from_entries(vec![
            RankingEntry::new(Division::Heavyweight, 2, "Ciryl Gane"),
            RankingEntry::new(Division::Middleweight, 1, "Dricus Du Plessis"),
            RankingEntry::new(Division::Heavyweight, 1, "Tom Aspinall"),
        ]);

        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0].rank, 1);
        assert_eq!(snapshots[0].heavyweight.as_deref(), Some("Tom Aspinall"));
        assert_eq!(
            snapshots[0].middleweight.as_deref(),
            Some("Dricus Du Plessis")
        );
        assert_eq!(snapshots[1].rank, 2);
        assert_eq!(snapshots[1].heavyweight.as_deref(), Some("Ciryl Gane"));
        assert_eq!(snapshots[1].middleweight, None);
    }

    #[test]
    fn test_pivot_skips_unknown_divisions() {
        let snapshots = RankingSnapshot::from_entries(vec![RankingEntry {
            weight_class: "strawweight".to_string(),
            rank_position: 1,
            fighter_name: "Zhang Weili".to_string(),
        }]);

        assert!(snapshots.is_empty());
    }

    #[test]
    fn test_snapshot_serializes_every_division() {
        let json = serde_json::to_value(RankingSnapshot::new(3)).unwrap();

        assert_eq!(json["rank"], 3);
        for division in Division::ALL {
            assert!(json.get(division.as_str()).is_some());
        }
    }
}
