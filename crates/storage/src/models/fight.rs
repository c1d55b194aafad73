use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Row, postgres::PgRow};
use utoipa::ToSchema;

use super::{Entity, Record, fighter::FighterStats, fighter::STATS_COLUMNS};
use crate::error::StorageError;
use crate::schema::{Column, FieldValue, Snapshot, Table, TableSchema};

/// Result code of a fight as stored in the `outcome` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum FightOutcome {
    /// Undecided or no contest
    Undecided,
    Fighter1Win,
    Fighter2Win,
}

impl From<FightOutcome> for i32 {
    fn from(outcome: FightOutcome) -> Self {
        match outcome {
            FightOutcome::Undecided => 0,
            FightOutcome::Fighter1Win => 1,
            FightOutcome::Fighter2Win => 2,
        }
    }
}

impl TryFrom<i32> for FightOutcome {
    type Error = StorageError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Undecided),
            1 => Ok(Self::Fighter1Win),
            2 => Ok(Self::Fighter2Win),
            other => Err(StorageError::schema_violation(format!(
                "outcome must be 0, 1 or 2, got {}",
                other
            ))),
        }
    }
}

/// A historical bout. Each side's statistics are a snapshot taken at fight
/// time and are never refreshed from `fighters`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Fight {
    pub id: i32,
    pub fighter1: String,
    pub fighter2: String,
    pub fight_year: i32,
    pub fighter1_stats: FighterStats,
    pub fighter2_stats: FighterStats,
    pub weight_class: Option<String>,
    pub round_finished: Option<i32>,
    pub fight_rounds: Option<i32>,
    /// 0 = undecided, 1 = fighter1 win, 2 = fighter2 win
    #[schema(value_type = Option<i32>)]
    pub outcome: Option<FightOutcome>,
}

pub static SCHEMA: TableSchema = TableSchema {
    name: "fights",
    columns: &[
        Column::integer("id").required(),
        Column::text("fighter1", 100).required().non_empty(),
        Column::text("fighter2", 100).required().non_empty(),
        Column::integer("fight_year").required(),
        Column::text("weight_class", 50),
        Column::integer("round_finished"),
        Column::integer("fight_rounds"),
        Column::integer("outcome"),
    ],
    snapshots: &[
        Snapshot {
            prefix: "fighter1_",
            columns: STATS_COLUMNS,
        },
        Snapshot {
            prefix: "fighter2_",
            columns: STATS_COLUMNS,
        },
    ],
};

impl<'r> FromRow<'r, PgRow> for Fight {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let outcome = row
            .try_get::<Option<i32>, _>("outcome")?
            .map(FightOutcome::try_from)
            .transpose()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "outcome".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            id: row.try_get("id")?,
            fighter1: row.try_get("fighter1")?,
            fighter2: row.try_get("fighter2")?,
            fight_year: row.try_get("fight_year")?,
            fighter1_stats: FighterStats::from_prefixed_row(row, "fighter1_")?,
            fighter2_stats: FighterStats::from_prefixed_row(row, "fighter2_")?,
            weight_class: row.try_get("weight_class")?,
            round_finished: row.try_get("round_finished")?,
            fight_rounds: row.try_get("fight_rounds")?,
            outcome,
        })
    }
}

impl Entity for Fight {
    const TABLE: Table = Table::Fights;

    fn field(&self, column: &str) -> Option<FieldValue> {
        let value = match column {
            "id" => self.id.into(),
            "fighter1" => self.fighter1.as_str().into(),
            "fighter2" => self.fighter2.as_str().into(),
            "fight_year" => self.fight_year.into(),
            "weight_class" => self.weight_class.as_deref().into(),
            "round_finished" => self.round_finished.into(),
            "fight_rounds" => self.fight_rounds.into(),
            "outcome" => self.outcome.map(i32::from).into(),
            _ => {
                if let Some(stat) = column.strip_prefix("fighter1_") {
                    return self.fighter1_stats.field(stat);
                }
                return self.fighter2_stats.field(column.strip_prefix("fighter2_")?);
            }
        };

        Some(value)
    }

    fn into_record(self) -> Record {
        Record::Fight(self)
    }

    fn from_record(record: Record) -> Option<Self> {
        match record {
            Record::Fight(fight) => Some(fight),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fight(outcome: Option<FightOutcome>) -> Fight {
        Fight {
            id: 1,
            fighter1: "Alex Pereira".to_string(),
            fighter2: "Jiri Prochazka".to_string(),
            fight_year: 2023,
            fighter1_stats: FighterStats {
                wins: Some(9),
                reach: Some(200.0),
                ..Default::default()
            },
            fighter2_stats: FighterStats {
                wins: Some(29),
                ..Default::default()
            },
            weight_class: Some("205".to_string()),
            round_finished: Some(2),
            fight_rounds: Some(5),
            outcome,
        }
    }

    #[test]
    fn test_outcome_codes() {
        assert_eq!(FightOutcome::try_from(0).unwrap(), FightOutcome::Undecided);
        assert_eq!(FightOutcome::try_from(2).unwrap(), FightOutcome::Fighter2Win);
        assert!(FightOutcome::try_from(3).is_err());
        assert_eq!(i32::from(FightOutcome::Fighter1Win), 1);
    }

    #[test]
    fn test_outcome_serializes_as_code() {
        let json = serde_json::to_value(fight(Some(FightOutcome::Fighter1Win))).unwrap();
        assert_eq!(json["outcome"], 1);

        let parsed: FightOutcome = serde_json::from_str("2").unwrap();
        assert_eq!(parsed, FightOutcome::Fighter2Win);
        assert!(serde_json::from_str::<FightOutcome>("7").is_err());
    }

    #[test]
    fn test_snapshot_fields_are_read_per_side() {
        let fight = fight(None);

        assert_eq!(fight.field("fighter1_wins"), Some(FieldValue::Integer(9)));
        assert_eq!(fight.field("fighter2_wins"), Some(FieldValue::Integer(29)));
        assert_eq!(fight.field("fighter1_reach"), Some(FieldValue::Float(200.0)));
        assert_eq!(fight.field("fighter2_reach"), Some(FieldValue::Null));
        assert_eq!(fight.field("fighter1"), Some(FieldValue::from("Alex Pereira")));
        assert_eq!(fight.field("outcome"), Some(FieldValue::Null));
        assert_eq!(fight.field("fighter3_wins"), None);
    }
}
