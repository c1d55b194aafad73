use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{Entity, Record};
use crate::error::StorageError;
use crate::schema::{Column, FieldValue, Table, TableSchema};

/// The eight ranked men's divisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Division {
    Flyweight,
    Bantamweight,
    Featherweight,
    Lightweight,
    Welterweight,
    Middleweight,
    LightHeavyweight,
    Heavyweight,
}

impl Division {
    pub const ALL: [Division; 8] = [
        Division::Flyweight,
        Division::Bantamweight,
        Division::Featherweight,
        Division::Lightweight,
        Division::Welterweight,
        Division::Middleweight,
        Division::LightHeavyweight,
        Division::Heavyweight,
    ];

    /// Slug stored in `rankings.weight_class`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flyweight => "flyweight",
            Self::Bantamweight => "bantamweight",
            Self::Featherweight => "featherweight",
            Self::Lightweight => "lightweight",
            Self::Welterweight => "welterweight",
            Self::Middleweight => "middleweight",
            Self::LightHeavyweight => "light_heavyweight",
            Self::Heavyweight => "heavyweight",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Division {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The UI sends "lightheavyweight"
        if s == "lightheavyweight" {
            return Ok(Self::LightHeavyweight);
        }

        Self::ALL
            .into_iter()
            .find(|division| division.as_str() == s)
            .ok_or_else(|| StorageError::schema_violation(format!("unknown division '{}'", s)))
    }
}

/// One ranked position in one division.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RankingEntry {
    /// Division slug, e.g. "middleweight"
    pub weight_class: String,
    pub rank_position: i32,
    pub fighter_name: String,
}

impl RankingEntry {
    pub fn new(division: Division, rank_position: i32, fighter_name: impl Into<String>) -> Self {
        Self {
            weight_class: division.as_str().to_string(),
            rank_position,
            fighter_name: fighter_name.into(),
        }
    }

    pub fn division(&self) -> Option<Division> {
        self.weight_class.parse().ok()
    }
}

pub static SCHEMA: TableSchema = TableSchema {
    name: "rankings",
    columns: &[
        Column::text("weight_class", 50).required(),
        Column::integer("rank_position").required(),
        Column::text("fighter_name", 100).required(),
    ],
    snapshots: &[],
};

impl Entity for RankingEntry {
    const TABLE: Table = Table::Rankings;

    fn field(&self, column: &str) -> Option<FieldValue> {
        match column {
            "weight_class" => Some(self.weight_class.as_str().into()),
            "rank_position" => Some(self.rank_position.into()),
            "fighter_name" => Some(self.fighter_name.as_str().into()),
            _ => None,
        }
    }

    fn into_record(self) -> Record {
        Record::Ranking(self)
    }

    fn from_record(record: Record) -> Option<Self> {
        match record {
            Record::Ranking(entry) => Some(entry),
            _ => None,
        }
    }
}
