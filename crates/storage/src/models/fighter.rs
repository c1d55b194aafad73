use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Row, postgres::PgRow};
use utoipa::ToSchema;

use super::{Entity, Record};
use crate::schema::{Column, FieldValue, Snapshot, Table, TableSchema};

/// Per-fighter statistics. Stored unprefixed on `fighters` and once per side,
/// as a snapshot taken at fight time, on `fights`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct FighterStats {
    pub wins: Option<i32>,
    pub losses: Option<i32>,
    /// Recent form over the last five fights; the scale is not fixed by the data source.
    pub last5: Option<f64>,
    /// Significant strikes landed per minute
    pub slpm: Option<f64>,
    /// Striking accuracy (%)
    pub str_acc: Option<f64>,
    /// Significant strikes absorbed per minute
    pub sapm: Option<f64>,
    /// Striking defense (%)
    pub str_def: Option<f64>,
    pub td_avg: Option<f64>,
    pub td_acc: Option<f64>,
    pub td_def: Option<f64>,
    pub sub_avg: Option<f64>,
    pub kd_avg: Option<f64>,
    pub ranking: Option<i32>,
    pub birth_year: Option<i32>,
    /// Height in metres
    pub height: Option<f64>,
    /// Reach in centimetres
    pub reach: Option<f64>,
}

pub const STATS_COLUMNS: &[Column] = &[
    Column::integer("wins").non_negative(),
    Column::integer("losses").non_negative(),
    Column::float("last5"),
    Column::float("slpm"),
    Column::float("str_acc"),
    Column::float("sapm"),
    Column::float("str_def"),
    Column::float("td_avg"),
    Column::float("td_acc"),
    Column::float("td_def"),
    Column::float("sub_avg"),
    Column::float("kd_avg"),
    Column::integer("ranking"),
    Column::integer("birth_year"),
    Column::float("height"),
    Column::float("reach"),
];

impl FighterStats {
    pub fn field(&self, column: &str) -> Option<FieldValue> {
        let value = match column {
            "wins" => self.wins.into(),
            "losses" => self.losses.into(),
            "last5" => self.last5.into(),
            "slpm" => self.slpm.into(),
            "str_acc" => self.str_acc.into(),
            "sapm" => self.sapm.into(),
            "str_def" => self.str_def.into(),
            "td_avg" => self.td_avg.into(),
            "td_acc" => self.td_acc.into(),
            "td_def" => self.td_def.into(),
            "sub_avg" => self.sub_avg.into(),
            "kd_avg" => self.kd_avg.into(),
            "ranking" => self.ranking.into(),
            "birth_year" => self.birth_year.into(),
            "height" => self.height.into(),
            "reach" => self.reach.into(),
            _ => return None,
        };

        Some(value)
    }

    /// Reads the statistics stored under `prefix` (e.g. `fighter1_`).
    pub(crate) fn from_prefixed_row(row: &PgRow, prefix: &str) -> sqlx::Result<Self> {
        let column = |name: &str| format!("{}{}", prefix, name);

        Ok(Self {
            wins: row.try_get(column("wins").as_str())?,
            losses: row.try_get(column("losses").as_str())?,
            last5: row.try_get(column("last5").as_str())?,
            slpm: row.try_get(column("slpm").as_str())?,
            str_acc: row.try_get(column("str_acc").as_str())?,
            sapm: row.try_get(column("sapm").as_str())?,
            str_def: row.try_get(column("str_def").as_str())?,
            td_avg: row.try_get(column("td_avg").as_str())?,
            td_acc: row.try_get(column("td_acc").as_str())?,
            td_def: row.try_get(column("td_def").as_str())?,
            sub_avg: row.try_get(column("sub_avg").as_str())?,
            kd_avg: row.try_get(column("kd_avg").as_str())?,
            ranking: row.try_get(column("ranking").as_str())?,
            birth_year: row.try_get(column("birth_year").as_str())?,
            height: row.try_get(column("height").as_str())?,
            reach: row.try_get(column("reach").as_str())?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Fighter {
    pub id: i32,
    pub name: String,
    /// Free-text weight class label, e.g. "185"
    pub weight_class: Option<String>,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub stats: FighterStats,
}

pub static SCHEMA: TableSchema = TableSchema {
    name: "fighters",
    columns: &[
        Column::integer("id").required(),
        Column::text("name", 100).required().non_empty(),
        Column::text("weight_class", 50),
    ],
    snapshots: &[Snapshot {
        prefix: "",
        columns: STATS_COLUMNS,
    }],
};

impl Entity for Fighter {
    const TABLE: Table = Table::Fighters;

    fn field(&self, column: &str) -> Option<FieldValue> {
        match column {
            "id" => Some(self.id.into()),
            "name" => Some(self.name.as_str().into()),
            "weight_class" => Some(self.weight_class.as_deref().into()),
            _ => self.stats.field(column),
        }
    }

    fn into_record(self) -> Record {
        Record::Fighter(self)
    }

    fn from_record(record: Record) -> Option<Self> {
        match record {
            Record::Fighter(fighter) => Some(fighter),
            _ => None,
        }
    }
}
