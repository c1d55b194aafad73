pub mod fight;
pub mod fighter;
pub mod ranking;

pub use fight::{Fight, FightOutcome};
pub use fighter::{Fighter, FighterStats};
pub use ranking::{Division, RankingEntry};

use crate::schema::{FieldValue, Table};

/// A record type persisted in one of the [`Table`]s.
pub trait Entity: Sized + Send + 'static {
    const TABLE: Table;

    /// Value of `column`, or `None` if the table has no such column.
    fn field(&self, column: &str) -> Option<FieldValue>;

    fn into_record(self) -> Record;

    fn from_record(record: Record) -> Option<Self>;
}

/// A record of any table, as exchanged with a store.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Fighter(Fighter),
    Fight(Fight),
    Ranking(RankingEntry),
}

impl Record {
    pub fn table(&self) -> Table {
        match self {
            Self::Fighter(_) => Table::Fighters,
            Self::Fight(_) => Table::Fights,
            Self::Ranking(_) => Table::Rankings,
        }
    }

    pub fn field(&self, column: &str) -> Option<FieldValue> {
        match self {
            Self::Fighter(fighter) => fighter.field(column),
            Self::Fight(fight) => fight.field(column),
            Self::Ranking(entry) => entry.field(column),
        }
    }
}
