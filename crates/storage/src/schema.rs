//! Column-level table declarations and value coercion.
//!
//! Every persisted record type declares its columns here as a static
//! [`TableSchema`]. Stores never see a raw caller value: filters are coerced
//! through [`TableSchema::coerce`] first, which either yields a value of the
//! declared primitive type or a [`StorageError::SchemaViolation`].

use std::fmt;

use crate::error::{Result, StorageError};
use crate::models::{fight, fighter, ranking};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Float,
    Text { max_len: usize },
}

/// Value-level constraint checked after type conversion. Mirrored by a
/// `CHECK` in the migrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    NonEmpty,
    NonNegative,
}

impl Check {
    fn allows(self, value: &FieldValue) -> bool {
        match (self, value) {
            (Self::NonEmpty, FieldValue::Text(v)) => !v.is_empty(),
            (Self::NonNegative, FieldValue::Integer(v)) => *v >= 0,
            (Self::NonNegative, FieldValue::Float(v)) => *v >= 0.0,
            _ => true,
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonEmpty => write!(f, "non-empty"),
            Self::NonNegative => write!(f, "non-negative"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub ty: ColumnType,
    pub nullable: bool,
    pub check: Option<Check>,
}

impl Column {
    pub const fn integer(name: &'static str) -> Self {
        Self {
            name,
            ty: ColumnType::Integer,
            nullable: true,
            check: None,
        }
    }

    pub const fn float(name: &'static str) -> Self {
        Self {
            name,
            ty: ColumnType::Float,
            nullable: true,
            check: None,
        }
    }

    pub const fn text(name: &'static str, max_len: usize) -> Self {
        Self {
            name,
            ty: ColumnType::Text { max_len },
            nullable: true,
            check: None,
        }
    }

    pub const fn required(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub const fn non_empty(mut self) -> Self {
        self.check = Some(Check::NonEmpty);
        self
    }

    pub const fn non_negative(mut self) -> Self {
        self.check = Some(Check::NonNegative);
        self
    }
}

/// A group of columns embedded in a table under a common prefix, e.g. the
/// per-side fighter statistics stored on every fight.
#[derive(Debug)]
pub struct Snapshot {
    pub prefix: &'static str,
    pub columns: &'static [Column],
}

#[derive(Debug)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [Column],
    pub snapshots: &'static [Snapshot],
}

impl TableSchema {
    /// Looks a column up by its full (possibly prefixed) name.
    pub fn column(&self, name: &str) -> Option<Column> {
        if let Some(column) = self.columns.iter().find(|c| c.name == name) {
            return Some(*column);
        }

        self.snapshots.iter().find_map(|snapshot| {
            let rest = name.strip_prefix(snapshot.prefix)?;
            snapshot.columns.iter().find(|c| c.name == rest).copied()
        })
    }

    /// Full column names in declaration order, snapshot groups last.
    pub fn column_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.columns.iter().map(|c| c.name.to_string()).collect();

        for snapshot in self.snapshots {
            names.extend(
                snapshot
                    .columns
                    .iter()
                    .map(|c| format!("{}{}", snapshot.prefix, c.name)),
            );
        }

        names
    }

    /// Converts `value` to the primitive type declared for `column`.
    pub fn coerce(&self, column: &str, value: FieldValue) -> Result<FieldValue> {
        let declared = self.column(column).ok_or_else(|| {
            StorageError::schema_violation(format!(
                "unknown column '{}' on table {}",
                column, self.name
            ))
        })?;

        if value.is_null() {
            return if declared.nullable {
                Ok(FieldValue::Null)
            } else {
                Err(StorageError::schema_violation(format!(
                    "column '{}' on table {} is not nullable",
                    column, self.name
                )))
            };
        }

        let rendered = value.to_string();
        let converted = declared.ty.convert(value).ok_or_else(|| {
            StorageError::schema_violation(format!(
                "value '{}' is not valid for column '{}' ({})",
                rendered, column, declared.ty
            ))
        })?;

        match declared.check {
            Some(check) if !check.allows(&converted) => Err(StorageError::schema_violation(
                format!("column '{}' on table {} must be {}", column, self.name, check),
            )),
            _ => Ok(converted),
        }
    }
}

impl ColumnType {
    fn convert(self, value: FieldValue) -> Option<FieldValue> {
        match (self, value) {
            (_, FieldValue::Null) => Some(FieldValue::Null),

            (Self::Integer, FieldValue::Integer(v)) => {
                i32::try_from(v).ok().map(|v| FieldValue::Integer(v.into()))
            }
            (Self::Integer, FieldValue::Float(v)) => {
                if v.fract() == 0.0 && v >= f64::from(i32::MIN) && v <= f64::from(i32::MAX) {
                    Some(FieldValue::Integer(v as i64))
                } else {
                    None
                }
            }
            (Self::Integer, FieldValue::Text(v)) => {
                v.parse::<i32>().ok().map(|v| FieldValue::Integer(v.into()))
            }

            (Self::Float, FieldValue::Integer(v)) => Some(FieldValue::Float(v as f64)),
            (Self::Float, FieldValue::Float(v)) => v.is_finite().then_some(FieldValue::Float(v)),
            (Self::Float, FieldValue::Text(v)) => v
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(FieldValue::Float),

            (Self::Text { max_len }, FieldValue::Text(v)) => bounded_text(v, max_len),
            (Self::Text { max_len }, FieldValue::Integer(v)) => {
                bounded_text(v.to_string(), max_len)
            }
            (Self::Text { max_len }, FieldValue::Float(v)) if v.is_finite() => {
                bounded_text(v.to_string(), max_len)
            }
            (Self::Text { .. }, FieldValue::Float(_)) => None,
        }
    }
}

fn bounded_text(text: String, max_len: usize) -> Option<FieldValue> {
    (text.chars().count() <= max_len).then_some(FieldValue::Text(text))
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
            Self::Text { max_len } => write!(f, "text({})", max_len),
        }
    }
}

/// A single column value, as read from a record or supplied in a filter.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Integer(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(v) => write!(f, "{}", v),
        }
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// The persisted tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Fighters,
    Fights,
    Rankings,
}

impl Table {
    pub const ALL: [Table; 3] = [Table::Fighters, Table::Fights, Table::Rankings];

    pub fn schema(self) -> &'static TableSchema {
        match self {
            Self::Fighters => &fighter::SCHEMA,
            Self::Fights => &fight::SCHEMA,
            Self::Rankings => &ranking::SCHEMA,
        }
    }

    pub fn name(self) -> &'static str {
        self.schema().name
    }
}
