use std::collections::BTreeMap;

use crate::error::Result;
use crate::models::Record;
use crate::schema::{FieldValue, Table};

/// Equality conditions on named fields, combined with AND.
///
/// An empty filter matches every record. A [`FieldValue::Null`] condition
/// matches records whose field is null.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: BTreeMap<String, FieldValue>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.conditions.insert(field.into(), value.into());
        self
    }

    /// Coerces every condition to its column's declared type.
    pub fn resolve(&self, table: Table) -> Result<ResolvedFilter> {
        let schema = table.schema();

        let conditions = self
            .conditions
            .iter()
            .map(|(field, value)| Ok((field.clone(), schema.coerce(field, value.clone())?)))
            .collect::<Result<Vec<_>>>()?;

        Ok(ResolvedFilter { table, conditions })
    }
}

/// A [`Filter`] checked against one table's schema. Field names are known
/// columns and values have the column's primitive type.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFilter {
    table: Table,
    conditions: Vec<(String, FieldValue)>,
}

impl ResolvedFilter {
    pub fn table(&self) -> Table {
        self.table
    }

    pub fn conditions(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.conditions
            .iter()
            .map(|(field, value)| (field.as_str(), value))
    }

    pub fn matches(&self, record: &Record) -> bool {
        record.table() == self.table
            && self
                .conditions()
                .all(|(field, value)| record.field(field).as_ref() == Some(value))
    }
}
