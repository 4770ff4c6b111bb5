// src/athletes/types.rs

use std::fmt;

pub const GIVEN_NAME: &str = "given_name";
pub const FAMILY_NAME: &str = "family_name";
pub const SPORT: &str = "sport";
pub const ID: &str = "id";

/// A header of the athlete CSV. Unknown headers are carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column {
    GivenName,
    FamilyName,
    Sport,
    Id,
    Extra(String),
}

impl Column {
    pub fn from_header(header: &str) -> Self {
        match header {
            GIVEN_NAME => Column::GivenName,
            FAMILY_NAME => Column::FamilyName,
            SPORT => Column::Sport,
            ID => Column::Id,
            other => Column::Extra(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Column::GivenName => GIVEN_NAME,
            Column::FamilyName => FAMILY_NAME,
            Column::Sport => SPORT,
            Column::Id => ID,
            Column::Extra(name) => name.as_str(),
        }
    }
}

/// One input row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AthleteRecord {
    /// Zero-based position in the source file, fixed at load time.
    pub row: usize,
    pub given_name: String,
    pub family_name: String,
    /// `None` when the source has no sport column.
    pub sport: Option<String>,
    pub id: Option<u64>,
    /// Cells of `Column::Extra` columns, in column order.
    pub extra: Vec<String>,
}

impl AthleteRecord {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}

/// The athlete list, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AthleteTable {
    columns: Vec<Column>,
    records: Vec<AthleteRecord>,
}

impl AthleteTable {
    pub fn new(columns: Vec<Column>, records: Vec<AthleteRecord>) -> Self {
        Self { columns, records }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn records(&self) -> &[AthleteRecord] {
        &self.records
    }

    pub fn records_mut(&mut self) -> impl Iterator<Item = &mut AthleteRecord> {
        self.records.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, column: &Column) -> bool {
        self.columns.contains(column)
    }

    /// Append an `id` column if the table has none. Existing ids are kept.
    pub fn ensure_id_column(&mut self) {
        if !self.has_column(&Column::Id) {
            self.columns.push(Column::Id);
        }
    }

    pub fn header(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Cells of `record` laid out in this table's column order.
    pub fn cells(&self, record: &AthleteRecord) -> Vec<String> {
        let mut extra = record.extra.iter();
        self.columns
            .iter()
            .map(|column| match column {
                Column::GivenName => record.given_name.clone(),
                Column::FamilyName => record.family_name.clone(),
                Column::Sport => record.sport.clone().unwrap_or_default(),
                Column::Id => record.id.map(|id| id.to_string()).unwrap_or_default(),
                Column::Extra(_) => extra.next().cloned().unwrap_or_default(),
            })
            .collect()
    }
}

impl fmt::Display for AthleteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>5}  {}", "", self.header().join("  "))?;
        for record in &self.records {
            writeln!(f, "{:>5}  {}", record.row, self.cells(record).join("  "))?;
        }
        write!(f, "[{} rows x {} columns]", self.len(), self.columns.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn erin() -> AthleteRecord {
        AthleteRecord {
            row: 0,
            given_name: "Erin".to_string(),
            family_name: "Jackson".to_string(),
            sport: Some("speed skating".to_string()),
            id: None,
            extra: vec!["USA".to_string()],
        }
    }

    #[test]
    fn cells_follow_column_order() {
        let mut table = AthleteTable::new(
            vec![
                Column::FamilyName,
                Column::Extra("country".to_string()),
                Column::GivenName,
                Column::Sport,
            ],
            vec![erin()],
        );
        table.ensure_id_column();
        assert_eq!(table.header(), ["family_name", "country", "given_name", "sport", "id"]);
        assert_eq!(
            table.cells(&table.records()[0]),
            ["Jackson", "USA", "Erin", "speed skating", ""]
        );
    }

    #[test]
    fn ensure_id_column_is_idempotent() {
        let mut table = AthleteTable::new(vec![Column::Id, Column::GivenName], vec![]);
        table.ensure_id_column();
        assert_eq!(table.columns(), &[Column::Id, Column::GivenName]);
    }

    #[test]
    fn display_lists_every_row() {
        let table = AthleteTable::new(
            vec![Column::GivenName, Column::FamilyName],
            vec![erin()],
        );
        let shown = table.to_string();
        assert!(shown.contains("given_name  family_name"));
        assert!(shown.contains("Erin  Jackson"));
        assert!(shown.ends_with("[1 rows x 2 columns]"));
    }
}
