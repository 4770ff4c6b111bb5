// src/athletes/load.rs

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use super::types::{AthleteRecord, AthleteTable, Column, FAMILY_NAME, GIVEN_NAME, ID, SPORT};
use crate::error::LoadError;

/// Columns pipeline 1 needs.
pub const RESOLVE_COLUMNS: &[&str] = &[GIVEN_NAME, FAMILY_NAME];
/// Columns pipeline 2 needs.
pub const RESULTS_COLUMNS: &[&str] = &[ID, FAMILY_NAME, GIVEN_NAME, SPORT];

/// Read a header-led CSV into an [`AthleteTable`], checking that every
/// `required` column is present. `id` cells are only validated when `id` is
/// required; otherwise unreadable ones load as absent.
pub fn load_athletes(
    path: impl AsRef<Path>,
    required: &[&'static str],
) -> Result<AthleteTable, LoadError> {
    let path = path.as_ref();
    let csv_err = |source: csv::Error| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(csv_err)?;

    let headers = rdr.headers().map_err(csv_err)?.clone();
    if let Some(&column) = required
        .iter()
        .find(|&&column| !headers.iter().any(|h| h == column))
    {
        return Err(LoadError::MissingColumn {
            path: path.to_path_buf(),
            column,
        });
    }
    let columns: Vec<Column> = headers.iter().map(Column::from_header).collect();
    let strict_ids = required.contains(&ID);

    let mut records = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let raw = result.map_err(csv_err)?;
        let mut record = AthleteRecord {
            row,
            ..AthleteRecord::default()
        };
        for (column, cell) in columns.iter().zip(raw.iter()) {
            match column {
                Column::GivenName => record.given_name = cell.to_string(),
                Column::FamilyName => record.family_name = cell.to_string(),
                Column::Sport => record.sport = Some(cell.to_string()),
                Column::Id => {
                    let cell = cell.trim();
                    if cell.is_empty() {
                        continue;
                    }
                    record.id = parse_id(cell);
                    if record.id.is_none() {
                        if strict_ids {
                            return Err(LoadError::BadId {
                                path: path.to_path_buf(),
                                row,
                                value: cell.to_string(),
                            });
                        }
                        debug!(row, value = cell, "ignoring unreadable id");
                    }
                }
                Column::Extra(_) => record.extra.push(cell.to_string()),
            }
        }
        records.push(record);
    }

    debug!(path = %path.display(), rows = records.len(), "loaded athletes");
    Ok(AthleteTable::new(columns, records))
}

/// Accepts `12345` and the float form `12345.0` that dataframe tools write
/// for integer columns containing blanks.
fn parse_id(cell: &str) -> Option<u64> {
    if let Ok(id) = cell.parse::<u64>() {
        return Some(id);
    }
    let f = cell.parse::<f64>().ok()?;
    (f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64).then_some(f as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_rows_in_file_order() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("athletes.csv");
        fs::write(
            &path,
            "given_name,family_name,sport\nErin,Jackson,speed skating\nJordan,Stolz,speed skating\n",
        )
        .unwrap();

        let table = load_athletes(&path, RESOLVE_COLUMNS).unwrap();
        assert_eq!(table.len(), 2);
        let rows: Vec<_> = table
            .records()
            .iter()
            .map(|r| (r.row, r.given_name.as_str(), r.family_name.as_str()))
            .collect();
        assert_eq!(rows, [(0, "Erin", "Jackson"), (1, "Jordan", "Stolz")]);
        assert_eq!(table.records()[0].sport.as_deref(), Some("speed skating"));
        assert!(!table.has_column(&Column::Id));
    }

    #[test]
    fn parses_integer_float_and_blank_ids() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("ids.csv");
        fs::write(
            &path,
            "given_name,family_name,sport,id\nA,B,s,12345\nC,D,s,678.0\nE,F,s,\n",
        )
        .unwrap();

        let table = load_athletes(&path, RESULTS_COLUMNS).unwrap();
        let ids: Vec<_> = table.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, [Some(12345), Some(678), None]);
    }

    #[test]
    fn rejects_non_numeric_id() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("bad.csv");
        fs::write(&path, "given_name,family_name,sport,id\nA,B,s,abc\n").unwrap();

        match load_athletes(&path, RESULTS_COLUMNS) {
            Err(LoadError::BadId { row, value, .. }) => {
                assert_eq!(row, 0);
                assert_eq!(value, "abc");
            }
            other => panic!("expected BadId, got {other:?}"),
        }
    }

    #[test]
    fn unreadable_id_is_ignored_when_not_required() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("stale.csv");
        fs::write(&path, "given_name,family_name,id\nErin,Jackson,n/a\nJordan,Stolz,42\n").unwrap();

        let table = load_athletes(&path, RESOLVE_COLUMNS).unwrap();
        let ids: Vec<_> = table.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, [None, Some(42)]);
    }

    #[test]
    fn missing_required_column_is_a_load_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("no_sport.csv");
        fs::write(&path, "given_name,family_name,id\nA,B,1\n").unwrap();

        match load_athletes(&path, RESULTS_COLUMNS) {
            Err(LoadError::MissingColumn { column, .. }) => assert_eq!(column, "sport"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let tmp = tempdir().unwrap();
        let err = load_athletes(tmp.path().join("nope.csv"), RESOLVE_COLUMNS).unwrap_err();
        assert!(matches!(err, LoadError::Csv { .. }));
    }

    #[test]
    fn ragged_rows_are_a_load_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("ragged.csv");
        fs::write(&path, "given_name,family_name\nA,B,extra\n").unwrap();
        assert!(matches!(
            load_athletes(&path, RESOLVE_COLUMNS),
            Err(LoadError::Csv { .. })
        ));
    }
}
