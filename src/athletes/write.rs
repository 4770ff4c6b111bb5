// src/athletes/write.rs

use std::{fs, path::Path};

use csv::Writer;

use super::types::AthleteTable;
use crate::error::WriteError;

/// Write `table` as CSV: header row, then one line per record. Absent ids
/// are written as empty cells.
pub fn write_athletes(table: &AthleteTable, path: impl AsRef<Path>) -> Result<(), WriteError> {
    let path = path.as_ref();
    let csv_err = |source: csv::Error| WriteError::Csv {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| WriteError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut wtr = Writer::from_path(path).map_err(csv_err)?;
    wtr.write_record(table.header()).map_err(csv_err)?;
    for record in table.records() {
        wtr.write_record(table.cells(record)).map_err(csv_err)?;
    }
    wtr.flush().map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
