use std::path::Path;

use crate::error::SieveError;

use super::model::Table;

// ---------------------------------------------------------------------------
// CSV writer
// ---------------------------------------------------------------------------

/// Persist a table to a CSV file: header row with the column names, one
/// record per row, cells in their textual form, no row-index column.
/// Overwrites the target path if it exists.
pub fn save_file(table: &Table, path: &Path) -> Result<(), SieveError> {
    let write_err = |source: csv::Error| SieveError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(write_err)?;
    writer
        .write_record(table.columns.iter().map(|c| c.name.as_str()))
        .map_err(write_err)?;

    for row in 0..table.row_count() {
        writer
            .write_record(table.columns.iter().map(|c| c.values[row].to_string()))
            .map_err(write_err)?;
    }
    writer.flush().map_err(|e| write_err(e.into()))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CellValue, Column, ColumnType};

    fn two_row_table() -> Table {
        Table {
            columns: vec![
                Column {
                    name: "name".to_string(),
                    ty: ColumnType::Text,
                    values: vec![
                        CellValue::Text("Alice".to_string()),
                        CellValue::Text("Bob".to_string()),
                    ],
                },
                Column {
                    name: "age".to_string(),
                    ty: ColumnType::Numeric,
                    values: vec![CellValue::Number(25.0), CellValue::Null],
                },
            ],
        }
    }

    #[test]
    fn writes_header_and_textual_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        save_file(&two_row_table(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "name,age\nAlice,25\nBob,\n");
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale contents").unwrap();

        save_file(&two_row_table(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("name,age\n"));
    }

    #[test]
    fn unwritable_path_is_a_write_error() {
        let err = save_file(&two_row_table(), Path::new("/nonexistent-dir/out.csv")).unwrap_err();
        assert!(matches!(err, SieveError::Write { .. }));
    }
}
