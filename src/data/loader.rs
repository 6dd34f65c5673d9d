use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use crate::error::SieveError;

use super::model::{CellValue, Column, ColumnType, Table};

// ---------------------------------------------------------------------------
// Path validation
// ---------------------------------------------------------------------------

/// Check that the input path exists and is a regular file.
pub fn validate_path(path: &Path) -> Result<(), SieveError> {
    if !path.exists() {
        return Err(SieveError::FileNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(SieveError::NotAFile(path.to_path_buf()));
    }
    Ok(())
}

/// Whether the path carries a `.csv` extension (case-insensitive).
/// Anything else is worth a warning but not an error.
pub fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a CSV file into a [`Table`].
///
/// Expects a header row naming the columns. Column types are inferred in
/// a first pass over the raw fields (numeric iff every non-empty field
/// parses as a number), then the cells are materialized under that type.
pub fn load_file(path: &Path) -> Result<Table, SieveError> {
    validate_path(path)?;
    let reader = csv::Reader::from_path(path).map_err(|source| SieveError::Parse { source })?;
    read_table(reader)
}

fn read_table<R: Read>(mut reader: csv::Reader<R>) -> Result<Table, SieveError> {
    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| SieveError::Parse { source })?
        .iter()
        .map(|h| h.to_string())
        .collect();

    {
        let mut seen = BTreeSet::new();
        for name in &headers {
            if !seen.insert(name.as_str()) {
                return Err(SieveError::DuplicateColumn(name.clone()));
            }
        }
    }

    // Accumulate column-major; the csv reader rejects records whose field
    // count differs from the header, so the grid stays rectangular.
    let mut raw_columns: Vec<Vec<String>> = headers.iter().map(|_| Vec::new()).collect();
    for result in reader.records() {
        let record = result.map_err(|source| SieveError::Parse { source })?;
        for (i, field) in record.iter().enumerate() {
            raw_columns[i].push(field.to_string());
        }
    }

    let columns: Vec<Column> = headers
        .into_iter()
        .zip(raw_columns)
        .map(|(name, raw)| {
            let ty = ColumnType::infer(&raw);
            log::debug!("column '{name}' inferred as {ty:?}");
            let values = raw.into_iter().map(|s| CellValue::typed(s, ty)).collect();
            Column { name, ty, values }
        })
        .collect();

    Ok(Table { columns })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn load_str(data: &str) -> Result<Table, SieveError> {
        read_table(csv::Reader::from_reader(data.as_bytes()))
    }

    #[test]
    fn loads_typed_columns() {
        let table = load_str("name,age\nAlice,25\nBob,30\n").unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.column("name").unwrap().ty, ColumnType::Text);
        assert_eq!(table.column("age").unwrap().ty, ColumnType::Numeric);
        assert_eq!(
            table.column("age").unwrap().values[1],
            CellValue::Number(30.0)
        );
    }

    #[test]
    fn empty_field_in_numeric_column_is_null() {
        let table = load_str("name,age\nAlice,25\nBob,\nCarol,30\n").unwrap();
        let age = table.column("age").unwrap();
        assert_eq!(age.ty, ColumnType::Numeric);
        assert!(age.values[1].is_null());
        assert_eq!(age.values[2], CellValue::Number(30.0));
    }

    #[test]
    fn mixed_column_falls_back_to_text() {
        let table = load_str("val\n25\nabc\n").unwrap();
        let val = table.column("val").unwrap();
        assert_eq!(val.ty, ColumnType::Text);
        assert_eq!(val.values[0], CellValue::Text("25".to_string()));
    }

    #[test]
    fn quoted_field_with_comma_is_one_cell() {
        let table = load_str("name,city\nAlice,\"New York, NY\"\n").unwrap();
        assert_eq!(
            table.column("city").unwrap().values[0],
            CellValue::Text("New York, NY".to_string())
        );
    }

    #[test]
    fn header_only_file_is_an_empty_table() {
        let table = load_str("name,age\n").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn ragged_rows_are_a_parse_error() {
        let err = load_str("a,b\n1,2,3\n").unwrap_err();
        assert!(matches!(err, SieveError::Parse { .. }));
    }

    #[test]
    fn duplicate_headers_are_rejected() {
        let err = load_str("a,a\n1,2\n").unwrap_err();
        assert!(matches!(err, SieveError::DuplicateColumn(name) if name == "a"));
    }

    #[test]
    fn csv_extension_check_is_case_insensitive() {
        assert!(has_csv_extension(Path::new("data.csv")));
        assert!(has_csv_extension(Path::new("data.CSV")));
        assert!(!has_csv_extension(Path::new("data.txt")));
        assert!(!has_csv_extension(Path::new("data")));
    }
}
