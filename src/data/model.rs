use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value. The variant is decided by the column's
/// inferred [`ColumnType`], not per cell: a `Numeric` column holds only
/// `Number` and `Null`, a `Text` column only `Text` and `Null`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    /// Empty source field.
    Null,
}

impl CellValue {
    /// Materialize a raw CSV field under the column's inferred type.
    /// Empty (or whitespace-only) fields become `Null`.
    pub fn typed(raw: String, ty: ColumnType) -> CellValue {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Null;
        }
        match ty {
            ColumnType::Numeric => match trimmed.parse::<f64>() {
                Ok(n) => CellValue::Number(n),
                // Unreachable when `ty` came from `ColumnType::infer`
                // over the same fields; keep the raw text otherwise.
                Err(_) => CellValue::Text(raw),
            },
            ColumnType::Text => CellValue::Text(raw),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

/// The textual form is what substring matching sees and what the CSV
/// writer emits. `Null` renders as the empty string.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Null => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// ColumnType – inferred once at load time
// ---------------------------------------------------------------------------

/// Per-column value type, fixed when the file is loaded and stored on the
/// column so filtering never has to re-inspect cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Numeric,
    Text,
}

impl ColumnType {
    /// A column is numeric iff every non-empty field parses as `f64`.
    /// A column with no non-empty fields is text.
    pub fn infer<S: AsRef<str>>(raw: &[S]) -> ColumnType {
        let mut saw_number = false;
        for field in raw {
            let trimmed = field.as_ref().trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.parse::<f64>().is_err() {
                return ColumnType::Text;
            }
            saw_number = true;
        }
        if saw_number {
            ColumnType::Numeric
        } else {
            ColumnType::Text
        }
    }
}

// ---------------------------------------------------------------------------
// Column / Table
// ---------------------------------------------------------------------------

/// One named column and all of its cells, in source row order.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub ty: ColumnType,
    pub values: Vec<CellValue>,
}

/// The full in-memory dataset: ordered columns of equal length.
/// Column names are unique (enforced by the loader) and row order is
/// preserved from the source file and through filtering.
#[derive(Debug, Clone)]
pub struct Table {
    pub columns: Vec<Column>,
}

impl Table {
    /// Number of data rows (0 for a header-only file).
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Ordered column names, cloned for error messages and headers.
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Project the given rows into a new table with identical column
    /// structure. Indices must be in range; order is kept as given.
    pub fn take_rows(&self, indices: &[usize]) -> Table {
        let columns = self
            .columns
            .iter()
            .map(|col| Column {
                name: col.name.clone(),
                ty: col.ty,
                values: indices.iter().map(|&i| col.values[i].clone()).collect(),
            })
            .collect();
        Table { columns }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
