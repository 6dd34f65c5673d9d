use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SieveError;

use super::model::{CellValue, Column, ColumnType, Table};

// ---------------------------------------------------------------------------
// Filter predicate: one column, one target value, one match mode
// ---------------------------------------------------------------------------

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    Equals,
    Contains,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Equals => write!(f, "equals"),
            MatchMode::Contains => write!(f, "contains"),
        }
    }
}

/// The filter to apply: which column, the raw (pre-coercion) target value,
/// and how to compare.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FilterSpec {
    pub column: String,
    pub value: String,
    pub mode: MatchMode,
}

// ---------------------------------------------------------------------------
// Cell comparison – the coercion policy lives here
// ---------------------------------------------------------------------------

/// Outcome of comparing one cell against the target, tagged with which
/// branch of the coercion policy decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMatch {
    NumericEqual,
    TextEqual,
    NoMatch,
}

impl CellMatch {
    pub fn is_match(self) -> bool {
        !matches!(self, CellMatch::NoMatch)
    }
}

/// Equality under the coercion policy.
///
/// `target_number` is the target parsed as `f64`, pre-computed once per
/// filter run and only for numeric columns. When it is present, numeric
/// cells compare numerically; otherwise both sides fall back to their
/// textual forms. A non-numeric target against a numeric column thus
/// degrades to string equality (matching nothing) instead of erroring.
/// `Null` cells never match.
pub fn equals_match(cell: &CellValue, target_text: &str, target_number: Option<f64>) -> CellMatch {
    match (cell, target_number) {
        (CellValue::Null, _) => CellMatch::NoMatch,
        (CellValue::Number(n), Some(t)) => {
            if *n == t {
                CellMatch::NumericEqual
            } else {
                CellMatch::NoMatch
            }
        }
        _ => {
            if cell.to_string() == target_text {
                CellMatch::TextEqual
            } else {
                CellMatch::NoMatch
            }
        }
    }
}

/// Case-insensitive substring match on the cell's textual form.
/// `needle_lower` must already be lowercased. `Null` cells never match.
pub fn contains_match(cell: &CellValue, needle_lower: &str) -> bool {
    if cell.is_null() {
        return false;
    }
    cell.to_string().to_lowercase().contains(needle_lower)
}

// ---------------------------------------------------------------------------
// Filter evaluation
// ---------------------------------------------------------------------------

/// Apply a [`FilterSpec`] to a table, producing the subset of rows that
/// satisfy the predicate, in original order.
///
/// Column existence is the only upfront check; per-cell comparison is
/// total and cannot fail.
pub fn apply(table: &Table, spec: &FilterSpec) -> Result<Table, SieveError> {
    let column = table
        .column(&spec.column)
        .ok_or_else(|| SieveError::ColumnNotFound {
            column: spec.column.clone(),
            available: table.column_names(),
        })?;

    Ok(table.take_rows(&matching_indices(column, spec)))
}

fn matching_indices(column: &Column, spec: &FilterSpec) -> Vec<usize> {
    match spec.mode {
        MatchMode::Equals => {
            let target_number = match column.ty {
                ColumnType::Numeric => spec.value.trim().parse::<f64>().ok(),
                ColumnType::Text => None,
            };
            column
                .values
                .iter()
                .enumerate()
                .filter(|(_, cell)| equals_match(cell, &spec.value, target_number).is_match())
                .map(|(i, _)| i)
                .collect()
        }
        MatchMode::Contains => {
            let needle = spec.value.to_lowercase();
            column
                .values
                .iter()
                .enumerate()
                .filter(|(_, cell)| contains_match(cell, &needle))
                .map(|(i, _)| i)
                .collect()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
