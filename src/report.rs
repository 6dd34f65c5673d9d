use std::path::Path;

use crate::data::filter::FilterSpec;
use crate::data::model::Table;

/// How many rows a preview shows at most.
pub const PREVIEW_ROWS: usize = 5;

// ---------------------------------------------------------------------------
// ReportSink – structured run outcomes, decoupled from the filter core
// ---------------------------------------------------------------------------

/// Sink for the outcomes a run produces. The pipeline reports through
/// this trait and never prints directly, so the console formatting stays
/// out of the data layer and tests can capture outcomes instead.
pub trait ReportSink {
    /// Input parsed: row and column counts of the loaded table.
    fn loaded(&mut self, path: &Path, rows: usize, columns: usize);

    /// Non-fatal problem worth surfacing (e.g. unexpected extension).
    fn warning(&mut self, message: &str);

    /// Filter evaluated: the spec that ran and how many rows matched.
    fn filter_applied(&mut self, spec: &FilterSpec, matches: usize);

    /// The filter matched nothing; no output will be produced.
    fn no_matches(&mut self);

    /// Preview requested: show up to `limit` rows of the result.
    fn preview(&mut self, table: &Table, limit: usize);

    /// Result persisted to the given path.
    fn saved(&mut self, path: &Path);
}

// ---------------------------------------------------------------------------
// Console implementation
// ---------------------------------------------------------------------------

/// Prints human-readable messages to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReport;

impl ReportSink for ConsoleReport {
    fn loaded(&mut self, path: &Path, rows: usize, columns: usize) {
        println!("Loaded {rows} rows, {columns} columns from {}", path.display());
    }

    fn warning(&mut self, message: &str) {
        println!("Warning: {message}");
    }

    fn filter_applied(&mut self, spec: &FilterSpec, matches: usize) {
        println!("Filter applied: {} {} '{}'", spec.column, spec.mode, spec.value);
        println!("Found {matches} matching rows");
    }

    fn no_matches(&mut self) {
        println!("No matching rows found.");
    }

    fn preview(&mut self, table: &Table, limit: usize) {
        let shown = limit.min(table.row_count());
        println!("Preview (first {shown} rows):");
        print!("{}", render_rows(table, limit));
    }

    fn saved(&mut self, path: &Path) {
        println!("Saved to: {}", path.display());
    }
}

// ---------------------------------------------------------------------------
// Plain-text table rendering
// ---------------------------------------------------------------------------

/// Render the first `limit` rows as column-aligned text, header included.
/// Each column is padded to the widest cell it shows.
pub fn render_rows(table: &Table, limit: usize) -> String {
    let rows = limit.min(table.row_count());

    let widths: Vec<usize> = table
        .columns
        .iter()
        .map(|col| {
            col.values[..rows]
                .iter()
                .map(|v| v.to_string().chars().count())
                .chain(std::iter::once(col.name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let mut push_line = |cells: Vec<String>| {
        let line = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    };

    push_line(table.columns.iter().map(|c| c.name.clone()).collect());
    for row in 0..rows {
        push_line(
            table
                .columns
                .iter()
                .map(|c| c.values[row].to_string())
                .collect(),
        );
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
