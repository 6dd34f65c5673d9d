use std::path::PathBuf;

use clap::Parser;

use crate::data::filter::{FilterSpec, MatchMode};

// ---------------------------------------------------------------------------
// Command-line surface
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(name = "csvsieve")]
#[command(about = "Filter rows of a CSV file by column value", long_about = None)]
pub struct Args {
    /// Path to the input CSV file
    pub input_file: PathBuf,

    /// Name of the column to filter on
    #[arg(short, long)]
    pub column: String,

    /// Target value to compare against, taken as raw text
    #[arg(short, long)]
    pub value: String,

    /// Match cells containing the value (case-insensitive) instead of exact equality
    #[arg(long, default_value_t = false)]
    pub contains: bool,

    /// Destination path for the filtered rows
    #[arg(short, long, default_value = "filtered.csv")]
    pub output: PathBuf,

    /// Print the first matching rows instead of writing a file
    #[arg(short, long, default_value_t = false)]
    pub preview: bool,
}

impl Args {
    /// The filter these arguments describe.
    pub fn filter_spec(&self) -> FilterSpec {
        FilterSpec {
            column: self.column.clone(),
            value: self.value.clone(),
            mode: if self.contains {
                MatchMode::Contains
            } else {
                MatchMode::Equals
            },
        }
    }
}
