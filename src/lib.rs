pub mod cli;
pub mod data;
pub mod error;
pub mod report;

use cli::Args;
use data::{filter, loader, writer};
use error::SieveError;
use report::{ReportSink, PREVIEW_ROWS};

// ---------------------------------------------------------------------------
// Pipeline: load → filter → preview | persist
// ---------------------------------------------------------------------------

/// Run one filter invocation end to end, reporting outcomes through the
/// sink. Returns the first fatal error; a filter that matches nothing is
/// reported and succeeds.
pub fn run(args: &Args, sink: &mut dyn ReportSink) -> Result<(), SieveError> {
    loader::validate_path(&args.input_file)?;
    if !loader::has_csv_extension(&args.input_file) {
        let message = format!(
            "'{}' doesn't have a .csv extension",
            args.input_file.display()
        );
        log::warn!("{message}");
        sink.warning(&message);
    }

    let table = loader::load_file(&args.input_file)?;
    sink.loaded(&args.input_file, table.row_count(), table.column_count());

    let spec = args.filter_spec();
    let result = filter::apply(&table, &spec)?;
    sink.filter_applied(&spec, result.row_count());

    if result.is_empty() {
        sink.no_matches();
        return Ok(());
    }

    if args.preview {
        sink.preview(&result, PREVIEW_ROWS);
    } else {
        writer::save_file(&result, &args.output)?;
        sink.saved(&args.output);
    }
    Ok(())
}
