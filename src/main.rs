use clap::Parser;

use csvsieve::cli::Args;
use csvsieve::report::ConsoleReport;

fn main() {
    env_logger::init();

    let args = Args::parse();
    if let Err(e) = try_main(&args) {
        log::error!("{e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn try_main(args: &Args) -> anyhow::Result<()> {
    let mut sink = ConsoleReport;
    csvsieve::run(args, &mut sink)?;
    Ok(())
}
