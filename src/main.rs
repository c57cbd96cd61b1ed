use std::io::{self, Write};
use std::process;

use clap::{CommandFactory, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pcomms::aggregate::FlowTable;
use pcomms::capture::TsharkSource;
use pcomms::cli::Args;
use pcomms::error::PcommsError;
use pcomms::parser::parse_record;
use pcomms::report::write_table;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        if matches!(e, PcommsError::InvalidInputFile(_)) {
            eprintln!("{}", Args::command().render_usage());
        }
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), PcommsError> {
    if !args.file.is_file() {
        return Err(PcommsError::InvalidInputFile(args.file.clone()));
    }

    let mut source = TsharkSource::spawn(&args.file, args.protocol)?;
    let mut table = FlowTable::new();
    let mut line_no = 0;
    for line in source.by_ref() {
        line_no += 1;
        table.observe(parse_record(&line?, line_no, args.protocol)?);
    }
    source.finish()?;
    info!(packets = line_no, flows = table.len(), "capture drained");

    let records = table.into_sorted(args.sort_key());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_table(&mut out, &records, args.protocol)?;
    out.flush()?;
    Ok(())
}
