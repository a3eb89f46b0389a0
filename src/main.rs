use anyhow::Result;
use clap::Parser;
use opgram::{analyzer, cli::Cli, extract::OpExtractor};
use std::io::{self, BufWriter};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let extractor = match &args.pattern {
        Some(pattern) => OpExtractor::with_pattern(pattern)?,
        None => OpExtractor::new()?,
    };
    tracing::debug!(pattern = extractor.pattern(), "op pattern ready");

    let config = args.analyzer_config();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    analyzer::run(&args.log_file, &extractor, &config, &mut out)?;

    Ok(())
}
