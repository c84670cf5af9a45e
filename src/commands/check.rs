use anyhow::{Context, Result};
use clap::Args;
use std::io;
use std::path::PathBuf;
use tracing::info;

use proofcheck::checker::ConfigCrossChecker;
use proofcheck::loader::DocumentSource;
use proofcheck::report::{OutputFormat, Reporter, Summary};

/// Arguments for checking a configuration directory
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Directory holding the merkle proof configuration documents
    #[arg(short, long, default_value = "scripts/jsons")]
    pub config: PathBuf,

    /// Output format for findings
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit with status 1 when any inner parameter is missing
    #[arg(long)]
    pub strict: bool,
}

pub fn check_command(args: &CheckArgs) -> Result<Summary> {
    let source = DocumentSource::new(&args.config);
    let loaded = source.load_all()?;
    info!(
        "Checking {} document(s) in {}",
        loaded.len(),
        source.base_path().display()
    );

    let checker = ConfigCrossChecker::new();
    let mut reporter = Reporter::new(io::stdout().lock(), args.format);

    for result in loaded {
        match result {
            Ok(document) => {
                reporter.document_checked();
                for diagnostic in checker.check(&document) {
                    reporter
                        .diagnostic(&diagnostic)
                        .context("Failed to write report")?;
                }
            }
            Err(err) => reporter.load_error(err),
        }
    }

    let summary = reporter.finish().context("Failed to write report")?;
    eprintln!("{}", summary.render());
    Ok(summary)
}
