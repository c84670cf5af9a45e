use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

mod commands;

use commands::{CheckArgs, check_command};

#[derive(Parser)]
#[command(
    name = "proofcheck",
    about = "Cross-checks merkle proof ABI inputs against their inner parameters",
    version,
    author,
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    check: CheckArgs,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbose flag
    init_logging(cli.verbose);

    let summary = check_command(&cli.check)?;

    if summary.failures > 0 || (cli.check.strict && !summary.is_clean()) {
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("proofcheck=warn"), // Default: warnings and errors only
        1 => EnvFilter::new("proofcheck=info"), // -v: info messages
        _ => EnvFilter::new("proofcheck=debug"), // -vv or more: full debug
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
