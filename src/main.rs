//! pkgaudit - Installed Python package conflict auditor CLI tool
//!
//! Exit codes: 0 when no conflict is found, 1 on a fatal error,
//! 2 when at least one conflict is reported.

use clap::Parser;
use pkgaudit::cli::CliArgs;
use pkgaudit::interpreter::SystemInterpreter;
use pkgaudit::orchestrator::{AuditConfig, Orchestrator};
use pkgaudit::output::{create_formatter, OutputConfig};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    if args.no_color {
        colored::control::set_override(false);
    }

    // Run the main logic and handle errors
    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; RUST_LOG takes precedence over --verbose
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("pkgaudit v{}", env!("CARGO_PKG_VERSION"));
    }

    let interpreter = SystemInterpreter::new(&args.python);
    let config = AuditConfig::from_cli(&args, &interpreter)?;

    let result = Orchestrator::new(config).run();

    if args.verbose {
        eprintln!(
            "Scanned {} metadata source(s), {} skipped",
            result.sources_found, result.sources_skipped
        );
    }

    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet, args.no_color);
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&result.audit, &mut stdout)?;
    stdout.flush()?;

    if result.audit.status().is_failure() {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
