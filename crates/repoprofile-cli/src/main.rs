//! Repoprofile CLI - quick heuristic profiler for remote repositories.

use anyhow::Result;
use clap::Parser;
use repoprofile_cli::analyze;
use repoprofile_cli::formatters::{self, Formatter};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "repoprofile")]
#[command(about = "Profile a remote repository: language, tech stack, structure, entry points", long_about = None)]
struct Cli {
    /// Repository URL to profile
    ///
    /// Examples:
    ///   repoprofile https://github.com/owner/repo
    ///   repoprofile git@github.com:owner/repo.git
    #[arg(value_name = "URL")]
    url: String,

    /// Output format
    #[arg(short, long = "output", value_enum, default_value = "human")]
    format: OutputFormat,

    /// Output JSON format (alias for --output json)
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    // Missing/invalid arguments exit with 1, help and version with 0
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        std::process::exit(if e.use_stderr() { 1 } else { 0 });
    });
    init_tracing(cli.verbose);

    let report = match analyze::analyze(&cli.url) {
        Ok(report) => report,
        Err(e) => {
            // Fatal diagnostics go to stdout, like the report itself
            println!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    let output_format = if cli.json {
        OutputFormat::Json
    } else {
        cli.format
    };

    match output_format {
        OutputFormat::Json => formatters::JsonFormatter.format(&report),
        OutputFormat::Human => formatters::HumanFormatter.format(&report),
    }

    Ok(())
}
