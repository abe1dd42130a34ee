//! # wfkit CLI entry point
//!
//! Parses command-line arguments, sets up logging, loads the repository
//! config and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wfkit_cli::config::Config;
use wfkit_cli::context::{run_context, ContextArgs};
use wfkit_cli::validate::{run_validate, ValidateArgs};

/// Wireframe Kit metadata tooling.
///
/// Validates project `metadata.json` files against the v2.0 metadata schema
/// and cross-checks their business-context references.
#[derive(Parser, Debug)]
#[command(name = "wfkit", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file (defaults to `wfkit.yaml` at the repository root).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr (for CI log collectors).
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate project metadata documents.
    Validate(ValidateArgs),

    /// Summarize a business-context export.
    Context(ContextArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Without -v, RUST_LOG decides; default is warnings only.
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let repo_root = wfkit_cli::resolve_repo_root(&cwd).unwrap_or_else(|| {
        tracing::warn!("Could not locate repository root; using current directory");
        cwd.clone()
    });

    tracing::debug!(repo_root = %repo_root.display(), "resolved repository root");

    let config = match Config::resolve(cli.config.as_deref(), &repo_root) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(2);
        }
    };

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args, &config, &repo_root),
        Commands::Context(args) => run_context(&args, &repo_root),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
