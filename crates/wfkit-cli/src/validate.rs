//! # Validate Subcommand
//!
//! Validates one project's metadata or every project in the repository,
//! optionally cross-checking business-context references against an export.
//!
//! Exit codes: 0 when every document passes, 1 when at least one document
//! fails (errors, or warnings under `--deny-warnings`), 2 when a document
//! could not be loaded.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use wfkit_core::{BusinessContextIndex, ValidationResult};
use wfkit_schema::{
    load_business_context, load_document, render_report, validate, ValidateOptions,
};

use crate::config::Config;
use crate::discover::find_metadata_files;

/// Arguments for the `wfkit validate` subcommand.
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {
    /// Metadata file, or a project directory containing one.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Validate every project under the configured projects directory.
    #[arg(long)]
    pub all_projects: bool,

    /// Business-context export (JSON or YAML) to check references against.
    #[arg(long, value_name = "FILE")]
    pub business_context: Option<PathBuf>,

    /// Print results as JSON on stdout.
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as failures.
    #[arg(long)]
    pub deny_warnings: bool,
}

/// Per-document outcome, also the `--json` output element.
#[derive(Debug, Serialize)]
pub struct DocumentOutcome {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ValidationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DocumentOutcome {
    fn passed(&self, deny_warnings: bool) -> bool {
        self.result
            .as_ref()
            .is_some_and(|r| r.valid() && !(deny_warnings && !r.warnings().is_empty()))
    }
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, config: &Config, repo_root: &Path) -> Result<u8> {
    if !args.all_projects && args.path.is_none() {
        println!("Usage: wfkit validate [--all-projects] [--business-context FILE] [PATH]");
        return Ok(1);
    }

    let deny_warnings = args.deny_warnings || config.deny_warnings;
    let index = resolve_business_context(args, config, repo_root)?;

    let targets = collect_targets(args, config, repo_root);
    tracing::info!(count = targets.len(), "validating metadata documents");

    let outcomes: Vec<DocumentOutcome> = targets
        .into_iter()
        .map(|path| validate_path(path, index.as_ref()))
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        print_outcomes(&outcomes, repo_root, deny_warnings, args.all_projects);
    }

    Ok(exit_code(&outcomes, deny_warnings))
}

fn resolve_business_context(
    args: &ValidateArgs,
    config: &Config,
    repo_root: &Path,
) -> Result<Option<BusinessContextIndex>> {
    let Some(path) = args
        .business_context
        .as_ref()
        .or(config.business_context.as_ref())
    else {
        return Ok(None);
    };
    let path = crate::resolve_path(path, repo_root);
    let index = load_business_context(&path)
        .with_context(|| format!("failed to load business context export {}", path.display()))?;
    if index.is_empty() {
        tracing::warn!(
            path = %path.display(),
            "business context export defines no goals, personas or KPIs"
        );
    } else {
        tracing::info!(
            path = %path.display(),
            summary = %index.summary(),
            "loaded business context export"
        );
    }
    Ok(Some(index))
}

fn collect_targets(args: &ValidateArgs, config: &Config, repo_root: &Path) -> Vec<PathBuf> {
    let mut targets = Vec::new();

    if args.all_projects {
        let projects_dir = repo_root.join(&config.projects_dir);
        if projects_dir.is_dir() {
            targets.extend(find_metadata_files(&projects_dir, &config.metadata_file));
        } else {
            tracing::warn!(
                dir = %projects_dir.display(),
                "projects directory not found"
            );
        }
    }

    if let Some(ref path) = args.path {
        let resolved = crate::resolve_path(path, repo_root);
        let target = if resolved.is_dir() {
            resolved.join(&config.metadata_file)
        } else {
            resolved
        };
        let key = canonical(&target);
        if !targets.iter().any(|t| canonical(t) == key) {
            targets.push(target);
        }
    }

    targets
}

/// Canonical form for de-duplication. Paths that do not exist are compared
/// as given.
fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

fn validate_path(path: PathBuf, index: Option<&BusinessContextIndex>) -> DocumentOutcome {
    match load_document(&path) {
        Ok(doc) => {
            let options = ValidateOptions {
                business_context: index,
            };
            let result = validate(&doc, &options);
            tracing::debug!(
                path = %path.display(),
                errors = result.errors().len(),
                warnings = result.warnings().len(),
                "validated metadata"
            );
            DocumentOutcome {
                path,
                result: Some(result),
                error: None,
            }
        }
        Err(e) => {
            tracing::error!("{e}");
            DocumentOutcome {
                path,
                result: None,
                error: Some(e.to_string()),
            }
        }
    }
}

fn print_outcomes(
    outcomes: &[DocumentOutcome],
    repo_root: &Path,
    deny_warnings: bool,
    summary: bool,
) {
    for outcome in outcomes {
        let rel = outcome.path.strip_prefix(repo_root).unwrap_or(&outcome.path);
        match (&outcome.result, &outcome.error) {
            (Some(result), _) => {
                let status = if outcome.passed(deny_warnings) { "OK" } else { "FAIL" };
                println!("{status}: {}", rel.display());
                if !result.is_clean() {
                    print!("{}", render_report(result));
                }
            }
            (None, error) => {
                println!(
                    "ERROR: {}: {}",
                    rel.display(),
                    error.as_deref().unwrap_or("unknown error")
                );
            }
        }
    }

    if summary {
        let passed = outcomes.iter().filter(|o| o.passed(deny_warnings)).count();
        println!("Projects: {}/{} passed", passed, outcomes.len());
    }
}

fn exit_code(outcomes: &[DocumentOutcome], deny_warnings: bool) -> u8 {
    if outcomes.iter().any(|o| o.error.is_some()) {
        2
    } else if outcomes.iter().all(|o| o.passed(deny_warnings)) {
        0
    } else {
        1
    }
}
