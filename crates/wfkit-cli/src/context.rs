//! # Context Subcommand
//!
//! Loads a business-context export and prints the goal, persona and KPI IDs
//! it defines. Useful for checking what `validate --business-context` will
//! accept before wiring an export into CI.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use wfkit_core::{BusinessContextIndex, IdKind};
use wfkit_schema::load_business_context;

/// Arguments for the `wfkit context` subcommand.
#[derive(Args, Debug)]
pub struct ContextArgs {
    /// Business-context export (JSON or YAML).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the index as JSON on stdout.
    #[arg(long)]
    pub json: bool,
}

/// Execute the context subcommand.
pub fn run_context(args: &ContextArgs, repo_root: &Path) -> Result<u8> {
    let path = crate::resolve_path(&args.file, repo_root);
    let index = load_business_context(&path)
        .with_context(|| format!("failed to load business context export {}", path.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&index)?);
    } else {
        print!("{}", render_index(&index));
    }
    Ok(0)
}

fn render_index(index: &BusinessContextIndex) -> String {
    let mut out = format!("{}\n", index.summary());
    for kind in [IdKind::Goal, IdKind::Persona, IdKind::Kpi] {
        let ids = index.known(kind);
        if ids.is_empty() {
            continue;
        }
        out.push_str(&format!("{}:\n", kind.plural()));
        for id in ids {
            out.push_str(&format!("  - {id}\n"));
        }
    }
    out
}
