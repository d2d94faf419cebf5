//! List catalogued operations.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use cpi_core::{Catalog, Scope};
use serde_json::json;

use crate::output;

#[derive(Args, Debug)]
pub struct OpsArgs {
    /// Only list one namespace (api, app)
    #[arg(long)]
    pub scope: Option<Scope>,

    /// Print one JSON object per operation
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: OpsArgs) -> Result<()> {
    let catalog = Catalog::load()?;

    for entry in catalog.iter() {
        if args.scope.is_some_and(|scope| entry.name.scope() != scope) {
            continue;
        }

        if args.json {
            let line = json!({
                "name": entry.name,
                "kind": entry.kind.as_str(),
                "mutation": entry.kind.is_mutation(),
            });
            output::json(&line, false)?;
        } else {
            println!("{:<48} {}", entry.name.as_str(), entry.kind.as_str().dimmed());
        }
    }

    Ok(())
}
