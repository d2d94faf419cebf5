//! Batch update command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;
use cpi_core::{OperationKind, Scope};
use cpi_core::model::{UpdateObject, UpdateParams, UpdateResult};

use crate::cli::BridgeArgs;
use crate::commands::{operation_name, parse_json, require_kind};
use crate::output;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Entity (e.g., accounts, transactions, contacts)
    pub entity: String,

    /// Objects as a JSON array; each needs a UUID
    #[arg(long)]
    pub objects: String,

    /// Use the app namespace instead of the api namespace
    #[arg(long)]
    pub app: bool,

    /// Ask the bridge to persist immediately
    #[arg(long)]
    pub save: bool,
}

pub async fn run(bridge: &BridgeArgs, args: UpdateArgs) -> Result<()> {
    let scope = if args.app { Scope::App } else { Scope::Api };
    let name = operation_name(scope, &args.entity, "update")?;

    let objects: Vec<UpdateObject> =
        serde_json::from_value(parse_json("--objects", &args.objects)?)
            .context("--objects must be an array of objects with a UUID")?;
    if objects.is_empty() {
        bail!("--objects must not be empty");
    }

    let mut params = UpdateParams::new(objects);
    if args.save {
        params = params.save(true);
    }

    let client = bridge.client()?;
    require_kind(&client, &name, &[OperationKind::Update])?;
    let payload = client
        .call(name.as_str(), serde_json::to_value(&params)?)
        .await
        .with_context(|| format!("{} failed", name))?;
    let result: UpdateResult = serde_json::from_value(payload)?;

    for status in &result.result {
        output::status(status);
    }

    // Per-object failures are results, not command errors.
    output::field("Submitted", result.len());
    output::field("Failed", result.failures().count());

    Ok(())
}
