//! Get one object command implementation.

use anyhow::{Context, Result};
use clap::Args;
use cpi_core::model::GetParams;
use cpi_core::{FieldList, OperationKind, Scope};

use crate::cli::BridgeArgs;
use crate::commands::{KeyArgs, operation_name, require_kind};
use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Entity (e.g., accounts, transactions, items)
    pub entity: String,

    #[command(flatten)]
    pub key: KeyArgs,

    /// Comma-separated fields to return
    #[arg(long)]
    pub fields: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(bridge: &BridgeArgs, args: GetArgs) -> Result<()> {
    let name = operation_name(Scope::Api, &args.entity, "get")?;
    let fields = FieldList::parse_csv(&args.fields).context("Invalid --fields")?;
    let params = GetParams::new(args.key.identifier()?, fields);

    let client = bridge.client()?;
    require_kind(&client, &name, &[OperationKind::Get])?;
    let payload = client
        .call(name.as_str(), serde_json::to_value(&params)?)
        .await
        .with_context(|| format!("{} failed", name))?;

    output::json(&payload["object"], args.pretty)
}
