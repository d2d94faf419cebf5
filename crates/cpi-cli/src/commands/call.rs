//! Invoke any catalogued operation with a raw parameter record.

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::BridgeArgs;
use crate::commands::parse_json;
use crate::output;

#[derive(Args, Debug)]
pub struct CallArgs {
    /// Operation name (e.g., pepperi.api.accounts.search)
    pub operation: String,

    /// Parameter record as a JSON object
    #[arg(long, default_value = "{}")]
    pub params: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(bridge: &BridgeArgs, args: CallArgs) -> Result<()> {
    let params = parse_json("--params", &args.params)?;
    let client = bridge.client()?;

    let payload = client
        .call(&args.operation, params)
        .await
        .with_context(|| format!("{} failed", args.operation))?;

    output::json(&payload, args.pretty)
}
