//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use cpi_core::SortingPolicy;

use crate::commands::{call, get, ops, search, udt, update};

/// Client API CLI tool.
#[derive(Parser, Debug)]
#[command(name = "cpi")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub bridge: BridgeArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where and how to reach the bridge.
#[derive(Args, Debug)]
pub struct BridgeArgs {
    /// Bridge endpoint URL
    #[arg(long, env = "CPI_BRIDGE_URL", global = true)]
    pub endpoint: Option<String>,

    /// Bearer token sent with every call
    #[arg(long, env = "CPI_BRIDGE_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Per-call timeout in seconds
    #[arg(long, env = "CPI_TIMEOUT_SECS", global = true)]
    pub timeout_secs: Option<u64>,

    /// Whether searches must carry at least one sort key (optional, required)
    #[arg(long, env = "CPI_SORTING", global = true, default_value_t = SortingPolicy::Optional)]
    pub sorting: SortingPolicy,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List catalogued operations
    Ops(ops::OpsArgs),

    /// Invoke any operation by name with a raw JSON parameter record
    Call(call::CallArgs),

    /// Fetch one object from an entity
    Get(get::GetArgs),

    /// Search an entity
    Search(search::SearchArgs),

    /// Write a batch of partial objects
    Update(update::UpdateArgs),

    /// User-defined tables
    Udt(udt::UdtCommand),
}
