//! User-defined table subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use cpi_core::model::{UdtGetListParams, UdtGetParams, UdtUpsertParams};

use crate::cli::BridgeArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct UdtCommand {
    #[command(subcommand)]
    pub command: UdtSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UdtSubcommand {
    /// Read one value
    Get(KeyedArgs),

    /// List entries, optionally narrowed by key
    List(ListArgs),

    /// Insert or replace one value
    Upsert(UpsertArgs),
}

#[derive(Args, Debug)]
pub struct KeyedArgs {
    /// Table name
    pub table: String,

    #[arg(long)]
    pub main_key: String,

    #[arg(long)]
    pub secondary_key: String,

    /// Column index for multi-value tables
    #[arg(long)]
    pub index: Option<u32>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Table name
    pub table: String,

    #[arg(long)]
    pub main_key: Option<String>,

    #[arg(long)]
    pub secondary_key: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpsertArgs {
    #[command(flatten)]
    pub key: KeyedArgs,

    /// Value to store
    #[arg(long)]
    pub value: String,
}

pub async fn handle(bridge: &BridgeArgs, cmd: UdtCommand) -> Result<()> {
    let client = bridge.client()?;
    let tables = client.api().user_defined_tables();

    match cmd.command {
        UdtSubcommand::Get(args) => {
            let result = tables
                .get(&UdtGetParams {
                    table: args.table,
                    main_key: args.main_key,
                    secondary_key: args.secondary_key,
                    index: args.index,
                })
                .await
                .context("Failed to read user-defined table")?;
            println!("{}", result.value);
        }
        UdtSubcommand::List(args) => {
            let result = tables
                .get_list(&UdtGetListParams {
                    table: args.table,
                    main_key: args.main_key,
                    secondary_key: args.secondary_key,
                })
                .await
                .context("Failed to list user-defined table")?;

            if result.objects.is_empty() {
                eprintln!("{}", "No entries found.".dimmed());
            }
            for entry in &result.objects {
                output::json(entry, false)?;
            }
        }
        UdtSubcommand::Upsert(args) => {
            let result = tables
                .upsert(&UdtUpsertParams {
                    table: args.key.table,
                    main_key: args.key.main_key,
                    secondary_key: args.key.secondary_key,
                    index: args.key.index,
                    value: args.value,
                })
                .await
                .context("Failed to write user-defined table")?;
            for status in &result.result {
                output::status(status);
            }
        }
    }

    Ok(())
}
