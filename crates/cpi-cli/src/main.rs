//! cpi - CLI tool for exercising client API operations.
//!
//! A thin wrapper over `cpi-core` and `cpi-http`, intended for manual
//! exploration of a bridge endpoint and for scripting one-off calls.

mod cli;
mod commands;
mod output;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{call, get, ops, search, udt, update};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    let result = match cli.command {
        Commands::Ops(args) => ops::run(args),
        Commands::Call(args) => call::run(&cli.bridge, args).await,
        Commands::Get(args) => get::run(&cli.bridge, args).await,
        Commands::Search(args) => search::run(&cli.bridge, args).await,
        Commands::Update(args) => update::run(&cli.bridge, args).await,
        Commands::Udt(cmd) => udt::handle(&cli.bridge, cmd).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error_chain(&err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
