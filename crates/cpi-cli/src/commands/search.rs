//! Search command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;
use colored::Colorize;
use cpi_core::model::SearchParams;
use cpi_core::{FieldList, OperationKind, Scope, Sort};

use crate::cli::BridgeArgs;
use crate::commands::{operation_name, parse_json, require_kind};
use crate::output;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Entity (e.g., accounts, items, allActivities)
    pub entity: String,

    /// Comma-separated fields to return
    #[arg(long)]
    pub fields: String,

    /// Page number
    #[arg(long)]
    pub page: Option<u32>,

    /// Page size
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Filter expression as JSON
    #[arg(long)]
    pub filter: Option<String>,

    /// Sort key as FIELD or FIELD:desc; repeat for secondary keys
    #[arg(long = "sort")]
    pub sort: Vec<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(bridge: &BridgeArgs, args: SearchArgs) -> Result<()> {
    let name = operation_name(Scope::Api, &args.entity, "search")?;
    let fields = FieldList::parse_csv(&args.fields).context("Invalid --fields")?;

    let mut params = SearchParams::new(fields);
    if let Some(page) = args.page {
        params = params.page(page);
    }
    if let Some(page_size) = args.page_size {
        params = params.page_size(page_size);
    }
    if let Some(filter) = &args.filter {
        params = params.filter(parse_json("--filter", filter)?);
    }
    for key in &args.sort {
        params = params.sort_by(parse_sort(key)?);
    }

    let client = bridge.client()?;
    require_kind(
        &client,
        &name,
        &[OperationKind::Search, OperationKind::TransactionLinesSearch],
    )?;
    let payload = client
        .call(name.as_str(), serde_json::to_value(&params)?)
        .await
        .with_context(|| format!("{} failed", name))?;

    let objects = payload["objects"].as_array().cloned().unwrap_or_default();
    if objects.is_empty() {
        eprintln!("{}", "No objects found.".dimmed());
        return Ok(());
    }

    for object in &objects {
        output::json(object, args.pretty)?;
    }

    eprintln!();
    output::field("Count", &payload["count"]);
    output::field("Page", &payload["page"]);

    Ok(())
}

fn parse_sort(raw: &str) -> Result<Sort> {
    let (field, direction) = raw.split_once(':').unwrap_or((raw, "asc"));
    if field.is_empty() {
        bail!("Sort key '{}' has no field", raw);
    }
    match direction.to_ascii_lowercase().as_str() {
        "asc" => Ok(Sort::ascending(field)),
        "desc" => Ok(Sort::descending(field)),
        other => bail!("Unknown sort direction '{}' (expected asc or desc)", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_keys() {
        assert_eq!(parse_sort("Name").unwrap(), Sort::ascending("Name"));
        assert_eq!(parse_sort("Name:desc").unwrap(), Sort::descending("Name"));
        assert_eq!(parse_sort("Name:ASC").unwrap(), Sort::ascending("Name"));
        assert!(parse_sort(":desc").is_err());
        assert!(parse_sort("Name:sideways").is_err());
    }
}
