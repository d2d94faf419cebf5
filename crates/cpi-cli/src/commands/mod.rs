//! Subcommand implementations.

pub mod call;
pub mod get;
pub mod ops;
pub mod search;
pub mod udt;
pub mod update;

use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Args;
use cpi_core::{ClientApi, ClientConfig, ObjectIdentifier, OperationKind, OperationName, Scope};
use cpi_http::{BridgeUrl, HttpBridge};
use tracing::debug;

use crate::cli::BridgeArgs;

impl BridgeArgs {
    /// Build a client over the configured HTTP bridge.
    pub fn client(&self) -> Result<ClientApi> {
        let endpoint = self
            .endpoint
            .as_deref()
            .context("No bridge endpoint. Pass --endpoint or set CPI_BRIDGE_URL.")?;
        let endpoint = BridgeUrl::new(endpoint).context("Invalid bridge endpoint")?;
        debug!(%endpoint, sorting = %self.sorting, "connecting");

        let mut builder = HttpBridge::builder(endpoint);
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(token) = &self.token {
            builder = builder.bearer_token(token).context("Invalid bridge token")?;
        }
        let bridge = builder.build().context("Failed to build HTTP bridge")?;

        let config = ClientConfig::new().sorting(self.sorting);
        Ok(ClientApi::with_config(bridge, config)?)
    }
}

/// Selects one object by exactly one of its keys.
#[derive(Args, Debug)]
pub struct KeyArgs {
    /// Internal numeric ID
    #[arg(long, conflicts_with = "uuid")]
    pub id: Option<i64>,

    /// UUID
    #[arg(long)]
    pub uuid: Option<String>,
}

impl KeyArgs {
    pub fn identifier(&self) -> Result<ObjectIdentifier> {
        match (self.id, &self.uuid) {
            (Some(id), None) => Ok(ObjectIdentifier::InternalId(id)),
            (None, Some(uuid)) => Ok(ObjectIdentifier::Uuid(uuid.clone())),
            _ => bail!("Exactly one of --id or --uuid is required"),
        }
    }
}

/// Wire name of `<scope>.<entity>.<verb>`, validated for shape only.
pub fn operation_name(scope: Scope, entity: &str, verb: &str) -> Result<OperationName> {
    OperationName::from_parts(scope, entity, verb)
        .with_context(|| format!("Invalid entity '{}'", entity))
}

/// Parse a JSON argument, naming it in the error.
pub fn parse_json(label: &str, raw: &str) -> Result<serde_json::Value> {
    serde_json::from_str(raw).with_context(|| format!("{} is not valid JSON", label))
}

/// Resolve `name` in the catalogue and check its parameter shape is one this
/// command builds.
pub fn require_kind(
    client: &ClientApi,
    name: &OperationName,
    kinds: &[OperationKind],
) -> Result<()> {
    let entry = client.catalog().lookup(name.as_str())?;
    if !kinds.contains(&entry.kind) {
        bail!(
            "{} takes {} parameters, which this command cannot build; use `cpi call` instead",
            name,
            entry.kind
        );
    }
    Ok(())
}
