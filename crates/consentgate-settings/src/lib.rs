//! Config parsing, TCF store snapshots, and input resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;
mod store;

pub use model::{ConsentgateConfigV1, SCHEMA_CONFIG_V1};
pub use resolve::{OutputFormat, Overrides, ResolvedConfig};
pub use store::{StoreError, StoreValue, TcfStore, keys};

/// Parse `consentgate.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<ConsentgateConfigV1> {
    let cfg: ConsentgateConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Parse an exported key-value dump (a flat JSON object of `IABTCF_*` keys).
pub fn parse_store_json(input: &str) -> Result<TcfStore, StoreError> {
    store::parse_store_json(input)
}

/// Resolve the consent snapshot and output settings (config store < external store < overrides).
pub fn resolve_config(
    cfg: ConsentgateConfigV1,
    store: Option<TcfStore>,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, store, overrides)
}
