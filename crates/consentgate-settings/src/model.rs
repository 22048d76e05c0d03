use crate::store::StoreValue;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SCHEMA_CONFIG_V1: &str = "consentgate.config.v1";

/// `consentgate.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConsentgateConfigV1 {
    /// Optional schema string for tooling (`consentgate.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Output format: `json` (default), `markdown`, or `text`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Exit non-zero from `check` when basic ads are denied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on_denied: Option<bool>,

    /// Key-value store contents, keyed like the CMP writes them (`IABTCF_PurposeConsents`, ...).
    #[serde(default)]
    pub store: BTreeMap<String, StoreValue>,
}
