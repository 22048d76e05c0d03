use crate::input::VendorStatus;
use crate::purpose::PurposeId;
use crate::status::{AdsStatus, ConsentIssues, RawStatusReport};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// Stable schema identifier for consentgate reports.
pub const SCHEMA_REPORT_V1: &str = "consentgate.report.v1";

/// Severity is intentionally small: it maps cleanly to CI signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub severity: Severity,
    pub code: String,
    pub message: String,

    /// The purpose this finding is about; absent for vendor-level and GDPR-scope findings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<PurposeId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Code-specific structured payload (kept open-ended for forward compatibility).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Decision summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConsentData {
    pub gdpr_applies: bool,
    pub can_show_ads: bool,
    pub can_show_personalized_ads: bool,
    pub vendor: VendorStatus,
    pub issues: ConsentIssues,
    pub purposes: RawStatusReport,
}

/// The emitted report envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConsentReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub status: AdsStatus,
    pub findings: Vec<Finding>,
    pub data: ConsentData,
}
