//! The `check` and `ads` use cases: resolve the consent snapshot and evaluate it.

use anyhow::Context;
use consentgate_settings::{ConsentgateConfigV1, Overrides, ResolvedConfig};
use consentgate_types::{AdsStatus, ConsentData, ConsentReport, SCHEMA_REPORT_V1, ToolMeta};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Input shared by every use case that reads a consent snapshot.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// Contents of a JSON key-value store dump, if one was given.
    pub store_text: Option<&'a str>,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: ConsentReport,
    pub resolved_config: ResolvedConfig,
}

/// The two ad decisions on their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdsDecision {
    pub gdpr_applies: bool,
    pub can_show_ads: bool,
    pub can_show_personalized_ads: bool,
}

/// Parse the config and the optional store dump, then apply overrides.
pub fn resolve_input(input: &CheckInput<'_>) -> anyhow::Result<ResolvedConfig> {
    // Empty is allowed, defaults apply.
    let cfg = if input.config_text.trim().is_empty() {
        ConsentgateConfigV1::default()
    } else {
        consentgate_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let store = input
        .store_text
        .map(consentgate_settings::parse_store_json)
        .transpose()
        .context("parse store dump")?;

    consentgate_settings::resolve_config(cfg, store, input.overrides.clone())
        .context("resolve config")
}

/// Run the check use case: resolve input, evaluate both tiers, and build the report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();
    let resolved = resolve_input(&input)?;
    let consent = &resolved.input;

    let vendor = consentgate_domain::vendor_status(consent);
    let issues = consentgate_domain::consent_status_issues(consent);
    let findings = consentgate_domain::build_findings(&issues, vendor);

    let data = ConsentData {
        gdpr_applies: consentgate_domain::gdpr_applies(consent),
        can_show_ads: consentgate_domain::can_show_ads(consent),
        can_show_personalized_ads: consentgate_domain::can_show_personalized_ads(consent),
        vendor,
        purposes: consentgate_domain::raw_status_for_all_purposes(consent),
        issues,
    };

    let report = ConsentReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "consentgate".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        status: data.issues.status,
        findings,
        data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Just the two booleans a host app asks for before loading an ad.
pub fn run_ads(input: CheckInput<'_>) -> anyhow::Result<AdsDecision> {
    let resolved = resolve_input(&input)?;
    let consent = &resolved.input;
    Ok(AdsDecision {
        gdpr_applies: consentgate_domain::gdpr_applies(consent),
        can_show_ads: consentgate_domain::can_show_ads(consent),
        can_show_personalized_ads: consentgate_domain::can_show_personalized_ads(consent),
    })
}

/// Map status to exit code: 0 = ads allowed (or gating off), 2 = denied and gating on.
pub fn exit_code(status: AdsStatus, fail_on_denied: bool) -> i32 {
    if fail_on_denied && !status.allows_ads() {
        2
    } else {
        0
    }
}
