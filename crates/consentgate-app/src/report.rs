use anyhow::Context;
use consentgate_render::{
    RenderableDecisions, RenderableFinding, RenderablePurpose, RenderableReport,
    RenderableSeverity, RenderableStatus,
};
use consentgate_types::{
    AdsStatus, ConsentReport, Finding, PurposeId, PurposeStatus, RawStatusReport,
    SCHEMA_REPORT_V1, Severity,
};

pub fn parse_report_json(text: &str) -> anyhow::Result<ConsentReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema}");
    }

    serde_json::from_value(value).context("parse consentgate report")
}

pub fn serialize_report(report: &ConsentReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &ConsentReport) -> RenderableReport {
    let data = &report.data;
    RenderableReport {
        status: renderable_status(report.status),
        decisions: RenderableDecisions {
            gdpr_applies: data.gdpr_applies,
            can_show_ads: data.can_show_ads,
            can_show_personalized_ads: data.can_show_personalized_ads,
            vendor_consent: data.vendor.consent,
            vendor_legitimate_interest: data.vendor.legitimate_interest,
        },
        findings: report.findings.iter().map(renderable_finding).collect(),
        purposes: renderable_purposes(&data.purposes),
    }
}

pub(crate) fn renderable_purposes(raw: &RawStatusReport) -> Vec<RenderablePurpose> {
    raw.purposes
        .iter()
        .map(|(id, status)| renderable_purpose(*id, status))
        .collect()
}

pub(crate) fn renderable_purpose(id: PurposeId, status: &PurposeStatus) -> RenderablePurpose {
    RenderablePurpose {
        id: id.index(),
        title: status.title.clone(),
        consent: status.consent,
        legitimate_interest: status.legitimate_interest.as_flag(),
    }
}

fn renderable_status(status: AdsStatus) -> RenderableStatus {
    match status {
        AdsStatus::GdprNotApplicable => RenderableStatus::GdprNotApplicable,
        AdsStatus::FullyAllowed => RenderableStatus::FullyAllowed,
        AdsStatus::BasicOnly => RenderableStatus::BasicOnly,
        AdsStatus::Denied => RenderableStatus::Denied,
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        severity: match f.severity {
            Severity::Info => RenderableSeverity::Info,
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Error => RenderableSeverity::Error,
        },
        code: f.code.clone(),
        purpose: f.purpose.map(PurposeId::index),
        message: f.message.clone(),
        help: f.help.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{CheckInput, run_check};
    use consentgate_settings::Overrides;

    fn denied_report() -> ConsentReport {
        run_check(CheckInput {
            config_text: "",
            store_text: None,
            overrides: Overrides {
                gdpr_applies: Some(1),
                purpose_consents: Some("1".to_string()),
                ..Overrides::default()
            },
        })
        .expect("run_check")
        .report
    }

    #[test]
    fn report_json_survives_serialization() {
        let report = denied_report();
        let bytes = serialize_report(&report).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let parsed = parse_report_json(&text).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn rejects_unknown_schema() {
        let err = parse_report_json(r#"{"schema": "something.else"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown report schema"));
        assert!(parse_report_json("{").is_err());
    }

    #[test]
    fn renderable_carries_decisions_and_purposes() {
        let report = denied_report();
        let renderable = to_renderable(&report);
        assert_eq!(renderable.status, RenderableStatus::Denied);
        assert!(!renderable.decisions.can_show_ads);
        assert!(!renderable.decisions.vendor_consent);
        assert_eq!(renderable.purposes.len(), 11);
        assert_eq!(renderable.purposes[0].id, 0);
        assert_eq!(renderable.purposes[0].legitimate_interest, Some(false));
        assert_eq!(renderable.purposes[1].legitimate_interest, None);
        assert_eq!(renderable.findings.len(), report.findings.len());
        assert!(
            renderable
                .findings
                .iter()
                .any(|f| f.code == "vendor_consent_missing" && f.purpose.is_none())
        );
    }
}
