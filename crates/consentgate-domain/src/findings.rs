use crate::catalog;
use crate::evaluator::AdsTier;
use consentgate_types::{
    AdsStatus, ConsentIssues, Finding, PurposeId, Severity, VendorStatus, ids,
};
use serde_json::json;

/// Turn an issues report into findings, sorted deterministically.
pub fn build_findings(issues: &ConsentIssues, vendor: VendorStatus) -> Vec<Finding> {
    let mut out = Vec::new();

    if issues.status == AdsStatus::GdprNotApplicable {
        out.push(Finding {
            severity: Severity::Info,
            code: ids::CODE_GDPR_NOT_APPLICABLE.to_string(),
            message: "GDPR does not apply to this user; all ads are allowed".to_string(),
            purpose: None,
            help: None,
            data: serde_json::Value::Null,
        });
        return out;
    }

    if !vendor.consent {
        out.push(Finding {
            severity: Severity::Error,
            code: ids::CODE_VENDOR_CONSENT_MISSING.to_string(),
            message: format!(
                "Google vendor (id {}) has no consent; strict purposes cannot pass",
                ids::GOOGLE_VENDOR_ID
            ),
            purpose: None,
            help: Some("Obtain consent for vendor 755 in the CMP vendor list.".to_string()),
            data: json!({ "vendor_id": ids::GOOGLE_VENDOR_ID }),
        });
    }
    if !vendor.legitimate_interest {
        out.push(Finding {
            severity: Severity::Warning,
            code: ids::CODE_VENDOR_LEGITIMATE_INTEREST_MISSING.to_string(),
            message: format!(
                "Google vendor (id {}) has no legitimate interest; flexible purposes need consent",
                ids::GOOGLE_VENDOR_ID
            ),
            purpose: None,
            help: Some(
                "Obtain vendor legitimate interest, or explicit consent for purposes 2, 7, 9 and 10."
                    .to_string(),
            ),
            data: json!({ "vendor_id": ids::GOOGLE_VENDOR_ID }),
        });
    }

    let Some(details) = &issues.details else {
        out.sort_by(compare_findings);
        return out;
    };

    for id in &details.denied_strict_purposes {
        // 3 and 4 only gate personalization
        let severity = if AdsTier::Basic.strict_purposes().contains(id) {
            Severity::Error
        } else {
            Severity::Warning
        };
        out.push(purpose_finding(
            *id,
            severity,
            ids::CODE_STRICT_PURPOSE_DENIED,
            "has no consent",
            ids::RULE_STRICT,
        ));
    }
    for id in &details.denied_flexible_purposes {
        out.push(purpose_finding(
            *id,
            Severity::Error,
            ids::CODE_FLEXIBLE_PURPOSE_DENIED,
            "is satisfied by neither consent nor legitimate interest",
            ids::RULE_FLEXIBLE,
        ));
    }
    for id in &details.purposes_without_signal {
        out.push(purpose_finding(
            *id,
            Severity::Info,
            ids::CODE_PURPOSE_SIGNAL_MISSING,
            "has neither a consent nor a legitimate-interest bit",
            ids::RULE_FLEXIBLE,
        ));
    }

    out.sort_by(compare_findings);
    out
}

fn purpose_finding(
    id: PurposeId,
    severity: Severity,
    code: &str,
    what: &str,
    rule: &str,
) -> Finding {
    let title = catalog::title(id);
    Finding {
        severity,
        code: code.to_string(),
        message: format!("{title} {what}"),
        purpose: Some(id),
        help: None,
        data: json!({
            "purpose": id.index(),
            "title": title,
            "rule": rule,
        }),
    }
}

fn compare_findings(a: &Finding, b: &Finding) -> std::cmp::Ordering {
    // Ordering priority:
    // 1) severity (error -> warning -> info)
    // 2) purpose (vendor-level first)
    // 3) code
    let severity_rank = |sev: Severity| match sev {
        Severity::Error => 0,
        Severity::Warning => 1,
        Severity::Info => 2,
    };

    severity_rank(a.severity)
        .cmp(&severity_rank(b.severity))
        .then(a.purpose.cmp(&b.purpose))
        .then(a.code.cmp(&b.code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::{consent_status_issues, vendor_status};
    use crate::test_support::{all_granted, snapshot};
    use PurposeId::*;

    fn findings_for(input: &consentgate_types::ConsentInput) -> Vec<Finding> {
        build_findings(&consent_status_issues(input), vendor_status(input))
    }

    #[test]
    fn gdpr_not_applicable_is_a_single_info_finding() {
        let findings = findings_for(&consentgate_types::ConsentInput::default());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].code, ids::CODE_GDPR_NOT_APPLICABLE);
        assert_eq!(findings[0].severity, Severity::Info);
    }

    #[test]
    fn fully_allowed_has_no_findings() {
        assert!(findings_for(&all_granted()).is_empty());
    }

    #[test]
    fn personalization_only_denials_are_warnings() {
        let findings = findings_for(&snapshot("1100001011", "", true, true));
        let codes: Vec<(Severity, Option<PurposeId>)> =
            findings.iter().map(|f| (f.severity, f.purpose)).collect();
        assert_eq!(
            codes,
            vec![
                (Severity::Warning, Some(CreatePersonalisedAdsProfile)),
                (Severity::Warning, Some(SelectPersonalisedAds)),
            ]
        );
        assert_eq!(findings[0].data["rule"], "strict");
        assert_eq!(
            findings[0].message,
            "Purpose 3 - Create a personalised ads profile has no consent"
        );
    }

    #[test]
    fn findings_are_ordered_by_severity_then_purpose() {
        let findings = findings_for(&snapshot("0000000000", "", false, false));
        let keys: Vec<(Severity, Option<u8>, &str)> = findings
            .iter()
            .map(|f| (f.severity, f.purpose.map(PurposeId::index), f.code.as_str()))
            .collect();

        assert_eq!(keys[0], (Severity::Error, None, ids::CODE_VENDOR_CONSENT_MISSING));
        assert_eq!(
            keys[1],
            (Severity::Error, Some(1), ids::CODE_STRICT_PURPOSE_DENIED)
        );
        assert_eq!(
            keys[2],
            (Severity::Error, Some(2), ids::CODE_FLEXIBLE_PURPOSE_DENIED)
        );

        let warnings: Vec<_> = keys
            .iter()
            .filter(|k| k.0 == Severity::Warning)
            .collect();
        assert_eq!(
            warnings.first().map(|k| k.2),
            Some(ids::CODE_VENDOR_LEGITIMATE_INTEREST_MISSING)
        );

        let infos = keys.iter().filter(|k| k.0 == Severity::Info).count();
        assert_eq!(infos, 4);
    }
}
