//! Conformance tests for consentgate.
//!
//! These tests validate:
//! 1. All codes have explanations
//! 2. Every catalog entry has a title and every purpose index resolves
//! 3. All fixture reports carry the v1 envelope and only known codes
//! 4. Golden and live `check` reports validate against the generated report schema

use assert_cmd::Command;
use consentgate_domain::catalog;
use consentgate_types::{ConsentReport, PurposeId, SCHEMA_REPORT_V1, explain, ids};
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("consentgate-cli should have parent")
        .parent()
        .expect("crates should have parent")
        .join("tests")
        .join("fixtures")
}

fn fixture_reports() -> Vec<(String, Value)> {
    let mut out = Vec::new();
    for entry in std::fs::read_dir(fixtures_dir()).expect("read fixtures dir") {
        let entry = entry.expect("read dir entry");
        let path = entry.path().join("expected.report.json");
        if !path.exists() {
            continue;
        }
        let text = std::fs::read_to_string(&path).expect("read fixture report");
        let value: Value = serde_json::from_str(&text)
            .unwrap_or_else(|e| panic!("{} is not valid JSON: {e}", path.display()));
        out.push((entry.file_name().to_string_lossy().into_owned(), value));
    }
    assert!(!out.is_empty(), "no fixture reports found");
    out
}

// =============================================================================
// Explanation Coverage Tests
// =============================================================================

#[test]
fn all_codes_have_explanations() {
    for code in explain::all_codes() {
        let exp = explain::lookup_explanation(code)
            .unwrap_or_else(|| panic!("Code '{code}' has no explanation in registry"));
        assert!(!exp.title.is_empty(), "Code '{code}' has empty title");
        assert!(
            !exp.description.is_empty(),
            "Code '{code}' has empty description"
        );
        assert!(
            !exp.remediation.is_empty(),
            "Code '{code}' has empty remediation"
        );
    }
}

#[test]
fn known_codes_are_documented() {
    let expected = [
        ids::CODE_GDPR_NOT_APPLICABLE,
        ids::CODE_VENDOR_CONSENT_MISSING,
        ids::CODE_VENDOR_LEGITIMATE_INTEREST_MISSING,
        ids::CODE_STRICT_PURPOSE_DENIED,
        ids::CODE_FLEXIBLE_PURPOSE_DENIED,
        ids::CODE_PURPOSE_SIGNAL_MISSING,
    ];
    let codes = explain::all_codes();
    for code in expected {
        assert!(codes.contains(&code), "code '{code}' missing from registry");
    }
    assert_eq!(codes.len(), expected.len());
}

// =============================================================================
// Catalog Tests
// =============================================================================

#[test]
fn every_purpose_has_a_title() {
    assert_eq!(catalog::entries().len(), PurposeId::ALL.len());
    for id in PurposeId::ALL {
        let entry = catalog::get(id);
        assert_eq!(entry.id, id);
        assert!(!entry.title.is_empty(), "purpose {id} has empty title");
        if !id.is_vendor_aggregate() {
            assert!(
                entry.title.starts_with(&format!("Purpose {} - ", id.index())),
                "purpose {id} title does not name its own index: {}",
                entry.title
            );
        }
    }
}

#[test]
fn purpose_lookup_is_total_over_its_range() {
    for index in 0..=10 {
        assert!(catalog::lookup(index).is_ok(), "index {index} should resolve");
    }
    for index in [-1, 11, i64::MAX, i64::MIN] {
        assert!(catalog::lookup(index).is_err(), "index {index} should fail");
    }
}

// =============================================================================
// Fixture Report Tests
// =============================================================================

#[test]
fn all_fixture_reports_have_required_fields() {
    for (name, report) in fixture_reports() {
        for key in ["schema", "tool", "started_at", "finished_at", "status", "findings", "data"] {
            assert!(report.get(key).is_some(), "{name}: missing '{key}'");
        }
        assert_eq!(report["schema"], SCHEMA_REPORT_V1, "{name}: wrong schema");
        assert_eq!(report["tool"]["name"], "consentgate", "{name}: wrong tool");

        let purposes = report["data"]["purposes"]["purposes"]
            .as_object()
            .unwrap_or_else(|| panic!("{name}: purposes is not an object"));
        assert_eq!(purposes.len(), 11, "{name}: expected 11 purpose entries");
    }
}

#[test]
fn all_fixture_findings_have_valid_codes() {
    let codes = explain::all_codes();
    for (name, report) in fixture_reports() {
        for finding in report["findings"].as_array().expect("findings array") {
            let code = finding["code"].as_str().expect("code string");
            assert!(codes.contains(&code), "{name}: unknown code '{code}'");
            let severity = finding["severity"].as_str().expect("severity string");
            assert!(
                matches!(severity, "info" | "warning" | "error"),
                "{name}: invalid severity '{severity}'"
            );
        }
    }
}

#[test]
fn all_fixture_statuses_match_decisions() {
    for (name, report) in fixture_reports() {
        let data = &report["data"];
        let expected = match (
            data["gdpr_applies"].as_bool(),
            data["can_show_ads"].as_bool(),
            data["can_show_personalized_ads"].as_bool(),
        ) {
            (Some(false), _, _) => "gdpr_not_applicable",
            (Some(true), Some(true), Some(true)) => "fully_allowed",
            (Some(true), Some(true), Some(false)) => "basic_only",
            (Some(true), Some(false), _) => "denied",
            other => panic!("{name}: malformed decisions {other:?}"),
        };
        assert_eq!(report["status"], expected, "{name}: status mismatch");
        assert_eq!(data["issues"]["status"], expected, "{name}: issues status mismatch");
    }
}

// =============================================================================
// Report Schema Tests
// =============================================================================

fn report_validator() -> jsonschema::Validator {
    let mut schema = serde_json::to_value(schemars::schema_for!(ConsentReport))
        .expect("serialize report schema");
    if let Some(obj) = schema.as_object_mut() {
        obj.remove("$id");
    }
    jsonschema::draft202012::new(&schema).expect("report schema compiles")
}

fn assert_schema_valid(validator: &jsonschema::Validator, name: &str, report: &Value) {
    let errors: Vec<String> = validator.iter_errors(report).map(|e| e.to_string()).collect();
    assert!(errors.is_empty(), "{name}: schema violations: {errors:#?}");
}

#[allow(deprecated)]
fn consentgate_cmd() -> Command {
    Command::cargo_bin("consentgate").expect("consentgate binary not found")
}

#[test]
fn fixture_reports_match_report_schema() {
    let validator = report_validator();
    for (name, report) in fixture_reports() {
        assert_schema_valid(&validator, &name, &report);
    }
}

#[test]
fn live_check_output_matches_report_schema() {
    let validator = report_validator();
    for (name, _) in fixture_reports() {
        let temp = TempDir::new().expect("create temp dir");
        let report_path = temp.path().join("report.json");
        consentgate_cmd()
            .current_dir(temp.path())
            .arg("--config")
            .arg(fixtures_dir().join(&name).join("consentgate.toml"))
            .arg("check")
            .arg("--report-out")
            .arg(&report_path)
            .output()
            .expect("run consentgate");

        let text = std::fs::read_to_string(&report_path).expect("read report");
        let report: Value = serde_json::from_str(&text).expect("parse report");
        assert_schema_valid(&validator, &name, &report);
    }
}

#[test]
fn report_schema_rejects_bad_purpose_keys_and_li_values() {
    let validator = report_validator();
    let (_, report) = fixture_reports()
        .into_iter()
        .next()
        .expect("at least one fixture");

    let mut bad_key = report.clone();
    let purposes = bad_key["data"]["purposes"]["purposes"]
        .as_object_mut()
        .expect("purposes object");
    let entry = purposes["1"].clone();
    purposes.insert("11".to_string(), entry);
    assert!(!validator.is_valid(&bad_key), "purpose key 11 must be rejected");

    let mut bad_li = report;
    bad_li["data"]["purposes"]["purposes"]["2"]["legitimate_interest"] =
        Value::String("maybe".to_string());
    assert!(!validator.is_valid(&bad_li), "LI must be a bool or \"N/A\"");
}
