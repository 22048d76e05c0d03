//! Developer tasks (schema generation, fixture updates, conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use consentgate_app::{CheckInput, run_check, serialize_report};
use consentgate_settings::Overrides;
use consentgate_test_util::{TIMESTAMP_PLACEHOLDER, normalize_nondeterministic};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    match manifest_dir.parent() {
        Some(parent) if manifest_dir.ends_with("xtask") => parent.to_path_buf(),
        _ => manifest_dir,
    }
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(consentgate_types::ConsentReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(consentgate_settings::ConsentgateConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "consentgate.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "consentgate.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Check fixture goldens against the report schema and the engine");
    eprintln!("  update-fixtures   Regenerate fixture goldens from the engine");
    eprintln!("  explain-coverage  Validate all codes have explanations");
}

/// Fixture directories that carry a `consentgate.toml`.
fn fixture_dirs() -> anyhow::Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(fixtures_dir()).context("Failed to read tests/fixtures/")? {
        let path = entry?.path();
        if path.join("consentgate.toml").exists() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Run the engine on a fixture and return the normalized report.
fn generate_fixture_report(dir: &Path) -> anyhow::Result<serde_json::Value> {
    let config_path = dir.join("consentgate.toml");
    let config_text = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    let output = run_check(CheckInput {
        config_text: &config_text,
        store_text: None,
        overrides: Overrides::default(),
    })
    .with_context(|| format!("check failed for {}", dir.display()))?;

    let bytes = serialize_report(&output.report)?;
    let value: serde_json::Value = serde_json::from_slice(&bytes)?;
    Ok(normalize_nondeterministic(value))
}

/// Goldens hold timestamp placeholders; swap in a real instant before a typed parse.
fn parse_golden(value: &serde_json::Value) -> anyhow::Result<consentgate_types::ConsentReport> {
    let mut value = value.clone();
    if let Some(obj) = value.as_object_mut() {
        for key in ["started_at", "finished_at"] {
            if obj.get(key).and_then(|v| v.as_str()) == Some(TIMESTAMP_PLACEHOLDER) {
                obj.insert(
                    key.to_string(),
                    serde_json::Value::String("1970-01-01T00:00:00Z".to_string()),
                );
            }
        }
    }
    serde_json::from_value(value).context("golden does not parse as a consentgate report")
}

/// Compile the generated report schema into a validator.
fn report_validator() -> anyhow::Result<jsonschema::Validator> {
    let mut schema_value = serde_json::to_value(generate_report_schema())?;
    // `$id` is a logical identifier, not a resolvable URL.
    if let Some(obj) = schema_value.as_object_mut() {
        obj.remove("$id");
    }
    jsonschema::draft202012::new(&schema_value)
        .map_err(|e| anyhow::anyhow!("Failed to compile report schema: {}", e))
}

fn schema_errors(validator: &jsonschema::Validator, value: &serde_json::Value) -> Vec<String> {
    validator
        .iter_errors(value)
        .map(|e| e.to_string())
        .collect()
}

fn conform() -> anyhow::Result<()> {
    let validator = report_validator()?;
    println!("✓ consentgate.report.v1 schema compiles");

    let mut errors = Vec::new();
    let dirs = fixture_dirs()?;

    for dir in &dirs {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let golden_path = dir.join("expected.report.json");
        let golden: serde_json::Value = match fs::read_to_string(&golden_path) {
            Ok(text) => serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse {}", golden_path.display()))?,
            Err(_) => {
                errors.push(format!("{name}: missing expected.report.json"));
                continue;
            }
        };

        if let Err(err) = parse_golden(&golden) {
            errors.push(format!("{name}: {err:#}"));
            continue;
        }
        for err in schema_errors(&validator, &golden) {
            errors.push(format!("{name}: golden violates report schema: {err}"));
        }

        let actual = generate_fixture_report(dir)?;
        for err in schema_errors(&validator, &actual) {
            errors.push(format!("{name}: engine output violates report schema: {err}"));
        }
        if actual != normalize_nondeterministic(golden) {
            errors.push(format!("{name}: engine output differs from golden"));
        } else {
            println!("✓ fixture '{name}' matches golden report");
        }
    }

    if errors.is_empty() {
        println!("\n✓ {} fixtures conform", dirs.len());
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!("Conformance failed with {} errors", errors.len())
    }
}

fn update_fixtures() -> anyhow::Result<()> {
    for dir in fixture_dirs()? {
        let report = generate_fixture_report(&dir)?;
        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        let path = dir.join("expected.report.json");
        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn explain_coverage() -> anyhow::Result<()> {
    let codes = consentgate_types::explain::all_codes();
    let mut errors = Vec::new();

    for code in codes {
        match consentgate_types::explain::lookup_explanation(code) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("Code '{}' has empty title", code));
                }
                if exp.description.is_empty() {
                    errors.push(format!("Code '{}' has empty description", code));
                }
                if exp.remediation.is_empty() {
                    errors.push(format!("Code '{}' has empty remediation", code));
                }
            }
            None => {
                errors.push(format!("Code '{}' has no explanation", code));
            }
        }
    }

    if errors.is_empty() {
        println!("✓ {} codes have explanations", codes.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "update-fixtures" => update_fixtures(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
