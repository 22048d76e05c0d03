//! Shared test utilities for the consentgate workspace.
//!
//! This crate exists because `xtask` needs `normalize_nondeterministic` at
//! runtime (not behind `#[cfg(test)]`), so a `#[cfg(test)]` module inside
//! `consentgate-types` would not suffice.

use serde_json::Value;

pub const TIMESTAMP_PLACEHOLDER: &str = "__TIMESTAMP__";
pub const VERSION_PLACEHOLDER: &str = "__VERSION__";

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// `tool.version` is replaced only when the *root* object is a report envelope
/// (`schema`, `tool`, `status`, `findings`, `data`), so finding payloads that
/// happen to carry a `tool` object are left alone. The timestamp keys
/// `started_at` and `finished_at` are replaced at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = ["schema", "tool", "status", "findings", "data"]
            .iter()
            .all(|k| obj.contains_key(*k));
        if is_envelope
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("name")
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String(VERSION_PLACEHOLDER.to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if map.contains_key(key) {
                    map.insert(
                        key.to_string(),
                        Value::String(TIMESTAMP_PLACEHOLDER.to_string()),
                    );
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_envelope_version_and_timestamps() {
        let input = json!({
            "schema": "consentgate.report.v1",
            "tool": { "name": "consentgate", "version": "0.1.0" },
            "started_at": "2026-01-01T00:00:00Z",
            "finished_at": "2026-01-01T00:00:01Z",
            "status": "denied",
            "findings": [
                { "data": { "tool": { "name": "cmp", "version": "2.2" } } }
            ],
            "data": {}
        });

        let result = normalize_nondeterministic(input);
        assert_eq!(result["tool"]["version"], VERSION_PLACEHOLDER);
        assert_eq!(result["tool"]["name"], "consentgate");
        assert_eq!(result["started_at"], TIMESTAMP_PLACEHOLDER);
        assert_eq!(result["finished_at"], TIMESTAMP_PLACEHOLDER);
        assert_eq!(result["findings"][0]["data"]["tool"]["version"], "2.2");
    }

    #[test]
    fn non_envelope_keeps_tool_version() {
        let input = json!({
            "tool": { "name": "consentgate", "version": "0.1.0" },
            "findings": []
        });
        let result = normalize_nondeterministic(input.clone());
        assert_eq!(result, input);
    }

    #[test]
    fn nested_timestamps_are_normalized() {
        let input = json!({ "runs": [{ "started_at": "x" }] });
        let result = normalize_nondeterministic(input);
        assert_eq!(result["runs"][0]["started_at"], TIMESTAMP_PLACEHOLDER);
    }
}
