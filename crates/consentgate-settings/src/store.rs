use consentgate_types::ConsentInput;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key names written by TCF v2 CMPs into the app's default preferences.
pub mod keys {
    pub const GDPR_APPLIES: &str = "IABTCF_gdprApplies";
    pub const PURPOSE_CONSENTS: &str = "IABTCF_PurposeConsents";
    pub const PURPOSE_LEGITIMATE_INTERESTS: &str = "IABTCF_PurposeLegitimateInterests";
    pub const VENDOR_CONSENTS: &str = "IABTCF_VendorConsents";
    pub const VENDOR_LEGITIMATE_INTERESTS: &str = "IABTCF_VendorLegitimateInterests";
}

/// A stored preference value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum StoreValue {
    Integer(i64),
    Bool(bool),
    Text(String),
    /// Anything else a CMP may write; never read by the engine.
    Other(serde_json::Value),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store key {key} must be {expected}")]
    WrongType { key: String, expected: &'static str },
    #[error("parse store json: {0}")]
    Json(#[from] serde_json::Error),
}

/// A snapshot of the key-value store the CMP writes to.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TcfStore {
    values: BTreeMap<String, StoreValue>,
}

impl TcfStore {
    pub fn new(values: BTreeMap<String, StoreValue>) -> Self {
        Self { values }
    }

    pub fn set(&mut self, key: &str, value: StoreValue) {
        self.values.insert(key.to_string(), value);
    }

    /// Overlay `other` on top of `self`; keys in `other` win.
    pub fn merge(&mut self, other: TcfStore) {
        self.values.extend(other.values);
    }

    pub fn text(&self, key: &str) -> Result<Option<&str>, StoreError> {
        match self.values.get(key) {
            None => Ok(None),
            Some(StoreValue::Text(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(StoreError::WrongType {
                key: key.to_string(),
                expected: "a string",
            }),
        }
    }

    pub fn integer(&self, key: &str) -> Result<Option<i64>, StoreError> {
        match self.values.get(key) {
            None => Ok(None),
            Some(StoreValue::Integer(v)) => Ok(Some(*v)),
            Some(_) => Err(StoreError::WrongType {
                key: key.to_string(),
                expected: "an integer",
            }),
        }
    }

    /// Read the four bit-strings and the GDPR flag. Missing keys are absent values; a missing
    /// `IABTCF_gdprApplies` reads as 0.
    pub fn to_consent_input(&self) -> Result<ConsentInput, StoreError> {
        Ok(ConsentInput::from_raw(
            self.text(keys::PURPOSE_CONSENTS)?,
            self.text(keys::PURPOSE_LEGITIMATE_INTERESTS)?,
            self.text(keys::VENDOR_CONSENTS)?,
            self.text(keys::VENDOR_LEGITIMATE_INTERESTS)?,
            self.integer(keys::GDPR_APPLIES)?.unwrap_or(0),
        ))
    }
}

pub(crate) fn parse_store_json(input: &str) -> Result<TcfStore, StoreError> {
    let values: BTreeMap<String, StoreValue> = serde_json::from_str(input)?;
    Ok(TcfStore::new(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_dump_maps_to_input() {
        let store = parse_store_json(
            r#"{
                "IABTCF_gdprApplies": 1,
                "IABTCF_PurposeConsents": "1011",
                "IABTCF_VendorConsents": "01",
                "IABTCF_PublisherCC": "DE",
                "IABTCF_PolicyVersion": 4,
                "IABTCF_UseNonStandardTexts": false,
                "IABTCF_PublisherRestrictions2": [1, 2]
            }"#,
        )
        .unwrap();

        let input = store.to_consent_input().unwrap();
        assert!(input.gdpr_applies);
        assert_eq!(input.purpose_consents, "1011");
        assert_eq!(input.purpose_legitimate_interests, "");
        assert_eq!(input.vendor_consents, "01");
    }

    #[test]
    fn missing_gdpr_flag_reads_as_not_applicable() {
        let store = parse_store_json("{}").unwrap();
        assert_eq!(store.to_consent_input().unwrap(), ConsentInput::default());
    }

    #[test]
    fn wrong_types_are_rejected() {
        let store = parse_store_json(r#"{"IABTCF_gdprApplies": "1"}"#).unwrap();
        let err = store.to_consent_input().unwrap_err();
        assert!(err.to_string().contains("IABTCF_gdprApplies"));

        let store = parse_store_json(r#"{"IABTCF_PurposeConsents": 1011}"#).unwrap();
        assert!(matches!(
            store.to_consent_input(),
            Err(StoreError::WrongType { .. })
        ));
    }

    #[test]
    fn non_object_json_is_an_error() {
        assert!(matches!(
            parse_store_json("[1, 2]"),
            Err(StoreError::Json(_))
        ));
    }

    #[test]
    fn merge_overlays_keys() {
        let mut base = parse_store_json(
            r#"{"IABTCF_gdprApplies": 0, "IABTCF_PurposeConsents": "1"}"#,
        )
        .unwrap();
        base.merge(parse_store_json(r#"{"IABTCF_gdprApplies": 1}"#).unwrap());

        let input = base.to_consent_input().unwrap();
        assert!(input.gdpr_applies);
        assert_eq!(input.purpose_consents, "1");
    }
}
