use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Decoded TCF consent snapshot handed to the engine.
///
/// Every bit-string is a sequence of ASCII `'0'`/`'1'`, one character per purpose or vendor,
/// 1-indexed. An absent value is stored as the empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConsentInput {
    #[serde(default)]
    pub purpose_consents: String,
    #[serde(default)]
    pub purpose_legitimate_interests: String,
    #[serde(default)]
    pub vendor_consents: String,
    #[serde(default)]
    pub vendor_legitimate_interests: String,
    #[serde(default)]
    pub gdpr_applies: bool,
}

impl ConsentInput {
    /// Build a snapshot from what a key-value store hands back: possibly-missing strings and the
    /// integer `gdprApplies` flag (non-zero means GDPR applies).
    pub fn from_raw(
        purpose_consents: Option<&str>,
        purpose_legitimate_interests: Option<&str>,
        vendor_consents: Option<&str>,
        vendor_legitimate_interests: Option<&str>,
        gdpr_applies: i64,
    ) -> Self {
        let owned = |v: Option<&str>| v.unwrap_or_default().to_string();
        Self {
            purpose_consents: owned(purpose_consents),
            purpose_legitimate_interests: owned(purpose_legitimate_interests),
            vendor_consents: owned(vendor_consents),
            vendor_legitimate_interests: owned(vendor_legitimate_interests),
            gdpr_applies: gdpr_applies != 0,
        }
    }
}

/// The fixed vendor's own consent and legitimate-interest flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VendorStatus {
    pub consent: bool,
    pub legitimate_interest: bool,
}

impl VendorStatus {
    pub fn is_complete(&self) -> bool {
        self.consent && self.legitimate_interest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_maps_missing_to_empty_and_flag_to_bool() {
        let input = ConsentInput::from_raw(Some("1"), None, None, Some("01"), 1);
        assert_eq!(input.purpose_consents, "1");
        assert_eq!(input.purpose_legitimate_interests, "");
        assert_eq!(input.vendor_consents, "");
        assert_eq!(input.vendor_legitimate_interests, "01");
        assert!(input.gdpr_applies);

        assert!(!ConsentInput::from_raw(None, None, None, None, 0).gdpr_applies);
        assert!(ConsentInput::from_raw(None, None, None, None, -3).gdpr_applies);
    }

    #[test]
    fn missing_fields_deserialize_as_absent() {
        let input: ConsentInput = serde_json::from_str(r#"{"gdpr_applies":true}"#).unwrap();
        assert!(input.gdpr_applies);
        assert!(input.purpose_consents.is_empty());
    }
}
