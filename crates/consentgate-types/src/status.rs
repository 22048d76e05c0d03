use crate::purpose::PurposeId;
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Marker emitted for purposes where legitimate interest is not a valid legal basis.
pub const NOT_APPLICABLE: &str = "N/A";

/// Note attached to every raw status report.
pub const RAW_STATUS_INFO: &str =
    "This is raw data. For more convenient checks use one of the can-show decisions";

/// Legitimate-interest column of a raw status entry: a flag, or `"N/A"` for strict purposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegitimateInterestStatus {
    NotApplicable,
    Flag(bool),
}

impl LegitimateInterestStatus {
    pub fn as_flag(self) -> Option<bool> {
        match self {
            LegitimateInterestStatus::NotApplicable => None,
            LegitimateInterestStatus::Flag(v) => Some(v),
        }
    }
}

impl Serialize for LegitimateInterestStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LegitimateInterestStatus::NotApplicable => serializer.serialize_str(NOT_APPLICABLE),
            LegitimateInterestStatus::Flag(v) => serializer.serialize_bool(*v),
        }
    }
}

impl<'de> Deserialize<'de> for LegitimateInterestStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Flag(bool),
            Marker(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Flag(v) => Ok(LegitimateInterestStatus::Flag(v)),
            Repr::Marker(s) if s == NOT_APPLICABLE => Ok(LegitimateInterestStatus::NotApplicable),
            Repr::Marker(s) => Err(serde::de::Error::custom(format!(
                "expected a boolean or \"{NOT_APPLICABLE}\", got \"{s}\""
            ))),
        }
    }
}

impl JsonSchema for LegitimateInterestStatus {
    fn schema_name() -> Cow<'static, str> {
        "LegitimateInterestStatus".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "oneOf": [
                { "type": "boolean" },
                { "const": NOT_APPLICABLE }
            ]
        })
    }
}

/// Purpose ids serialize as decimal string keys inside the map.
fn purpose_map_schema(generator: &mut SchemaGenerator) -> Schema {
    json_schema!({
        "type": "object",
        "propertyNames": { "pattern": "^(?:[0-9]|10)$" },
        "additionalProperties": generator.subschema_for::<PurposeStatus>(),
    })
}

/// Raw bit values for one purpose (or the vendor sentinel), without vendor gating.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PurposeStatus {
    pub title: String,
    pub consent: bool,
    pub legitimate_interest: LegitimateInterestStatus,
}

/// Advisory attached to a raw status report when a vendor flag is missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    VendorConsentMissing,
    VendorLegitimateInterestMissing,
}

impl Advisory {
    pub fn message(self) -> &'static str {
        match self {
            Advisory::VendorConsentMissing => {
                "Since Google vendor consent was not obtained, no ads will be shown regardless of other consent settings"
            }
            Advisory::VendorLegitimateInterestMissing => {
                "Since Google vendor Legitimate Interest was not obtained, no ads will be shown regardless of other consent settings"
            }
        }
    }
}

/// Raw status for every purpose plus the vendor sentinel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RawStatusReport {
    /// Keyed by purpose id; `0` is the Google vendor aggregate.
    #[schemars(schema_with = "purpose_map_schema")]
    pub purposes: BTreeMap<PurposeId, PurposeStatus>,
    pub info: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub advisories: Vec<Advisory>,
}

impl RawStatusReport {
    pub fn get(&self, id: PurposeId) -> Option<&PurposeStatus> {
        self.purposes.get(&id)
    }

    pub fn has_advisory(&self, advisory: Advisory) -> bool {
        self.advisories.contains(&advisory)
    }
}

/// Aggregate ad-serving outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AdsStatus {
    /// GDPR does not apply to this user; everything is allowed.
    GdprNotApplicable,
    /// Basic and personalized ads both pass.
    FullyAllowed,
    /// Basic ads pass, personalized ads do not.
    BasicOnly,
    /// Basic ads fail.
    Denied,
}

impl AdsStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AdsStatus::GdprNotApplicable => "gdpr_not_applicable",
            AdsStatus::FullyAllowed => "fully_allowed",
            AdsStatus::BasicOnly => "basic_only",
            AdsStatus::Denied => "denied",
        }
    }

    pub fn allows_ads(self) -> bool {
        !matches!(self, AdsStatus::Denied)
    }
}

/// Why ads are not fully allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IssueDetails {
    /// True unless the vendor has both consent and legitimate interest.
    pub missing_vendor_consent: bool,
    pub denied_strict_purposes: Vec<PurposeId>,
    pub denied_flexible_purposes: Vec<PurposeId>,
    /// Flexible purposes with neither a consent nor a legitimate-interest bit.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub purposes_without_signal: Vec<PurposeId>,
}

/// Structured diagnostic report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConsentIssues {
    pub status: AdsStatus,
    /// Present only when GDPR applies and ads are not fully allowed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<IssueDetails>,
}
