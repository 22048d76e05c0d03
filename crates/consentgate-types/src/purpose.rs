use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// TCF purpose identifier.
///
/// Discriminants are the 1-based bit positions in the purpose strings. `GoogleVendor` (0) is not a
/// purpose: it stands for the aggregate consent/legitimate-interest status of the Google vendor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "i64")]
pub enum PurposeId {
    GoogleVendor = 0,
    StoreAccessInformation = 1,
    SelectBasicAds = 2,
    CreatePersonalisedAdsProfile = 3,
    SelectPersonalisedAds = 4,
    CreatePersonalisedContentProfile = 5,
    SelectPersonalisedContent = 6,
    MeasureAdPerformance = 7,
    MeasureContentPerformance = 8,
    ApplyMarketResearch = 9,
    DevelopAndImproveProducts = 10,
}

impl PurposeId {
    /// Every id, sentinel first.
    pub const ALL: [PurposeId; 11] = [
        PurposeId::GoogleVendor,
        PurposeId::StoreAccessInformation,
        PurposeId::SelectBasicAds,
        PurposeId::CreatePersonalisedAdsProfile,
        PurposeId::SelectPersonalisedAds,
        PurposeId::CreatePersonalisedContentProfile,
        PurposeId::SelectPersonalisedContent,
        PurposeId::MeasureAdPerformance,
        PurposeId::MeasureContentPerformance,
        PurposeId::ApplyMarketResearch,
        PurposeId::DevelopAndImproveProducts,
    ];

    /// The bit position (0 for the vendor sentinel).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn is_vendor_aggregate(self) -> bool {
        matches!(self, PurposeId::GoogleVendor)
    }

    pub fn from_index(index: i64) -> Result<Self, InvalidPurposeIndex> {
        PurposeId::ALL
            .into_iter()
            .find(|id| i64::from(id.index()) == index)
            .ok_or(InvalidPurposeIndex { index })
    }
}

impl From<PurposeId> for u8 {
    fn from(id: PurposeId) -> Self {
        id.index()
    }
}

impl TryFrom<i64> for PurposeId {
    type Error = InvalidPurposeIndex;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        PurposeId::from_index(index)
    }
}

impl fmt::Display for PurposeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

impl JsonSchema for PurposeId {
    fn schema_name() -> Cow<'static, str> {
        "PurposeId".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "integer",
            "minimum": 0,
            "maximum": 10,
            "description": "TCF purpose number (1-10), or 0 for the Google vendor aggregate",
        })
    }
}

/// Which legal bases satisfy a purpose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PurposeMode {
    /// Only explicit consent counts; legitimate interest is not applicable.
    Strict,
    /// Consent or legitimate interest.
    Flexible,
}

/// A purpose index outside `0..=10`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, thiserror::Error,
)]
#[error(
    "invalid purpose index {index}: expected 0 for Google vendor consent or 1-10 for named purposes"
)]
pub struct InvalidPurposeIndex {
    pub index: i64,
}
