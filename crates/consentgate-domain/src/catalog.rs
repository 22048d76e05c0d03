//! Static purpose registry: titles and evaluation modes.

use consentgate_types::{InvalidPurposeIndex, PurposeId, PurposeMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: PurposeId,
    pub title: &'static str,
    pub mode: PurposeMode,
}

static ENTRIES: [CatalogEntry; 11] = [
    entry(PurposeId::GoogleVendor),
    entry(PurposeId::StoreAccessInformation),
    entry(PurposeId::SelectBasicAds),
    entry(PurposeId::CreatePersonalisedAdsProfile),
    entry(PurposeId::SelectPersonalisedAds),
    entry(PurposeId::CreatePersonalisedContentProfile),
    entry(PurposeId::SelectPersonalisedContent),
    entry(PurposeId::MeasureAdPerformance),
    entry(PurposeId::MeasureContentPerformance),
    entry(PurposeId::ApplyMarketResearch),
    entry(PurposeId::DevelopAndImproveProducts),
];

const fn entry(id: PurposeId) -> CatalogEntry {
    CatalogEntry {
        id,
        title: title(id),
        mode: mode(id),
    }
}

pub const fn title(id: PurposeId) -> &'static str {
    match id {
        PurposeId::GoogleVendor => "Misc: Google vendor consent",
        PurposeId::StoreAccessInformation => {
            "Purpose 1 - Store and/or access information on a device"
        }
        PurposeId::SelectBasicAds => "Purpose 2 - Select basic ads",
        PurposeId::CreatePersonalisedAdsProfile => "Purpose 3 - Create a personalised ads profile",
        PurposeId::SelectPersonalisedAds => "Purpose 4 - Select personalised ads",
        PurposeId::CreatePersonalisedContentProfile => {
            "Purpose 5 - Create a personalised content profile"
        }
        PurposeId::SelectPersonalisedContent => "Purpose 6 - Select personalised content",
        PurposeId::MeasureAdPerformance => "Purpose 7 - Measure ad performance",
        PurposeId::MeasureContentPerformance => "Purpose 8 - Measure content performance",
        PurposeId::ApplyMarketResearch => {
            "Purpose 9 - Apply market research to generate audience insights"
        }
        PurposeId::DevelopAndImproveProducts => "Purpose 10 - Develop and improve products",
    }
}

/// Legitimate interest is not a legal basis for purposes 1, 3 and 4.
///
/// The vendor sentinel reports both vendor flags, so it reads as flexible.
pub const fn mode(id: PurposeId) -> PurposeMode {
    match id {
        PurposeId::StoreAccessInformation
        | PurposeId::CreatePersonalisedAdsProfile
        | PurposeId::SelectPersonalisedAds => PurposeMode::Strict,
        PurposeId::GoogleVendor
        | PurposeId::SelectBasicAds
        | PurposeId::CreatePersonalisedContentProfile
        | PurposeId::SelectPersonalisedContent
        | PurposeId::MeasureAdPerformance
        | PurposeId::MeasureContentPerformance
        | PurposeId::ApplyMarketResearch
        | PurposeId::DevelopAndImproveProducts => PurposeMode::Flexible,
    }
}

/// All entries, ordered by id (sentinel first).
pub fn entries() -> &'static [CatalogEntry] {
    &ENTRIES
}

pub fn get(id: PurposeId) -> &'static CatalogEntry {
    &ENTRIES[usize::from(id.index())]
}

/// Resolve a caller-supplied index.
pub fn lookup(index: i64) -> Result<&'static CatalogEntry, InvalidPurposeIndex> {
    PurposeId::from_index(index).map(get)
}

/// Named purposes (sentinel excluded) evaluated under `mode`.
pub fn purposes_with_mode(mode: PurposeMode) -> impl Iterator<Item = PurposeId> {
    ENTRIES
        .iter()
        .filter(move |e| !e.id.is_vendor_aggregate() && e.mode == mode)
        .map(|e| e.id)
}
