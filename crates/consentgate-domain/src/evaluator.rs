use crate::bits::has_attribute;
use crate::catalog;
use crate::report::{Decision, EvaluationReport};
use crate::rules::{evaluate_flexible, evaluate_strict};
use consentgate_types::status::RAW_STATUS_INFO;
use consentgate_types::{
    Advisory, AdsStatus, ConsentInput, ConsentIssues, InvalidPurposeIndex, IssueDetails,
    LegitimateInterestStatus, PurposeId, PurposeMode, PurposeStatus, RawStatusReport,
    VendorStatus, ids,
};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Which ad decision to evaluate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdsTier {
    Basic,
    Personalized,
}

impl AdsTier {
    /// Purposes that need explicit consent.
    pub fn strict_purposes(self) -> &'static [PurposeId] {
        match self {
            AdsTier::Basic => &[PurposeId::StoreAccessInformation],
            AdsTier::Personalized => &[
                PurposeId::StoreAccessInformation,
                PurposeId::CreatePersonalisedAdsProfile,
                PurposeId::SelectPersonalisedAds,
            ],
        }
    }

    /// Purposes satisfied by consent or legitimate interest.
    pub fn flexible_purposes(self) -> &'static [PurposeId] {
        &[
            PurposeId::SelectBasicAds,
            PurposeId::MeasureAdPerformance,
            PurposeId::ApplyMarketResearch,
            PurposeId::DevelopAndImproveProducts,
        ]
    }
}

pub fn gdpr_applies(input: &ConsentInput) -> bool {
    input.gdpr_applies
}

/// Google vendor flags (vendor id 755).
pub fn vendor_status(input: &ConsentInput) -> VendorStatus {
    VendorStatus {
        consent: has_attribute(Some(&input.vendor_consents), ids::GOOGLE_VENDOR_ID),
        legitimate_interest: has_attribute(
            Some(&input.vendor_legitimate_interests),
            ids::GOOGLE_VENDOR_ID,
        ),
    }
}

/// Evaluate one ad tier.
///
/// When GDPR does not apply the decision is "allowed" with an empty report.
pub fn evaluate_ads(input: &ConsentInput, tier: AdsTier) -> Decision {
    if !gdpr_applies(input) {
        debug!(?tier, "gdpr does not apply; allowing");
        return Decision {
            allowed: true,
            report: EvaluationReport::default(),
        };
    }

    let vendor = vendor_status(input);
    let strict = evaluate_strict(
        tier.strict_purposes(),
        &input.purpose_consents,
        vendor.consent,
    );
    let flexible = evaluate_flexible(
        tier.flexible_purposes(),
        &input.purpose_consents,
        &input.purpose_legitimate_interests,
        vendor.consent,
        vendor.legitimate_interest,
    );

    let mut report = EvaluationReport::default();
    report.record_strict(&strict);
    report.record_flexible(&flexible);

    Decision {
        allowed: strict.passed && flexible.passed,
        report,
    }
}

pub fn can_show_ads(input: &ConsentInput) -> bool {
    evaluate_ads(input, AdsTier::Basic).allowed
}

pub fn can_show_personalized_ads(input: &ConsentInput) -> bool {
    evaluate_ads(input, AdsTier::Personalized).allowed
}

/// Raw bit values for every purpose plus the vendor sentinel. No vendor gating is applied.
pub fn raw_status_for_all_purposes(input: &ConsentInput) -> RawStatusReport {
    let vendor = vendor_status(input);

    let purposes: BTreeMap<PurposeId, PurposeStatus> = PurposeId::ALL
        .into_iter()
        .map(|id| (id, purpose_status(input, vendor, id)))
        .collect();

    let mut advisories = Vec::new();
    if !vendor.consent {
        advisories.push(Advisory::VendorConsentMissing);
    }
    if !vendor.legitimate_interest {
        advisories.push(Advisory::VendorLegitimateInterestMissing);
    }

    RawStatusReport {
        purposes,
        info: RAW_STATUS_INFO.to_string(),
        advisories,
    }
}

/// Raw status for one index; `0` is the vendor aggregate.
pub fn raw_status_for_single_purpose(
    input: &ConsentInput,
    index: i64,
) -> Result<PurposeStatus, InvalidPurposeIndex> {
    let entry = catalog::lookup(index).inspect_err(|err| warn!(index = err.index, "{err}"))?;
    Ok(purpose_status(input, vendor_status(input), entry.id))
}

fn purpose_status(input: &ConsentInput, vendor: VendorStatus, id: PurposeId) -> PurposeStatus {
    let entry = catalog::get(id);

    if id.is_vendor_aggregate() {
        return PurposeStatus {
            title: entry.title.to_string(),
            consent: vendor.consent,
            legitimate_interest: LegitimateInterestStatus::Flag(vendor.legitimate_interest),
        };
    }

    let index = usize::from(id.index());
    let legitimate_interest = match entry.mode {
        PurposeMode::Strict => LegitimateInterestStatus::NotApplicable,
        PurposeMode::Flexible => LegitimateInterestStatus::Flag(has_attribute(
            Some(&input.purpose_legitimate_interests),
            index,
        )),
    };

    PurposeStatus {
        title: entry.title.to_string(),
        consent: has_attribute(Some(&input.purpose_consents), index),
        legitimate_interest,
    }
}

/// Aggregate both ad decisions into a status and, when not fully allowed, the reasons.
pub fn consent_status_issues(input: &ConsentInput) -> ConsentIssues {
    if !gdpr_applies(input) {
        return ConsentIssues {
            status: AdsStatus::GdprNotApplicable,
            details: None,
        };
    }

    let basic = evaluate_ads(input, AdsTier::Basic);
    let personalized = evaluate_ads(input, AdsTier::Personalized);

    let status = match (basic.allowed, personalized.allowed) {
        (true, true) => AdsStatus::FullyAllowed,
        (true, false) => AdsStatus::BasicOnly,
        (false, _) => AdsStatus::Denied,
    };
    if status == AdsStatus::FullyAllowed {
        return ConsentIssues {
            status,
            details: None,
        };
    }

    let mut report = basic.report;
    report.merge(&personalized.report);

    ConsentIssues {
        status,
        details: Some(IssueDetails {
            missing_vendor_consent: !vendor_status(input).is_complete(),
            denied_strict_purposes: report.denied_strict_purposes,
            denied_flexible_purposes: report.denied_flexible_purposes,
            purposes_without_signal: report.purposes_without_signal,
        }),
    }
}
