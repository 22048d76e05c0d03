//! Ad-serving consent gate for IAB TCF v2.
//!
//! Feed the decoded CMP store values in as a [`ConsentInput`] and ask whether ads may be shown:
//!
//! ```
//! use consentgate::{ConsentInput, can_show_ads, can_show_personalized_ads};
//!
//! let input = ConsentInput::from_raw(Some("1111"), None, None, None, 0);
//! assert!(can_show_ads(&input));
//! assert!(can_show_personalized_ads(&input));
//! ```
//!
//! When GDPR applies, the Google vendor (id 755) and the purposes each tier needs are checked.
//! [`consent_status_issues`] explains a negative answer and [`raw_status_for_all_purposes`]
//! exposes the underlying bits.

#![forbid(unsafe_code)]

pub use consentgate_domain::{
    AdsTier, build_findings, can_show_ads, can_show_personalized_ads, catalog,
    consent_status_issues, evaluate_ads, gdpr_applies, raw_status_for_all_purposes,
    raw_status_for_single_purpose, vendor_status,
};
pub use consentgate_domain::bits::has_attribute;
pub use consentgate_domain::report::{Decision, EvaluationReport};
pub use consentgate_types::{
    AdsStatus, Advisory, ConsentInput, ConsentIssues, Finding, InvalidPurposeIndex, IssueDetails,
    LegitimateInterestStatus, PurposeId, PurposeMode, PurposeStatus, RawStatusReport, Severity,
    VendorStatus, ids,
};
