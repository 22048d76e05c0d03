//! Fuzz target for the consent engine.
//!
//! Goal: no query may panic for any snapshot, and the decisions must stay consistent.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_evaluator
//! ```

#![no_main]

use arbitrary::Arbitrary;
use consentgate_types::{AdsStatus, ConsentInput};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Snapshot {
    purpose_consents: String,
    purpose_legitimate_interests: String,
    vendor_consents: String,
    vendor_legitimate_interests: String,
    gdpr_applies: i64,
    purpose: i64,
}

fuzz_target!(|s: Snapshot| {
    let input = ConsentInput::from_raw(
        Some(&s.purpose_consents),
        Some(&s.purpose_legitimate_interests),
        Some(&s.vendor_consents),
        Some(&s.vendor_legitimate_interests),
        s.gdpr_applies,
    );

    let basic = consentgate_domain::can_show_ads(&input);
    let personalized = consentgate_domain::can_show_personalized_ads(&input);
    assert!(!personalized || basic);

    let issues = consentgate_domain::consent_status_issues(&input);
    assert_eq!(issues.status.allows_ads(), basic);
    if issues.status == AdsStatus::GdprNotApplicable {
        assert!(basic && personalized);
    }

    let _ = consentgate_domain::build_findings(&issues, consentgate_domain::vendor_status(&input));
    let _ = consentgate_domain::raw_status_for_all_purposes(&input);
    let single = consentgate_domain::raw_status_for_single_purpose(&input, s.purpose);
    assert_eq!(single.is_ok(), (0..=10).contains(&s.purpose));
});
