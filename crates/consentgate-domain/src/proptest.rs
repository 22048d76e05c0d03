//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - bit lookup bounds
//! - the GDPR bypass
//! - vendor gating and idempotence of every query

use crate::bits::has_attribute;
use crate::evaluator::{
    AdsTier, can_show_ads, can_show_personalized_ads, consent_status_issues, evaluate_ads,
    raw_status_for_all_purposes, raw_status_for_single_purpose,
};
use crate::report::EvaluationReport;
use consentgate_types::{AdsStatus, ConsentInput, LegitimateInterestStatus, PurposeId, ids};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Purpose-length bit-strings, sometimes truncated or empty.
fn arb_purpose_bits() -> impl Strategy<Value = String> {
    prop::string::string_regex("[01]{0,12}").unwrap()
}

/// Vendor strings: empty, short, or long enough to reach vendor 755.
fn arb_vendor_bits() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        prop::string::string_regex("[01]{1,40}").unwrap(),
        (any::<bool>(), 0usize..5).prop_map(|(set, extra)| {
            let mut bits = "1".repeat(ids::GOOGLE_VENDOR_ID - 1);
            bits.push(if set { '1' } else { '0' });
            bits.push_str(&"0".repeat(extra));
            bits
        }),
    ]
}

fn arb_input() -> impl Strategy<Value = ConsentInput> {
    (
        arb_purpose_bits(),
        arb_purpose_bits(),
        arb_vendor_bits(),
        arb_vendor_bits(),
        any::<bool>(),
    )
        .prop_map(|(pc, pli, vc, vli, gdpr)| ConsentInput {
            purpose_consents: pc,
            purpose_legitimate_interests: pli,
            vendor_consents: vc,
            vendor_legitimate_interests: vli,
            gdpr_applies: gdpr,
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn lookup_past_the_end_is_never_set(bits in "[01]{0,32}", extra in 1usize..64) {
        prop_assert!(!has_attribute(Some(&bits), bits.len() + extra));
        prop_assert!(!has_attribute(None, extra));
    }

    #[test]
    fn arbitrary_text_never_panics(bits in ".{0,64}", index in 0usize..128) {
        let _ = has_attribute(Some(&bits), index);
    }

    #[test]
    fn bypass_allows_everything_when_gdpr_does_not_apply(input in arb_input()) {
        let mut input = input;
        input.gdpr_applies = false;
        prop_assert!(can_show_ads(&input));
        prop_assert!(can_show_personalized_ads(&input));
        prop_assert_eq!(consent_status_issues(&input).status, AdsStatus::GdprNotApplicable);
        prop_assert_eq!(evaluate_ads(&input, AdsTier::Basic).report, EvaluationReport::default());
    }

    #[test]
    fn personalized_implies_basic(input in arb_input()) {
        if can_show_personalized_ads(&input) {
            prop_assert!(can_show_ads(&input));
        }
    }

    #[test]
    fn queries_are_idempotent(input in arb_input()) {
        prop_assert_eq!(consent_status_issues(&input), consent_status_issues(&input));
        prop_assert_eq!(raw_status_for_all_purposes(&input), raw_status_for_all_purposes(&input));
        prop_assert_eq!(
            evaluate_ads(&input, AdsTier::Personalized),
            evaluate_ads(&input, AdsTier::Personalized)
        );
    }

    #[test]
    fn status_matches_the_two_decisions(input in arb_input()) {
        let issues = consent_status_issues(&input);
        let expected = match (input.gdpr_applies, can_show_ads(&input), can_show_personalized_ads(&input)) {
            (false, _, _) => AdsStatus::GdprNotApplicable,
            (true, true, true) => AdsStatus::FullyAllowed,
            (true, true, false) => AdsStatus::BasicOnly,
            (true, false, _) => AdsStatus::Denied,
        };
        prop_assert_eq!(issues.status, expected);
        prop_assert_eq!(
            issues.details.is_some(),
            matches!(expected, AdsStatus::BasicOnly | AdsStatus::Denied)
        );
    }

    #[test]
    fn raw_status_mirrors_bits(input in arb_input()) {
        let raw = raw_status_for_all_purposes(&input);
        for id in PurposeId::ALL.into_iter().filter(|id| !id.is_vendor_aggregate()) {
            let status = raw.get(id).unwrap();
            let index = usize::from(id.index());
            prop_assert_eq!(status.consent, has_attribute(Some(&input.purpose_consents), index));
            if let LegitimateInterestStatus::Flag(li) = status.legitimate_interest {
                prop_assert_eq!(li, has_attribute(Some(&input.purpose_legitimate_interests), index));
            }
        }
    }

    #[test]
    fn single_purpose_is_total(input in arb_input(), index in -20i64..40) {
        let result = raw_status_for_single_purpose(&input, index);
        prop_assert_eq!(result.is_ok(), (0..=10).contains(&index));
    }
}
