//! Purpose consent rules.
//!
//! Both rules evaluate every listed purpose so diagnostics name all failures; the boolean result is
//! the same as stopping at the first one.

use crate::bits::has_attribute;
use consentgate_types::{PurposeId, ids};
use tracing::debug;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleOutcome {
    pub passed: bool,
    /// Purposes that failed the rule, in input order.
    pub denied: Vec<PurposeId>,
    /// Purposes with neither a consent nor a legitimate-interest bit (flexible rule only).
    pub without_signal: Vec<PurposeId>,
}

/// Consent-only rule.
///
/// Every purpose needs its consent bit; when all are present the result is `vendor_consent`.
/// A vendor-caused failure denies no individual purpose.
pub fn evaluate_strict(
    purposes: &[PurposeId],
    purpose_consents: &str,
    vendor_consent: bool,
) -> RuleOutcome {
    let denied: Vec<PurposeId> = purposes
        .iter()
        .copied()
        .filter(|p| !has_attribute(Some(purpose_consents), usize::from(p.index())))
        .collect();

    for p in &denied {
        debug!(purpose = p.index(), rule = ids::RULE_STRICT, "purpose denied");
    }

    RuleOutcome {
        passed: denied.is_empty() && vendor_consent,
        denied,
        without_signal: Vec::new(),
    }
}

/// Consent-or-legitimate-interest rule.
///
/// A purpose passes when its consent bit and the vendor consent are set, or when its
/// legitimate-interest bit and the vendor legitimate interest are set. All purposes must pass.
pub fn evaluate_flexible(
    purposes: &[PurposeId],
    purpose_consents: &str,
    purpose_legitimate_interests: &str,
    vendor_consent: bool,
    vendor_legitimate_interest: bool,
) -> RuleOutcome {
    let mut outcome = RuleOutcome {
        passed: true,
        ..RuleOutcome::default()
    };

    for p in purposes.iter().copied() {
        let index = usize::from(p.index());
        let consent = has_attribute(Some(purpose_consents), index);
        let legitimate_interest = has_attribute(Some(purpose_legitimate_interests), index);

        let ok_by_consent = consent && vendor_consent;
        let ok_by_li = legitimate_interest && vendor_legitimate_interest;

        if !(ok_by_consent || ok_by_li) {
            debug!(
                purpose = p.index(),
                rule = ids::RULE_FLEXIBLE,
                consent,
                legitimate_interest,
                "purpose denied"
            );
            outcome.passed = false;
            outcome.denied.push(p);
        }
        if !consent && !legitimate_interest {
            outcome.without_signal.push(p);
        }
    }

    outcome
}
