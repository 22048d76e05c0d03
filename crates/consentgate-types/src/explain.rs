//! Explain registry for finding codes.
//!
//! Maps codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the code.
    pub title: &'static str,
    /// What the finding means and when it is emitted.
    pub description: &'static str,
    /// How to resolve it.
    pub remediation: &'static str,
    /// Before/after store examples.
    pub examples: ExamplePair,
}

/// Before and after store snippets.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Store contents that would trigger a finding.
    pub before: &'static str,
    /// Store contents that pass.
    pub after: &'static str,
}

/// Look up an explanation by code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::CODE_GDPR_NOT_APPLICABLE => Some(explain_gdpr_not_applicable()),
        ids::CODE_VENDOR_CONSENT_MISSING => Some(explain_vendor_consent_missing()),
        ids::CODE_VENDOR_LEGITIMATE_INTEREST_MISSING => {
            Some(explain_vendor_legitimate_interest_missing())
        }
        ids::CODE_STRICT_PURPOSE_DENIED => Some(explain_strict_purpose_denied()),
        ids::CODE_FLEXIBLE_PURPOSE_DENIED => Some(explain_flexible_purpose_denied()),
        ids::CODE_PURPOSE_SIGNAL_MISSING => Some(explain_purpose_signal_missing()),
        _ => None,
    }
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_GDPR_NOT_APPLICABLE,
        ids::CODE_VENDOR_CONSENT_MISSING,
        ids::CODE_VENDOR_LEGITIMATE_INTEREST_MISSING,
        ids::CODE_STRICT_PURPOSE_DENIED,
        ids::CODE_FLEXIBLE_PURPOSE_DENIED,
        ids::CODE_PURPOSE_SIGNAL_MISSING,
    ]
}

fn explain_gdpr_not_applicable() -> Explanation {
    Explanation {
        title: "GDPR Not Applicable",
        description: "\
The CMP reported `IABTCF_gdprApplies = 0` (or did not report it at all).

When GDPR does not apply to the user, every gating decision returns \"allowed\"
and no purpose-level evaluation takes place. This is informational only.",
        remediation: "\
Nothing to fix. If the user is in the EEA or UK, verify that the CMP is
configured to detect GDPR scope and writes `IABTCF_gdprApplies = 1`.",
        examples: ExamplePair {
            before: r#"[store]
IABTCF_gdprApplies = 0"#,
            after: r#"[store]
IABTCF_gdprApplies = 1"#,
        },
    }
}

fn explain_vendor_consent_missing() -> Explanation {
    Explanation {
        title: "Google Vendor Consent Missing",
        description: "\
Bit 755 of `IABTCF_VendorConsents` is not set.

Google (vendor 755 in the Global Vendor List) gates every purpose: a purpose
consent bit only counts when the vendor itself has consent. Without it the
strict purposes (1, 3, 4) fail even when all their purpose bits are set, and
the flexible purposes can only pass through legitimate interest.",
        remediation: "\
Make sure the consent dialog lists Google as a vendor and that the user
accepted it. A CMP that does not include vendor 755 will never allow ads.",
        examples: ExamplePair {
            before: r#"[store]
IABTCF_VendorConsents = "000...0"   # 755 characters, last one 0"#,
            after: r#"[store]
IABTCF_VendorConsents = "000...1"   # 755 characters, last one 1"#,
        },
    }
}

fn explain_vendor_legitimate_interest_missing() -> Explanation {
    Explanation {
        title: "Google Vendor Legitimate Interest Missing",
        description: "\
Bit 755 of `IABTCF_VendorLegitimateInterests` is not set.

The flexible purposes (2, 7, 9, 10) may pass on legitimate interest instead of
consent, but only when the vendor also has legitimate interest. Without it
every flexible purpose must be consented to explicitly.",
        remediation: "\
Either obtain vendor legitimate interest for Google, or obtain explicit
consent for purposes 2, 7, 9 and 10.",
        examples: ExamplePair {
            before: r#"[store]
IABTCF_VendorLegitimateInterests = "000...0"   # bit 755 unset"#,
            after: r#"[store]
IABTCF_VendorLegitimateInterests = "000...1"   # bit 755 set"#,
        },
    }
}

fn explain_strict_purpose_denied() -> Explanation {
    Explanation {
        title: "Strict Purpose Denied",
        description: "\
A purpose that only accepts explicit consent has no consent bit.

Purposes 1 (store and/or access information on a device), 3 (create a
personalised ads profile) and 4 (select personalised ads) cannot rely on
legitimate interest. Purpose 1 is required for any ads; purposes 3 and 4 are
required for personalized ads only.",
        remediation: "\
Ask the user for consent to the listed purpose. Legitimate interest cannot be
used instead.",
        examples: ExamplePair {
            before: r#"[store]
IABTCF_PurposeConsents = "0111111111""#,
            after: r#"[store]
IABTCF_PurposeConsents = "1111111111""#,
        },
    }
}

fn explain_flexible_purpose_denied() -> Explanation {
    Explanation {
        title: "Flexible Purpose Denied",
        description: "\
A purpose that accepts consent or legitimate interest satisfied neither.

For purposes 2, 7, 9 and 10 a purpose passes when its consent bit is set and
the vendor has consent, or when its legitimate-interest bit is set and the
vendor has legitimate interest. All of them are required for any ads.",
        remediation: "\
Obtain consent or legitimate interest for the purpose, together with the
matching vendor-level flag for Google.",
        examples: ExamplePair {
            before: r#"[store]
IABTCF_PurposeConsents = "1011111111"
IABTCF_PurposeLegitimateInterests = "0000000000""#,
            after: r#"[store]
IABTCF_PurposeConsents = "1011111111"
IABTCF_PurposeLegitimateInterests = "0100000000""#,
        },
    }
}

fn explain_purpose_signal_missing() -> Explanation {
    Explanation {
        title: "Purpose Signal Missing",
        description: "\
A flexible purpose has neither a consent bit nor a legitimate-interest bit.

This is reported independently of the vendor flags: it means the user (or the
CMP) never granted any legal basis for the purpose, as opposed to a purpose
denied only because the vendor lacks consent.",
        remediation: "\
Check that the CMP presents the purpose and that its legitimate-interest
setting was not objected to.",
        examples: ExamplePair {
            before: r#"[store]
IABTCF_PurposeConsents = "1000000000"
IABTCF_PurposeLegitimateInterests = "0000000000""#,
            after: r#"[store]
IABTCF_PurposeConsents = "1000000000"
IABTCF_PurposeLegitimateInterests = "0100001011""#,
        },
    }
}
