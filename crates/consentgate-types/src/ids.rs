//! Stable identifiers for finding codes and TCF constants.
//!
//! `code` is a short snake_case discriminator.

/// Google's id in the IAB Global Vendor List (1-based index into the vendor bit-strings).
pub const GOOGLE_VENDOR_ID: usize = 755;

// Codes: GDPR scope
pub const CODE_GDPR_NOT_APPLICABLE: &str = "gdpr_not_applicable";

// Codes: vendor gating
pub const CODE_VENDOR_CONSENT_MISSING: &str = "vendor_consent_missing";
pub const CODE_VENDOR_LEGITIMATE_INTEREST_MISSING: &str = "vendor_legitimate_interest_missing";

// Codes: purpose rules
pub const CODE_STRICT_PURPOSE_DENIED: &str = "strict_purpose_denied";
pub const CODE_FLEXIBLE_PURPOSE_DENIED: &str = "flexible_purpose_denied";
pub const CODE_PURPOSE_SIGNAL_MISSING: &str = "purpose_signal_missing";

// Rule names (tracing fields and finding data)
pub const RULE_STRICT: &str = "strict";
pub const RULE_FLEXIBLE: &str = "flexible";
