use consentgate_types::{ConsentInput, ids};

/// A vendor bit-string of exactly [`ids::GOOGLE_VENDOR_ID`] characters whose last bit is `set`.
pub fn vendor_bits(set: bool) -> String {
    let mut bits = "0".repeat(ids::GOOGLE_VENDOR_ID - 1);
    bits.push(if set { '1' } else { '0' });
    bits
}

/// GDPR-scoped snapshot with the given purpose strings and Google vendor flags.
pub fn snapshot(
    purpose_consents: &str,
    purpose_legitimate_interests: &str,
    vendor_consent: bool,
    vendor_legitimate_interest: bool,
) -> ConsentInput {
    ConsentInput {
        purpose_consents: purpose_consents.to_string(),
        purpose_legitimate_interests: purpose_legitimate_interests.to_string(),
        vendor_consents: vendor_bits(vendor_consent),
        vendor_legitimate_interests: vendor_bits(vendor_legitimate_interest),
        gdpr_applies: true,
    }
}

pub fn all_granted() -> ConsentInput {
    snapshot("1111111111", "1111111111", true, true)
}
