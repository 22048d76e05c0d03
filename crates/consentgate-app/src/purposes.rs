//! The `purposes` use case: raw per-purpose status, for all purposes or one index.

use crate::check::{CheckInput, resolve_input};
use consentgate_types::{InvalidPurposeIndex, PurposeId, PurposeStatus, RawStatusReport};

#[derive(Clone, Debug, PartialEq)]
pub enum PurposesOutput {
    All(RawStatusReport),
    Single { id: PurposeId, status: PurposeStatus },
    /// The requested index is outside `0..=10`. Reported as data, not as a runtime error.
    Invalid(InvalidPurposeIndex),
}

pub fn run_purposes(input: CheckInput<'_>, purpose: Option<i64>) -> anyhow::Result<PurposesOutput> {
    let resolved = resolve_input(&input)?;
    let consent = &resolved.input;

    let Some(index) = purpose else {
        return Ok(PurposesOutput::All(
            consentgate_domain::raw_status_for_all_purposes(consent),
        ));
    };

    Ok(
        match consentgate_domain::raw_status_for_single_purpose(consent, index) {
            Ok(status) => PurposesOutput::Single {
                id: PurposeId::from_index(index)?,
                status,
            },
            Err(err) => PurposesOutput::Invalid(err),
        },
    )
}
