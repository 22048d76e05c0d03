//! Pure consent evaluation (no IO).
//!
//! Input: a decoded consent snapshot supplied by the caller.
//! Output: ad-serving decisions, raw per-purpose status, and diagnostics.

#![forbid(unsafe_code)]

pub mod bits;
pub mod catalog;
pub mod report;
pub mod rules;

mod evaluator;
mod findings;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use evaluator::{
    AdsTier, can_show_ads, can_show_personalized_ads, consent_status_issues, evaluate_ads,
    gdpr_applies, raw_status_for_all_purposes, raw_status_for_single_purpose, vendor_status,
};
pub use findings::build_findings;
