//! Stable DTOs and IDs used across the consentgate workspace.
//!
//! This crate is intentionally boring:
//! - purpose identifiers and the consent snapshot handed to the engine
//! - raw status and issue report shapes
//! - the emitted report envelope and finding codes
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod input;
pub mod purpose;
pub mod receipt;
pub mod status;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use input::{ConsentInput, VendorStatus};
pub use purpose::{InvalidPurposeIndex, PurposeId, PurposeMode};
pub use receipt::{ConsentData, ConsentReport, Finding, SCHEMA_REPORT_V1, Severity, ToolMeta};
pub use status::{
    Advisory, AdsStatus, ConsentIssues, IssueDetails, LegitimateInterestStatus, PurposeStatus,
    RawStatusReport,
};
