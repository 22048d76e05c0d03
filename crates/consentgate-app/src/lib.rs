//! Use case orchestration for consentgate.
//!
//! This crate provides the application layer: use cases that coordinate the settings, domain, and
//! render layers. It is intentionally thin and delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod purposes;
mod render;
mod report;

pub use check::{
    AdsDecision, CheckInput, CheckOutput, exit_code, resolve_input, run_ads, run_check,
};
pub use explain::{
    ExplainOutput, PurposeExplanation, format_explanation, format_not_found, format_purpose,
    run_explain,
};
pub use purposes::{PurposesOutput, run_purposes};
pub use render::{render_ads, render_purposes, render_report};
pub use report::{parse_report_json, serialize_report, to_renderable};
