//! Rendering utilities for human-facing surfaces (Markdown, plain text).

#![forbid(unsafe_code)]

mod markdown;
mod model;
mod text;

pub use markdown::{render_ads_markdown, render_markdown, render_purposes_markdown};
pub use model::{
    RenderableAds, RenderableDecisions, RenderableFinding, RenderablePurpose, RenderableReport,
    RenderableSeverity, RenderableStatus,
};
pub use text::{render_ads_text, render_purposes_text, render_text};
