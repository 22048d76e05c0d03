#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    Info,
    Warning,
    Error,
}

impl RenderableSeverity {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARN",
            Self::Error => "ERROR",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableStatus {
    GdprNotApplicable,
    FullyAllowed,
    BasicOnly,
    Denied,
}

impl RenderableStatus {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::GdprNotApplicable => "GDPR NOT APPLICABLE",
            Self::FullyAllowed => "FULLY ALLOWED",
            Self::BasicOnly => "BASIC ONLY",
            Self::Denied => "DENIED",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableFinding {
    pub severity: RenderableSeverity,
    pub code: String,
    pub purpose: Option<u8>,
    pub message: String,
    pub help: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderableDecisions {
    pub gdpr_applies: bool,
    pub can_show_ads: bool,
    pub can_show_personalized_ads: bool,
    pub vendor_consent: bool,
    pub vendor_legitimate_interest: bool,
}

/// One row of the purpose table. `legitimate_interest` is `None` where it does not apply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderablePurpose {
    pub id: u8,
    pub title: String,
    pub consent: bool,
    pub legitimate_interest: Option<bool>,
}

/// The two ad decisions plus the GDPR scope they were made under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderableAds {
    pub gdpr_applies: bool,
    pub can_show_ads: bool,
    pub can_show_personalized_ads: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub status: RenderableStatus,
    pub decisions: RenderableDecisions,
    pub findings: Vec<RenderableFinding>,
    pub purposes: Vec<RenderablePurpose>,
}

pub(crate) fn yes_no(v: bool) -> &'static str {
    if v { "yes" } else { "no" }
}

pub(crate) fn li_cell(v: Option<bool>) -> &'static str {
    match v {
        Some(v) => yes_no(v),
        None => consentgate_types::status::NOT_APPLICABLE,
    }
}
