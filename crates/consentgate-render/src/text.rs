use crate::model::{li_cell, yes_no};
use crate::{RenderableAds, RenderablePurpose, RenderableReport};

/// Plain terminal output: a status line, the decisions, then one line per finding.
pub fn render_text(report: &RenderableReport) -> String {
    let d = &report.decisions;
    let mut out = format!("consentgate: {}\n", report.status.label());
    out.push_str(&format!("  gdpr applies:              {}\n", yes_no(d.gdpr_applies)));
    out.push_str(&format!("  can show ads:              {}\n", yes_no(d.can_show_ads)));
    out.push_str(&format!(
        "  can show personalized ads: {}\n",
        yes_no(d.can_show_personalized_ads)
    ));
    out.push_str(&format!(
        "  google vendor:             consent={} li={}\n",
        yes_no(d.vendor_consent),
        yes_no(d.vendor_legitimate_interest)
    ));

    for f in &report.findings {
        let purpose = f.purpose.map(|p| format!("[{p}] ")).unwrap_or_default();
        out.push_str(&format!(
            "{:<5} {}: {}{}\n",
            f.severity.label(),
            f.code,
            purpose,
            f.message
        ));
        if let Some(help) = &f.help {
            out.push_str(&format!("      help: {help}\n"));
        }
    }

    if !report.purposes.is_empty() {
        out.push('\n');
        out.push_str(&render_purposes_text(&report.purposes));
    }
    out
}

pub fn render_purposes_text(purposes: &[RenderablePurpose]) -> String {
    let width = purposes
        .iter()
        .map(|p| p.title.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for p in purposes {
        out.push_str(&format!(
            "{:>2}  {:<width$}  consent={:<3}  li={}\n",
            p.id,
            p.title,
            yes_no(p.consent),
            li_cell(p.legitimate_interest),
        ));
    }
    out
}

pub fn render_ads_text(ads: &RenderableAds) -> String {
    format!(
        "gdpr applies: {}\ncan show ads: {}\ncan show personalized ads: {}\n",
        yes_no(ads.gdpr_applies),
        yes_no(ads.can_show_ads),
        yes_no(ads.can_show_personalized_ads)
    )
}
