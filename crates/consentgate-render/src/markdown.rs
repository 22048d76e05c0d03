use crate::{RenderableAds, RenderablePurpose};
use crate::RenderableReport;
use crate::model::{li_cell, yes_no};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Consentgate report\n\n");
    let d = &report.decisions;
    out.push_str(&format!(
        "- Status: **{}**\n- GDPR applies: {}\n- Ads: {}\n- Personalized ads: {}\n- Google vendor: consent {}, legitimate interest {}\n\n",
        report.status.label(),
        yes_no(d.gdpr_applies),
        yes_no(d.can_show_ads),
        yes_no(d.can_show_personalized_ads),
        yes_no(d.vendor_consent),
        yes_no(d.vendor_legitimate_interest),
    ));

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
    } else {
        out.push_str("## Findings\n\n");
        for f in &report.findings {
            match f.purpose {
                Some(p) => out.push_str(&format!(
                    "- [{}] `{}` (purpose {}): {}\n",
                    f.severity.label(),
                    f.code,
                    p,
                    f.message
                )),
                None => out.push_str(&format!(
                    "- [{}] `{}`: {}\n",
                    f.severity.label(),
                    f.code,
                    f.message
                )),
            }
            if let Some(help) = &f.help {
                out.push_str(&format!("  - help: {}\n", help));
            }
        }
    }

    if !report.purposes.is_empty() {
        out.push('\n');
        out.push_str("## Purposes\n\n");
        out.push_str(&render_purposes_markdown(&report.purposes));
    }

    out
}

/// Purpose table on its own, used by `consentgate purposes`.
pub fn render_purposes_markdown(purposes: &[RenderablePurpose]) -> String {
    let mut out = String::new();
    out.push_str("| id | purpose | consent | legitimate interest |\n");
    out.push_str("|---:|---|---|---|\n");
    for p in purposes {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            p.id,
            p.title.replace('|', "\\|"),
            yes_no(p.consent),
            li_cell(p.legitimate_interest)
        ));
    }
    out
}

pub fn render_ads_markdown(ads: &RenderableAds) -> String {
    format!(
        "- GDPR applies: {}\n- Ads: {}\n- Personalized ads: {}\n",
        yes_no(ads.gdpr_applies),
        yes_no(ads.can_show_ads),
        yes_no(ads.can_show_personalized_ads)
    )
}
