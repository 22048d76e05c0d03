//! The `explain` use case: look up finding-code and purpose documentation.

use consentgate_domain::{AdsTier, catalog};
use consentgate_types::explain::{self, Explanation};
use consentgate_types::{PurposeId, PurposeMode};

/// What a purpose index means to the ad decisions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PurposeExplanation {
    pub id: PurposeId,
    pub title: &'static str,
    pub mode: PurposeMode,
    /// Tiers that evaluate this purpose.
    pub tiers: Vec<&'static str>,
}

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for a finding code.
    Code(Explanation),
    /// The identifier is a purpose index.
    Purpose(PurposeExplanation),
    /// Unknown identifier; includes available codes.
    NotFound {
        identifier: String,
        available_codes: &'static [&'static str],
    },
}

/// Look up an explanation for a finding code or a purpose index (`0`-`10`).
pub fn run_explain(identifier: &str) -> ExplainOutput {
    if let Some(exp) = explain::lookup_explanation(identifier) {
        return ExplainOutput::Code(exp);
    }

    if let Some(entry) = identifier
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|index| catalog::lookup(index).ok())
    {
        let tiers = [("basic", AdsTier::Basic), ("personalized", AdsTier::Personalized)]
            .into_iter()
            .filter(|(_, tier)| {
                tier.strict_purposes().contains(&entry.id)
                    || tier.flexible_purposes().contains(&entry.id)
            })
            .map(|(name, _)| name)
            .collect();
        return ExplainOutput::Purpose(PurposeExplanation {
            id: entry.id,
            title: entry.title,
            mode: entry.mode,
            tiers,
        });
    }

    ExplainOutput::NotFound {
        identifier: identifier.to_string(),
        available_codes: explain::all_codes(),
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Remediation\n");
    out.push_str("-----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\n");
    out.push_str("Examples\n");
    out.push_str("--------\n\n");
    out.push_str("Before:\n");
    out.push_str("```toml\n");
    out.push_str(exp.examples.before);
    out.push('\n');
    out.push_str("```\n\n");
    out.push_str("After:\n");
    out.push_str("```toml\n");
    out.push_str(exp.examples.after);
    out.push('\n');
    out.push_str("```\n");

    out
}

pub fn format_purpose(exp: &PurposeExplanation) -> String {
    let mut out = String::new();
    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");

    if exp.id.is_vendor_aggregate() {
        out.push_str(
            "Index 0 is not a TCF purpose. It reports the Google vendor's own consent and\n\
             legitimate-interest bits (vendor 755), which gate every other purpose.\n",
        );
        return out;
    }

    let rule = match exp.mode {
        PurposeMode::Strict => "strict: needs purpose consent and Google vendor consent",
        PurposeMode::Flexible => {
            "flexible: purpose consent with vendor consent, or purpose legitimate interest with vendor legitimate interest"
        }
    };
    out.push_str(&format!("Rule: {rule}\n"));
    if exp.tiers.is_empty() {
        out.push_str("Used by: no ad decision\n");
    } else {
        out.push_str(&format!("Used by: {} ads\n", exp.tiers.join(", ")));
    }
    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, codes: &[&'static str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown code or purpose: {}\n\n", identifier));
    out.push_str("Available codes:\n");
    for code in codes {
        out.push_str(&format!("  - {}\n", code));
    }
    out.push_str("\nPurposes: 0 (Google vendor) and 1-10\n");

    out
}
