//! Render use cases: pick the output surface for each command.

use crate::check::AdsDecision;
use crate::purposes::PurposesOutput;
use crate::report::{renderable_purpose, renderable_purposes, serialize_report, to_renderable};
use anyhow::Context;
use consentgate_settings::OutputFormat;
use consentgate_types::ConsentReport;
use serde_json::json;

pub fn render_report(report: &ConsentReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let bytes = serialize_report(report)?;
            String::from_utf8(bytes).context("report json is not utf-8")
        }
        OutputFormat::Markdown => Ok(consentgate_render::render_markdown(&to_renderable(report))),
        OutputFormat::Text => Ok(consentgate_render::render_text(&to_renderable(report))),
    }
}

pub fn render_ads(ads: &AdsDecision, format: OutputFormat) -> anyhow::Result<String> {
    let renderable = consentgate_render::RenderableAds {
        gdpr_applies: ads.gdpr_applies,
        can_show_ads: ads.can_show_ads,
        can_show_personalized_ads: ads.can_show_personalized_ads,
    };
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(ads).context("serialize ads decision"),
        OutputFormat::Markdown => Ok(consentgate_render::render_ads_markdown(&renderable)),
        OutputFormat::Text => Ok(consentgate_render::render_ads_text(&renderable)),
    }
}

pub fn render_purposes(output: &PurposesOutput, format: OutputFormat) -> anyhow::Result<String> {
    if format == OutputFormat::Json {
        let value = match output {
            PurposesOutput::All(report) => serde_json::to_value(report),
            PurposesOutput::Single { id, status } => {
                serde_json::to_value(status).map(|status| {
                    let mut map = serde_json::Map::new();
                    map.insert(id.index().to_string(), status);
                    serde_json::Value::Object(map)
                })
            }
            PurposesOutput::Invalid(err) => {
                serde_json::to_value(err).map(|e| json!({ "error": err.to_string(), "details": e }))
            }
        }
        .context("serialize purposes")?;
        return serde_json::to_string_pretty(&value).context("serialize purposes");
    }

    let (rows, notes) = match output {
        PurposesOutput::All(report) => {
            let mut notes = vec![report.info.clone()];
            notes.extend(report.advisories.iter().map(|a| a.message().to_string()));
            (renderable_purposes(report), notes)
        }
        PurposesOutput::Single { id, status } => (vec![renderable_purpose(*id, status)], Vec::new()),
        PurposesOutput::Invalid(err) => return Ok(format!("error: {err}\n")),
    };

    let mut out = match format {
        OutputFormat::Markdown => consentgate_render::render_purposes_markdown(&rows),
        _ => consentgate_render::render_purposes_text(&rows),
    };
    if !notes.is_empty() {
        out.push('\n');
        for note in notes {
            out.push_str(&note);
            out.push('\n');
        }
    }
    Ok(out)
}
