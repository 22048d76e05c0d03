use crate::model::{ConsentgateConfigV1, SCHEMA_CONFIG_V1};
use crate::store::{StoreValue, TcfStore, keys};
use anyhow::Context;
use consentgate_types::ConsentInput;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Markdown,
    Text,
}

/// Command-line overrides. Each set field replaces the matching store key.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub format: Option<String>,
    pub fail_on_denied: Option<bool>,
    pub purpose_consents: Option<String>,
    pub purpose_legitimate_interests: Option<String>,
    pub vendor_consents: Option<String>,
    pub vendor_legitimate_interests: Option<String>,
    pub gdpr_applies: Option<i64>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub input: ConsentInput,
    pub format: OutputFormat,
    pub fail_on_denied: bool,
}

pub fn resolve_config(
    cfg: ConsentgateConfigV1,
    store: Option<TcfStore>,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    let mut merged = TcfStore::new(cfg.store);
    if let Some(store) = store {
        merged.merge(store);
    }

    let text_overrides = [
        (keys::PURPOSE_CONSENTS, &overrides.purpose_consents),
        (
            keys::PURPOSE_LEGITIMATE_INTERESTS,
            &overrides.purpose_legitimate_interests,
        ),
        (keys::VENDOR_CONSENTS, &overrides.vendor_consents),
        (
            keys::VENDOR_LEGITIMATE_INTERESTS,
            &overrides.vendor_legitimate_interests,
        ),
    ];
    for (key, value) in text_overrides {
        if let Some(v) = value {
            merged.set(key, StoreValue::Text(v.clone()));
        }
    }
    if let Some(flag) = overrides.gdpr_applies {
        merged.set(keys::GDPR_APPLIES, StoreValue::Integer(flag));
    }

    let input = merged.to_consent_input().context("read consent store")?;

    let format = match overrides.format.as_deref().or(cfg.format.as_deref()) {
        Some(f) => parse_format(f)?,
        None => OutputFormat::default(),
    };

    let fail_on_denied = overrides
        .fail_on_denied
        .or(cfg.fail_on_denied)
        .unwrap_or(false);

    Ok(ResolvedConfig {
        input,
        format,
        fail_on_denied,
    })
}

fn parse_format(v: &str) -> anyhow::Result<OutputFormat> {
    match v {
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "text" => Ok(OutputFormat::Text),
        other => anyhow::bail!("unknown format: {other} (expected json|markdown|text)"),
    }
}
