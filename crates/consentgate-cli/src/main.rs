//! CLI entry point for consentgate.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `consentgate-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use consentgate_app::{
    CheckInput, ExplainOutput, PurposesOutput, exit_code, format_explanation, format_not_found,
    format_purpose, parse_report_json, render_ads, render_purposes, render_report, run_ads,
    run_check, run_explain, run_purposes, serialize_report,
};
use consentgate_settings::{OutputFormat, Overrides};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

const DEFAULT_CONFIG: &str = "consentgate.toml";

#[derive(Parser, Debug)]
#[command(
    name = "consentgate",
    version,
    about = "Ad-serving consent gate for IAB TCF v2 consent strings"
)]
struct Cli {
    /// Path to consentgate config TOML (default: ./consentgate.toml if present).
    #[arg(long, global = true)]
    config: Option<Utf8PathBuf>,

    /// JSON dump of the CMP key-value store (`IABTCF_*` keys).
    #[arg(long, global = true)]
    store: Option<Utf8PathBuf>,

    /// Override `IABTCF_PurposeConsents`.
    #[arg(long, global = true)]
    purpose_consents: Option<String>,

    /// Override `IABTCF_PurposeLegitimateInterests`.
    #[arg(long = "purpose-li", global = true)]
    purpose_legitimate_interests: Option<String>,

    /// Override `IABTCF_VendorConsents`.
    #[arg(long, global = true)]
    vendor_consents: Option<String>,

    /// Override `IABTCF_VendorLegitimateInterests`.
    #[arg(long = "vendor-li", global = true)]
    vendor_legitimate_interests: Option<String>,

    /// Override `IABTCF_gdprApplies` (non-zero means GDPR applies).
    #[arg(long, global = true, allow_negative_numbers = true)]
    gdpr_applies: Option<i64>,

    /// Output format (json|markdown|text).
    #[arg(long, global = true)]
    format: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate both ad decisions and print the full report.
    Check {
        /// Also write the JSON report to this path.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Exit with code 2 when basic ads are denied.
        #[arg(long)]
        fail_on_denied: bool,
    },

    /// Print only the basic and personalized ad decisions.
    Ads,

    /// Print raw per-purpose bit values (no vendor gating).
    Purposes {
        /// A single purpose index (0 = Google vendor, 1-10 = TCF purposes).
        #[arg(long, allow_negative_numbers = true)]
        purpose: Option<i64>,
    },

    /// Render an existing JSON report as Markdown or text.
    Md {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Where to write the output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a finding code or purpose index with remediation guidance.
    Explain {
        /// A code (e.g., "strict_purpose_denied") or purpose index (e.g., "3").
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match &cli.cmd {
        Commands::Check {
            report_out,
            fail_on_denied,
        } => cmd_check(&cli, report_out.as_deref(), *fail_on_denied),
        Commands::Ads => cmd_ads(&cli),
        Commands::Purposes { purpose } => cmd_purposes(&cli, *purpose),
        Commands::Md { report, output } => cmd_md(&cli, report, output.as_deref()),
        Commands::Explain { identifier } => cmd_explain(identifier),
    }
}

/// Config and store contents read from disk.
struct Sources {
    config_text: String,
    store_text: Option<String>,
}

impl Sources {
    fn load(cli: &Cli) -> anyhow::Result<Self> {
        // An explicit --config must exist; the default path is optional.
        let config_text = match &cli.config {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("read config: {}", path))?,
            None => std::fs::read_to_string(DEFAULT_CONFIG).unwrap_or_default(),
        };

        let store_text = cli
            .store
            .as_ref()
            .map(|path| {
                std::fs::read_to_string(path).with_context(|| format!("read store: {}", path))
            })
            .transpose()?;

        Ok(Self {
            config_text,
            store_text,
        })
    }

    fn input(&self, overrides: Overrides) -> CheckInput<'_> {
        CheckInput {
            config_text: &self.config_text,
            store_text: self.store_text.as_deref(),
            overrides,
        }
    }
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        format: cli.format.clone(),
        fail_on_denied: None,
        purpose_consents: cli.purpose_consents.clone(),
        purpose_legitimate_interests: cli.purpose_legitimate_interests.clone(),
        vendor_consents: cli.vendor_consents.clone(),
        vendor_legitimate_interests: cli.vendor_legitimate_interests.clone(),
        gdpr_applies: cli.gdpr_applies,
    }
}

fn cmd_check(
    cli: &Cli,
    report_out: Option<&Utf8Path>,
    fail_on_denied: bool,
) -> anyhow::Result<()> {
    let sources = Sources::load(cli)?;
    let mut overrides = overrides(cli);
    if fail_on_denied {
        overrides.fail_on_denied = Some(true);
    }

    let output = run_check(sources.input(overrides))?;

    if let Some(path) = report_out {
        let data = serialize_report(&output.report).context("serialize report")?;
        write_file(path, &data).context("write report json")?;
    }

    print!(
        "{}",
        with_newline(render_report(&output.report, output.resolved_config.format)?)
    );

    let code = exit_code(output.report.status, output.resolved_config.fail_on_denied);
    if code != 0 {
        tracing::info!(status = output.report.status.as_str(), "ads denied");
        std::process::exit(code);
    }
    Ok(())
}

fn cmd_ads(cli: &Cli) -> anyhow::Result<()> {
    let sources = Sources::load(cli)?;
    let input = sources.input(overrides(cli));
    let format = consentgate_app::resolve_input(&input)?.format;
    let ads = run_ads(input)?;
    print!("{}", with_newline(render_ads(&ads, format)?));
    Ok(())
}

fn cmd_purposes(cli: &Cli, purpose: Option<i64>) -> anyhow::Result<()> {
    let sources = Sources::load(cli)?;
    let input = sources.input(overrides(cli));
    let format = consentgate_app::resolve_input(&input)?.format;
    let output = run_purposes(input, purpose)?;
    print!("{}", with_newline(render_purposes(&output, format)?));

    if matches!(output, PurposesOutput::Invalid(_)) {
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_md(cli: &Cli, report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;

    let format = match cli.format.as_deref() {
        Some("text") => OutputFormat::Text,
        _ => OutputFormat::Markdown,
    };
    let rendered = render_report(&report, format)?;

    if let Some(out_path) = output {
        write_file(out_path, rendered.as_bytes()).context("write markdown output")?;
    } else {
        print!("{}", rendered);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Code(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::Purpose(exp) => {
            print!("{}", format_purpose(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_codes,
        } => {
            eprint!("{}", format_not_found(&identifier, available_codes));
            std::process::exit(1);
        }
    }
}

fn with_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

fn write_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, data).with_context(|| format!("write file: {}", path))?;
    Ok(())
}
