//! Command-line harness for the decoder
//!
//! Reads one report per line from a file, stdin or a single `--report`
//! argument, prints each decoded report and a summary, and hands the batch
//! statistics back to `main` for the exit code.

use std::fs::File;
use std::io::{self, BufReader, Cursor};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::*;
use tracing::debug;

use crate::batch::{BatchResult, BatchStats, decode_reader};
use crate::config::DecoderConfig;
use crate::constants::STATUTE_MILE_SUFFIX;
use crate::decoder::MetarParser;
use crate::fields::{
    CloudLayer, PressureUnit, RunwayVisualRange, RvrAssessment, Visibility, VisibilityQualifier,
    VisibilityValue, Wind,
};
use crate::models::Report;

/// Decode METAR surface weather reports
#[derive(Debug, Clone, Parser)]
#[command(
    name = "metar-decode",
    version,
    about = "Decode METAR aviation surface weather reports",
    long_about = "Decodes METAR reports, one per line, from a file or standard input \
                  (or a single report given with --report) and prints the decoded \
                  groups. Exits with a non-zero status if any report fails to decode."
)]
pub struct Args {
    /// File with one report per line; standard input when omitted
    #[arg(value_name = "FILE", conflicts_with = "report")]
    pub input: Option<PathBuf>,

    /// Decode this single report instead of reading lines
    #[arg(short = 'r', long = "report", value_name = "TEXT")]
    pub report: Option<String>,

    /// JSON file with the required-field configuration
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Require none of wind, visibility, temperature or altimeter
    #[arg(long = "lenient", conflicts_with = "config")]
    pub lenient: bool,

    /// Output format for decoded reports
    #[arg(long = "format", value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON document with reports, failures and statistics
    Json,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build the decoder configuration from `--lenient` or `--config`
    pub fn decoder_config(&self) -> Result<DecoderConfig> {
        if self.lenient {
            return Ok(DecoderConfig::lenient());
        }
        match &self.config {
            Some(path) => load_config(path),
            None => Ok(DecoderConfig::default()),
        }
    }
}

/// Load a decoder configuration from a JSON file
pub fn load_config(path: &Path) -> Result<DecoderConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Invalid decoder configuration in {}", path.display()))
}

/// Decode the requested input and print the results
pub fn run(args: Args) -> Result<BatchStats> {
    setup_logging(&args)?;

    let config = args.decoder_config()?;
    debug!("Decoder configuration: {:?}", config);
    let parser = MetarParser::new(config);

    let result = match (&args.report, &args.input) {
        (Some(report), _) => decode_reader(&parser, Cursor::new(report.as_bytes())),
        (None, Some(path)) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file {}", path.display()))?;
            decode_reader(&parser, BufReader::new(file))
        }
        (None, None) => decode_reader(&parser, io::stdin().lock()),
    }
    .context("Failed to read reports")?;

    match args.format {
        OutputFormat::Human => print_human(&result),
        OutputFormat::Json => print_json(&result)?,
    }

    Ok(result.stats)
}

/// Set up logging on stderr, honouring `RUST_LOG` when set
///
/// Quiet mode drops the uptime timer for compact single-line events.
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("metar_decoder={}", log_level)));

    let compact = args.quiet.then(|| {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
    });
    let timed = (!args.quiet).then(|| {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_timer(fmt::time::uptime())
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(compact)
        .with(timed)
        .try_init()
        .context("Failed to initialize logging")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

fn print_human(result: &BatchResult) {
    for report in &result.reports {
        println!(
            "{} {}",
            report.airport.as_str().bright_cyan().bold(),
            report.time.raw.bright_white()
        );
        for (label, value) in describe_report(report) {
            println!("  {:<18} {}", format!("{}:", label).bright_black(), value);
        }
        println!();
    }

    for failure in &result.failures {
        println!(
            "{} {}",
            format!("line {}:", failure.line).red().bold(),
            failure.error
        );
        println!("  {}", failure.raw.bright_black());
    }

    let stats = &result.stats;
    let summary = format!(
        "Decoded {}/{} reports ({:.1}%)",
        stats.reports_decoded,
        stats.total_reports,
        stats.success_rate()
    );
    if stats.is_clean() {
        println!("{}", summary.green().bold());
    } else {
        println!("{}", summary.yellow().bold());
    }
}

fn print_json(result: &BatchResult) -> Result<()> {
    let document = serde_json::json!({
        "reports": result.reports,
        "failures": result.failures.iter().map(|failure| {
            serde_json::json!({
                "line": failure.line,
                "raw": failure.raw,
                "field": failure.error.field(),
                "token": failure.error.token(),
                "error": failure.error.to_string(),
            })
        }).collect::<Vec<_>>(),
        "stats": {
            "total_reports": result.stats.total_reports,
            "reports_decoded": result.stats.reports_decoded,
            "reports_failed": result.stats.reports_failed,
            "success_rate": result.stats.success_rate(),
        },
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&document).context("Failed to serialize reports")?
    );
    Ok(())
}

/// Label/value lines for the human-readable listing
pub fn describe_report(report: &Report) -> Vec<(&'static str, String)> {
    let mut lines = Vec::new();

    let mut flags = Vec::new();
    if report.auto_observation {
        flags.push("automated");
    }
    if report.correction {
        flags.push("corrected");
    }
    if report.no_significant_change {
        flags.push("no significant change expected");
    }
    if !flags.is_empty() {
        lines.push(("Flags", flags.join(", ")));
    }

    if let Some(wind) = &report.wind {
        lines.push(("Wind", describe_wind(wind)));
    }
    if let Some(visibility) = &report.visibility {
        lines.push(("Visibility", describe_visibility(visibility)));
    }
    for rvr in &report.runway_visual_ranges {
        lines.push(("Runway visual range", describe_rvr(rvr)));
    }
    for weather in &report.weather_types {
        lines.push(("Weather", weather.description()));
    }
    for layer in &report.cloud_layers {
        lines.push(("Cloud", describe_cloud(layer)));
    }
    if let Some(temperature) = &report.temperature {
        lines.push((
            "Temperature",
            format!(
                "{}°C, dewpoint {}°C",
                temperature.temperature, temperature.dewpoint
            ),
        ));
    }
    if let Some(altimeter) = &report.altimeter {
        let value = match altimeter.unit {
            PressureUnit::Hectopascals => format!("{} hPa", altimeter.value),
            PressureUnit::InchesOfMercury => {
                format!("{:.2} inHg", f64::from(altimeter.value) / 100.0)
            }
        };
        lines.push(("Altimeter", value));
    }
    for condition in &report.runway_conditions {
        let parts = [
            condition.deposit.map(|d| d.description().to_string()),
            condition.extent.map(|e| e.description().to_string()),
            condition.depth.map(|d| d.to_string()),
            condition.friction.map(|f| f.to_string()),
        ];
        let known: Vec<String> = parts.into_iter().flatten().collect();
        let detail = if known.is_empty() {
            "not reported".to_string()
        } else {
            known.join(", ")
        };
        lines.push(("Runway condition", format!("{}: {}", condition.runway, detail)));
    }
    if let Some(remarks) = &report.remarks {
        lines.push(("Remarks", remarks.clone()));
    }

    lines
}

fn describe_wind(wind: &Wind) -> String {
    let (Some(direction), Some(speed), Some(unit)) = (wind.direction, wind.speed, wind.unit) else {
        return "not reported".to_string();
    };

    let mut text = format!("{} at {} {}", direction, speed, unit.code());
    if let Some(gust) = wind.gust {
        text.push_str(&format!(", gusting {}", gust));
    }
    if let (Some(min), Some(max)) = (wind.min_variation, wind.max_variation) {
        text.push_str(&format!(", varying {:03}-{:03}", min, max));
    }
    text
}

fn describe_visibility(visibility: &Visibility) -> String {
    if visibility.value == VisibilityValue::Cavok {
        return "ceiling and visibility OK".to_string();
    }

    let qualifier = match visibility.qualifier {
        Some(VisibilityQualifier::LessThan) => "less than ",
        Some(VisibilityQualifier::GreaterThan) => "more than ",
        None => "",
    };
    let unit = if visibility.in_statute_miles {
        STATUTE_MILE_SUFFIX
    } else {
        "m"
    };
    let mut text = format!("{}{} {}", qualifier, visibility.value, unit);
    if visibility.no_directional_variation {
        text.push_str(" (no directional variation)");
    }
    text
}

fn describe_rvr(rvr: &RunwayVisualRange) -> String {
    let assessment = match rvr.assessment {
        Some(RvrAssessment::Below) => "below ",
        Some(RvrAssessment::Above) => "above ",
        None => "",
    };
    let unit = if rvr.in_feet { "ft" } else { "m" };
    match rvr.variable_max {
        Some(max) => format!("{}: {}{}-{} {}", rvr.runway, assessment, rvr.value, max, unit),
        None => format!("{}: {}{} {}", rvr.runway, assessment, rvr.value, unit),
    }
}

fn describe_cloud(layer: &CloudLayer) -> String {
    let mut text = layer.coverage.description().to_string();
    if let Some(altitude) = layer.altitude {
        text.push_str(&format!(" at {} ft", altitude * 100));
    }
    if let Some(cloud_type) = layer.cloud_type {
        text.push_str(&format!(" ({})", cloud_type.description()));
    }
    text
}
