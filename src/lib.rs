//! METAR Decoder Library
//!
//! Decodes METAR aviation surface-weather reports into typed, structured
//! records.
//!
//! This library provides tools for:
//! - Recognizing every standard report group (wind, visibility, RVR, present
//!   weather, cloud, temperature, altimeter, runway surface condition)
//! - Assembling a report from its tokens with a fixed, greedy priority order
//! - Configurable required groups for strict or lenient decoding
//! - Line-oriented batch decoding with per-line failures and statistics
//!
//! ## Usage
//!
//! ```rust
//! let report = metar_decoder::decode("EGLL 021250Z 23009KT 9999 SCT023 BKN029 08/06 Q1024")?;
//!
//! assert_eq!(report.airport, "EGLL");
//! assert_eq!(report.cloud_layers.len(), 2);
//! assert_eq!(report.altimeter.map(|a| a.value), Some(1024));
//! # Ok::<(), metar_decoder::MetarError>(())
//! ```

pub mod batch;
pub mod cli;
pub mod code_tables;
pub mod config;
pub mod constants;
pub mod decoder;
pub mod error;
pub mod fields;
pub mod lexer;
pub mod models;

// Re-export commonly used types
pub use batch::{BatchResult, BatchStats, LineFailure, decode_reader};
pub use config::DecoderConfig;
pub use decoder::MetarParser;
pub use error::{Field, MetarError, Result};
pub use fields::{
    AirportCode, Altimeter, CloudCoverage, CloudLayer, CloudType, ObservationTime, PressureUnit,
    Recognizer, RunwayCondition, RunwayVisualRange, RvrAssessment, SpeedUnit, Temperature,
    Visibility, VisibilityQualifier, VisibilityValue, WeatherType, Wind, WindDirection,
};
pub use models::Report;

/// Decode one report with the default (strict) configuration
pub fn decode(raw: &str) -> Result<Report> {
    MetarParser::default().parse(raw)
}
