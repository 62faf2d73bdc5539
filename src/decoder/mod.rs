//! METAR report assembler
//!
//! Drives the field recognizers over a report's token stream:
//! - [`MetarParser`] - fixed prefix handling and the classification loop
//! - [`builder`] - accumulation of singular and repeatable groups, and the
//!   final required-field check
//!
//! Classification is greedy and never backtracks. After the airport, time
//! and optional `AUTO`/`COR` flags, each token is offered in turn to wind,
//! visibility, RVR, weather, cloud, temperature, altimeter, `NOSIG`, runway
//! condition and finally `RMK`; the first that accepts it wins.
//!
//! ## Usage
//!
//! ```rust
//! use metar_decoder::{DecoderConfig, MetarParser};
//!
//! let parser = MetarParser::new(DecoderConfig::default());
//! let report = parser
//!     .parse("KLAX 021253Z 10003KT 10SM CLR 07/M01 A3009 RMK AO2 SLP186 T00721011")
//!     .unwrap();
//!
//! assert_eq!(report.airport, "KLAX");
//! assert_eq!(report.remarks.as_deref(), Some("AO2 SLP186 T00721011"));
//! ```

pub mod builder;

#[cfg(test)]
mod tests;

use tracing::{debug, trace};

use self::builder::ReportBuilder;
use crate::config::DecoderConfig;
use crate::constants::{AUTO_MARKER, CORRECTION_MARKER, NO_SIGNIFICANT_CHANGE_MARKER, REMARKS_MARKER};
use crate::error::{MetarError, Result};
use crate::fields::{
    AirportCode, Altimeter, CloudLayer, ObservationTime, Recognizer, RunwayCondition,
    RunwayVisualRange, Temperature, Visibility, WeatherType, Wind,
};
use crate::lexer::TokenStream;
use crate::models::Report;

/// Outcome of offering one token to the recognizer chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Classified {
    Field,
    Remarks,
}

/// Decoder for single METAR reports
///
/// Holds no per-report state, so one parser can decode any number of
/// reports, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct MetarParser {
    config: DecoderConfig,
}

impl MetarParser {
    /// Create a parser with the given required-field configuration
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode one report
    ///
    /// Either every token is accounted for and the report is returned, or
    /// the first problem is returned as an error; there is no partial result.
    pub fn parse(&self, raw: &str) -> Result<Report> {
        let mut tokens = TokenStream::new(raw);

        let airport = require_fixed::<AirportCode>(&mut tokens)?;
        let time = require_fixed::<ObservationTime>(&mut tokens)?;
        let auto_observation = tokens.next_if_eq(AUTO_MARKER);
        let correction = tokens.next_if_eq(CORRECTION_MARKER);

        let mut builder = ReportBuilder::new(raw, airport, time, auto_observation, correction);

        while let Some(token) = tokens.next() {
            if classify(&mut builder, token, &mut tokens)? == Classified::Remarks {
                break;
            }
        }

        let report = builder.build(&self.config)?;
        debug!(
            "Decoded report for {} at {}: {} weather, {} cloud, {} RVR, {} runway conditions",
            report.airport,
            report.time,
            report.weather_types.len(),
            report.cloud_layers.len(),
            report.runway_visual_ranges.len(),
            report.runway_conditions.len()
        );
        Ok(report)
    }
}

/// Consume the next token as a mandatory fixed-position group
fn require_fixed<R: Recognizer>(tokens: &mut TokenStream<'_>) -> Result<R> {
    let token = tokens.peek();
    let value = token
        .and_then(R::try_parse)
        .ok_or_else(|| MetarError::missing_field(R::FIELD, R::EXPECTED, token))?;
    tokens.next();
    Ok(value)
}

/// Offer `token` to each recognizer in priority order
fn classify<'a>(
    builder: &mut ReportBuilder,
    token: &'a str,
    tokens: &mut TokenStream<'a>,
) -> Result<Classified> {
    if !builder.has_wind() {
        if let Some(wind) = recognize_merged::<Wind>(token, tokens, Wind::is_variation_continuation) {
            trace!("wind: {}", wind.raw);
            builder.set_wind(wind);
            return Ok(Classified::Field);
        }
    }

    if !builder.has_visibility() {
        if let Some(visibility) =
            recognize_merged::<Visibility>(token, tokens, Visibility::is_fraction_continuation)
        {
            trace!("visibility: {}", visibility.raw);
            builder.set_visibility(visibility);
            return Ok(Classified::Field);
        }
    }

    if let Some(rvr) = RunwayVisualRange::try_parse(token) {
        trace!("runway visual range: {}", token);
        builder.push_runway_visual_range(rvr);
        return Ok(Classified::Field);
    }

    if let Some(weather) = WeatherType::try_parse(token) {
        trace!("weather: {}", token);
        builder.push_weather_type(weather);
        return Ok(Classified::Field);
    }

    if let Some(layer) = CloudLayer::try_parse(token) {
        trace!("cloud layer: {}", token);
        builder.push_cloud_layer(layer);
        return Ok(Classified::Field);
    }

    if !builder.has_temperature() {
        if let Some(temperature) = Temperature::try_parse(token) {
            trace!("temperature: {}", token);
            builder.set_temperature(temperature);
            return Ok(Classified::Field);
        }
    }

    if !builder.has_altimeter() {
        if let Some(altimeter) = Altimeter::try_parse(token) {
            trace!("altimeter: {}", token);
            builder.set_altimeter(altimeter);
            return Ok(Classified::Field);
        }
    }

    if !builder.no_significant_change() && token == NO_SIGNIFICANT_CHANGE_MARKER {
        builder.set_no_significant_change();
        return Ok(Classified::Field);
    }

    if let Some(condition) = RunwayCondition::try_parse(token) {
        trace!("runway condition: {}", token);
        builder.push_runway_condition(condition);
        return Ok(Classified::Field);
    }

    if token == REMARKS_MARKER {
        builder.set_remarks(tokens.drain_rest().join(" "));
        return Ok(Classified::Remarks);
    }

    Err(MetarError::unrecognized_token(token, tokens.remaining()))
}

/// Try `token` merged with a continuation token, then `token` alone
///
/// The continuation is consumed only when the merged text matches.
fn recognize_merged<'a, R: Recognizer>(
    token: &'a str,
    tokens: &mut TokenStream<'a>,
    is_continuation: fn(&str) -> bool,
) -> Option<R> {
    if let Some(next) = tokens.peek().filter(|next| is_continuation(next)) {
        if let Some(value) = R::try_parse(&format!("{} {}", token, next)) {
            tokens.next();
            return Some(value);
        }
    }
    R::try_parse(token)
}
