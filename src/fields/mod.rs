//! Field recognizers for METAR report groups
//!
//! Each recognizer is a stateless classifier over one token (or one
//! space-joined pair of tokens for the lookahead-merged wind and visibility
//! groups). The organisation mirrors the report grammar:
//! - [`station`] - airport identifier and observation time (fixed position)
//! - [`wind`] - wind direction, speed, gusts and direction variation
//! - [`visibility`] - prevailing visibility
//! - [`runway_visual_range`] - RVR per runway
//! - [`weather`] - significant present weather
//! - [`cloud`] - cloud layers
//! - [`temperature`] - temperature and dewpoint
//! - [`altimeter`] - altimeter setting
//! - [`runway_condition`] - runway surface condition groups
//!
//! Every decoded value keeps the exact text it was derived from in its
//! `raw` field.

pub mod altimeter;
pub mod cloud;
pub mod runway_condition;
pub mod runway_visual_range;
pub mod station;
pub mod temperature;
pub mod visibility;
pub mod weather;
pub mod wind;

pub use altimeter::{Altimeter, PressureUnit};
pub use cloud::{CloudCoverage, CloudLayer, CloudType};
pub use runway_condition::RunwayCondition;
pub use runway_visual_range::{RunwayVisualRange, RvrAssessment};
pub use station::{AirportCode, ObservationTime};
pub use temperature::Temperature;
pub use visibility::{Visibility, VisibilityQualifier, VisibilityValue};
pub use weather::{Descriptor, Intensity, Obscuration, OtherPhenomenon, Precipitation, WeatherType};
pub use wind::{SpeedUnit, Wind, WindDirection};

use crate::error::{Field, MetarError, Result};

/// A classifier for one report group
///
/// `try_parse` is total: text that is not this group yields `None`.
/// `parse_required` is the escalating wrapper for callers that treat the
/// group as mandatory.
pub trait Recognizer: Sized {
    /// Field this recognizer decodes
    const FIELD: Field;

    /// Grammar description used in error messages
    const EXPECTED: &'static str;

    /// Attempt to decode `text`, returning `None` when it is not this group
    fn try_parse(text: &str) -> Option<Self>;

    /// Decode `text`, failing with [`MetarError::MalformedField`] on no match
    fn parse_required(text: &str) -> Result<Self> {
        Self::try_parse(text)
            .ok_or_else(|| MetarError::malformed_field(Self::FIELD, Self::EXPECTED, text))
    }
}

/// Parse an optional regex capture as a number
pub(crate) fn capture_number<T: std::str::FromStr>(capture: Option<regex::Match<'_>>) -> Option<T> {
    capture.and_then(|m| m.as_str().parse().ok())
}
