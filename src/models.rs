//! Decoded report structure.
//!
//! A `Report` owns every leaf group decoded from one bulletin. It is built
//! once by the decoder and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::decoder::MetarParser;
use crate::error::MetarError;
use crate::fields::{
    AirportCode, Altimeter, CloudLayer, ObservationTime, RunwayCondition, RunwayVisualRange,
    Temperature, Visibility, WeatherType, Wind,
};

/// One fully decoded METAR report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Verbatim input
    pub raw: String,
    pub airport: AirportCode,
    pub time: ObservationTime,
    pub auto_observation: bool,
    pub correction: bool,
    pub wind: Option<Wind>,
    pub visibility: Option<Visibility>,
    pub runway_visual_ranges: Vec<RunwayVisualRange>,
    pub weather_types: Vec<WeatherType>,
    pub cloud_layers: Vec<CloudLayer>,
    pub temperature: Option<Temperature>,
    pub altimeter: Option<Altimeter>,
    pub no_significant_change: bool,
    pub runway_conditions: Vec<RunwayCondition>,
    /// Everything after `RMK`, space-joined
    pub remarks: Option<String>,
}

impl FromStr for Report {
    type Err = MetarError;

    /// Decode with the default (strict) configuration
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetarParser::default().parse(s)
    }
}
