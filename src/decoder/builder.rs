//! Accumulator for one report under construction
//!
//! Singular groups are filled at most once; repeatable groups keep input
//! order. `build` enforces the configured required groups.

use crate::config::DecoderConfig;
use crate::error::{MetarError, Result};
use crate::fields::{
    AirportCode, Altimeter, CloudLayer, ObservationTime, Recognizer, RunwayCondition,
    RunwayVisualRange, Temperature, Visibility, WeatherType, Wind,
};
use crate::models::Report;

#[derive(Debug)]
pub struct ReportBuilder {
    raw: String,
    airport: AirportCode,
    time: ObservationTime,
    auto_observation: bool,
    correction: bool,
    wind: Option<Wind>,
    visibility: Option<Visibility>,
    runway_visual_ranges: Vec<RunwayVisualRange>,
    weather_types: Vec<WeatherType>,
    cloud_layers: Vec<CloudLayer>,
    temperature: Option<Temperature>,
    altimeter: Option<Altimeter>,
    no_significant_change: bool,
    runway_conditions: Vec<RunwayCondition>,
    remarks: Option<String>,
}

impl ReportBuilder {
    pub fn new(
        raw: &str,
        airport: AirportCode,
        time: ObservationTime,
        auto_observation: bool,
        correction: bool,
    ) -> Self {
        Self {
            raw: raw.to_string(),
            airport,
            time,
            auto_observation,
            correction,
            wind: None,
            visibility: None,
            runway_visual_ranges: Vec::new(),
            weather_types: Vec::new(),
            cloud_layers: Vec::new(),
            temperature: None,
            altimeter: None,
            no_significant_change: false,
            runway_conditions: Vec::new(),
            remarks: None,
        }
    }

    pub fn has_wind(&self) -> bool {
        self.wind.is_some()
    }

    pub fn has_visibility(&self) -> bool {
        self.visibility.is_some()
    }

    pub fn has_temperature(&self) -> bool {
        self.temperature.is_some()
    }

    pub fn has_altimeter(&self) -> bool {
        self.altimeter.is_some()
    }

    pub fn no_significant_change(&self) -> bool {
        self.no_significant_change
    }

    pub fn set_wind(&mut self, wind: Wind) {
        self.wind = Some(wind);
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = Some(visibility);
    }

    pub fn set_temperature(&mut self, temperature: Temperature) {
        self.temperature = Some(temperature);
    }

    pub fn set_altimeter(&mut self, altimeter: Altimeter) {
        self.altimeter = Some(altimeter);
    }

    pub fn set_no_significant_change(&mut self) {
        self.no_significant_change = true;
    }

    pub fn set_remarks(&mut self, remarks: String) {
        self.remarks = Some(remarks);
    }

    pub fn push_runway_visual_range(&mut self, rvr: RunwayVisualRange) {
        self.runway_visual_ranges.push(rvr);
    }

    pub fn push_weather_type(&mut self, weather: WeatherType) {
        self.weather_types.push(weather);
    }

    pub fn push_cloud_layer(&mut self, layer: CloudLayer) {
        self.cloud_layers.push(layer);
    }

    pub fn push_runway_condition(&mut self, condition: RunwayCondition) {
        self.runway_conditions.push(condition);
    }

    /// Finish the report, failing if a configured required group is absent
    pub fn build(self, config: &DecoderConfig) -> Result<Report> {
        let wind = required(self.wind, config)?;
        let visibility = required(self.visibility, config)?;
        let temperature = required(self.temperature, config)?;
        let altimeter = required(self.altimeter, config)?;

        Ok(Report {
            raw: self.raw,
            airport: self.airport,
            time: self.time,
            auto_observation: self.auto_observation,
            correction: self.correction,
            wind,
            visibility,
            runway_visual_ranges: self.runway_visual_ranges,
            weather_types: self.weather_types,
            cloud_layers: self.cloud_layers,
            temperature,
            altimeter,
            no_significant_change: self.no_significant_change,
            runway_conditions: self.runway_conditions,
            remarks: self.remarks,
        })
    }
}

/// Pass `value` through, or fail if it is absent and `R` is required
fn required<R: Recognizer>(value: Option<R>, config: &DecoderConfig) -> Result<Option<R>> {
    if value.is_none() && config.is_required(R::FIELD) {
        return Err(MetarError::missing_field(R::FIELD, R::EXPECTED, None));
    }
    Ok(value)
}
