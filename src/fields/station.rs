//! Fixed-position groups: airport identifier and observation time

use chrono::{DateTime, TimeZone, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::{Recognizer, capture_number};
use crate::constants::expected;
use crate::error::Field;

static AIRPORT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z0-9]{2,3}$").expect("valid airport pattern"));

static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-3]\d)([0-2]\d)([0-5]\d)Z$").expect("valid observation time pattern")
});

/// ICAO (or national) station identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AirportCode(String);

impl AirportCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Recognizer for AirportCode {
    const FIELD: Field = Field::Airport;
    const EXPECTED: &'static str = expected::AIRPORT;

    fn try_parse(text: &str) -> Option<Self> {
        AIRPORT_PATTERN
            .is_match(text)
            .then(|| AirportCode(text.to_string()))
    }
}

impl PartialEq<&str> for AirportCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for AirportCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Day of month and UTC time of the observation (`DDHHMMZ`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObservationTime {
    pub raw: String,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
}

impl ObservationTime {
    /// Resolve against a year and month supplied by the caller
    ///
    /// Reports carry only the day of month; returns `None` when the day does
    /// not exist in that month or the hour is out of range.
    pub fn to_datetime(&self, year: i32, month: u32) -> Option<DateTime<Utc>> {
        Utc.with_ymd_and_hms(
            year,
            month,
            self.day.into(),
            self.hour.into(),
            self.minute.into(),
            0,
        )
        .single()
    }
}

impl Recognizer for ObservationTime {
    const FIELD: Field = Field::ObservationTime;
    const EXPECTED: &'static str = expected::OBSERVATION_TIME;

    fn try_parse(text: &str) -> Option<Self> {
        let caps = TIME_PATTERN.captures(text)?;
        Some(ObservationTime {
            raw: text.to_string(),
            day: capture_number(caps.get(1))?,
            hour: capture_number(caps.get(2))?,
            minute: capture_number(caps.get(3))?,
        })
    }
}

impl std::fmt::Display for ObservationTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
