//! Surface wind group
//!
//! `dddffGggKT` / `dddffMPS`, `VRBffKT`, optionally merged with a following
//! direction-variation group (`23007KT 170V280`). A group made only of
//! slashes means the wind was not reported.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::{Recognizer, capture_number};
use crate::constants::{MAX_WIND_BEARING, VARIABLE_WIND_MARKER, expected};
use crate::error::Field;

static WIND_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(VRB|\d{3})(\d{2})(?:G(\d{2}))?(KT|MPS)(?: (\d{1,3})V(\d{1,3}))?$")
        .expect("valid wind pattern")
});

static NOT_REPORTED_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/+$").expect("valid unreported wind pattern"));

static VARIATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}V\d{1,3}$").expect("valid wind variation pattern"));

/// Direction the wind blows from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindDirection {
    /// True bearing in degrees, 0-360
    Bearing(u16),
    Variable,
}

impl std::fmt::Display for WindDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindDirection::Bearing(degrees) => write!(f, "{:03}", degrees),
            WindDirection::Variable => f.write_str(VARIABLE_WIND_MARKER),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeedUnit {
    Knots,
    MetersPerSecond,
}

impl SpeedUnit {
    pub fn code(self) -> &'static str {
        match self {
            SpeedUnit::Knots => "KT",
            SpeedUnit::MetersPerSecond => "MPS",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "KT" => Some(SpeedUnit::Knots),
            "MPS" => Some(SpeedUnit::MetersPerSecond),
            _ => None,
        }
    }
}

/// Decoded wind group
///
/// All decoded parts are `None` when the group was present but reported as
/// slashes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wind {
    pub raw: String,
    pub direction: Option<WindDirection>,
    pub speed: Option<u32>,
    pub gust: Option<u32>,
    pub unit: Option<SpeedUnit>,
    pub min_variation: Option<u16>,
    pub max_variation: Option<u16>,
}

impl Wind {
    /// True unless the group was all slashes
    pub fn is_reported(&self) -> bool {
        self.direction.is_some()
    }

    /// Whether `token` looks like a standalone direction-variation group
    pub fn is_variation_continuation(token: &str) -> bool {
        VARIATION_PATTERN.is_match(token)
    }

    fn not_reported(text: &str) -> Self {
        Wind {
            raw: text.to_string(),
            direction: None,
            speed: None,
            gust: None,
            unit: None,
            min_variation: None,
            max_variation: None,
        }
    }
}

impl Recognizer for Wind {
    const FIELD: Field = Field::Wind;
    const EXPECTED: &'static str = expected::WIND;

    fn try_parse(text: &str) -> Option<Self> {
        if NOT_REPORTED_PATTERN.is_match(text) {
            return Some(Wind::not_reported(text));
        }

        let caps = WIND_PATTERN.captures(text)?;
        let direction = match &caps[1] {
            VARIABLE_WIND_MARKER => WindDirection::Variable,
            bearing => match bearing.parse::<u16>().ok()? {
                degrees if degrees <= MAX_WIND_BEARING => WindDirection::Bearing(degrees),
                _ => return None,
            },
        };

        Some(Wind {
            raw: text.to_string(),
            direction: Some(direction),
            speed: capture_number(caps.get(2)),
            gust: capture_number(caps.get(3)),
            unit: SpeedUnit::from_code(&caps[4]),
            min_variation: capture_number(caps.get(5)),
            max_variation: capture_number(caps.get(6)),
        })
    }
}
