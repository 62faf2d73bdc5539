//! Altimeter setting group (`Q1024`, `A3009`)
//!
//! The four digits are kept as reported; no unit conversion is done.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::{Recognizer, capture_number};
use crate::constants::expected;
use crate::error::Field;

static ALTIMETER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([QA])(\d{4})$").expect("valid altimeter pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PressureUnit {
    /// `Q`: hectopascals
    Hectopascals,
    /// `A`: hundredths of inches of mercury
    InchesOfMercury,
}

impl PressureUnit {
    pub fn code(self) -> &'static str {
        match self {
            PressureUnit::Hectopascals => "Q",
            PressureUnit::InchesOfMercury => "A",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Altimeter {
    pub raw: String,
    /// The four reported digits as a number; `Q0998` gives 998. See
    /// [`Altimeter::code`] for the digits as reported.
    pub value: u16,
    pub unit: PressureUnit,
}

impl Altimeter {
    /// The four digits as reported, leading zeros included
    pub fn code(&self) -> &str {
        self.raw.get(1..).unwrap_or_default()
    }
}

impl Recognizer for Altimeter {
    const FIELD: Field = Field::Altimeter;
    const EXPECTED: &'static str = expected::ALTIMETER;

    fn try_parse(text: &str) -> Option<Self> {
        let caps = ALTIMETER_PATTERN.captures(text)?;
        let unit = match &caps[1] {
            "Q" => PressureUnit::Hectopascals,
            _ => PressureUnit::InchesOfMercury,
        };

        Some(Altimeter {
            raw: text.to_string(),
            value: capture_number(caps.get(2))?,
            unit,
        })
    }
}
