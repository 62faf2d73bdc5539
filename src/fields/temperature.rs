//! Temperature and dewpoint group (`07/M01`)

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::Recognizer;
use crate::constants::expected;
use crate::error::Field;

static TEMPERATURE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(M)?(\d+)/(M)?(\d+)$").expect("valid temperature pattern")
});

/// Whole degrees Celsius
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Temperature {
    pub raw: String,
    pub temperature: i32,
    pub dewpoint: i32,
}

impl Recognizer for Temperature {
    const FIELD: Field = Field::Temperature;
    const EXPECTED: &'static str = expected::TEMPERATURE;

    fn try_parse(text: &str) -> Option<Self> {
        let caps = TEMPERATURE_PATTERN.captures(text)?;
        let signed = |marker: usize, digits: usize| -> Option<i32> {
            let value: i32 = caps[digits].parse().ok()?;
            Some(if caps.get(marker).is_some() { -value } else { value })
        };

        Some(Temperature {
            raw: text.to_string(),
            temperature: signed(1, 2)?,
            dewpoint: signed(3, 4)?,
        })
    }
}
