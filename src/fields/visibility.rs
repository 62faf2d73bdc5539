//! Prevailing visibility group
//!
//! Metric distances (`9999`), `CAVOK`, and statute-mile distances that may be
//! whole, fractional or mixed (`1 1/2SM`, merged from two tokens), with an
//! optional `M`/`P` qualifier and `NDV` suffix.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::{Recognizer, capture_number};
use crate::constants::{CAVOK_MARKER, expected};
use crate::error::Field;

static VISIBILITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:(?P<cavok>CAVOK)",
        r"|(?P<qualifier>[MP])?(?:",
        r"(?P<mixed_whole>\d+) (?P<mixed_num>\d+)/(?P<mixed_den>\d+)(?P<mixed_sm>SM)",
        r"|(?P<num>\d+)/(?P<den>\d+)(?P<fraction_sm>SM)",
        r"|(?P<whole>\d+)(?P<whole_sm>SM)?",
        r"))(?P<ndv>NDV)?$",
    ))
    .expect("valid visibility pattern")
});

static FRACTION_CONTINUATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d/\d+SM$").expect("valid visibility fraction pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisibilityValue {
    /// Ceiling and visibility OK
    Cavok,
    Whole(u32),
    Fraction { numerator: u32, denominator: u32 },
    Mixed { whole: u32, numerator: u32, denominator: u32 },
}

impl std::fmt::Display for VisibilityValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VisibilityValue::Cavok => f.write_str(CAVOK_MARKER),
            VisibilityValue::Whole(value) => write!(f, "{}", value),
            VisibilityValue::Fraction {
                numerator,
                denominator,
            } => write!(f, "{}/{}", numerator, denominator),
            VisibilityValue::Mixed {
                whole,
                numerator,
                denominator,
            } => write!(f, "{} {}/{}", whole, numerator, denominator),
        }
    }
}

/// `M` (less than) or `P` (greater than) prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisibilityQualifier {
    LessThan,
    GreaterThan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visibility {
    pub raw: String,
    pub value: VisibilityValue,
    pub qualifier: Option<VisibilityQualifier>,
    pub in_statute_miles: bool,
    pub no_directional_variation: bool,
}

impl Visibility {
    /// Whether `token` looks like the fractional half of a mixed distance
    pub fn is_fraction_continuation(token: &str) -> bool {
        FRACTION_CONTINUATION_PATTERN.is_match(token)
    }
}

impl Recognizer for Visibility {
    const FIELD: Field = Field::Visibility;
    const EXPECTED: &'static str = expected::VISIBILITY;

    fn try_parse(text: &str) -> Option<Self> {
        let caps = VISIBILITY_PATTERN.captures(text)?;

        let value = if caps.name("cavok").is_some() {
            VisibilityValue::Cavok
        } else if caps.name("mixed_whole").is_some() {
            VisibilityValue::Mixed {
                whole: capture_number(caps.name("mixed_whole"))?,
                numerator: capture_number(caps.name("mixed_num"))?,
                denominator: capture_number(caps.name("mixed_den"))?,
            }
        } else if caps.name("num").is_some() {
            VisibilityValue::Fraction {
                numerator: capture_number(caps.name("num"))?,
                denominator: capture_number(caps.name("den"))?,
            }
        } else {
            VisibilityValue::Whole(capture_number(caps.name("whole"))?)
        };

        let qualifier = caps.name("qualifier").map(|q| match q.as_str() {
            "M" => VisibilityQualifier::LessThan,
            _ => VisibilityQualifier::GreaterThan,
        });

        let in_statute_miles = ["mixed_sm", "fraction_sm", "whole_sm"]
            .iter()
            .any(|name| caps.name(name).is_some());

        Some(Visibility {
            raw: text.to_string(),
            value,
            qualifier,
            in_statute_miles,
            no_directional_variation: caps.name("ndv").is_some(),
        })
    }
}
