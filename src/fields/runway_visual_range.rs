//! Runway visual range group
//!
//! `R<runway>/[M|P]<value>[V<max>|<trend>][FT]`. The trailing single-letter
//! tendency (U, D, N) is accepted but not retained.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::{Recognizer, capture_number};
use crate::constants::expected;
use crate::error::Field;

static RVR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(R\d{2}[LRC]?)/([MP])?(\d{4})(?:V(\d{4})|[UDN])?(FT)?$")
        .expect("valid runway visual range pattern")
});

/// Whether the reported value is below or above the measurable range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RvrAssessment {
    /// `M`: below the minimum the system can assess
    Below,
    /// `P`: above the maximum the system can assess
    Above,
}

impl RvrAssessment {
    pub fn code(self) -> &'static str {
        match self {
            RvrAssessment::Below => "M",
            RvrAssessment::Above => "P",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunwayVisualRange {
    pub raw: String,
    /// Runway designator including its leading `R` (e.g. `R16R`)
    pub runway: String,
    pub assessment: Option<RvrAssessment>,
    pub value: u32,
    pub variable_max: Option<u32>,
    pub in_feet: bool,
}

impl Recognizer for RunwayVisualRange {
    const FIELD: Field = Field::RunwayVisualRange;
    const EXPECTED: &'static str = expected::RUNWAY_VISUAL_RANGE;

    fn try_parse(text: &str) -> Option<Self> {
        let caps = RVR_PATTERN.captures(text)?;

        let assessment = caps.get(2).map(|m| match m.as_str() {
            "M" => RvrAssessment::Below,
            _ => RvrAssessment::Above,
        });

        Some(RunwayVisualRange {
            raw: text.to_string(),
            runway: caps[1].to_string(),
            assessment,
            value: capture_number(caps.get(3))?,
            variable_max: capture_number(caps.get(4)),
            in_feet: caps.get(5).is_some(),
        })
    }
}
