//! Runway surface condition group (`R14L/290161`)
//!
//! Four coded groups follow the runway: deposit type, extent of
//! contamination, depth of deposit and friction. Each is kept raw and
//! resolved against its code table; a code with no entry decodes to `None`.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::Recognizer;
use crate::code_tables::{BrakingConditions, DepositDepth, DepositExtent, DepositType};
use crate::constants::expected;
use crate::error::Field;

static RUNWAY_CONDITION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^R(\d{2}[LRC]?)/(\S)(\S)(\S{2})(\S{2})$")
        .expect("valid runway condition pattern")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunwayCondition {
    pub raw: String,
    /// Runway designator without the leading `R` (e.g. `14L`)
    pub runway: String,
    pub deposit_code: String,
    pub deposit: Option<DepositType>,
    pub extent_code: String,
    pub extent: Option<DepositExtent>,
    pub depth_code: String,
    pub depth: Option<DepositDepth>,
    pub friction_code: String,
    pub friction: Option<BrakingConditions>,
}

impl Recognizer for RunwayCondition {
    const FIELD: Field = Field::RunwayCondition;
    const EXPECTED: &'static str = expected::RUNWAY_CONDITION;

    fn try_parse(text: &str) -> Option<Self> {
        let caps = RUNWAY_CONDITION_PATTERN.captures(text)?;
        let (deposit_code, extent_code) = (&caps[2], &caps[3]);
        let (depth_code, friction_code) = (&caps[4], &caps[5]);

        Some(RunwayCondition {
            raw: text.to_string(),
            runway: caps[1].to_string(),
            deposit: DepositType::from_code(deposit_code),
            extent: DepositExtent::from_code(extent_code),
            depth: DepositDepth::from_code(depth_code),
            friction: BrakingConditions::from_code(friction_code),
            deposit_code: deposit_code.to_string(),
            extent_code: extent_code.to_string(),
            depth_code: depth_code.to_string(),
            friction_code: friction_code.to_string(),
        })
    }
}
