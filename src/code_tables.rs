//! Runway surface condition code tables
//!
//! Static, read-only tables translating the four coded groups of a runway
//! surface condition (deposit type, extent of contamination, depth of
//! deposit, friction/braking action). A code with no table entry decodes to
//! `None` ("not reported"); it is never an error.

use serde::{Deserialize, Serialize};

/// Find the entry for `code` in a static code table
pub fn lookup<K: PartialEq + ?Sized, T: Copy>(table: &[(&K, T)], code: &K) -> Option<T> {
    table
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, value)| *value)
}

/// Find the code for `value` in a static code table
pub fn reverse_lookup<K: ?Sized, T: PartialEq>(
    table: &'static [(&'static K, T)],
    value: &T,
) -> Option<&'static K> {
    table
        .iter()
        .find(|(_, entry)| entry == value)
        .map(|(key, _)| *key)
}

// =============================================================================
// Deposit Type
// =============================================================================

/// Type of deposit on the runway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepositType {
    ClearAndDry,
    Damp,
    WetOrWaterPatches,
    RimeOrFrost,
    DrySnow,
    WetSnow,
    Slush,
    Ice,
    CompactedSnow,
    FrozenRuts,
}

pub static DEPOSIT_TYPES: &[(&str, DepositType)] = &[
    ("0", DepositType::ClearAndDry),
    ("1", DepositType::Damp),
    ("2", DepositType::WetOrWaterPatches),
    ("3", DepositType::RimeOrFrost),
    ("4", DepositType::DrySnow),
    ("5", DepositType::WetSnow),
    ("6", DepositType::Slush),
    ("7", DepositType::Ice),
    ("8", DepositType::CompactedSnow),
    ("9", DepositType::FrozenRuts),
];

impl DepositType {
    pub fn from_code(code: &str) -> Option<Self> {
        lookup(DEPOSIT_TYPES, code)
    }

    pub fn description(self) -> &'static str {
        match self {
            DepositType::ClearAndDry => "clear and dry",
            DepositType::Damp => "damp",
            DepositType::WetOrWaterPatches => "wet or water patches",
            DepositType::RimeOrFrost => "rime or frost covered",
            DepositType::DrySnow => "dry snow",
            DepositType::WetSnow => "wet snow",
            DepositType::Slush => "slush",
            DepositType::Ice => "ice",
            DepositType::CompactedSnow => "compacted or rolled snow",
            DepositType::FrozenRuts => "frozen ruts or ridges",
        }
    }
}

// =============================================================================
// Extent of Contamination
// =============================================================================

/// Fraction of the runway covered by the deposit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepositExtent {
    UpToTenPercent,
    ElevenToTwentyFivePercent,
    TwentySixToFiftyPercent,
    FiftyOneToHundredPercent,
}

pub static DEPOSIT_EXTENTS: &[(&str, DepositExtent)] = &[
    ("1", DepositExtent::UpToTenPercent),
    ("2", DepositExtent::ElevenToTwentyFivePercent),
    ("5", DepositExtent::TwentySixToFiftyPercent),
    ("9", DepositExtent::FiftyOneToHundredPercent),
];

impl DepositExtent {
    pub fn from_code(code: &str) -> Option<Self> {
        lookup(DEPOSIT_EXTENTS, code)
    }

    pub fn description(self) -> &'static str {
        match self {
            DepositExtent::UpToTenPercent => "10% or less",
            DepositExtent::ElevenToTwentyFivePercent => "11% to 25%",
            DepositExtent::TwentySixToFiftyPercent => "26% to 50%",
            DepositExtent::FiftyOneToHundredPercent => "51% to 100%",
        }
    }
}

// =============================================================================
// Depth of Deposit
// =============================================================================

/// Depth of the deposit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepositDepth {
    LessThanOneMillimetre,
    Millimetres(u8),
    Centimetres(u8),
    /// 40 cm or more
    FortyCentimetresOrMore,
    /// Runway not operational due to the deposit
    NotOperational,
}

/// Codes outside the 01-90 millimetre range
pub static DEPOSIT_DEPTHS: &[(&str, DepositDepth)] = &[
    ("00", DepositDepth::LessThanOneMillimetre),
    ("92", DepositDepth::Centimetres(10)),
    ("93", DepositDepth::Centimetres(15)),
    ("94", DepositDepth::Centimetres(20)),
    ("95", DepositDepth::Centimetres(25)),
    ("96", DepositDepth::Centimetres(30)),
    ("97", DepositDepth::Centimetres(35)),
    ("98", DepositDepth::FortyCentimetresOrMore),
    ("99", DepositDepth::NotOperational),
];

impl DepositDepth {
    pub fn from_code(code: &str) -> Option<Self> {
        lookup(DEPOSIT_DEPTHS, code).or_else(|| match two_digit(code)? {
            mm @ 1..=90 => Some(DepositDepth::Millimetres(mm)),
            _ => None,
        })
    }
}

impl std::fmt::Display for DepositDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DepositDepth::LessThanOneMillimetre => write!(f, "less than 1 mm"),
            DepositDepth::Millimetres(mm) => write!(f, "{} mm", mm),
            DepositDepth::Centimetres(cm) => write!(f, "{} cm", cm),
            DepositDepth::FortyCentimetresOrMore => write!(f, "40 cm or more"),
            DepositDepth::NotOperational => write!(f, "runway not operational"),
        }
    }
}

// =============================================================================
// Friction / Braking Action
// =============================================================================

/// Measured friction coefficient or estimated braking action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrakingConditions {
    /// Measured coefficient in hundredths (e.g. 61 = 0.61)
    FrictionCoefficient(u8),
    Poor,
    MediumToPoor,
    Medium,
    MediumToGood,
    Good,
    /// Measurement unreliable
    Unreliable,
}

/// Codes outside the 01-90 coefficient range
pub static BRAKING_ACTIONS: &[(&str, BrakingConditions)] = &[
    ("91", BrakingConditions::Poor),
    ("92", BrakingConditions::MediumToPoor),
    ("93", BrakingConditions::Medium),
    ("94", BrakingConditions::MediumToGood),
    ("95", BrakingConditions::Good),
    ("99", BrakingConditions::Unreliable),
];

impl BrakingConditions {
    pub fn from_code(code: &str) -> Option<Self> {
        lookup(BRAKING_ACTIONS, code).or_else(|| match two_digit(code)? {
            hundredths @ 1..=90 => Some(BrakingConditions::FrictionCoefficient(hundredths)),
            _ => None,
        })
    }
}

impl std::fmt::Display for BrakingConditions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrakingConditions::FrictionCoefficient(c) => write!(f, "friction coefficient 0.{:02}", c),
            BrakingConditions::Poor => write!(f, "braking action poor"),
            BrakingConditions::MediumToPoor => write!(f, "braking action medium to poor"),
            BrakingConditions::Medium => write!(f, "braking action medium"),
            BrakingConditions::MediumToGood => write!(f, "braking action medium to good"),
            BrakingConditions::Good => write!(f, "braking action good"),
            BrakingConditions::Unreliable => write!(f, "unreliable"),
        }
    }
}

/// Parse an exactly-two-digit code
fn two_digit(code: &str) -> Option<u8> {
    if code.len() == 2 && code.bytes().all(|b| b.is_ascii_digit()) {
        code.parse().ok()
    } else {
        None
    }
}
