//! Significant present weather group
//!
//! Up to five code groups concatenated in a fixed order: intensity or
//! proximity, descriptor, precipitation, obscuration, other phenomenon.
//! Every present group must come from its own code list.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::Recognizer;
use crate::code_tables::{lookup, reverse_lookup};
use crate::constants::expected;
use crate::error::Field;

static WEATHER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(-|\+|VC)?",
        r"(MI|BC|PR|DR|BL|SH|TS|FZ)?",
        r"(DZ|RA|SN|SG|IC|PE|GR|GS|UP)?",
        r"(BR|FG|FU|VA|DU|SA|HZ|PY)?",
        r"(PO|SQ|FC|SS|DS)?$",
    ))
    .expect("valid weather pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intensity {
    Light,
    Heavy,
    InTheVicinity,
}

static INTENSITIES: &[(&str, Intensity)] = &[
    ("-", Intensity::Light),
    ("+", Intensity::Heavy),
    ("VC", Intensity::InTheVicinity),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Descriptor {
    Shallow,
    Patches,
    Partial,
    LowDrifting,
    Blowing,
    Showers,
    Thunderstorm,
    Freezing,
}

static DESCRIPTORS: &[(&str, Descriptor)] = &[
    ("MI", Descriptor::Shallow),
    ("BC", Descriptor::Patches),
    ("PR", Descriptor::Partial),
    ("DR", Descriptor::LowDrifting),
    ("BL", Descriptor::Blowing),
    ("SH", Descriptor::Showers),
    ("TS", Descriptor::Thunderstorm),
    ("FZ", Descriptor::Freezing),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Precipitation {
    Drizzle,
    Rain,
    Snow,
    SnowGrains,
    IceCrystals,
    IcePellets,
    Hail,
    SmallHail,
    Unknown,
}

static PRECIPITATION: &[(&str, Precipitation)] = &[
    ("DZ", Precipitation::Drizzle),
    ("RA", Precipitation::Rain),
    ("SN", Precipitation::Snow),
    ("SG", Precipitation::SnowGrains),
    ("IC", Precipitation::IceCrystals),
    ("PE", Precipitation::IcePellets),
    ("GR", Precipitation::Hail),
    ("GS", Precipitation::SmallHail),
    ("UP", Precipitation::Unknown),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Obscuration {
    Mist,
    Fog,
    Smoke,
    VolcanicAsh,
    Dust,
    Sand,
    Haze,
    Spray,
}

static OBSCURATIONS: &[(&str, Obscuration)] = &[
    ("BR", Obscuration::Mist),
    ("FG", Obscuration::Fog),
    ("FU", Obscuration::Smoke),
    ("VA", Obscuration::VolcanicAsh),
    ("DU", Obscuration::Dust),
    ("SA", Obscuration::Sand),
    ("HZ", Obscuration::Haze),
    ("PY", Obscuration::Spray),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OtherPhenomenon {
    DustWhirls,
    Squalls,
    FunnelCloud,
    Sandstorm,
    Duststorm,
}

static OTHER_PHENOMENA: &[(&str, OtherPhenomenon)] = &[
    ("PO", OtherPhenomenon::DustWhirls),
    ("SQ", OtherPhenomenon::Squalls),
    ("FC", OtherPhenomenon::FunnelCloud),
    ("SS", OtherPhenomenon::Sandstorm),
    ("DS", OtherPhenomenon::Duststorm),
];

impl Intensity {
    pub fn code(self) -> &'static str {
        reverse_lookup(INTENSITIES, &self).unwrap_or_default()
    }

    pub fn description(self) -> &'static str {
        match self {
            Intensity::Light => "light",
            Intensity::Heavy => "heavy",
            Intensity::InTheVicinity => "in the vicinity",
        }
    }
}

impl Descriptor {
    pub fn code(self) -> &'static str {
        reverse_lookup(DESCRIPTORS, &self).unwrap_or_default()
    }

    pub fn description(self) -> &'static str {
        match self {
            Descriptor::Shallow => "shallow",
            Descriptor::Patches => "patches",
            Descriptor::Partial => "partial",
            Descriptor::LowDrifting => "low drifting",
            Descriptor::Blowing => "blowing",
            Descriptor::Showers => "showers",
            Descriptor::Thunderstorm => "thunderstorm",
            Descriptor::Freezing => "freezing",
        }
    }
}

impl Precipitation {
    pub fn code(self) -> &'static str {
        reverse_lookup(PRECIPITATION, &self).unwrap_or_default()
    }

    pub fn description(self) -> &'static str {
        match self {
            Precipitation::Drizzle => "drizzle",
            Precipitation::Rain => "rain",
            Precipitation::Snow => "snow",
            Precipitation::SnowGrains => "snow grains",
            Precipitation::IceCrystals => "ice crystals",
            Precipitation::IcePellets => "ice pellets",
            Precipitation::Hail => "hail",
            Precipitation::SmallHail => "small hail",
            Precipitation::Unknown => "unknown precipitation",
        }
    }
}

impl Obscuration {
    pub fn code(self) -> &'static str {
        reverse_lookup(OBSCURATIONS, &self).unwrap_or_default()
    }

    pub fn description(self) -> &'static str {
        match self {
            Obscuration::Mist => "mist",
            Obscuration::Fog => "fog",
            Obscuration::Smoke => "smoke",
            Obscuration::VolcanicAsh => "volcanic ash",
            Obscuration::Dust => "widespread dust",
            Obscuration::Sand => "sand",
            Obscuration::Haze => "haze",
            Obscuration::Spray => "spray",
        }
    }
}

impl OtherPhenomenon {
    pub fn code(self) -> &'static str {
        reverse_lookup(OTHER_PHENOMENA, &self).unwrap_or_default()
    }

    pub fn description(self) -> &'static str {
        match self {
            OtherPhenomenon::DustWhirls => "dust whirls",
            OtherPhenomenon::Squalls => "squalls",
            OtherPhenomenon::FunnelCloud => "funnel cloud",
            OtherPhenomenon::Sandstorm => "sandstorm",
            OtherPhenomenon::Duststorm => "duststorm",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherType {
    pub raw: String,
    pub intensity_or_proximity: Option<Intensity>,
    pub descriptor: Option<Descriptor>,
    pub precipitation: Option<Precipitation>,
    pub obscuration: Option<Obscuration>,
    pub other: Option<OtherPhenomenon>,
}

impl Recognizer for WeatherType {
    const FIELD: Field = Field::WeatherType;
    const EXPECTED: &'static str = expected::WEATHER_TYPE;

    /// A lone intensity or proximity code (`-`, `+`, `VC`) is accepted as a
    /// weather group with no phenomenon.
    fn try_parse(text: &str) -> Option<Self> {
        // Every group is optional, so the empty string would match
        if text.is_empty() {
            return None;
        }
        let caps = WEATHER_PATTERN.captures(text)?;
        let group = |index: usize| caps.get(index).map(|m| m.as_str());

        Some(WeatherType {
            raw: text.to_string(),
            intensity_or_proximity: group(1).and_then(|code| lookup(INTENSITIES, code)),
            descriptor: group(2).and_then(|code| lookup(DESCRIPTORS, code)),
            precipitation: group(3).and_then(|code| lookup(PRECIPITATION, code)),
            obscuration: group(4).and_then(|code| lookup(OBSCURATIONS, code)),
            other: group(5).and_then(|code| lookup(OTHER_PHENOMENA, code)),
        })
    }
}

impl WeatherType {
    /// Plain-language reading of the groups present, in report order
    pub fn description(&self) -> String {
        [
            self.intensity_or_proximity.map(Intensity::description),
            self.descriptor.map(Descriptor::description),
            self.precipitation.map(Precipitation::description),
            self.obscuration.map(Obscuration::description),
            self.other.map(OtherPhenomenon::description),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
    }
}
