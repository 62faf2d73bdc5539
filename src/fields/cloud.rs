//! Cloud layer group
//!
//! `CLR`, or a coverage code with an optional height in hundreds of feet and
//! an optional convective cloud type (`BKN029CB`, `VV001`, `NSC`).

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::{Recognizer, capture_number};
use crate::code_tables::{lookup, reverse_lookup};
use crate::constants::{CLEAR_SKY_MARKER, expected};
use crate::error::Field;

static CLOUD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(FEW|SCT|BKN|OVC|VV|NCD|NSC)(\d{2,3})?(ACC|TCU|CB)?$")
        .expect("valid cloud layer pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CloudCoverage {
    Clear,
    Few,
    Scattered,
    Broken,
    Overcast,
    /// Sky obscured; the height is the vertical visibility
    VerticalVisibility,
    NoCloudDetected,
    NoSignificantCloud,
}

static COVERAGES: &[(&str, CloudCoverage)] = &[
    (CLEAR_SKY_MARKER, CloudCoverage::Clear),
    ("FEW", CloudCoverage::Few),
    ("SCT", CloudCoverage::Scattered),
    ("BKN", CloudCoverage::Broken),
    ("OVC", CloudCoverage::Overcast),
    ("VV", CloudCoverage::VerticalVisibility),
    ("NCD", CloudCoverage::NoCloudDetected),
    ("NSC", CloudCoverage::NoSignificantCloud),
];

impl CloudCoverage {
    pub fn code(self) -> &'static str {
        reverse_lookup(COVERAGES, &self).unwrap_or_default()
    }

    pub fn description(self) -> &'static str {
        match self {
            CloudCoverage::Clear => "clear sky",
            CloudCoverage::Few => "few",
            CloudCoverage::Scattered => "scattered",
            CloudCoverage::Broken => "broken",
            CloudCoverage::Overcast => "overcast",
            CloudCoverage::VerticalVisibility => "vertical visibility",
            CloudCoverage::NoCloudDetected => "no cloud detected",
            CloudCoverage::NoSignificantCloud => "no significant cloud",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CloudType {
    AltocumulusCastellanus,
    ToweringCumulus,
    Cumulonimbus,
}

static CLOUD_TYPES: &[(&str, CloudType)] = &[
    ("ACC", CloudType::AltocumulusCastellanus),
    ("TCU", CloudType::ToweringCumulus),
    ("CB", CloudType::Cumulonimbus),
];

impl CloudType {
    pub fn code(self) -> &'static str {
        reverse_lookup(CLOUD_TYPES, &self).unwrap_or_default()
    }

    pub fn description(self) -> &'static str {
        match self {
            CloudType::AltocumulusCastellanus => "altocumulus castellanus",
            CloudType::ToweringCumulus => "towering cumulus",
            CloudType::Cumulonimbus => "cumulonimbus",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudLayer {
    pub raw: String,
    pub coverage: CloudCoverage,
    /// Base height in hundreds of feet
    pub altitude: Option<u32>,
    pub cloud_type: Option<CloudType>,
}

impl Recognizer for CloudLayer {
    const FIELD: Field = Field::CloudLayer;
    const EXPECTED: &'static str = expected::CLOUD_LAYER;

    fn try_parse(text: &str) -> Option<Self> {
        if text == CLEAR_SKY_MARKER {
            return Some(CloudLayer {
                raw: text.to_string(),
                coverage: CloudCoverage::Clear,
                altitude: None,
                cloud_type: None,
            });
        }

        let caps = CLOUD_PATTERN.captures(text)?;
        Some(CloudLayer {
            raw: text.to_string(),
            coverage: lookup(COVERAGES, &caps[1])?,
            altitude: capture_number(caps.get(2)),
            cloud_type: caps.get(3).and_then(|m| lookup(CLOUD_TYPES, m.as_str())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_sky() {
        let layer = CloudLayer::try_parse("CLR").unwrap();
        assert_eq!(layer.coverage, CloudCoverage::Clear);
        assert_eq!(layer.altitude, None);
        assert_eq!(layer.cloud_type, None);
    }

    #[test]
    fn test_layers_with_height() {
        let layer = CloudLayer::try_parse("SCT023").unwrap();
        assert_eq!(layer.coverage, CloudCoverage::Scattered);
        assert_eq!(layer.altitude, Some(23));

        let layer = CloudLayer::try_parse("BKN029CB").unwrap();
        assert_eq!(layer.coverage, CloudCoverage::Broken);
        assert_eq!(layer.altitude, Some(29));
        assert_eq!(layer.cloud_type, Some(CloudType::Cumulonimbus));

        let layer = CloudLayer::try_parse("VV001").unwrap();
        assert_eq!(layer.coverage, CloudCoverage::VerticalVisibility);
        assert_eq!(layer.altitude, Some(1));
    }

    #[test]
    fn test_no_cloud_codes() {
        assert_eq!(
            CloudLayer::try_parse("NSC").unwrap().coverage,
            CloudCoverage::NoSignificantCloud
        );
        assert_eq!(
            CloudLayer::try_parse("NCD").unwrap().coverage,
            CloudCoverage::NoCloudDetected
        );
    }

    #[test]
    fn test_non_cloud_tokens() {
        assert!(CloudLayer::try_parse("CLR010").is_none());
        assert!(CloudLayer::try_parse("SKT023").is_none());
        assert!(CloudLayer::try_parse("BKN0290").is_none());
        assert!(CloudLayer::try_parse("OVC018XX").is_none());
    }

    #[test]
    fn test_coverage_codes() {
        assert_eq!(CloudCoverage::Clear.code(), "CLR");
        assert_eq!(CloudCoverage::VerticalVisibility.code(), "VV");
        assert_eq!(CloudType::ToweringCumulus.code(), "TCU");
    }
}
