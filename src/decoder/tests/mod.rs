//! Test utilities and report fixtures for the report assembler
//!
//! Sample bulletins are real-world reports covering the groups the assembler
//! has to classify.

use crate::config::DecoderConfig;
use crate::decoder::MetarParser;
use crate::error::Result;
use crate::models::Report;

mod priority_tests;
mod scenario_tests;

/// CAVOK, wind in metres per second, NOSIG and remarks
pub const CAVOK_REPORT: &str = "ZMUB 021300Z 01002MPS CAVOK M31/M35 Q1036 NOSIG RMK QFE667.5 70";

/// Metric visibility and hectopascals
pub const UK_REPORT: &str = "EGLL 021250Z 23009KT 9999 SCT023 BKN029 08/06 Q1024";

/// Statute miles, clear sky and inches of mercury
pub const US_REPORT: &str = "KLAX 021253Z 10003KT 10SM CLR 07/M01 A3009 RMK AO2 SLP186 T00721011";

/// Automated report with varying RVR and vertical visibility
pub const VARYING_RVR_REPORT: &str =
    "KEUG 021248Z AUTO 23003KT 1/2SM R16R/1800V3000FT FZFG VV001 M05/M06 A3027 RMK AO2 PNO $";

/// Assessed RVR above the measurable range
pub const ASSESSED_RVR_REPORT: &str =
    "PAKU 021245Z 06016KT 3SM R06/P6000FT BR BKN017 M20/M22 A2955";

/// Trailing runway surface condition groups
pub const RUNWAY_CONDITION_REPORT: &str =
    "EYSA 021245Z 23009KT 9999 FEW012 SCT038 BKN048 03/01 Q1010 R14L/290161 R14R/290161";

/// Mixed-fraction visibility split over two tokens; no temperature or altimeter
pub const FRACTION_REPORT: &str = "CYVV 021245Z 33005KT 1 1/2SM -SN OVC018 RMK SN3SC5";

/// Wind direction variation split over two tokens
pub const WIND_VARIATION_REPORT: &str = "EEKA 021250Z 23007KT 170V280 9999 SCT021 02/01 Q1003";

/// No significant cloud after two obscurations
pub const NSC_REPORT: &str =
    "OAKB 021250Z 09006KT 5000 HZ FU NSC M01/M08 Q1020 NOSIG RMK WHT WHT";

/// No cloud detected and no directional variation
pub const NCD_NDV_REPORT: &str = "EKHN 021250Z AUTO 29021KT 9999NDV NCD 07/05 Q1017";

/// Decode with the default (strict) configuration
pub fn decode(raw: &str) -> Result<Report> {
    MetarParser::default().parse(raw)
}

/// Decode with no singular group required
pub fn decode_lenient(raw: &str) -> Result<Report> {
    MetarParser::new(DecoderConfig::lenient()).parse(raw)
}

/// Raw text of each element of a repeatable group
pub fn raws<T>(items: &[T], raw: impl Fn(&T) -> &str) -> Vec<&str> {
    items.iter().map(raw).collect()
}
