//! Classification order, singular slots and lookahead merging

use super::*;
use crate::error::MetarError;
use crate::fields::VisibilityValue;

fn unrecognized(raw: &str) -> String {
    match decode_lenient(raw) {
        Err(MetarError::UnrecognizedToken { token, .. }) => token,
        other => panic!("expected an unrecognized token for {:?}, got {:?}", raw, other),
    }
}

#[test]
fn test_repeatable_groups_keep_input_order() {
    let report = decode(RUNWAY_CONDITION_REPORT).unwrap();
    assert_eq!(
        raws(&report.cloud_layers, |c| &c.raw),
        vec!["FEW012", "SCT038", "BKN048"]
    );

    let report = decode("KXYZ 021250Z 27010KT 2SM -RA BR VCTS BKN008 OVC015 12/11 A2990").unwrap();
    assert_eq!(raws(&report.weather_types, |w| &w.raw), vec!["-RA", "BR", "VCTS"]);
    assert_eq!(raws(&report.cloud_layers, |c| &c.raw), vec!["BKN008", "OVC015"]);
}

#[test]
fn test_singular_groups_match_once() {
    assert_eq!(unrecognized("EGLL 021250Z 23009KT 24010KT 9999 08/06 Q1024"), "24010KT");
    assert_eq!(unrecognized("EGLL 021250Z 23009KT 9999 8000 08/06 Q1024"), "8000");
    assert_eq!(unrecognized("EGLL 021250Z 23009KT 9999 08/06 07/05 Q1024"), "07/05");
    assert_eq!(unrecognized("EGLL 021250Z 23009KT 9999 08/06 Q1024 Q1023"), "Q1023");
    assert_eq!(
        unrecognized("ZMUB 021300Z 01002MPS CAVOK M31/M35 Q1036 NOSIG NOSIG"),
        "NOSIG"
    );
}

#[test]
fn test_first_numeric_token_is_visibility() {
    // A lone number after the wind fills the visibility slot
    let report = decode_lenient("CYXX 021245Z 33005KT 1 OVC018").unwrap();
    let visibility = report.visibility.unwrap();
    assert_eq!(visibility.value, VisibilityValue::Whole(1));
    assert!(!visibility.in_statute_miles);
    assert_eq!(report.cloud_layers[0].raw, "OVC018");
}

#[test]
fn test_continuation_consumed_only_on_merged_match() {
    // "/////" never takes a variation group, so "170V280" is left over
    assert_eq!(unrecognized("EEKA 021250Z ///// 170V280 9999"), "170V280");

    // "CAVOK 1/2SM" is not a visibility group; the fraction is left over
    assert_eq!(unrecognized("ZMUB 021300Z 01002MPS CAVOK 1/2SM"), "1/2SM");
}

#[test]
fn test_fixed_prefix_flags_only_follow_time() {
    let report = decode_lenient("KJFK 021251Z COR 31012KT").unwrap();
    assert!(!report.auto_observation);
    assert!(report.correction);

    // AUTO after COR is out of position
    assert_eq!(unrecognized("KJFK 021251Z COR AUTO 31012KT"), "AUTO");
}

#[test]
fn test_remarks_swallow_recognizable_tokens() {
    let report = decode("EGLL 021250Z 23009KT 9999 08/06 Q1024 RMK 9999 Q1000 NOSIG").unwrap();
    assert_eq!(report.remarks.as_deref(), Some("9999 Q1000 NOSIG"));
    assert!(!report.no_significant_change);
    assert_eq!(report.altimeter.unwrap().value, 1024);
}

#[test]
fn test_empty_remarks() {
    let report = decode("EGLL 021250Z 23009KT 9999 08/06 Q1024 RMK").unwrap();
    assert_eq!(report.remarks.as_deref(), Some(""));
}

#[test]
fn test_remarks_are_idempotent() {
    let report = decode(US_REPORT).unwrap();
    let reassembled = format!(
        "KLAX 021253Z 10003KT 10SM CLR 07/M01 A3009 RMK {}",
        report.remarks.as_deref().unwrap()
    );
    assert_eq!(decode(&reassembled).unwrap().remarks, report.remarks);
}

#[test]
fn test_remarks_collapse_whitespace_runs() {
    let report = decode("EGLL 021250Z 23009KT 9999 08/06 Q1024 RMK AO2   SLP186 \t X").unwrap();
    assert_eq!(report.remarks.as_deref(), Some("AO2 SLP186 X"));
}

#[test]
fn test_rvr_takes_precedence_over_runway_condition() {
    let report = decode("EGLL 021250Z 23009KT 9999 R16R/1800V3000FT 08/06 Q1024 R14L/2X0161").unwrap();
    assert_eq!(raws(&report.runway_visual_ranges, |r| &r.raw), vec!["R16R/1800V3000FT"]);
    assert_eq!(report.runway_conditions.len(), 1);
    let condition = &report.runway_conditions[0];
    assert_eq!(condition.extent_code, "X");
    assert_eq!(condition.extent, None);
}

#[test]
fn test_every_raw_is_a_substring_of_the_report() {
    for raw in [
        CAVOK_REPORT,
        UK_REPORT,
        US_REPORT,
        VARYING_RVR_REPORT,
        ASSESSED_RVR_REPORT,
        RUNWAY_CONDITION_REPORT,
        WIND_VARIATION_REPORT,
        NSC_REPORT,
        NCD_NDV_REPORT,
    ] {
        let report = decode(raw).unwrap();
        let mut pieces = vec![report.airport.as_str(), report.time.raw.as_str()];
        pieces.extend(report.wind.as_ref().map(|w| w.raw.as_str()));
        pieces.extend(report.visibility.as_ref().map(|v| v.raw.as_str()));
        pieces.extend(report.runway_visual_ranges.iter().map(|r| r.raw.as_str()));
        pieces.extend(report.weather_types.iter().map(|w| w.raw.as_str()));
        pieces.extend(report.cloud_layers.iter().map(|c| c.raw.as_str()));
        pieces.extend(report.temperature.as_ref().map(|t| t.raw.as_str()));
        pieces.extend(report.altimeter.as_ref().map(|a| a.raw.as_str()));
        pieces.extend(report.runway_conditions.iter().map(|c| c.raw.as_str()));
        pieces.extend(report.remarks.as_deref());

        for piece in pieces {
            assert!(raw.contains(piece), "{:?} is not part of {:?}", piece, raw);
        }
    }
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    let padded = format!("  {}\n", UK_REPORT);
    let report = decode(&padded).unwrap();
    assert_eq!(report.raw, padded);
    assert_eq!(report.cloud_layers, decode(UK_REPORT).unwrap().cloud_layers);
}
