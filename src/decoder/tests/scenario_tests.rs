//! End-to-end decoding of real-world reports

use super::*;
use crate::code_tables::{BrakingConditions, DepositDepth, DepositExtent, DepositType};
use crate::fields::{
    CloudCoverage, Obscuration, PressureUnit, RvrAssessment, SpeedUnit, VisibilityValue,
    WindDirection,
};

#[test]
fn test_cavok_report() {
    let report = decode(CAVOK_REPORT).unwrap();

    assert_eq!(report.raw, CAVOK_REPORT);
    assert_eq!(report.airport, "ZMUB");
    assert_eq!(report.time.raw, "021300Z");
    assert!(!report.auto_observation);
    assert!(!report.correction);

    let wind = report.wind.unwrap();
    assert_eq!(wind.direction.unwrap().to_string(), "010");
    assert_eq!(wind.speed, Some(2));
    assert_eq!(wind.unit, Some(SpeedUnit::MetersPerSecond));

    assert_eq!(report.visibility.unwrap().value, VisibilityValue::Cavok);

    let temperature = report.temperature.unwrap();
    assert_eq!(temperature.temperature, -31);
    assert_eq!(temperature.dewpoint, -35);

    let altimeter = report.altimeter.unwrap();
    assert_eq!(altimeter.value, 1036);
    assert_eq!(altimeter.unit, PressureUnit::Hectopascals);

    assert!(report.no_significant_change);
    assert_eq!(report.remarks.as_deref(), Some("QFE667.5 70"));
}

#[test]
fn test_uk_report() {
    let report = decode(UK_REPORT).unwrap();

    let wind = report.wind.unwrap();
    assert_eq!(wind.direction, Some(WindDirection::Bearing(230)));
    assert_eq!(wind.speed, Some(9));
    assert_eq!(wind.unit, Some(SpeedUnit::Knots));

    assert_eq!(report.visibility.unwrap().value, VisibilityValue::Whole(9999));

    assert_eq!(report.cloud_layers.len(), 2);
    assert_eq!(report.cloud_layers[0].coverage, CloudCoverage::Scattered);
    assert_eq!(report.cloud_layers[0].altitude, Some(23));
    assert_eq!(report.cloud_layers[1].coverage, CloudCoverage::Broken);
    assert_eq!(report.cloud_layers[1].altitude, Some(29));

    let temperature = report.temperature.unwrap();
    assert_eq!((temperature.temperature, temperature.dewpoint), (8, 6));
    assert_eq!(report.altimeter.unwrap().value, 1024);
    assert!(!report.no_significant_change);
    assert_eq!(report.remarks, None);
}

#[test]
fn test_us_report() {
    let report = decode(US_REPORT).unwrap();

    assert_eq!(report.airport, "KLAX");
    let wind = report.wind.unwrap();
    assert_eq!(wind.direction, Some(WindDirection::Bearing(100)));
    assert_eq!(wind.speed, Some(3));

    let visibility = report.visibility.unwrap();
    assert_eq!(visibility.value, VisibilityValue::Whole(10));
    assert!(visibility.in_statute_miles);

    assert_eq!(report.cloud_layers.len(), 1);
    let layer = &report.cloud_layers[0];
    assert_eq!(layer.coverage, CloudCoverage::Clear);
    assert_eq!(layer.altitude, None);
    assert_eq!(layer.cloud_type, None);

    let temperature = report.temperature.unwrap();
    assert_eq!((temperature.temperature, temperature.dewpoint), (7, -1));

    let altimeter = report.altimeter.unwrap();
    assert_eq!(altimeter.unit, PressureUnit::InchesOfMercury);
    assert_eq!(altimeter.value, 3009);

    assert_eq!(report.remarks.as_deref(), Some("AO2 SLP186 T00721011"));
}

#[test]
fn test_varying_rvr_report() {
    let report = decode(VARYING_RVR_REPORT).unwrap();

    assert!(report.auto_observation);
    assert_eq!(report.runway_visual_ranges.len(), 1);
    let rvr = &report.runway_visual_ranges[0];
    assert_eq!(rvr.runway, "R16R");
    assert_eq!(rvr.value, 1800);
    assert_eq!(rvr.variable_max, Some(3000));
    assert!(rvr.in_feet);

    assert_eq!(
        report.visibility.unwrap().value,
        VisibilityValue::Fraction {
            numerator: 1,
            denominator: 2
        }
    );
    assert_eq!(raws(&report.weather_types, |w| &w.raw), vec!["FZFG"]);
    assert_eq!(report.cloud_layers[0].coverage, CloudCoverage::VerticalVisibility);
    assert_eq!(report.remarks.as_deref(), Some("AO2 PNO $"));
}

#[test]
fn test_assessed_rvr_report() {
    let report = decode(ASSESSED_RVR_REPORT).unwrap();

    let rvr = &report.runway_visual_ranges[0];
    assert_eq!(rvr.runway, "R06");
    assert_eq!(rvr.assessment, Some(RvrAssessment::Above));
    assert_eq!(rvr.value, 6000);
    assert!(rvr.in_feet);
    assert_eq!(report.weather_types[0].obscuration, Some(Obscuration::Mist));
}

#[test]
fn test_runway_condition_report() {
    let report = decode(RUNWAY_CONDITION_REPORT).unwrap();

    assert_eq!(
        raws(&report.runway_conditions, |c| &c.raw),
        vec!["R14L/290161", "R14R/290161"]
    );
    for (condition, runway) in report.runway_conditions.iter().zip(["14L", "14R"]) {
        assert_eq!(condition.runway, runway);
        assert_eq!(condition.deposit_code, "2");
        assert_eq!(condition.deposit, Some(DepositType::WetOrWaterPatches));
        assert_eq!(condition.extent_code, "9");
        assert_eq!(condition.extent, Some(DepositExtent::FiftyOneToHundredPercent));
        assert_eq!(condition.depth_code, "01");
        assert_eq!(condition.depth, Some(DepositDepth::Millimetres(1)));
        assert_eq!(condition.friction_code, "61");
        assert_eq!(condition.friction, Some(BrakingConditions::FrictionCoefficient(61)));
    }
}

#[test]
fn test_mixed_fraction_visibility() {
    let report = decode_lenient(FRACTION_REPORT).unwrap();

    let visibility = report.visibility.unwrap();
    assert_eq!(visibility.value.to_string(), "1 1/2");
    assert!(visibility.in_statute_miles);
    assert_eq!(visibility.raw, "1 1/2SM");
    assert_eq!(report.weather_types.len(), 1);
    assert_eq!(report.cloud_layers.len(), 1);
    assert_eq!(report.temperature, None);
    assert_eq!(report.altimeter, None);
    assert_eq!(report.remarks.as_deref(), Some("SN3SC5"));
}

#[test]
fn test_wind_variation() {
    let report = decode(WIND_VARIATION_REPORT).unwrap();

    let wind = report.wind.unwrap();
    assert_eq!(wind.direction, Some(WindDirection::Bearing(230)));
    assert_eq!(wind.speed, Some(7));
    assert_eq!(wind.unit, Some(SpeedUnit::Knots));
    assert_eq!(wind.min_variation, Some(170));
    assert_eq!(wind.max_variation, Some(280));
    assert_eq!(wind.raw, "23007KT 170V280");
    assert_eq!(report.visibility.unwrap().value, VisibilityValue::Whole(9999));
}

#[test]
fn test_no_significant_cloud() {
    let report = decode(NSC_REPORT).unwrap();

    assert_eq!(raws(&report.weather_types, |w| &w.raw), vec!["HZ", "FU"]);
    assert_eq!(report.weather_types[0].obscuration, Some(Obscuration::Haze));
    assert_eq!(report.weather_types[1].obscuration, Some(Obscuration::Smoke));
    assert_eq!(report.cloud_layers.len(), 1);
    assert_eq!(report.cloud_layers[0].coverage, CloudCoverage::NoSignificantCloud);
    let temperature = report.temperature.unwrap();
    assert_eq!((temperature.temperature, temperature.dewpoint), (-1, -8));
    assert!(report.no_significant_change);
    assert_eq!(report.remarks.as_deref(), Some("WHT WHT"));
}

#[test]
fn test_no_cloud_detected_and_ndv() {
    let report = decode(NCD_NDV_REPORT).unwrap();

    assert!(report.auto_observation);
    let visibility = report.visibility.unwrap();
    assert_eq!(visibility.value, VisibilityValue::Whole(9999));
    assert!(visibility.no_directional_variation);
    assert_eq!(report.cloud_layers[0].coverage, CloudCoverage::NoCloudDetected);
    assert_eq!(report.altimeter.unwrap().value, 1017);
    assert!(!report.no_significant_change);
    assert_eq!(report.remarks, None);
}

#[test]
fn test_corrected_report() {
    let report = decode("KJFK 021251Z AUTO COR 31012G20KT 10SM FEW250 M02/M14 A3021").unwrap();
    assert!(report.auto_observation);
    assert!(report.correction);
    assert_eq!(report.wind.unwrap().gust, Some(20));
}

#[test]
fn test_unreported_wind_fills_the_wind_slot() {
    let report = decode("EGXX 021250Z ///// 9999 OVC008 10/09 Q1001").unwrap();
    let wind = report.wind.unwrap();
    assert!(!wind.is_reported());
    assert_eq!(wind.raw, "/////");
}

#[test]
fn test_decoding_is_deterministic() {
    for raw in [CAVOK_REPORT, UK_REPORT, US_REPORT, VARYING_RVR_REPORT, NSC_REPORT] {
        assert_eq!(decode(raw).unwrap(), decode(raw).unwrap());
    }
}

#[test]
fn test_bare_intensity_decodes_as_weather() {
    let report = decode("EGLL 021250Z 23009KT 9999 - 08/06 Q1024").unwrap();
    assert_eq!(raws(&report.weather_types, |w| &w.raw), vec!["-"]);
    assert_eq!(report.weather_types[0].precipitation, None);
}
