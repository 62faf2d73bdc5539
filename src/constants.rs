//! Report markers and grammar descriptions
//!
//! Literal tokens recognized by the assembler and the human-readable grammar
//! descriptions carried by errors.

// =============================================================================
// Fixed Markers
// =============================================================================

/// Automated observation flag following the observation time
pub const AUTO_MARKER: &str = "AUTO";

/// Corrected report flag following the auto flag
pub const CORRECTION_MARKER: &str = "COR";

/// No significant change trend marker
pub const NO_SIGNIFICANT_CHANGE_MARKER: &str = "NOSIG";

/// Start of the free-text remarks section
pub const REMARKS_MARKER: &str = "RMK";

/// Ceiling and visibility OK
pub const CAVOK_MARKER: &str = "CAVOK";

/// Sky clear (no cloud below 12,000 ft, automated stations)
pub const CLEAR_SKY_MARKER: &str = "CLR";

/// Statute mile suffix for visibility
pub const STATUTE_MILE_SUFFIX: &str = "SM";

/// Direction marker for variable winds
pub const VARIABLE_WIND_MARKER: &str = "VRB";

/// Highest compass bearing a wind group may carry
pub const MAX_WIND_BEARING: u16 = 360;

// =============================================================================
// Grammar Descriptions
// =============================================================================

pub mod expected {
    pub const AIRPORT: &str = "3-4 alphanumeric characters starting with a letter (e.g. KLAX)";
    pub const OBSERVATION_TIME: &str = "day, hour and minute followed by Z (e.g. 021253Z)";
    pub const WIND: &str = "direction or VRB, 2-digit speed, optional gust, KT or MPS (e.g. 23009G15KT)";
    pub const VISIBILITY: &str = "CAVOK, a distance or a fraction with SM, optional NDV (e.g. 9999, 1 1/2SM)";
    pub const RUNWAY_VISUAL_RANGE: &str = "R<runway>/[M|P]<4 digits>[V<4 digits>][FT] (e.g. R16R/1800V3000FT)";
    pub const WEATHER_TYPE: &str = "intensity, descriptor, precipitation, obscuration, other (e.g. -SHRA)";
    pub const CLOUD_LAYER: &str = "CLR or coverage with optional height and type (e.g. BKN029CB)";
    pub const TEMPERATURE: &str = "[M]temperature/[M]dewpoint (e.g. 07/M01)";
    pub const ALTIMETER: &str = "Q or A followed by 4 digits (e.g. Q1024, A3009)";
    pub const RUNWAY_CONDITION: &str = "R<runway>/<deposit><extent><depth><friction> (e.g. R14L/290161)";
}
