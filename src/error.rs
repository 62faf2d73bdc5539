//! Error handling for METAR decoding.
//!
//! Recognizers never fail on a token that simply is not theirs; only the
//! report assembler (and the explicit required-match wrappers) produce these
//! errors, and each one aborts the decode of the current report.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every field a report can carry, used to name what was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Airport,
    ObservationTime,
    Wind,
    Visibility,
    RunwayVisualRange,
    WeatherType,
    CloudLayer,
    Temperature,
    Altimeter,
    RunwayCondition,
}

impl Field {
    /// Human-readable field name
    pub fn name(self) -> &'static str {
        match self {
            Field::Airport => "airport identifier",
            Field::ObservationTime => "observation time",
            Field::Wind => "wind",
            Field::Visibility => "visibility",
            Field::RunwayVisualRange => "runway visual range",
            Field::WeatherType => "weather type",
            Field::CloudLayer => "cloud layer",
            Field::Temperature => "temperature",
            Field::Altimeter => "altimeter setting",
            Field::RunwayCondition => "runway surface condition",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetarError {
    /// A mandatory field never matched where the assembler required it
    #[error(
        "Missing required {field}: expected {expected}, found {}",
        .found.as_deref().unwrap_or("end of report")
    )]
    MissingRequiredField {
        field: Field,
        expected: &'static str,
        found: Option<String>,
    },

    /// A token fell through the whole recognizer chain before remarks began
    #[error("Unrecognized token '{token}' (remaining: '{}')", .remaining.join(" "))]
    UnrecognizedToken {
        token: String,
        remaining: Vec<String>,
    },

    /// A required leaf recognizer was invoked directly on text it rejects
    #[error("Malformed {field}: '{token}' does not match {expected}")]
    MalformedField {
        field: Field,
        expected: &'static str,
        token: String,
    },
}

impl MetarError {
    /// Create a missing required field error
    pub fn missing_field(field: Field, expected: &'static str, found: Option<&str>) -> Self {
        Self::MissingRequiredField {
            field,
            expected,
            found: found.map(str::to_string),
        }
    }

    /// Create an unrecognized token error with the rest of the stream for context
    pub fn unrecognized_token(token: impl Into<String>, remaining: Vec<String>) -> Self {
        Self::UnrecognizedToken {
            token: token.into(),
            remaining,
        }
    }

    /// Create a malformed field error
    pub fn malformed_field(field: Field, expected: &'static str, token: impl Into<String>) -> Self {
        Self::MalformedField {
            field,
            expected,
            token: token.into(),
        }
    }

    /// The field the error concerns, if it is field-scoped
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::MissingRequiredField { field, .. } | Self::MalformedField { field, .. } => {
                Some(*field)
            }
            Self::UnrecognizedToken { .. } => None,
        }
    }

    /// The offending token, if there was one
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::MissingRequiredField { found, .. } => found.as_deref(),
            Self::UnrecognizedToken { token, .. } | Self::MalformedField { token, .. } => {
                Some(token)
            }
        }
    }

    /// Tokens left unconsumed after an unrecognized token
    pub fn remaining(&self) -> &[String] {
        match self {
            Self::UnrecognizedToken { remaining, .. } => remaining,
            _ => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, MetarError>;
