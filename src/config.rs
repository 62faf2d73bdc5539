//! Decoder configuration.
//!
//! States which singular report groups the assembler treats as mandatory.
//! Airport identifier and observation time are always required and are not
//! configurable.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Field;

/// Which singular groups must be present for a report to decode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Fail when no wind group is found
    pub require_wind: bool,

    /// Fail when no visibility group is found
    pub require_visibility: bool,

    /// Fail when no temperature/dewpoint group is found
    pub require_temperature: bool,

    /// Fail when no altimeter group is found
    pub require_altimeter: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            require_wind: true,
            require_visibility: true,
            require_temperature: true,
            require_altimeter: true,
        }
    }
}

impl DecoderConfig {
    /// Configuration that requires none of the singular groups
    pub fn lenient() -> Self {
        Self {
            require_wind: false,
            require_visibility: false,
            require_temperature: false,
            require_altimeter: false,
        }
    }

    /// Set whether `field` is required
    ///
    /// Fields that are not singular groups are ignored.
    pub fn with_required(mut self, field: Field, required: bool) -> Self {
        match field {
            Field::Wind => self.require_wind = required,
            Field::Visibility => self.require_visibility = required,
            Field::Temperature => self.require_temperature = required,
            Field::Altimeter => self.require_altimeter = required,
            other => debug!("Ignoring requirement for non-singular field: {}", other),
        }
        self
    }

    /// Whether the assembler must see `field` for the report to decode
    pub fn is_required(&self, field: Field) -> bool {
        match field {
            Field::Airport | Field::ObservationTime => true,
            Field::Wind => self.require_wind,
            Field::Visibility => self.require_visibility,
            Field::Temperature => self.require_temperature,
            Field::Altimeter => self.require_altimeter,
            _ => false,
        }
    }
}
