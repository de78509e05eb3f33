//! Converter configuration.
//!
//! This module reads the division context and rendering settings from TOML text. Every field is optional; missing
//! values fall back to 100 fractional digits, half-up rounding and two rendered decimals.
//!
//! ```toml
//! [math]
//! scale = 20
//! rounding = "half_even"
//!
//! [render]
//! precision = 3
//! ```

use serde::{Deserialize, Serialize};

use crate::format::RenderSettings;
use crate::{ConversionError, ConversionResult, MathContext};

/// Division context and rendering settings used by the converters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Scale and rounding for every non-exact division.
    #[serde(default)]
    pub math: MathContext,
    /// Settings for `render_with`.
    #[serde(default)]
    pub render: RenderSettings,
}

impl ConverterConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Returns
    /// * `Ok(ConverterConfig)` with defaults filled in
    /// * `Err(ConversionError::Config)` if the text is not valid TOML or a field has the wrong type
    pub fn from_toml_str(text: &str) -> ConversionResult<Self> {
        let config: ConverterConfig = toml::from_str(text)
            .map_err(|e| ConversionError::Config(format!("Failed to parse converter config: {}", e)))?;

        if config.math != MathContext::DEFAULT {
            log::debug!(
                "using non-default math context: scale {} rounding {:?}",
                config.math.scale,
                config.math.rounding
            );
        }

        Ok(config)
    }

    /// Serializes the configuration back to TOML text.
    pub fn to_toml_string(&self) -> ConversionResult<String> {
        toml::to_string(self)
            .map_err(|e| ConversionError::Config(format!("Failed to serialize converter config: {}", e)))
    }
}
