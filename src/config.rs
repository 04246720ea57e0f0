//! Configuration for the date extractor

use crate::consts::{DAY_WINDOW, GREETINGS, LINE_ATTEMPTS, SHORT_YEAR_LIMIT, WEEKDAY_MARKERS};
use crate::era::EraPolicy;
use crate::error::ConfigError;
use crate::extract::normalize;
use serde::{Deserialize, Serialize};

/// Configuration for [`DateExtractor`](crate::DateExtractor)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Tokens searched on each side of the month for the day
    pub day_window: usize,

    /// Non-empty lines tried by [`DateExtractor::extract_from_text`](crate::DateExtractor::extract_from_text)
    pub line_attempts: usize,

    /// Greeting abbreviations stripped from the start of a dateline
    pub greetings: Vec<String>,

    /// Weekday markers that may precede the date
    pub weekday_markers: Vec<String>,

    /// Short-form year boundary
    pub era: EraPolicy,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            day_window:      DAY_WINDOW,
            line_attempts:   LINE_ATTEMPTS,
            greetings:       GREETINGS.iter().map(ToString::to_string).collect(),
            weekday_markers: WEEKDAY_MARKERS.iter().map(ToString::to_string).collect(),
            era:             EraPolicy::default(),
        }
    }
}

impl ExtractorConfig {
    /// Strict preset: only the day directly adjacent to the month is accepted
    /// and only the first line is read.
    pub fn strict() -> Self {
        Self {
            day_window: 1,
            line_attempts: 1,
            ..Self::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.day_window == 0 {
            return Err(ConfigError::Invalid("day_window must be greater than 0".to_string()));
        }
        if self.line_attempts == 0 {
            return Err(ConfigError::Invalid("line_attempts must be greater than 0".to_string()));
        }
        if self.era.boundary == 0 || self.era.boundary >= SHORT_YEAR_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "era.boundary must be between 1 and {}",
                SHORT_YEAR_LIMIT - 1
            )));
        }
        // compared against single tokens of a normalized line
        let single_token = |spelling: &String| normalize(spelling).split_whitespace().count() == 1;
        if !self.greetings.iter().all(single_token) {
            return Err(ConfigError::Invalid("greetings must each be a single token".to_string()));
        }
        if !self.weekday_markers.iter().all(single_token) {
            return Err(ConfigError::Invalid(
                "weekday_markers must each be a single token".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string. Missing fields take their defaults.
    ///
    /// # Errors
    /// `ConfigError::Parse` on malformed TOML, `ConfigError::Invalid` if the
    /// parsed values fail [`validate`](Self::validate).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    ///
    /// # Errors
    /// `ConfigError::Serialize` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
