use crate::consts::{MAX_DAY, MAX_ENCODABLE, MAX_MONTH, MAX_YEAR};

/// Error decoding a numeral token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Nothing left to decode once punctuation is stripped.
    #[error("Empty numeral")]
    Empty,

    /// A character outside the numeral alphabet.
    #[error("Invalid numeral character: {character:?}")]
    InvalidCharacter { character: char },

    /// The letters add up to more than a `u32` holds.
    #[error("Numeral value overflows")]
    Overflow,
}

/// Error encoding an integer as a numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("Cannot encode {0} (must be 1-{max})", max = MAX_ENCODABLE)]
    OutOfRange(i64),
}

/// Why no date could be read from a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ExtractionFailure {
    #[error("No month name found")]
    NoMonthFound,

    #[error("No day numeral found next to the month")]
    NoDayFound,

    #[error("No year numeral found")]
    NoYearFound,
}

/// Why a token could not be read as a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum YearError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    OutOfRange(#[from] ComponentError),

    /// Only years of the current millennium (5001-5999) have a dateline
    /// spelling.
    #[error("Year {0} is outside the current millennium")]
    OutsideMillennium(u32),
}

/// A date component outside its valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ComponentError {
    #[error("Invalid day: {0} (must be 1-{max})", max = MAX_DAY)]
    InvalidDay(u8),

    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    #[error("Invalid year: {0} (must be 1-{max})", max = MAX_YEAR)]
    InvalidYear(u16),
}

/// A deserialized [`ParsedDate`](crate::ParsedDate) whose fields disagree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("No month {month} with leap_variant = {leap_variant}")]
    UnknownMonth { month: u8, leap_variant: bool },

    #[error("Year {0} is outside the current millennium")]
    YearOutsideMillennium(u16),

    #[error("{field} does not match the date")]
    DisplayMismatch { field: &'static str },
}

/// Error loading or validating an [`ExtractorConfig`](crate::ExtractorConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML: {0}")]
    Parse(String),

    #[error("Failed to serialize to TOML: {0}")]
    Serialize(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(DecodeError::Empty.to_string(), "Empty numeral");
        assert_eq!(
            DecodeError::InvalidCharacter { character: 'x' }.to_string(),
            "Invalid numeral character: 'x'"
        );
        assert_eq!(
            EncodeError::OutOfRange(0).to_string(),
            "Cannot encode 0 (must be 1-9999)"
        );
        assert_eq!(DecodeError::Overflow.to_string(), "Numeral value overflows");
        assert_eq!(
            YearError::OutsideMillennium(6000).to_string(),
            "Year 6000 is outside the current millennium"
        );
        assert_eq!(
            RecordError::DisplayMismatch { field: "full_display" }.to_string(),
            "full_display does not match the date"
        );
        assert_eq!(
            ComponentError::InvalidMonth(14).to_string(),
            "Invalid month: 14 (must be 1-13)"
        );
    }

    #[test]
    fn test_toml_error_converts() {
        let err: ConfigError = toml::from_str::<toml::Value>("= broken").unwrap_err().into();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
