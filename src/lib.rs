//! Hebrew numerals and Hebrew calendar dates in free text.
//!
//! Letters double as digits in Hebrew (gematria), and correspondence is dated
//! that way: `ב"ה, כ"א אדר תרפ"ח` is the 21st of Adar, 5688. This crate reads
//! such datelines into a [`ParsedDate`]:
//!
//! - [`decode`] / [`encode`] convert between numerals and integers,
//! - [`lookup_month`] resolves month names and their abbreviations,
//! - [`resolve_year`] fills in the century a short-form year leaves out,
//! - [`extract_date`] runs the whole pipeline on one line.
//!
//! Everything is a pure function over static tables; an extractor can be
//! shared freely between threads.

mod config;
mod consts;
mod era;
mod error;
mod extract;
mod lexicon;
mod numeral;
mod prelude;
#[cfg(test)]
mod test_utils;
mod types;

pub use config::ExtractorConfig;
pub use consts::*;
pub use era::{EraAnchor, EraPolicy, ResolvedYear, YearResolution, resolve_year};
pub use error::{
    ComponentError, ConfigError, DecodeError, EncodeError, ExtractionFailure, RecordError, YearError,
};
pub use extract::DateExtractor;
pub use lexicon::{MONTHS, MonthEntry, lookup_month};
pub use numeral::{ALPHABET, NumeralMark, NumeralToken, decode, encode, format_numeral, letter_value};
pub use types::{Day, Month, Year};

use crate::era::current_millennium;
use crate::numeral::spell;
use crate::prelude::*;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A fully resolved dateline.
///
/// Either every field is present or extraction failed; there is no partial
/// date. Display fields are normalized (bare letters, no numeral marks, year
/// without the millennium) so equivalent spellings compare equal.
/// Deserializing rebuilds the date from its numeric fields and rejects a
/// record whose displays or month variant disagree with them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "ParsedDateRecord")]
#[display(fmt = "{full_display}")]
pub struct ParsedDate {
    day:           Day,
    day_display:   String,
    month:         Month,
    month_variant: bool,
    month_display: String,
    year:          Year,
    year_display:  String,
    full_display:  String,
}

impl ParsedDate {
    /// `year` must lie in the current millennium; its display drops the
    /// thousands.
    pub(crate) fn new(day: Day, month: &MonthEntry, year: Year) -> Self {
        let day_display = spell(u16::from(day.get()));
        let month_display = month.display_name().to_string();
        let year_display = spell(year.within_millennium());
        let full_display = format!("{day_display} {month_display} {year_display}");
        Self {
            day,
            day_display,
            month: month.ordinal(),
            month_variant: month.is_leap_variant(),
            month_display,
            year,
            year_display,
            full_display,
        }
    }

    /// Day of month (1-31)
    pub const fn day(&self) -> Day {
        self.day
    }

    /// Day spelled as a numeral (`כא`)
    pub fn day_display(&self) -> &str {
        &self.day_display
    }

    /// Month ordinal (1-13)
    pub const fn month(&self) -> Month {
        self.month
    }

    /// True if the month was written as one of the named leap-year Adars
    pub const fn is_leap_variant(&self) -> bool {
        self.month_variant
    }

    /// Canonical month name (`אדר א`)
    pub fn month_display(&self) -> &str {
        &self.month_display
    }

    /// Era-inclusive year (5688)
    pub const fn year(&self) -> Year {
        self.year
    }

    /// Year within the millennium, spelled as a numeral (`תרפח`)
    pub fn year_display(&self) -> &str {
        &self.year_display
    }

    /// Day, month and year joined with spaces
    pub fn full_display(&self) -> &str {
        &self.full_display
    }

    /// Converts to database columns: (year, month, day)
    pub const fn to_columns(&self) -> (u16, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }
}

/// Wire form of [`ParsedDate`], checked before it becomes one.
#[derive(Deserialize)]
struct ParsedDateRecord {
    day:           Day,
    day_display:   String,
    month:         Month,
    month_variant: bool,
    month_display: String,
    year:          Year,
    year_display:  String,
    full_display:  String,
}

impl TryFrom<ParsedDateRecord> for ParsedDate {
    type Error = RecordError;

    fn try_from(record: ParsedDateRecord) -> Result<Self, Self::Error> {
        let entry = MONTHS
            .iter()
            .find(|entry| {
                entry.ordinal() == record.month && entry.is_leap_variant() == record.month_variant
            })
            .ok_or(RecordError::UnknownMonth {
                month:        record.month.get(),
                leap_variant: record.month_variant,
            })?;
        if !current_millennium().contains(&u32::from(record.year.get())) {
            return Err(RecordError::YearOutsideMillennium(record.year.get()));
        }

        let date = Self::new(record.day, entry, record.year);
        let checks = [
            ("day_display", &date.day_display, &record.day_display),
            ("month_display", &date.month_display, &record.month_display),
            ("year_display", &date.year_display, &record.year_display),
            ("full_display", &date.full_display, &record.full_display),
        ];
        if let Some((field, ..)) = checks.into_iter().find(|(_, built, given)| built != given) {
            return Err(RecordError::DisplayMismatch { field });
        }
        Ok(date)
    }
}

static DEFAULT_EXTRACTOR: Lazy<DateExtractor> = Lazy::new(DateExtractor::default);

/// Extracts a date from one dateline with the default configuration.
///
/// ```
/// let date = gematria_date::extract_date("ב\"ה, כ\"א אדר פ\"ח").unwrap();
/// assert_eq!(date.to_columns(), (5688, 6, 21));
/// ```
///
/// # Errors
/// See [`DateExtractor::extract`].
pub fn extract_date(line: &str) -> Result<ParsedDate, ExtractionFailure> {
    DEFAULT_EXTRACTOR.extract(line)
}

/// Extracts a date from the first few non-empty lines of a document with the
/// default configuration.
///
/// # Errors
/// See [`DateExtractor::extract_from_text`].
pub fn extract_date_from_text(text: &str) -> Result<ParsedDate, ExtractionFailure> {
    DEFAULT_EXTRACTOR.extract_from_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{day, month, year};

    #[test]
    fn test_extract_full_prefixed_year() {
        let date = extract_date("כ\"א אדר תרפ\"ח").unwrap();
        assert_eq!(date.day(), day(21));
        assert_eq!(date.month(), month(6));
        assert!(!date.is_leap_variant());
        assert_eq!(date.year(), year(5688));
        assert_eq!(date.day_display(), "כא");
        assert_eq!(date.month_display(), "אדר");
        assert_eq!(date.year_display(), "תרפח");
        assert_eq!(date.full_display(), "כא אדר תרפח");
    }

    #[test]
    fn test_extract_weekday_leap_month_short_year() {
        let date = extract_date("ב\"ה א' כ\"א אד\"ר פ\"ט").unwrap();
        assert_eq!(date.day(), day(21));
        assert_eq!(date.month(), month(6));
        assert!(date.is_leap_variant());
        assert_eq!(date.month_display(), "אדר א");
        assert_eq!(date.year(), year(LOWER_ERA_BASE + 89));
    }

    #[test]
    fn test_extract_no_month() {
        assert_eq!(extract_date("כ\"א תרפ\"ח"), Err(ExtractionFailure::NoMonthFound));
    }

    #[test]
    fn test_extract_no_day() {
        assert_eq!(extract_date("טבת תרפ\"ט"), Err(ExtractionFailure::NoDayFound));
    }

    #[test]
    fn test_datelines() {
        struct TestCase {
            line:        &'static str,
            columns:     (u16, u8, u8),
            leap:        bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                line:        "כ\"א אדר פ\"ח",
                columns:     (5688, 6, 21),
                leap:        false,
                description: "short-form year above the boundary",
            },
            TestCase {
                line:        "ה' כח טבת תרפ\"ט",
                columns:     (5689, 4, 28),
                leap:        false,
                description: "weekday marker and unmarked day",
            },
            TestCase {
                line:        "ב\"ה א' כ\"א אד\"ר ה'תרצ\"ב",
                columns:     (5692, 6, 21),
                leap:        true,
                description: "greeting, weekday, first Adar abbreviation, millennium marker",
            },
            TestCase {
                line:        "בס\"ד, ט\"ו אד\"ש תש\"ג.",
                columns:     (5703, 7, 15),
                leap:        true,
                description: "second Adar abbreviation with punctuation",
            },
            TestCase {
                line:        "י\"ב תמוז י\"ב",
                columns:     (5712, 11, 12),
                leap:        false,
                description: "short-form year below the boundary",
            },
            TestCase {
                line:        "ג' אדר שני תשכ\"ג",
                columns:     (5723, 7, 3),
                leap:        true,
                description: "two-word month spelling",
            },
            TestCase {
                line:        "ניסן ה' תשי\"ח",
                columns:     (5718, 8, 5),
                leap:        false,
                description: "day after the month",
            },
            TestCase {
                line:        "ב\u{05F4}ה, י\u{05F3} שבט תש\u{05F4}י",
                columns:     (5710, 5, 10),
                leap:        false,
                description: "Hebrew punctuation marks",
            },
        ];

        for case in &cases {
            let date = extract_date(case.line)
                .unwrap_or_else(|e| panic!("{} ({}): {e}", case.description, case.line));
            assert_eq!(date.to_columns(), case.columns, "{}", case.description);
            assert_eq!(date.is_leap_variant(), case.leap, "{}", case.description);
        }
    }

    #[test]
    fn test_equivalent_datelines_share_display() {
        let spellings = [
            "כ\"א אדר תרפ\"ח",
            "כא אדר תרפח",
            "כ\"א אדר ה'תרפ\"ח",
            "כ\"א אדר פ\"ח",
            "ב\"ה, כ\u{05F4}א אדר, פ\u{05F4}ח.",
        ];
        let expected = extract_date(spellings[0]).unwrap();
        for line in spellings {
            let date = extract_date(line).unwrap();
            assert_eq!(date, expected, "line {line:?}");
            assert_eq!(date.to_string(), "כא אדר תרפח");
        }
    }

    #[test]
    fn test_fifteen_is_displayed_traditionally() {
        let date = extract_date("יה שבט תש\"ח").unwrap();
        assert_eq!(date.day().get(), 15);
        assert_eq!(date.day_display(), "טו");
    }

    #[test]
    fn test_extract_date_from_text() {
        let text = "מכתב א'תתקמ\"ד\nב\"ה, ח' טבת תש\"ח\nשלום וברכה";
        let date = extract_date_from_text(text).unwrap();
        assert_eq!(date.to_columns(), (5708, 4, 8));
    }

    #[test]
    fn test_serde() {
        let date = extract_date("כ\"א אד\"ר תרפ\"ח").unwrap();
        let json = serde_json::to_value(&date).unwrap();
        assert_eq!(json["day"], 21);
        assert_eq!(json["month"], 6);
        assert_eq!(json["month_variant"], true);
        assert_eq!(json["year"], 5688);
        assert_eq!(json["full_display"], "כא אדר א תרפח");

        let parsed: ParsedDate = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, date);
    }

    #[test]
    fn test_deserialize_rejects_inconsistent_records() {
        let date = extract_date("כ\"א אד\"ר תרפ\"ח").unwrap();
        let json = serde_json::to_value(&date).unwrap();

        let mut wrong_display = json.clone();
        wrong_display["full_display"] = "כב אדר א תרפח".into();
        let err = serde_json::from_value::<ParsedDate>(wrong_display).unwrap_err();
        assert!(err.to_string().contains("full_display"), "{err}");

        let mut variant_on_nisan = json.clone();
        variant_on_nisan["month"] = 8.into();
        variant_on_nisan["month_display"] = "ניסן".into();
        assert!(serde_json::from_value::<ParsedDate>(variant_on_nisan).is_err());

        let mut next_millennium = json;
        next_millennium["year"] = 6688.into();
        assert!(serde_json::from_value::<ParsedDate>(next_millennium).is_err());
    }

    #[test]
    fn test_year_outside_millennium_is_not_a_date() {
        assert_eq!(extract_date("כ\"א אדר תתר"), Err(ExtractionFailure::NoYearFound));
        assert_eq!(extract_date("כ\"א אדר פ\"ח תתר").unwrap().to_columns(), (5688, 6, 21));
    }

    #[test]
    fn test_extractor_is_shareable_across_threads() {
        let extractor = DateExtractor::default();
        let extractor = &extractor;
        std::thread::scope(|scope| {
            let handles: Vec<_> = ["כ\"א אדר פ\"ח", "ח' טבת תש\"ח"]
                .into_iter()
                .map(|line| scope.spawn(move || extractor.extract(line)))
                .collect();
            for handle in handles {
                assert!(handle.join().unwrap().is_ok());
            }
        });
    }
}
