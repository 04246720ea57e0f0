//! Dateline extraction.
//!
//! A dateline is read in fixed stages: punctuation is normalized, the line is
//! split into tokens with greetings dropped, the month is anchored through the
//! lexicon, the day is looked for right next to the month, and the year is
//! taken from the last remaining numeral. Failing any stage ends the run with
//! the matching [`ExtractionFailure`].

use crate::config::ExtractorConfig;
use crate::era::ResolvedYear;
use crate::error::{ConfigError, ExtractionFailure};
use crate::lexicon::{MonthEntry, lookup_month};
use crate::numeral::{decode, is_geresh, is_gershayim};
use crate::prelude::*;
use crate::types::Day;
use crate::{GERESH, GERSHAYIM, ParsedDate};

/// Folds every geresh/gershayim spelling to ASCII and blanks out commas and
/// periods. Quote marks are kept since numerals depend on them.
pub(crate) fn normalize(line: &str) -> String {
    line.chars()
        .map(|c| match c {
            ',' | '.' => ' ',
            c if is_geresh(c) => GERESH,
            c if is_gershayim(c) => GERSHAYIM,
            c => c,
        })
        .collect()
}

/// Splits a normalized line on whitespace, dropping greeting tokens.
pub(crate) fn tokenize<'a>(normalized: &'a str, greetings: &[String]) -> Vec<&'a str> {
    normalized
        .split_whitespace()
        .filter(|token| !greetings.iter().any(|g| g == token))
        .collect()
}

/// Where the month sits in the token sequence. Two-word spellings span two
/// tokens.
#[derive(Debug, Clone, Copy)]
struct MonthSpan {
    start: usize,
    end:   usize,
    entry: &'static MonthEntry,
}

impl MonthSpan {
    const fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }
}

/// Configured spellings folded the way [`normalize`] folds a line, so they
/// compare equal to its tokens.
fn normalize_all(spellings: &[String]) -> Vec<String> {
    spellings.iter().map(|spelling| normalize(spelling).trim().to_string()).collect()
}

/// Extracts Hebrew dates from datelines.
#[derive(Debug, Clone)]
pub struct DateExtractor {
    config:          ExtractorConfig,
    greetings:       Vec<String>,
    weekday_markers: Vec<String>,
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::from_valid(ExtractorConfig::default())
    }
}

impl DateExtractor {
    /// # Errors
    /// Returns `ConfigError::Invalid` if the configuration fails validation.
    pub fn new(config: ExtractorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: ExtractorConfig) -> Self {
        Self {
            greetings: normalize_all(&config.greetings),
            weekday_markers: normalize_all(&config.weekday_markers),
            config,
        }
    }

    pub const fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extracts a date from the first line of `line`.
    ///
    /// # Errors
    /// The [`ExtractionFailure`] of the first stage that found nothing.
    pub fn extract(&self, line: &str) -> Result<ParsedDate, ExtractionFailure> {
        let line = line.lines().next().unwrap_or_default();

        let normalized = normalize(line);
        debug!(line, normalized = %normalized, "boilerplate stripped");

        let tokens = tokenize(&normalized, &self.greetings);
        debug!(?tokens, "tokenized");

        let marker = self.leading_weekday(&tokens);
        let month = Self::locate_month(&tokens, marker).ok_or(ExtractionFailure::NoMonthFound)?;
        // a marker right before the month is the day itself (`ג' אדר`)
        let weekday = marker.filter(|&index| month.start > index + 1);
        debug!(
            start = month.start,
            end = month.end,
            month = month.entry.display_name(),
            "month located"
        );

        let (day_index, day) =
            self.locate_day(&tokens, month, weekday).ok_or(ExtractionFailure::NoDayFound)?;
        debug!(index = day_index, day = day.get(), "day located");

        let excluded = |index: usize| {
            Some(index) == weekday || month.contains(index) || index == day_index
        };
        let (year_index, year) =
            self.locate_year(&tokens, excluded).ok_or(ExtractionFailure::NoYearFound)?;
        debug!(index = year_index, year = year.year().get(), "year located");

        let date = ParsedDate::new(day, month.entry, year.year());
        debug!(date = %date, "resolved");
        Ok(date)
    }

    /// Tries the first few non-empty lines of `text` (see
    /// [`ExtractorConfig::line_attempts`]) and returns the first date found.
    ///
    /// # Errors
    /// The failure from the first line tried, or `NoMonthFound` if `text` has
    /// no non-empty line.
    pub fn extract_from_text(&self, text: &str) -> Result<ParsedDate, ExtractionFailure> {
        let mut first_failure = None;
        for (attempt, line) in text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .take(self.config.line_attempts)
            .enumerate()
        {
            match self.extract(line) {
                Ok(date) => return Ok(date),
                Err(failure) => {
                    debug!(attempt, %failure, "no date in line");
                    first_failure.get_or_insert(failure);
                },
            }
        }
        Err(first_failure.unwrap_or(ExtractionFailure::NoMonthFound))
    }

    fn leading_weekday(&self, tokens: &[&str]) -> Option<usize> {
        let first = tokens.first()?;
        self.weekday_markers
            .iter()
            .any(|marker| marker == first)
            .then_some(0)
    }

    fn locate_month(tokens: &[&str], weekday: Option<usize>) -> Option<MonthSpan> {
        let start = weekday.map_or(0, |index| index + 1);
        (start..tokens.len()).find_map(|i| {
            let two_words = tokens
                .get(i + 1)
                .and_then(|next| lookup_month(&format!("{} {next}", tokens[i])))
                .map(|entry| MonthSpan { start: i, end: i + 1, entry });
            two_words.or_else(|| lookup_month(tokens[i]).map(|entry| MonthSpan { start: i, end: i, entry }))
        })
    }

    /// Nearest day numeral around the month, the preceding side first at
    /// equal distance.
    fn locate_day(
        &self,
        tokens: &[&str],
        month: MonthSpan,
        weekday: Option<usize>,
    ) -> Option<(usize, Day)> {
        (1..=self.config.day_window)
            .flat_map(|distance| [month.start.checked_sub(distance), Some(month.end + distance)])
            .flatten()
            .filter(|&index| index < tokens.len() && Some(index) != weekday)
            .find_map(|index| {
                let value = decode(tokens[index]).ok()?;
                let day = u8::try_from(value).ok().and_then(|v| Day::new(v).ok());
                trace!(index, token = tokens[index], value, accepted = day.is_some(), "day candidate");
                day.map(|day| (index, day))
            })
    }

    /// Last numeral in the line that resolves to a year.
    fn locate_year(
        &self,
        tokens: &[&str],
        excluded: impl Fn(usize) -> bool,
    ) -> Option<(usize, ResolvedYear)> {
        (0..tokens.len()).rev().filter(|&index| !excluded(index)).find_map(|index| {
            let token = tokens[index];
            decode(token).ok()?;
            match self.config.era.resolve(token) {
                Ok(year) => Some((index, year)),
                Err(error) => {
                    trace!(index, token, %error, "year candidate rejected");
                    None
                },
            }
        })
    }
}
