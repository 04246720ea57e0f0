use crate::consts::{MAX_DAY, MAX_MONTH, MAX_YEAR, MIN_DAY};
use crate::error::ComponentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::{NonZeroU8, NonZeroU16};

/// A day-of-month value guaranteed to be in the range `1..=MAX_DAY` (1..=31).
///
/// No month context is checked: a Hebrew month has 29 or 30 days, but telling
/// which needs full calendar arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's within `MIN_DAY..=MAX_DAY`
    ///
    /// # Errors
    /// Returns `ComponentError::InvalidDay` if the value is 0 or > `MAX_DAY`.
    pub fn new(value: u8) -> Result<Self, ComponentError> {
        if value < MIN_DAY || value > MAX_DAY {
            return Err(ComponentError::InvalidDay(value));
        }
        NonZeroU8::new(value).map(Self).ok_or(ComponentError::InvalidDay(value))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ComponentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month ordinal in the range `1..=MAX_MONTH` (1..=13), counted from Tishrei.
///
/// Adar and the first Adar of a leap year share ordinal 6; the second Adar
/// takes 7, so every month after it is shifted by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ComponentError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ComponentError> {
        let non_zero = NonZeroU8::new(value).ok_or(ComponentError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ComponentError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Const constructor for the static month table. Panics at compile time
    /// on an out-of-range ordinal.
    pub(crate) const fn from_table(value: u8) -> Self {
        match NonZeroU8::new(value) {
            Some(non_zero) if value <= MAX_MONTH => Self(non_zero),
            _ => panic!("month ordinal out of range"),
        }
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = ComponentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An era-inclusive year (anno mundi), guaranteed to be in `1..=MAX_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ComponentError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ComponentError> {
        let non_zero = NonZeroU16::new(value).ok_or(ComponentError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(ComponentError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Year within its millennium, the part a dateline actually spells out
    /// (`5688` -> `688`).
    #[inline]
    pub const fn within_millennium(self) -> u16 {
        self.0.get() % 1000
    }
}

impl TryFrom<u16> for Year {
    type Error = ComponentError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
