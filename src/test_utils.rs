//! Shorthand constructors for tests.

use crate::types::{Day, Month, Year};

pub fn day(value: u8) -> Day {
    Day::new(value).unwrap()
}

pub fn month(value: u8) -> Month {
    Month::new(value).unwrap()
}

pub fn year(value: u16) -> Year {
    Year::new(value).unwrap()
}
