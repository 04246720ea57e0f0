//! Hebrew month names and their accepted spellings.

use crate::consts::{ADAR, ADAR_SHENI};
use crate::types::Month;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// One month of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MonthEntry {
    ordinal:      Month,
    leap_variant: bool,
    display_name: &'static str,
    #[serde(skip)]
    spellings:    &'static [&'static str],
}

impl MonthEntry {
    const fn new(
        ordinal: u8,
        leap_variant: bool,
        display_name: &'static str,
        spellings: &'static [&'static str],
    ) -> Self {
        Self {
            ordinal: Month::from_table(ordinal),
            leap_variant,
            display_name,
            spellings,
        }
    }

    /// Month ordinal counted from Tishrei
    pub const fn ordinal(&self) -> Month {
        self.ordinal
    }

    /// True for the two named Adars of a leap year, false for plain Adar and
    /// every other month.
    pub const fn is_leap_variant(&self) -> bool {
        self.leap_variant
    }

    pub const fn display_name(&self) -> &'static str {
        self.display_name
    }

    /// Every spelling that resolves to this entry, display name included
    pub const fn spellings(&self) -> &'static [&'static str] {
        self.spellings
    }
}

/// The month table, in calendar order.
pub static MONTHS: [MonthEntry; 14] = [
    MonthEntry::new(1, false, "תשרי", &["תשרי"]),
    MonthEntry::new(2, false, "חשון", &["חשון", "חשוון", "מרחשון", "מרחשוון", "מר-חשון"]),
    MonthEntry::new(3, false, "כסלו", &["כסלו", "כסליו"]),
    MonthEntry::new(4, false, "טבת", &["טבת"]),
    MonthEntry::new(5, false, "שבט", &["שבט"]),
    MonthEntry::new(ADAR, false, "אדר", &["אדר"]),
    MonthEntry::new(
        ADAR,
        true,
        "אדר א",
        &["אדר א", "אדר א'", "אדר ראשון", "אד\"ר", "אדר\"א"],
    ),
    MonthEntry::new(
        ADAR_SHENI,
        true,
        "אדר ב",
        &["אדר ב", "אדר ב'", "אדר שני", "אד\"ש", "אדר\"ב"],
    ),
    MonthEntry::new(8, false, "ניסן", &["ניסן"]),
    MonthEntry::new(9, false, "אייר", &["אייר", "איר"]),
    MonthEntry::new(10, false, "סיון", &["סיון", "סיוון"]),
    MonthEntry::new(11, false, "תמוז", &["תמוז"]),
    MonthEntry::new(12, false, "אב", &["אב", "מנחם אב", "מנ\"א"]),
    MonthEntry::new(13, false, "אלול", &["אלול"]),
];

static BY_SPELLING: Lazy<HashMap<&'static str, &'static MonthEntry>> = Lazy::new(|| {
    MONTHS
        .iter()
        .flat_map(|entry| entry.spellings.iter().map(move |&spelling| (spelling, entry)))
        .collect()
});

/// Looks up a month by exact spelling. Multi-word spellings (`אדר ב`) are
/// matched with a single space between the words.
pub fn lookup_month(token: &str) -> Option<&'static MonthEntry> {
    BY_SPELLING.get(token).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_standard_names() {
        let cases = [
            ("תשרי", 1),
            ("חשון", 2),
            ("כסלו", 3),
            ("טבת", 4),
            ("שבט", 5),
            ("אדר", 6),
            ("ניסן", 8),
            ("אייר", 9),
            ("סיון", 10),
            ("תמוז", 11),
            ("אב", 12),
            ("אלול", 13),
        ];
        for (name, ordinal) in cases {
            let entry = lookup_month(name).unwrap();
            assert_eq!(entry.ordinal().get(), ordinal, "month {name}");
            assert!(!entry.is_leap_variant(), "month {name}");
            assert_eq!(entry.display_name(), name);
        }
    }

    #[test]
    fn test_lookup_leap_variants() {
        let first = lookup_month("אד\"ר").unwrap();
        assert_eq!(first.ordinal().get(), 6);
        assert!(first.is_leap_variant());
        assert_eq!(first.display_name(), "אדר א");

        let second = lookup_month("אד\"ש").unwrap();
        assert_eq!(second.ordinal().get(), 7);
        assert!(second.is_leap_variant());
        assert_eq!(second.display_name(), "אדר ב");

        assert_eq!(lookup_month("אדר ראשון"), Some(first));
        assert_eq!(lookup_month("אדר שני"), Some(second));
        assert_eq!(lookup_month("אדר ב'"), Some(second));
    }

    #[test]
    fn test_plain_adar_is_not_a_leap_variant() {
        let adar = lookup_month("אדר").unwrap();
        let adar_rishon = lookup_month("אדר א").unwrap();
        assert_eq!(adar.ordinal(), adar_rishon.ordinal());
        assert_ne!(adar.is_leap_variant(), adar_rishon.is_leap_variant());
    }

    #[test]
    fn test_lookup_alternate_spellings() {
        assert_eq!(lookup_month("מרחשוון").unwrap().ordinal().get(), 2);
        assert_eq!(lookup_month("סיוון").unwrap().ordinal().get(), 10);
        assert_eq!(lookup_month("מנ\"א").unwrap().display_name(), "אב");
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(lookup_month("אדרר"), None);
        assert_eq!(lookup_month("טב"), None);
        assert_eq!(lookup_month(" טבת"), None);
        assert_eq!(lookup_month("אדר  ב"), None);
        assert_eq!(lookup_month(""), None);
    }

    #[test]
    fn test_spellings_are_unique() {
        let total: usize = MONTHS.iter().map(|entry| entry.spellings().len()).sum();
        assert_eq!(BY_SPELLING.len(), total);
    }

    #[test]
    fn test_display_name_is_a_spelling() {
        for entry in &MONTHS {
            assert!(entry.spellings().contains(&entry.display_name()));
        }
    }

    #[test]
    fn test_entry_serializes_plain_fields() {
        let entry = lookup_month("אד\"ש").unwrap();
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json["ordinal"], 7);
        assert_eq!(json["leap_variant"], true);
        assert_eq!(json["display_name"], "אדר ב");
    }
}
