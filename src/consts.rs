/// First day of a month
pub const MIN_DAY: u8 = 1;
/// Largest day number accepted as a day-of-month numeral
pub const MAX_DAY: u8 = 31;

/// Number of month ordinals, counting the second Adar separately
pub const MAX_MONTH: u8 = 13;
/// Ordinal shared by Adar and the first Adar of a leap year
pub const ADAR: u8 = 6;
/// Ordinal of the second Adar of a leap year
pub const ADAR_SHENI: u8 = 7;

/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Largest value `encode` will spell out
pub const MAX_ENCODABLE: i64 = MAX_YEAR as i64;

/// Geresh, marks a single-letter numeral (`א'`)
pub const GERESH: char = '\'';
/// Gershayim, sits before the last letter of a multi-letter numeral (`כ"א`)
pub const GERSHAYIM: char = '"';
/// Hebrew punctuation geresh (U+05F3), normalized to [`GERESH`]
pub const HEBREW_GERESH: char = '\u{05F3}';
/// Hebrew punctuation gershayim (U+05F4), normalized to [`GERSHAYIM`]
pub const HEBREW_GERSHAYIM: char = '\u{05F4}';
/// Typographic quotes folded into the ASCII marks
pub const APOSTROPHE_LOOKALIKES: [char; 2] = ['\u{2019}', '\u{2018}'];
pub const QUOTE_LOOKALIKES: [char; 2] = ['\u{201C}', '\u{201D}'];

/// Implicit thousands of the current era (the `ה'` in `ה'תרפ"ח`)
pub const MILLENNIUM_BASE: u16 = 5000;
/// Written millennium marker stripped from year tokens
pub const MILLENNIUM_MARKER: &str = "ה'";
/// Bare millennium letter, stripped only when glued to an era prefix
pub const MILLENNIUM_LETTER: char = 'ה';

/// Earlier of the two recognized centuries (5600, `תר`)
pub const LOWER_ERA_BASE: u16 = 5600;
pub const LOWER_ERA_PREFIX: &str = "תר";
/// Later of the two recognized centuries (5700, `תש`)
pub const HIGHER_ERA_BASE: u16 = 5700;
pub const HIGHER_ERA_PREFIX: &str = "תש";

/// Short-form years above this value resolve against [`LOWER_ERA_BASE`],
/// below it against [`HIGHER_ERA_BASE`].
pub const SHORT_YEAR_BOUNDARY: u16 = 60;
/// Short forms are written with tens and units only
pub const SHORT_YEAR_LIMIT: u16 = 100;

/// Introductory greeting abbreviations removed before tokenizing
pub const GREETINGS: [&str; 2] = ["ב\"ה", "בס\"ד"];

/// Day-of-week markers that may lead a dateline
pub const WEEKDAY_MARKERS: [&str; 8] = ["א'", "ב'", "ג'", "ד'", "ה'", "ו'", "ש'", "ש\"ק"];

/// How many tokens on each side of the month are searched for the day
pub const DAY_WINDOW: usize = 2;

/// Non-empty lines tried by `extract_date_from_text`
pub const LINE_ATTEMPTS: usize = 3;
