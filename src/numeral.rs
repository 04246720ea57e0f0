//! Hebrew numerals (gematria): the letter alphabet and a codec over it.
//!
//! Gematria is additive: a numeral's value is the plain sum of its letters'
//! face values, so decoding ignores letter order. Encoding is greedy, largest
//! letter first, which yields the conventional descending spelling.
//!
//! Written numerals are usually marked as such: a geresh after a single letter
//! (`א'`) or gershayim before the last letter of a longer one (`כ"א`). The
//! decoder strips these marks and records where they were, but never rejects
//! a numeral because a mark sits somewhere unexpected.

use crate::consts::{
    APOSTROPHE_LOOKALIKES, GERESH, GERSHAYIM, HEBREW_GERESH, HEBREW_GERSHAYIM, MAX_ENCODABLE,
    QUOTE_LOOKALIKES,
};
use crate::error::{DecodeError, EncodeError};
use std::fmt;

/// Letters of the numeral alphabet with their face values, largest first.
///
/// Final letter forms (`ך ם ן ף ץ`) are deliberately absent: they never
/// appear in a numeral.
pub const ALPHABET: [(char, u16); 22] = [
    ('ת', 400),
    ('ש', 300),
    ('ר', 200),
    ('ק', 100),
    ('צ', 90),
    ('פ', 80),
    ('ע', 70),
    ('ס', 60),
    ('נ', 50),
    ('מ', 40),
    ('ל', 30),
    ('כ', 20),
    ('י', 10),
    ('ט', 9),
    ('ח', 8),
    ('ז', 7),
    ('ו', 6),
    ('ה', 5),
    ('ד', 4),
    ('ג', 3),
    ('ב', 2),
    ('א', 1),
];

/// Face value of a single letter, or `None` if it is not a numeral letter.
pub const fn letter_value(letter: char) -> Option<u16> {
    let value = match letter {
        'א' => 1,
        'ב' => 2,
        'ג' => 3,
        'ד' => 4,
        'ה' => 5,
        'ו' => 6,
        'ז' => 7,
        'ח' => 8,
        'ט' => 9,
        'י' => 10,
        'כ' => 20,
        'ל' => 30,
        'מ' => 40,
        'נ' => 50,
        'ס' => 60,
        'ע' => 70,
        'פ' => 80,
        'צ' => 90,
        'ק' => 100,
        'ר' => 200,
        'ש' => 300,
        'ת' => 400,
        _ => return None,
    };
    Some(value)
}

/// Any spelling of the single-letter mark.
pub(crate) fn is_geresh(c: char) -> bool {
    c == GERESH || c == HEBREW_GERESH || APOSTROPHE_LOOKALIKES.contains(&c)
}

/// Any spelling of the multi-letter mark.
pub(crate) fn is_gershayim(c: char) -> bool {
    c == GERSHAYIM || c == HEBREW_GERSHAYIM || QUOTE_LOOKALIKES.contains(&c)
}

/// Removes every numeral mark from `token`.
pub(crate) fn strip_marks(token: &str) -> String {
    token.chars().filter(|&c| !is_geresh(c) && !is_gershayim(c)).collect()
}

/// How a numeral token was punctuated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralMark {
    /// No marks at all (`כא`)
    Bare,
    /// One letter with a leading or trailing geresh (`א'`)
    Geresh,
    /// Gershayim directly before the last letter (`כ"א`)
    Gershayim,
    /// Marks present but not in either conventional position
    Irregular,
}

/// A decoded numeral: its letters with marks removed, the marking style it was
/// written in, and its value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumeralToken {
    letters: String,
    mark:    NumeralMark,
    value:   u32,
}

impl NumeralToken {
    /// Parses a single token.
    ///
    /// # Errors
    /// `DecodeError::Empty` if no letters remain after removing marks,
    /// `DecodeError::InvalidCharacter` for anything outside the alphabet,
    /// `DecodeError::Overflow` if the sum does not fit in a `u32`.
    pub fn parse(token: &str) -> Result<Self, DecodeError> {
        let token = token.trim();
        let letters = strip_marks(token);
        if letters.is_empty() {
            return Err(DecodeError::Empty);
        }

        let mut value: u32 = 0;
        for character in letters.chars() {
            let face = letter_value(character).ok_or(DecodeError::InvalidCharacter { character })?;
            value = value.checked_add(u32::from(face)).ok_or(DecodeError::Overflow)?;
        }

        let mark = classify_marks(token, letters.chars().count());
        Ok(Self { letters, mark, value })
    }

    /// Letters of the numeral, marks removed
    pub fn letters(&self) -> &str {
        &self.letters
    }

    pub const fn mark(&self) -> NumeralMark {
        self.mark
    }

    pub const fn value(&self) -> u32 {
        self.value
    }
}

impl fmt::Display for NumeralToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.letters)
    }
}

fn classify_marks(token: &str, letter_count: usize) -> NumeralMark {
    let chars: Vec<char> = token.chars().collect();
    let gereshes = chars.iter().filter(|&&c| is_geresh(c)).count();
    let gershayims = chars.iter().filter(|&&c| is_gershayim(c)).count();

    match (gereshes, gershayims) {
        (0, 0) => NumeralMark::Bare,
        (1, 0)
            if letter_count == 1
                && (chars.first().is_some_and(|&c| is_geresh(c))
                    || chars.last().is_some_and(|&c| is_geresh(c))) =>
        {
            NumeralMark::Geresh
        },
        (0, 1)
            if letter_count >= 2
                && chars.len() >= 2
                && is_gershayim(chars[chars.len() - 2])
                && !is_gershayim(chars[chars.len() - 1]) =>
        {
            NumeralMark::Gershayim
        },
        _ => NumeralMark::Irregular,
    }
}

/// Decodes a numeral token to its value.
///
/// ```
/// assert_eq!(gematria_date::decode("כ\"א"), Ok(21));
/// assert_eq!(gematria_date::decode("קנט"), Ok(159));
/// ```
///
/// # Errors
/// See [`NumeralToken::parse`].
pub fn decode(token: &str) -> Result<u32, DecodeError> {
    NumeralToken::parse(token).map(|numeral| numeral.value())
}

/// Spells `value` as bare numeral letters.
///
/// 15 and 16 are written `טו` and `טז` wherever they occur, as custom
/// requires; everything else is greedy.
///
/// # Errors
/// `EncodeError::OutOfRange` unless `1 <= value <= MAX_ENCODABLE`.
pub fn encode(value: i64) -> Result<String, EncodeError> {
    if !(1..=MAX_ENCODABLE).contains(&value) {
        return Err(EncodeError::OutOfRange(value));
    }
    let value = u16::try_from(value).map_err(|_| EncodeError::OutOfRange(value))?;
    Ok(spell(value))
}

/// Greedy spelling behind [`encode`], for values already known to be in
/// range. Zero spells as the empty string.
pub(crate) fn spell(value: u16) -> String {
    let mut remaining = value;
    let mut out = String::new();
    while remaining > 0 {
        if remaining == 15 || remaining == 16 {
            out.push('ט');
            remaining -= 9;
            continue;
        }
        let Some((letter, face)) = ALPHABET.iter().copied().find(|&(_, face)| face <= remaining)
        else {
            break;
        };
        out.push(letter);
        remaining -= face;
    }
    out
}

/// Spells `value` with conventional numeral marks: `א'`, `כ"א`, `תרפ"ח`.
///
/// # Errors
/// Same as [`encode`].
pub fn format_numeral(value: i64) -> Result<String, EncodeError> {
    let letters = encode(value)?;
    let mut chars: Vec<char> = letters.chars().collect();
    if chars.len() == 1 {
        chars.push(GERESH);
    } else {
        chars.insert(chars.len() - 1, GERSHAYIM);
    }
    Ok(chars.into_iter().collect())
}
