//! Year resolution: turning a written year numeral into an era-inclusive year.
//!
//! Datelines spell the year within its millennium, usually with the century
//! letters (`תרפ"ח` = 688, so 5688). Casual writing drops the century too and
//! leaves only tens and units (`פ"ח`). For those short forms the century is
//! inferred: values above [`EraPolicy::boundary`] are taken as the earlier
//! century (`תר`, 5600), values below it as the later one (`תש`, 5700).

use crate::consts::{
    HIGHER_ERA_BASE, HIGHER_ERA_PREFIX, LOWER_ERA_BASE, LOWER_ERA_PREFIX, MILLENNIUM_BASE,
    MILLENNIUM_LETTER, SHORT_YEAR_BOUNDARY, SHORT_YEAR_LIMIT,
};
use crate::error::YearError;
use crate::numeral::{decode, is_geresh, spell, strip_marks};
use crate::prelude::*;
use crate::types::Year;
use serde::{Deserialize, Serialize};

/// One of the two recognized centuries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EraAnchor {
    /// 5600 (`תר`)
    #[default]
    Lower,
    /// 5700 (`תש`)
    Higher,
}

impl EraAnchor {
    pub const fn base(self) -> u16 {
        match self {
            Self::Lower => LOWER_ERA_BASE,
            Self::Higher => HIGHER_ERA_BASE,
        }
    }

    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Lower => LOWER_ERA_PREFIX,
            Self::Higher => HIGHER_ERA_PREFIX,
        }
    }
}

/// How a year's century was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum YearResolution {
    /// The token spelled the century out.
    Prefixed(EraAnchor),
    /// Short form; the century was inferred from the boundary.
    Inferred(EraAnchor),
    /// Hundreds written without a recognized century; only the millennium
    /// is implied.
    Unanchored,
}

/// Boundary heuristic for short-form years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EraPolicy {
    /// Short forms above this resolve to [`EraAnchor::Lower`], below it to
    /// [`EraAnchor::Higher`]. Must stay below 100.
    pub boundary:    u16,
    /// Anchor used for a short form exactly at the boundary.
    pub at_boundary: EraAnchor,
}

impl Default for EraPolicy {
    fn default() -> Self {
        Self {
            boundary:    SHORT_YEAR_BOUNDARY,
            at_boundary: EraAnchor::Lower,
        }
    }
}

impl EraPolicy {
    /// Anchor for a short-form value.
    pub fn anchor_for(&self, short_value: u32) -> EraAnchor {
        let boundary = u32::from(self.boundary);
        match short_value.cmp(&boundary) {
            std::cmp::Ordering::Greater => EraAnchor::Lower,
            std::cmp::Ordering::Less => EraAnchor::Higher,
            std::cmp::Ordering::Equal => self.at_boundary,
        }
    }

    /// Resolves a year token to an era-inclusive year.
    ///
    /// A leading millennium marker (`ה'`, or a bare `ה` glued to a century
    /// prefix) is dropped first. A literal `תר`/`תש` prefix then fixes the
    /// century; otherwise a value under 100 is a short form resolved through
    /// the boundary, and anything larger is counted from the millennium.
    ///
    /// Only years of the current millennium are accepted: `תתר` (5000 + 1400)
    /// has no dateline spelling that would tell it apart from `תר`.
    ///
    /// # Errors
    /// `YearError::Decode` if the token is not a numeral,
    /// `YearError::OutsideMillennium` if the year falls outside 5001-5999.
    pub fn resolve(&self, token: &str) -> Result<ResolvedYear, YearError> {
        let letters = strip_marks(strip_millennium(token.trim()));

        let (base, value, resolution) = if let Some((anchor, rest)) = split_era_prefix(&letters) {
            let rest_value = if rest.is_empty() { 0 } else { decode(rest)? };
            (anchor.base(), rest_value, YearResolution::Prefixed(anchor))
        } else {
            let value = decode(&letters)?;
            if value < u32::from(SHORT_YEAR_LIMIT) {
                let anchor = self.anchor_for(value);
                (anchor.base(), value, YearResolution::Inferred(anchor))
            } else {
                (MILLENNIUM_BASE, value, YearResolution::Unanchored)
            }
        };

        let numeric = u32::from(base).saturating_add(value);
        if !current_millennium().contains(&numeric) {
            return Err(YearError::OutsideMillennium(numeric));
        }
        let numeric = u16::try_from(numeric).map_err(|_| YearError::OutsideMillennium(numeric))?;
        let year = Year::new(numeric)?;
        trace!(token, year = year.get(), ?resolution, "resolved year");

        Ok(ResolvedYear {
            year,
            display: spell(year.within_millennium()),
            resolution,
        })
    }
}

/// Resolves a year token with the default [`EraPolicy`].
///
/// # Errors
/// See [`EraPolicy::resolve`].
pub fn resolve_year(token: &str) -> Result<ResolvedYear, YearError> {
    EraPolicy::default().resolve(token)
}

/// A resolved year and its normalized spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Display)]
#[display(fmt = "{display}")]
pub struct ResolvedYear {
    year:       Year,
    display:    String,
    resolution: YearResolution,
}

impl ResolvedYear {
    pub const fn year(&self) -> Year {
        self.year
    }

    /// Year within the millennium, spelled with bare letters (`תרפח`)
    pub fn display(&self) -> &str {
        &self.display
    }

    pub const fn resolution(&self) -> YearResolution {
        self.resolution
    }
}

fn strip_millennium(token: &str) -> &str {
    let mut chars = token.chars();
    if chars.next() != Some(MILLENNIUM_LETTER) {
        return token;
    }
    let after_letter = chars.as_str();
    match chars.next() {
        Some(mark) if is_geresh(mark) => chars.as_str(),
        _ if after_letter.starts_with(LOWER_ERA_PREFIX)
            || after_letter.starts_with(HIGHER_ERA_PREFIX) =>
        {
            after_letter
        },
        _ => token,
    }
}

fn split_era_prefix(letters: &str) -> Option<(EraAnchor, &str)> {
    [EraAnchor::Lower, EraAnchor::Higher]
        .into_iter()
        .find_map(|anchor| letters.strip_prefix(anchor.prefix()).map(|rest| (anchor, rest)))
}

/// Years a dateline can spell: 5001 through 5999.
pub(crate) fn current_millennium() -> std::ops::RangeInclusive<u32> {
    let base = u32::from(MILLENNIUM_BASE);
    base + 1..=base + 999
}
