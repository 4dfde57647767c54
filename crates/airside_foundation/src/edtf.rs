//! Extended Date/Time Format (EDTF) spans and range containment.
//!
//! Only the subset that appears in `edtf:inception` / `edtf:cessation`
//! properties is supported:
//!
//! - calendar dates at year, month and day precision (`2020`, `2020-06`,
//!   `2020-06-01`)
//! - qualifiers `~` (approximate), `?` (uncertain) and `%` (both), anywhere
//!   in the string; they do not move the bounds
//! - unspecified digits `X` (`201X`, `19XX`, `2020-XX`)
//! - seasons `21`-`24` in the month position
//! - intervals `a/b`, each end possibly open (`..`) or unknown (empty)
//! - the open marker `..` (and the legacy `open`)
//! - the unknown markers `""`, `uuuu` and `unknown`
//!
//! Every parsed string becomes a [`DateSpan`]: the earliest and latest day
//! the string can denote.

use chrono::{Datelike, NaiveDate};

use crate::error::{Error, Result};

/// The open-range marker.
pub const OPEN: &str = "..";

/// One end of a [`DateSpan`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Bound {
    /// Explicitly unbounded (`..`).
    Open,
    /// Not known (`""`, `uuuu`, `unknown`).
    Unknown,
    /// A concrete day.
    Date(NaiveDate),
}

impl Bound {
    /// Returns the concrete day, if any.
    #[must_use]
    pub const fn date(self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(d),
            Self::Open | Self::Unknown => None,
        }
    }

    /// Returns true for [`Bound::Open`] and [`Bound::Unknown`].
    #[must_use]
    pub const fn is_unbounded(self) -> bool {
        !matches!(self, Self::Date(_))
    }
}

/// The earliest and latest day an EDTF string can denote.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DateSpan {
    /// Earliest possible day.
    pub lower: Bound,
    /// Latest possible day.
    pub upper: Bound,
}

impl DateSpan {
    /// A span open at both ends.
    #[must_use]
    pub const fn open() -> Self {
        Self {
            lower: Bound::Open,
            upper: Bound::Open,
        }
    }

    /// A span unknown at both ends.
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            lower: Bound::Unknown,
            upper: Bound::Unknown,
        }
    }

    /// A span covering exactly one day.
    #[must_use]
    pub const fn day(date: NaiveDate) -> Self {
        Self {
            lower: Bound::Date(date),
            upper: Bound::Date(date),
        }
    }

    /// Parses an EDTF string.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidDate`](crate::ErrorKind::InvalidDate) if
    /// the string is outside the supported subset or names an impossible
    /// calendar date.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        match trimmed {
            "" | "uuuu" | "unknown" => Ok(Self::unknown()),
            OPEN | "open" => Ok(Self::open()),
            _ => match trimmed.split_once('/') {
                Some((start, end)) => parse_interval(input, start, end),
                None => {
                    let (lower, upper) = parse_date(input, trimmed)?;
                    Ok(Self {
                        lower: Bound::Date(lower),
                        upper: Bound::Date(upper),
                    })
                }
            },
        }
    }

    /// Returns the first concrete day of the span, preferring the lower bound.
    #[must_use]
    pub fn anchor(&self) -> Option<NaiveDate> {
        self.lower.date().or_else(|| self.upper.date())
    }
}

/// An inception/cessation pair describing when a record was valid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DateRange {
    /// When the record came into effect.
    pub inception: DateSpan,
    /// When the record ceased to be in effect.
    pub cessation: DateSpan,
}

impl DateRange {
    /// Parses an inception/cessation pair.
    ///
    /// # Errors
    ///
    /// Returns an error if either string is not valid EDTF.
    pub fn parse(inception: &str, cessation: &str) -> Result<Self> {
        Ok(Self {
            inception: DateSpan::parse(inception)?,
            cessation: DateSpan::parse(cessation)?,
        })
    }

    /// Returns true if the query falls within `[inception, cessation]`.
    ///
    /// The query is anchored at its lower bound (or its upper bound when the
    /// lower one is not concrete). The range runs from the earliest day of
    /// the inception to the latest day of the cessation, both inclusive; an
    /// open or unknown end accepts everything. A query with no concrete
    /// bound matches nothing.
    #[must_use]
    pub fn contains(&self, query: &DateSpan) -> bool {
        let Some(at) = query.anchor() else {
            return false;
        };
        self.contains_date(at)
    }

    /// Returns true if the day falls within `[inception, cessation]`.
    #[must_use]
    pub fn contains_date(&self, at: NaiveDate) -> bool {
        let after_start = self.inception.lower.date().is_none_or(|start| at >= start);
        let before_end = self.cessation.upper.date().is_none_or(|end| at <= end);
        after_start && before_end
    }
}

// =============================================================================
// Parsing
// =============================================================================

fn parse_interval(input: &str, start: &str, end: &str) -> Result<DateSpan> {
    if end.contains('/') {
        return Err(Error::invalid_date(input, "more than one interval separator"));
    }
    let lower = parse_endpoint(input, start)?.lower;
    let upper = parse_endpoint(input, end)?.upper;
    if let (Bound::Date(lo), Bound::Date(hi)) = (lower, upper) {
        if hi < lo {
            return Err(Error::invalid_date(input, "interval ends before it starts"));
        }
    }
    Ok(DateSpan { lower, upper })
}

fn parse_endpoint(input: &str, endpoint: &str) -> Result<DateSpan> {
    match endpoint.trim() {
        "" => Ok(DateSpan::unknown()),
        OPEN => Ok(DateSpan::open()),
        s => {
            let (lower, upper) = parse_date(input, s)?;
            Ok(DateSpan {
                lower: Bound::Date(lower),
                upper: Bound::Date(upper),
            })
        }
    }
}

/// Parses a single (non-interval) date into its earliest and latest day.
fn parse_date(input: &str, token: &str) -> Result<(NaiveDate, NaiveDate)> {
    let cleaned: String = token
        .chars()
        .filter(|c| !matches!(c, '~' | '?' | '%'))
        .collect();
    let parts: Vec<&str> = cleaned.split('-').collect();

    let (year_lo, year_hi) = parse_year(input, parts[0])?;
    match parts.as_slice() {
        [_] => Ok((ymd(input, year_lo, 1, 1)?, ymd(input, year_hi, 12, 31)?)),
        [_, month] => {
            if let Some(season) = season(month) {
                return season_span(input, year_lo, year_hi, season);
            }
            let (month_lo, month_hi) = parse_month(input, month)?;
            Ok((
                ymd(input, year_lo, month_lo, 1)?,
                ymd(input, year_hi, month_hi, days_in_month(year_hi, month_hi))?,
            ))
        }
        [_, month, day] => {
            let (month_lo, month_hi) = parse_month(input, month)?;
            let (day_lo, day_hi) = parse_day(input, day)?;
            let last = days_in_month(year_hi, month_hi);
            if !has_unspecified(day) && day_hi > days_in_month(year_lo, month_lo) {
                return Err(Error::invalid_date(input, "day out of range for month"));
            }
            Ok((
                ymd(input, year_lo, month_lo, day_lo)?,
                ymd(input, year_hi, month_hi, day_hi.min(last))?,
            ))
        }
        _ => Err(Error::invalid_date(input, "too many date components")),
    }
}

fn parse_year(input: &str, year: &str) -> Result<(i32, i32)> {
    if !is_pattern(year, 4) {
        return Err(Error::invalid_date(input, "year must have four digits"));
    }
    let lo = expand(year, '0').ok_or_else(|| Error::invalid_date(input, "bad year"))?;
    let hi = expand(year, '9').ok_or_else(|| Error::invalid_date(input, "bad year"))?;
    Ok((lo, hi))
}

fn parse_month(input: &str, month: &str) -> Result<(u32, u32)> {
    if !is_pattern(month, 2) {
        return Err(Error::invalid_date(input, "month must have two digits"));
    }
    let lo: u32 = expand(month, '0').ok_or_else(|| Error::invalid_date(input, "bad month"))?;
    let hi: u32 = expand(month, '9').ok_or_else(|| Error::invalid_date(input, "bad month"))?;
    if has_unspecified(month) {
        let (lo, hi) = (lo.max(1), hi.min(12));
        if lo > hi {
            return Err(Error::invalid_date(input, "month out of range"));
        }
        return Ok((lo, hi));
    }
    if !(1..=12).contains(&lo) {
        return Err(Error::invalid_date(input, "month out of range"));
    }
    Ok((lo, hi))
}

fn parse_day(input: &str, day: &str) -> Result<(u32, u32)> {
    if !is_pattern(day, 2) {
        return Err(Error::invalid_date(input, "day must have two digits"));
    }
    let lo: u32 = expand(day, '0').ok_or_else(|| Error::invalid_date(input, "bad day"))?;
    let hi: u32 = expand(day, '9').ok_or_else(|| Error::invalid_date(input, "bad day"))?;
    if has_unspecified(day) {
        let (lo, hi) = (lo.max(1), hi.min(31));
        if lo > hi {
            return Err(Error::invalid_date(input, "day out of range"));
        }
        return Ok((lo, hi));
    }
    if !(1..=31).contains(&lo) {
        return Err(Error::invalid_date(input, "day out of range"));
    }
    Ok((lo, hi))
}

/// Seasons: 21 spring, 22 summer, 23 autumn, 24 winter.
fn season(month: &str) -> Option<u32> {
    match month {
        "21" => Some(21),
        "22" => Some(22),
        "23" => Some(23),
        "24" => Some(24),
        _ => None,
    }
}

fn season_span(
    input: &str,
    year_lo: i32,
    year_hi: i32,
    season: u32,
) -> Result<(NaiveDate, NaiveDate)> {
    match season {
        21 => Ok((ymd(input, year_lo, 3, 1)?, ymd(input, year_hi, 5, 31)?)),
        22 => Ok((ymd(input, year_lo, 6, 1)?, ymd(input, year_hi, 8, 31)?)),
        23 => Ok((ymd(input, year_lo, 9, 1)?, ymd(input, year_hi, 11, 30)?)),
        _ => Ok((
            ymd(input, year_lo, 12, 1)?,
            ymd(input, year_hi + 1, 2, days_in_month(year_hi + 1, 2))?,
        )),
    }
}

fn ymd(input: &str, year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| Error::invalid_date(input, "not a calendar date"))
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map_or(28, |d| d.day())
}

fn is_pattern(s: &str, len: usize) -> bool {
    s.len() == len && s.chars().all(|c| c.is_ascii_digit() || c == 'X' || c == 'x')
}

fn has_unspecified(s: &str) -> bool {
    s.contains(['X', 'x'])
}

fn expand<T: std::str::FromStr>(s: &str, fill: char) -> Option<T> {
    s.chars()
        .map(|c| if c == 'X' || c == 'x' { fill } else { c })
        .collect::<String>()
        .parse()
        .ok()
}
