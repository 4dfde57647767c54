//! Temporal resolution: narrowing candidates to one record.
//!
//! Two questions are answered over the candidates of a code:
//!
//! - which record is current ([`LookupIndex::find_current`])
//! - which record was in effect on a given date
//!   ([`LookupIndex::find_for_date`] and its strict variant)
//!
//! Zero matches is [`ErrorKind::NotFound`](airside_foundation::ErrorKind::NotFound);
//! ambiguity is
//! [`ErrorKind::MultipleCandidates`](airside_foundation::ErrorKind::MultipleCandidates).

use airside_foundation::{DateSpan, Error, Result};
use tracing::debug;

use crate::index::LookupIndex;
use crate::record::LookupRecord;

/// The point in time a code is resolved at.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum When {
    /// Whatever is flagged current.
    Current,
    /// Whatever was in effect on a date.
    Date(DateSpan),
}

impl When {
    /// Parses an EDTF date into [`When::Date`].
    ///
    /// # Errors
    ///
    /// Returns an error if `input` is not valid EDTF.
    pub fn date(input: &str) -> Result<Self> {
        DateSpan::parse(input).map(Self::Date)
    }
}

/// How overlapping validity windows are handled for [`When::Date`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DateMatch {
    /// The first containing candidate, in index order, wins.
    #[default]
    FirstMatch,
    /// More than one containing candidate is an error.
    Strict,
}

impl<R: LookupRecord> LookupIndex<R> {
    /// Returns every candidate for `code` flagged current.
    #[must_use]
    pub fn find_current_all(&self, code: &str) -> Vec<&R> {
        self.find(code)
            .into_iter()
            .filter(|record| record.is_current() == 1)
            .collect()
    }

    /// Returns the single current record for `code`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no candidate is current, `MultipleCandidates` if
    /// more than one is.
    pub fn find_current(&self, code: &str) -> Result<&R> {
        single(code, self.find_current_all(code))
    }

    /// Returns the first candidate for `code` whose validity window contains
    /// `date`.
    ///
    /// Candidates are tried in index order and the search stops at the
    /// first match; a later candidate whose window also contains the date is
    /// not considered. See [`find_for_date_strict`](Self::find_for_date_strict).
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no window contains the date, or a date error if
    /// `date` or a candidate's window is not valid EDTF.
    pub fn find_for_date(&self, code: &str, date: &str) -> Result<&R> {
        self.resolve(code, When::date(date)?, DateMatch::FirstMatch)
    }

    /// Returns every candidate for `code` whose validity window contains
    /// `date`.
    ///
    /// # Errors
    ///
    /// Returns a date error if `date` or a candidate's window is not valid
    /// EDTF.
    pub fn find_all_for_date(&self, code: &str, date: &str) -> Result<Vec<&R>> {
        self.containing(code, &DateSpan::parse(date)?)
    }

    /// Returns the only candidate for `code` whose validity window contains
    /// `date`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` on zero matches and `MultipleCandidates` when
    /// windows overlap on `date`.
    pub fn find_for_date_strict(&self, code: &str, date: &str) -> Result<&R> {
        self.resolve(code, When::date(date)?, DateMatch::Strict)
    }

    /// Resolves `code` at `when`.
    ///
    /// `matching` only applies to [`When::Date`]; current resolution is
    /// always strict.
    ///
    /// # Errors
    ///
    /// See [`find_current`](Self::find_current),
    /// [`find_for_date`](Self::find_for_date) and
    /// [`find_for_date_strict`](Self::find_for_date_strict).
    pub fn resolve(&self, code: &str, when: When, matching: DateMatch) -> Result<&R> {
        match (when, matching) {
            (When::Current, _) => self.find_current(code),
            (When::Date(date), DateMatch::Strict) => single(code, self.containing(code, &date)?),
            (When::Date(date), DateMatch::FirstMatch) => {
                for candidate in self.find(code) {
                    if covers(candidate, &date)? {
                        return Ok(candidate);
                    }
                }
                Err(Error::not_found(R::placetype(), code))
            }
        }
    }

    fn containing(&self, code: &str, date: &DateSpan) -> Result<Vec<&R>> {
        let mut matches = Vec::new();
        for candidate in self.find(code) {
            if covers(candidate, date)? {
                matches.push(candidate);
            }
        }
        Ok(matches)
    }
}

fn covers<R: LookupRecord>(candidate: &R, date: &DateSpan) -> Result<bool> {
    let range = candidate.date_range().map_err(|err| {
        err.with_frame(format!(
            "reading dates of {} {}",
            R::placetype().noun(),
            candidate.wof_id()
        ))
    })?;
    let matched = range.contains(date);
    debug!(
        id = candidate.wof_id(),
        name = candidate.name(),
        inception = candidate.inception(),
        cessation = candidate.cessation(),
        matched,
        "date candidate"
    );
    Ok(matched)
}

fn single<'a, R: LookupRecord>(code: &str, mut matches: Vec<&'a R>) -> Result<&'a R> {
    match matches.len() {
        0 => Err(Error::not_found(R::placetype(), code)),
        1 => Ok(matches.remove(0)),
        _ => Err(Error::multiple_candidates(R::placetype(), code)),
    }
}
