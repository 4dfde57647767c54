//! The record contract shared by every lookup dataset.

use std::fmt;

use airside_foundation::{DateRange, Placetype, Record, RecordId, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::kind::LookupKind;

/// Currency value used when a record does not state one.
pub const UNKNOWN_CURRENCY: i64 = -1;

pub(crate) const fn unknown_currency() -> i64 {
    UNKNOWN_CURRENCY
}

/// A flat, versioned record that can be found by any of its aliases.
///
/// Several records may share an alias: each version of a place is its own
/// record, told apart by its currency flag and validity window.
pub trait LookupRecord:
    Clone + fmt::Debug + fmt::Display + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// The dataset family this record belongs to.
    const KIND: LookupKind;

    /// The record id.
    fn wof_id(&self) -> RecordId;

    /// The display name.
    fn name(&self) -> &str;

    /// The currency flag (`1` current, `0` not, `-1` unknown).
    fn is_current(&self) -> i64;

    /// The inception date (EDTF).
    fn inception(&self) -> &str;

    /// The cessation date (EDTF).
    fn cessation(&self) -> &str;

    /// Every string this record can be found under, in registration order.
    ///
    /// May contain empty strings and repeats; the index ignores both.
    fn aliases(&self) -> Vec<String>;

    /// Builds the lookup record from a raw record.
    ///
    /// # Errors
    ///
    /// Returns a data-integrity error if a required property is absent or
    /// malformed.
    fn from_record(record: &Record) -> Result<Self>;

    /// The placetype of this record.
    fn placetype() -> Placetype {
        Self::KIND.placetype()
    }

    /// Parses the validity window.
    ///
    /// # Errors
    ///
    /// Returns an error if either date is not valid EDTF.
    fn date_range(&self) -> Result<DateRange> {
        DateRange::parse(self.inception(), self.cessation())
    }
}
