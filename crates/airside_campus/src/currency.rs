//! The currency filter: is a record usable "as of now"?

use airside_foundation::{Error, ErrorContext, ErrorKind, Record, RecordId, Result, edtf};
use airside_storage::RecordStore;
use tracing::warn;

/// Decides whether a loaded record represents a valid-to-use record.
///
/// - Deprecated records (non-empty `edtf:deprecated`) are skipped.
/// - Records without `mz:is_current` are rejected.
/// - Records whose `mz:is_current` is not 1 are kept. If their cessation is
///   empty or open, the inconsistency is logged when `warn_is_current` is on.
#[derive(Copy, Clone, Debug)]
pub struct CurrencyFilter {
    warn_is_current: bool,
}

impl Default for CurrencyFilter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl CurrencyFilter {
    /// Creates a filter.
    #[must_use]
    pub const fn new(warn_is_current: bool) -> Self {
        Self { warn_is_current }
    }

    /// Returns true if currency inconsistencies are logged.
    #[must_use]
    pub const fn warns(&self) -> bool {
        self.warn_is_current
    }

    /// Loads `id` from `store` and checks it.
    ///
    /// Returns `Ok(None)` when the record must be skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be loaded or has no currency
    /// flag. Load failures carry the id as context.
    pub fn load<S: RecordStore + ?Sized>(&self, store: &S, id: RecordId) -> Result<Option<Record>> {
        let record = store.load_record(id).map_err(|err| {
            let context = err
                .context
                .clone()
                .unwrap_or_else(ErrorContext::new)
                .with_id(id);
            err.with_context(context)
        })?;
        self.check(record)
    }

    /// Checks an already loaded record.
    ///
    /// Returns `Ok(None)` when the record must be skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::MissingCurrencyFlag`] if `mz:is_current` is absent.
    pub fn check(&self, record: Record) -> Result<Option<Record>> {
        if record.is_deprecated() {
            return Ok(None);
        }

        let Some(is_current) = record.is_current() else {
            return Err(Error::new(ErrorKind::MissingCurrencyFlag(record.id())));
        };

        if is_current != 1 && self.warn_is_current {
            let cessation = record.cessation();
            if cessation.is_empty() || cessation == edtf::OPEN || cessation == "open" {
                warn!(
                    id = record.id(),
                    is_current,
                    name = record.name().unwrap_or_default(),
                    inception = %record.inception(),
                    cessation = %cessation,
                    "unexpected mz:is_current property"
                );
            }
        }

        Ok(Some(record))
    }
}
