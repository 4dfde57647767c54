//! Build-once lookup holders.

use std::sync::Arc;

use airside_foundation::Result;
use once_cell::sync::OnceCell;

use crate::index::LookupIndex;
use crate::record::LookupRecord;
use crate::source::LookupSource;

/// A lookup index built from its source on first use.
///
/// Concurrent first callers block while exactly one of them builds. A
/// failed build leaves the holder empty and returns the error to the caller
/// that attempted it; the next caller tries again. Once built, the index is
/// shared read-only; [`append`](Self::append) takes a cheap snapshot.
#[derive(Debug)]
pub struct SharedLookup<R> {
    source: LookupSource,
    cell: OnceCell<Arc<LookupIndex<R>>>,
}

impl<R: LookupRecord> SharedLookup<R> {
    /// Creates an unbuilt holder.
    #[must_use]
    pub const fn new(source: LookupSource) -> Self {
        Self {
            source,
            cell: OnceCell::new(),
        }
    }

    /// Creates a holder for the embedded dataset.
    #[must_use]
    pub const fn embedded() -> Self {
        Self::new(LookupSource::Embedded)
    }

    /// Returns the source.
    #[must_use]
    pub fn source(&self) -> &LookupSource {
        &self.source
    }

    /// Returns true once the index has been built.
    #[must_use]
    pub fn is_built(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Returns the index, building it if needed.
    ///
    /// # Errors
    ///
    /// Returns the build error if this call built the index and failed.
    pub fn get(&self) -> Result<Arc<LookupIndex<R>>> {
        self.cell
            .get_or_try_init(|| self.source.build().map(Arc::new))
            .cloned()
    }

    /// Returns a snapshot of the index with `records` appended.
    ///
    /// The shared index is not modified.
    ///
    /// # Errors
    ///
    /// Returns the build error if the index had to be built and failed.
    pub fn append(&self, records: impl IntoIterator<Item = R>) -> Result<LookupIndex<R>> {
        let mut snapshot = (*self.get()?).clone();
        snapshot.extend(records);
        Ok(snapshot)
    }
}
