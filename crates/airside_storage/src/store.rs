//! Store contracts consumed by hierarchy derivation.

use std::sync::Arc;

use airside_foundation::{Record, RecordId, Result};

/// Key-to-document lookup.
pub trait RecordStore {
    /// Returns the raw document bytes for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::RecordNotFound`](airside_foundation::ErrorKind::RecordNotFound)
    /// if the store has no document for `id`, or an I/O error if it could
    /// not be read.
    fn load(&self, id: RecordId) -> Result<Vec<u8>>;

    /// Loads and parses the document for `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be loaded or is not a record.
    fn load_record(&self, id: RecordId) -> Result<Record> {
        let bytes = self.load(id)?;
        Record::from_slice(&bytes)
    }
}

/// Parent/child/placetype and supersession queries over a flat index.
///
/// Results are distinct and in ascending id order.
pub trait RelationalIndex {
    /// Returns the ids of the immediate children of `parent_id` whose
    /// placetype label is `placetype`.
    ///
    /// # Errors
    ///
    /// Returns an error if the index cannot be queried.
    fn children(&self, parent_id: RecordId, placetype: &str) -> Result<Vec<RecordId>>;

    /// Returns the ids that supersede `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the index cannot be queried.
    fn superseded_by(&self, id: RecordId) -> Result<Vec<RecordId>>;
}

impl<T: RecordStore + ?Sized> RecordStore for &T {
    fn load(&self, id: RecordId) -> Result<Vec<u8>> {
        (**self).load(id)
    }
}

impl<T: RecordStore + ?Sized> RecordStore for Arc<T> {
    fn load(&self, id: RecordId) -> Result<Vec<u8>> {
        (**self).load(id)
    }
}

impl<T: RelationalIndex + ?Sized> RelationalIndex for &T {
    fn children(&self, parent_id: RecordId, placetype: &str) -> Result<Vec<RecordId>> {
        (**self).children(parent_id, placetype)
    }

    fn superseded_by(&self, id: RecordId) -> Result<Vec<RecordId>> {
        (**self).superseded_by(id)
    }
}

impl<T: RelationalIndex + ?Sized> RelationalIndex for Arc<T> {
    fn children(&self, parent_id: RecordId, placetype: &str) -> Result<Vec<RecordId>> {
        (**self).children(parent_id, placetype)
    }

    fn superseded_by(&self, id: RecordId) -> Result<Vec<RecordId>> {
        (**self).superseded_by(id)
    }
}
