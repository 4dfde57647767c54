//! The alias index.
//!
//! Records live in a shared table; every alias maps to the positions
//! ("pointers") of the records registered under it, in registration order.
//! Both structures are persistent (`im`), so a clone is a cheap snapshot
//! that later appends do not disturb.

use std::sync::Arc;

use airside_foundation::{Error, Result};
use im::{HashMap, Vector};

use crate::record::LookupRecord;

/// Alias to candidate-records index.
///
/// [`find`](Self::find) returns every record registered under an alias,
/// unfiltered by time or currency; narrowing candidates down is the job of
/// the resolution methods in [`crate::resolve`].
#[derive(Clone, Debug)]
pub struct LookupIndex<R> {
    records: Vector<Arc<R>>,
    aliases: HashMap<String, Vector<usize>>,
}

impl<R: LookupRecord> Default for LookupIndex<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: LookupRecord> LookupIndex<R> {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vector::new(),
            aliases: HashMap::new(),
        }
    }

    /// Creates an index from records, appended in order.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = R>) -> Self {
        let mut index = Self::new();
        for record in records {
            index.append(record);
        }
        index
    }

    /// Appends a record under each of its aliases.
    ///
    /// Empty aliases are ignored, and a record is registered at most once
    /// per alias however often the alias repeats.
    pub fn append(&mut self, record: R) {
        let pointer = self.records.len();
        let aliases = record.aliases();
        self.records.push_back(Arc::new(record));

        for alias in aliases {
            if alias.is_empty() {
                continue;
            }
            match self.aliases.get_mut(alias.as_str()) {
                // Pointers only grow, so a repeat can only be the last one.
                Some(pointers) => {
                    if pointers.last() != Some(&pointer) {
                        pointers.push_back(pointer);
                    }
                }
                None => {
                    self.aliases.insert(alias, Vector::unit(pointer));
                }
            }
        }
    }

    /// Returns every record registered under `code`, in registration order.
    ///
    /// Returns an empty list for unknown codes.
    #[must_use]
    pub fn find(&self, code: &str) -> Vec<&R> {
        self.aliases
            .get(code)
            .map(|pointers| {
                pointers
                    .iter()
                    .filter_map(|&pointer| self.records.get(pointer))
                    .map(Arc::as_ref)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Like [`find`](Self::find), but an unknown code is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::NotFound`](airside_foundation::ErrorKind::NotFound)
    /// if no record is registered under `code`.
    pub fn candidates(&self, code: &str) -> Result<Vec<&R>> {
        let found = self.find(code);
        if found.is_empty() {
            return Err(Error::not_found(R::placetype(), code));
        }
        Ok(found)
    }

    /// Returns true if any record is registered under `code`.
    #[must_use]
    pub fn contains_alias(&self, code: &str) -> bool {
        self.aliases.contains_key(code)
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the index holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of distinct aliases.
    #[must_use]
    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    /// Iterates over every record in registration order.
    pub fn records(&self) -> impl Iterator<Item = &R> + '_ {
        self.records.iter().map(Arc::as_ref)
    }
}

impl<R: LookupRecord> FromIterator<R> for LookupIndex<R> {
    fn from_iter<T: IntoIterator<Item = R>>(iter: T) -> Self {
        Self::from_records(iter)
    }
}

impl<R: LookupRecord> Extend<R> for LookupIndex<R> {
    fn extend<T: IntoIterator<Item = R>>(&mut self, iter: T) {
        for record in iter {
            self.append(record);
        }
    }
}
