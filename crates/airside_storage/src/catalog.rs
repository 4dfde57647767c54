//! In-memory record store and relational index.
//!
//! A [`Catalog`] holds every indexed document and maintains bidirectional
//! indices for the two relations derivation needs:
//! - Containment: parent -> placetype label -> children, and child -> parent
//! - Supersession: id -> successors, and id -> predecessors
//!
//! Supersession edges are collected from both sides: `wof:superseded_by`
//! on the old record and `wof:supersedes` on the new one.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::sync::Arc;

use airside_foundation::{Error, Record, RecordId, Result};
use tracing::{debug, info};

use crate::iterate::{Cancellation, DocumentSource};
use crate::store::{RecordStore, RelationalIndex};
use crate::uri;

#[derive(Clone, Debug)]
struct Entry {
    bytes: Arc<[u8]>,
    record: Record,
}

/// Indexed documents with containment and supersession indices.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    /// Documents by id.
    entries: HashMap<RecordId, Entry>,
    /// Forward containment: parent -> placetype label -> children.
    children: HashMap<RecordId, HashMap<String, BTreeSet<RecordId>>>,
    /// Reverse containment: child -> (parent, placetype label).
    parents: HashMap<RecordId, (RecordId, String)>,
    /// Forward supersession: id -> ids that supersede it.
    successors: HashMap<RecordId, BTreeSet<RecordId>>,
    /// Reverse supersession: id -> ids it supersedes.
    predecessors: HashMap<RecordId, BTreeSet<RecordId>>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from every document in `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if iteration fails or a document is not a record.
    pub fn from_source(source: &dyn DocumentSource) -> Result<Self> {
        let mut catalog = Self::new();
        catalog.extend_from(source, &Cancellation::new())?;
        Ok(catalog)
    }

    /// Indexes every document in `source`, stopping early if `cancel` is
    /// signalled.
    ///
    /// # Errors
    ///
    /// Returns an error if iteration fails or a document is not a record.
    pub fn extend_from(&mut self, source: &dyn DocumentSource, cancel: &Cancellation) -> Result<()> {
        let before = self.len();
        source.for_each(cancel, &mut |path, bytes| {
            self.insert_path(path, bytes)?;
            Ok(())
        })?;
        info!(added = self.len() - before, total = self.len(), "catalog indexed");
        Ok(())
    }

    /// Indexes a document read from `path`.
    ///
    /// Alternate-geometry files are ignored and yield `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a record path or the bytes are
    /// not a record.
    pub fn insert_path(&mut self, path: &Path, bytes: &[u8]) -> Result<Option<RecordId>> {
        let parsed = uri::parse_path(path)?;
        if parsed.is_alternate() {
            debug!(path = %path.display(), "skip alternate");
            return Ok(None);
        }
        let id = self.insert(bytes)?;
        if id != parsed.id {
            debug!(path = %path.display(), id, "document id differs from path");
        }
        Ok(Some(id))
    }

    /// Indexes a document, replacing any previous document with the same id.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a record.
    pub fn insert(&mut self, bytes: &[u8]) -> Result<RecordId> {
        let record = Record::from_slice(bytes)?;
        let id = record.id();
        if self.entries.contains_key(&id) {
            self.remove(id);
        }

        if let (Some(parent), Some(label)) = (record.parent_id(), record.placetype_label()) {
            self.children
                .entry(parent)
                .or_default()
                .entry(label.clone())
                .or_default()
                .insert(id);
            self.parents.insert(id, (parent, label));
        }
        for successor in record.superseded_by() {
            self.link_supersession(id, successor);
        }
        for predecessor in record.supersedes() {
            self.link_supersession(predecessor, id);
        }

        self.entries.insert(
            id,
            Entry {
                bytes: Arc::from(bytes),
                record,
            },
        );
        Ok(id)
    }

    /// Inserts a document built from a property map.
    ///
    /// # Errors
    ///
    /// Returns an error if the properties have no integer `wof:id`.
    pub fn insert_properties(&mut self, properties: serde_json::Value) -> Result<RecordId> {
        let doc = serde_json::json!({
            "type": "Feature",
            "properties": properties,
            "geometry": null,
        });
        self.insert(&serde_json::to_vec(&doc)?)
    }

    /// Removes a document and every index edge it declared.
    ///
    /// Edges also declared by another indexed document survive. Removing an
    /// unknown id is a no-op.
    pub fn remove(&mut self, id: RecordId) -> Option<Record> {
        let entry = self.entries.remove(&id)?;

        if let Some((parent, label)) = self.parents.remove(&id) {
            if let Some(by_label) = self.children.get_mut(&parent) {
                if let Some(ids) = by_label.get_mut(&label) {
                    ids.remove(&id);
                }
            }
        }

        for successor in entry.record.superseded_by() {
            if !self.declares(successor, id, successor) {
                self.unlink_supersession(id, successor);
            }
        }
        for predecessor in entry.record.supersedes() {
            if !self.declares(predecessor, predecessor, id) {
                self.unlink_supersession(predecessor, id);
            }
        }

        Some(entry.record)
    }

    /// Returns the parsed record for `id`.
    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.entries.get(&id).map(|e| &e.record)
    }

    /// Returns true if a document with `id` is indexed.
    #[must_use]
    pub fn contains(&self, id: RecordId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Returns the number of indexed documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns every indexed id in ascending order.
    #[must_use]
    pub fn ids(&self) -> Vec<RecordId> {
        let mut ids: Vec<_> = self.entries.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Returns the parent and placetype label `id` was indexed under.
    #[must_use]
    pub fn parent_of(&self, id: RecordId) -> Option<(RecordId, &str)> {
        self.parents.get(&id).map(|(p, l)| (*p, l.as_str()))
    }

    /// Returns the ids `id` supersedes (reverse traversal).
    pub fn supersedes(&self, id: RecordId) -> impl Iterator<Item = RecordId> + '_ {
        self.predecessors
            .get(&id)
            .into_iter()
            .flat_map(|s| s.iter().copied())
    }

    /// Returns true if `from -> to` is a supersession edge.
    #[must_use]
    pub fn has_supersession(&self, from: RecordId, to: RecordId) -> bool {
        self.successors.get(&from).is_some_and(|s| s.contains(&to))
    }

    fn link_supersession(&mut self, from: RecordId, to: RecordId) {
        self.successors.entry(from).or_default().insert(to);
        self.predecessors.entry(to).or_default().insert(from);
    }

    fn unlink_supersession(&mut self, from: RecordId, to: RecordId) {
        if let Some(targets) = self.successors.get_mut(&from) {
            targets.remove(&to);
        }
        if let Some(sources) = self.predecessors.get_mut(&to) {
            sources.remove(&from);
        }
    }

    /// Returns true if the indexed document `owner` declares `from -> to`.
    fn declares(&self, owner: RecordId, from: RecordId, to: RecordId) -> bool {
        self.get(owner).is_some_and(|r| {
            (r.id() == from && r.superseded_by().contains(&to))
                || (r.id() == to && r.supersedes().contains(&from))
        })
    }
}

impl RecordStore for Catalog {
    fn load(&self, id: RecordId) -> Result<Vec<u8>> {
        self.entries
            .get(&id)
            .map(|e| e.bytes.to_vec())
            .ok_or_else(|| Error::record_not_found(id))
    }

    fn load_record(&self, id: RecordId) -> Result<Record> {
        self.get(id).cloned().ok_or_else(|| Error::record_not_found(id))
    }
}

impl RelationalIndex for Catalog {
    fn children(&self, parent_id: RecordId, placetype: &str) -> Result<Vec<RecordId>> {
        Ok(self
            .children
            .get(&parent_id)
            .and_then(|m| m.get(placetype))
            .map(|s| s.iter().copied().collect())
            .unwrap_or_default())
    }

    fn superseded_by(&self, id: RecordId) -> Result<Vec<RecordId>> {
        Ok(self
            .successors
            .get(&id)
            .map(|s| s.iter().copied().collect())
            .unwrap_or_default())
    }
}
