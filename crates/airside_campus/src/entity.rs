//! The derived airport tree.
//!
//! Every placetype shares one node shape: an id, an alternate id, and child
//! collections keyed by placetype. Which collections a node may hold is
//! fixed by [`Placetype::child_placetypes`]; only non-empty collections are
//! stored.

use std::collections::BTreeMap;
use std::ops::ControlFlow;

use airside_foundation::{Placetype, RecordId};
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::warn;

/// A node of the derived tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    placetype: Placetype,
    id: RecordId,
    alt_id: String,
    /// Non-empty child collections. `Placetype` orders like
    /// `child_placetypes()`, so iteration follows derivation order.
    children: BTreeMap<Placetype, Vec<Entity>>,
}

impl Entity {
    /// Creates a childless node.
    #[must_use]
    pub fn new(placetype: Placetype, id: RecordId, alt_id: impl Into<String>) -> Self {
        Self {
            placetype,
            id,
            alt_id: alt_id.into(),
            children: BTreeMap::new(),
        }
    }

    /// Attaches a child collection. Empty collections are dropped.
    #[must_use]
    pub fn with_children(mut self, placetype: Placetype, children: Vec<Entity>) -> Self {
        self.set_children(placetype, children);
        self
    }

    /// Attaches a child collection in place. Empty collections are dropped.
    pub fn set_children(&mut self, placetype: Placetype, children: Vec<Entity>) {
        if children.is_empty() {
            self.children.remove(&placetype);
        } else {
            self.children.insert(placetype, children);
        }
    }

    /// Returns the placetype.
    #[must_use]
    pub const fn placetype(&self) -> Placetype {
        self.placetype
    }

    /// Returns the record id.
    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.id
    }

    /// Returns the alternate (business) id.
    #[must_use]
    pub fn alt_id(&self) -> &str {
        &self.alt_id
    }

    /// Returns the children of one placetype, possibly empty.
    #[must_use]
    pub fn children(&self, placetype: Placetype) -> &[Entity] {
        self.children.get(&placetype).map_or(&[], Vec::as_slice)
    }

    /// Iterates over the non-empty child collections in derivation order.
    pub fn collections(&self) -> impl Iterator<Item = (Placetype, &[Entity])> {
        self.children.iter().map(|(pt, c)| (*pt, c.as_slice()))
    }

    /// Iterates over the immediate children, collection by collection.
    pub fn iter_children(&self) -> impl Iterator<Item = &Entity> {
        self.children.values().flatten()
    }

    /// Visits this node and every descendant depth-first, parents before
    /// children. The visitor receives each node and its depth (0 for `self`)
    /// and may stop the walk early with [`ControlFlow::Break`].
    pub fn walk<'a, B>(
        &'a self,
        visit: &mut impl FnMut(&'a Entity, usize) -> ControlFlow<B>,
    ) -> ControlFlow<B> {
        self.walk_at(0, visit)
    }

    fn walk_at<'a, B>(
        &'a self,
        depth: usize,
        visit: &mut impl FnMut(&'a Entity, usize) -> ControlFlow<B>,
    ) -> ControlFlow<B> {
        visit(self, depth)?;
        for child in self.iter_children() {
            child.walk_at(depth + 1, visit)?;
        }
        ControlFlow::Continue(())
    }

    /// Returns the node with `id`, searching this node and its descendants.
    #[must_use]
    pub fn find(&self, id: RecordId) -> Option<&Entity> {
        match self.walk(&mut |e, _| {
            if e.id == id {
                ControlFlow::Break(e)
            } else {
                ControlFlow::Continue(())
            }
        }) {
            ControlFlow::Break(e) => Some(e),
            ControlFlow::Continue(()) => None,
        }
    }

    /// Returns the number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn count(&self) -> usize {
        let mut n = 0;
        let _ = self.walk(&mut |_, _| {
            n += 1;
            ControlFlow::<()>::Continue(())
        });
        n
    }

    /// Groups the ids of this subtree by placetype.
    #[must_use]
    pub fn ids_by_placetype(&self) -> BTreeMap<Placetype, Vec<RecordId>> {
        let mut layers: BTreeMap<Placetype, Vec<RecordId>> = BTreeMap::new();
        let _ = self.walk(&mut |e, _| {
            layers.entry(e.placetype).or_default().push(e.id);
            ControlFlow::<()>::Continue(())
        });
        layers
    }

    /// Maps the alternate id of every descendant to its record id.
    ///
    /// The first node seen for an alternate id wins; later duplicates are
    /// logged and ignored. The node itself is not included.
    #[must_use]
    pub fn alt_lookup(&self) -> BTreeMap<String, RecordId> {
        let mut lookup: BTreeMap<String, RecordId> = BTreeMap::new();
        for child in self.iter_children() {
            let _ = child.walk(&mut |e, _| {
                match lookup.get(&e.alt_id) {
                    Some(&other) => warn!(
                        placetype = %e.placetype,
                        alt = %e.alt_id,
                        id = e.id,
                        other,
                        "duplicate alternate id"
                    ),
                    None => {
                        lookup.insert(e.alt_id.clone(), e.id);
                    }
                }
                ControlFlow::<()>::Continue(())
            });
        }
        lookup
    }
}

impl Serialize for Entity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let always_terminals =
            self.placetype == Placetype::Complex && !self.children.contains_key(&Placetype::Terminal);

        let mut map = serializer.serialize_map(Some(2 + self.children.len()))?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry(self.placetype.alt_id_key(), &self.alt_id)?;
        if always_terminals {
            map.serialize_entry(Placetype::Terminal.collection_key(), &[] as &[Entity])?;
        }
        for (placetype, children) in &self.children {
            map.serialize_entry(placetype.collection_key(), children)?;
        }
        map.end()
    }
}
