//! Entity derivation.
//!
//! Rebuilds the tree of currently valid spaces from a flat relational index.
//! One recursive walker serves every placetype: the children to derive come
//! from [`Placetype::child_placetypes`], the node's alternate id from
//! [`derive_alt_id`].

use airside_foundation::{ErrorContext, Placetype, RecordId, Result};
use airside_storage::{RecordStore, RelationalIndex};
use tracing::debug;

use crate::alt_id::derive_alt_id;
use crate::config::DeriveOptions;
use crate::currency::CurrencyFilter;
use crate::entity::Entity;
use crate::root::find_current_root;

/// Derives entity trees from a record store and relational index.
#[derive(Clone, Debug)]
pub struct Deriver<S, I> {
    store: S,
    index: I,
    options: DeriveOptions,
    filter: CurrencyFilter,
}

impl<S: RecordStore, I: RelationalIndex> Deriver<S, I> {
    /// Creates a deriver with default options.
    #[must_use]
    pub fn new(store: S, index: I) -> Self {
        Self::with_options(store, index, DeriveOptions::default())
    }

    /// Creates a deriver with explicit options.
    #[must_use]
    pub fn with_options(store: S, index: I, options: DeriveOptions) -> Self {
        let filter = CurrencyFilter::new(options.warn_is_current);
        Self {
            store,
            index,
            options,
            filter,
        }
    }

    /// Returns the record store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the relational index.
    #[must_use]
    pub fn index(&self) -> &I {
        &self.index
    }

    /// Returns the options.
    #[must_use]
    pub fn options(&self) -> &DeriveOptions {
        &self.options
    }

    /// Derives every child of `parent_id` with the given placetype.
    ///
    /// For each child id, in index order: its own child collections are
    /// derived first, then its record passes the currency filter (deprecated
    /// records are dropped silently), then its alternate id is resolved.
    /// Only non-empty child collections are attached.
    ///
    /// # Errors
    ///
    /// Returns the first data-integrity, index, or store error met anywhere in
    /// the subtree, with one context frame per enclosing derivation.
    pub fn derive(&self, placetype: Placetype, parent_id: RecordId) -> Result<Vec<Entity>> {
        debug!(placetype = %placetype, parent_id, "derive");

        let ids = self
            .index
            .children(parent_id, placetype.label())
            .map_err(|err| {
                err.with_frame(format!(
                    "finding {} children of {parent_id}",
                    placetype.noun()
                ))
            })?;

        let mut entities = Vec::with_capacity(ids.len());
        for id in ids {
            let mut collections = Vec::with_capacity(placetype.child_placetypes().len());
            for &child in placetype.child_placetypes() {
                let derived = self.derive(child, id).map_err(|err| {
                    err.with_frame(format!(
                        "deriving {} for {} {id}",
                        child.collection_key(),
                        placetype.noun()
                    ))
                })?;
                collections.push((child, derived));
            }

            let Some(record) = self
                .filter
                .load(&self.store, id)
                .map_err(|err| err.with_frame(format!("loading {} {id}", placetype.noun())))?
            else {
                debug!(placetype = %placetype, id, "skip deprecated");
                continue;
            };

            let alt_id = derive_alt_id(placetype, &record).map_err(|err| {
                err.with_context(ErrorContext::new().with_id(id).with_placetype(placetype))
            })?;

            debug!(
                placetype = %placetype,
                alt_id = %alt_id,
                parent_id,
                id,
                name = record.name().unwrap_or_default(),
                inception = %record.inception(),
                cessation = %record.cessation(),
                "add"
            );

            let mut entity = Entity::new(placetype, id, alt_id);
            for (child, derived) in collections {
                entity.set_children(child, derived);
            }
            entities.push(entity);
        }

        Ok(entities)
    }

    /// Derives a whole complex.
    ///
    /// With `None`, the current complex is found by following supersession
    /// from the configured seed.
    ///
    /// # Errors
    ///
    /// Returns an error if root resolution or any derivation fails.
    pub fn derive_complex(&self, complex_id: Option<RecordId>) -> Result<Entity> {
        let id = match complex_id {
            Some(id) => id,
            None => find_current_root(
                &self.index,
                self.options.seed_id,
                self.options.max_supersession_depth,
            )
            .map_err(|err| err.with_frame("resolving the current complex"))?,
        };

        let terminals = self
            .derive(Placetype::Terminal, id)
            .map_err(|err| err.with_frame(format!("deriving terminals for complex {id}")))?;

        Ok(Entity::new(Placetype::Complex, id, self.options.complex_alt_id.clone())
            .with_children(Placetype::Terminal, terminals))
    }

    /// Returns the id of the current complex.
    ///
    /// # Errors
    ///
    /// Returns an error on ambiguous or cyclic supersession.
    pub fn current_complex_id(&self) -> Result<RecordId> {
        find_current_root(
            &self.index,
            self.options.seed_id,
            self.options.max_supersession_depth,
        )
    }
}
