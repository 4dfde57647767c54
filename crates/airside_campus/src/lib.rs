//! Hierarchy derivation for Airside.
//!
//! This crate provides:
//! - [`Entity`] - A node of the derived airport tree
//! - [`CurrencyFilter`] - Decides whether a record is usable "as of now"
//! - [`Deriver`] - Rebuilds the tree from a record store and relational index
//! - [`find_current_root`] - Follows supersession to the current complex
//! - [`render`] - JSON and plain-text outline views of a tree

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod alt_id;
pub mod config;
pub mod currency;
pub mod derive;
pub mod entity;
pub mod render;
pub mod root;

pub use config::DeriveOptions;
pub use currency::CurrencyFilter;
pub use derive::Deriver;
pub use entity::Entity;
pub use root::find_current_root;
