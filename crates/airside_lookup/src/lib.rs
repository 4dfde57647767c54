//! Identifier lookup for Airside.
//!
//! This crate provides:
//! - [`LookupRecord`] - Flat, versioned records addressable by alias
//! - [`Gate`], [`Gallery`], [`Terminal`] - The record kinds
//! - [`LookupIndex`] - Alias to candidate-records index
//! - [`When`] / [`DateMatch`] - Currency and as-of-date resolution
//! - [`LookupSource`] - Where an index is populated from
//! - [`SharedLookup`] - Build-once holder for an index

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compile;
pub mod gallery;
pub mod gate;
pub mod index;
pub mod kind;
pub mod record;
pub mod resolve;
pub mod shared;
pub mod source;
pub mod terminal;

pub use gallery::Gallery;
pub use gate::Gate;
pub use index::LookupIndex;
pub use kind::LookupKind;
pub use record::LookupRecord;
pub use resolve::{DateMatch, When};
pub use shared::SharedLookup;
pub use source::{LookupSource, LookupUri};
pub use terminal::Terminal;
