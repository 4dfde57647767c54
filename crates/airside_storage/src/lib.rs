//! Record storage, relational indexing, and corpus iteration for Airside.
//!
//! This crate provides:
//! - [`RecordStore`] - Key-to-document lookup by record id
//! - [`RelationalIndex`] - Parent/child/placetype and supersession queries
//! - [`Catalog`] - In-memory implementation of both, with bidirectional indices
//! - [`FsRecordStore`] - Documents read from Who's On First style repositories
//! - [`DocumentSource`] - Bulk iteration over a corpus of documents

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod fs;
pub mod iterate;
pub mod store;
pub mod uri;

pub use catalog::Catalog;
pub use fs::FsRecordStore;
pub use iterate::{Cancellation, DirectorySource, DocumentSource, MemorySource};
pub use store::{RecordStore, RelationalIndex};
pub use uri::ParsedPath;
