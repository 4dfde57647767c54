//! Airside - Versioned catalog of airport spaces
//!
//! This crate re-exports all layers of the Airside system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: airside_runtime    - CLI, logging setup
//! Layer 3: airside_lookup     - Identifier index, temporal resolution
//! Layer 2: airside_campus     - Hierarchy derivation, currency filter, rendering
//! Layer 1: airside_storage    - Record store, relational index, corpus iteration
//! Layer 0: airside_foundation - Core types (Placetype, Record, EDTF, Error)
//! ```

pub use airside_campus as campus;
pub use airside_foundation as foundation;
pub use airside_lookup as lookup;
pub use airside_runtime as runtime;
pub use airside_storage as storage;
