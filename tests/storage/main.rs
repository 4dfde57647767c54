//! Integration tests for Layer 1: Storage
//!
//! Tests for the in-memory catalog, the filesystem record store, and corpus
//! iteration over on-disk repositories.

mod iteration;
