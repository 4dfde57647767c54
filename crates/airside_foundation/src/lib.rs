//! Core types, records, dates, and errors for Airside.
//!
//! This crate provides:
//! - [`Placetype`] - The closed set of airport space categories
//! - [`Record`] - A parsed property bag read from the record store
//! - [`edtf`] - Extended Date/Time Format spans and range containment
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod edtf;
pub mod error;
pub mod placetype;
pub mod record;

pub use edtf::{Bound, DateRange, DateSpan};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use placetype::Placetype;
pub use record::{Record, RecordId};
