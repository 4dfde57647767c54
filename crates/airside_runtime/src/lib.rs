//! Command-line interface for Airside.
//!
//! This crate provides:
//! - [`CliConfig`] - Parsed command-line options
//! - [`commands`] - The `complex`, `lookup`, and `compile` commands
//! - [`logging`] - Subscriber setup for the binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod commands;
pub mod logging;

pub use cli::{CliConfig, CliError, Command, OutputMode, parse_args, print_help};
pub use commands::run;
