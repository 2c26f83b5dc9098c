//! Scientific crate contains logic to read text problems used to benchmark different
//! UFL related algorithms and to write their solutions.
//!
//!
//! # Supported formats
//!
//! - **matrix**: facility ids, opening costs and client ids on the first three lines, followed by
//!   one connection cost row per client
//! - **orlib**: uncapacitated subset of [OR-Library](https://people.brunel.ac.uk/~mastjjb/jeb/orlib/uncapinfo.html)
//!   facility location format

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

#[cfg(test)]
#[path = "../tests/integration/known_problems_test.rs"]
mod known_problems_test;

pub use ufl_core as core;

pub mod common;
pub mod matrix;
pub mod orlib;
