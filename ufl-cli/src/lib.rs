//! A crate contains extensions which are used by command line interface of *Uncapacitated
//! Facility Location* solver: configuration, format readers and writers, problem generator.
//!
//! # Usage
//!
//! - solve a problem in **matrix** format with the time limit:
//!
//!     `ufl solve matrix problem.txt --max-time 60`
//!
//! - solve a problem from **OR-Library** writing json solution to the file:
//!
//!     `ufl solve orlib cap71.txt --out-format json -o cap71.json`
//!
//! - generate a random problem in matrix format:
//!
//!     `ufl generate -f 50 -c 200 --seed 42 -o random.txt`

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

#[cfg(test)]
#[path = "../tests/features/solve.rs"]
mod solve_features_test;

pub use ufl_core as core;
pub use ufl_scientific as scientific;

pub mod extensions;
