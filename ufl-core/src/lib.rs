//! Core crate contains a main building blocks to solve ***Uncapacitated Facility Location*** problem.
//!
//! # Algorithm
//!
//! The problem is NP-hard, so the crate implements a deterministic greedy heuristic which finds
//! a feasible (not necessarily optimal) assignment in polynomial time:
//!
//! - each client ranks all facilities by connection cost in ascending order;
//! - on round `t`, unassigned clients are grouped by their `t`-th ranked facility;
//! - every facility remembers its most cost-effective group seen so far;
//! - the facility with the best remembered group is opened and serves that group;
//! - rounds repeat until all clients are served or no rounds are left.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use ufl_core::prelude::*;
//!
//! let problem = Problem::from_matrix(
//!     vec![Facility { id: 1, opening_cost: 10. }, Facility { id: 2, opening_cost: 1. }],
//!     vec![Client { id: 1 }, Client { id: 2 }, Client { id: 3 }],
//!     vec![vec![1., 100.], vec![1., 100.], vec![1., 2.]],
//! )
//! .unwrap();
//!
//! let (solution, _) = Solver::new(Arc::new(problem), Default::default()).solve().unwrap();
//!
//! assert_eq!(solution.cost, 13.);
//! assert_eq!(solution.assignment.clients(1), Some(&[1, 2, 3][..]));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod construction;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
