//! A collection of models to represent problem and solution in Uncapacitated Facility Location domain.

pub mod problem;
pub use self::problem::Problem;

mod solution;
pub use self::solution::*;
