//! The solver module contains a facade which combines the greedy round engine, cost aggregation
//! and telemetry into a single invocation.
//!
//! # Solving a problem
//!
//! ```
//! use std::sync::Arc;
//! use ufl_core::prelude::*;
//!
//! let problem = Problem::from_matrix(
//!     vec![Facility { id: 1, opening_cost: 3. }],
//!     vec![Client { id: 7 }],
//!     vec![vec![2.]],
//! )
//! .unwrap();
//! let environment = Arc::new(Environment::new(None, Arc::new(|_| ())));
//!
//! let (solution, metrics) = Builder::new(Arc::new(problem), environment)
//!     .with_max_rounds(Some(10))
//!     .with_telemetry(TelemetryMode::OnlyMetrics)
//!     .build()
//!     .and_then(|solver| solver.solve().map_err(GenericError::from))
//!     .unwrap();
//!
//! assert_eq!(solution.cost, 5.);
//! assert_eq!(metrics.map(|metrics| metrics.rounds), Some(1));
//! ```

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

mod builder;
pub use self::builder::Builder;

mod telemetry;
pub use self::telemetry::*;

use crate::construction::aggregation::aggregate_cost;
use crate::construction::greedy::GreedyRoundEngine;
use crate::models::{Problem, Solution};
use crate::utils::{Environment, UflError};
use std::sync::Arc;

/// A solver configuration.
pub struct SolverConfig {
    /// A round limit below amount of facilities.
    pub max_rounds: Option<usize>,
    /// A telemetry.
    pub telemetry: Telemetry,
    /// An environment.
    pub environment: Arc<Environment>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { max_rounds: None, telemetry: Telemetry::new(TelemetryMode::None), environment: Default::default() }
    }
}

/// Solves an Uncapacitated Facility Location problem with the greedy heuristic.
pub struct Solver {
    problem: Arc<Problem>,
    config: SolverConfig,
}

impl Solver {
    /// Creates a new instance of `Solver`.
    pub fn new(problem: Arc<Problem>, config: SolverConfig) -> Self {
        Self { problem, config }
    }

    /// Solves the problem. Returns a complete solution with metrics, if they were requested,
    /// or an error which explains why clients could not be assigned.
    pub fn solve(self) -> Result<(Solution, Option<Metrics>), UflError> {
        let Self { problem, config } = self;
        let SolverConfig { max_rounds, mut telemetry, environment } = config;

        telemetry.start();
        telemetry.on_start(problem.as_ref());

        let result = GreedyRoundEngine::new(problem.as_ref(), max_rounds)
            .and_then(|engine| engine.run(environment.as_ref(), |commit| telemetry.on_round(commit)))
            .and_then(|(assignment, rounds)| {
                aggregate_cost(problem.as_ref(), &assignment).map(|cost| Solution { cost, assignment, rounds })
            });

        telemetry.on_result(&result);

        result.map(|solution| (solution, telemetry.get_metrics()))
    }
}
