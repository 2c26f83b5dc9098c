#[cfg(test)]
#[path = "../../tests/unit/solver/builder_test.rs"]
mod builder_test;

use crate::models::Problem;
use crate::solver::{Solver, SolverConfig, Telemetry, TelemetryMode};
use crate::utils::{Environment, GenericResult, Quota, TimeQuota};
use std::ops::Deref;
use std::sync::Arc;

/// Provides configurable way to build solver.
pub struct Builder {
    problem: Arc<Problem>,
    environment: Arc<Environment>,
    max_rounds: Option<usize>,
    max_time: Option<usize>,
    telemetry_mode: TelemetryMode,
}

impl Builder {
    /// Creates a new instance of `Builder`.
    pub fn new(problem: Arc<Problem>, environment: Arc<Environment>) -> Self {
        Self { problem, environment, max_rounds: None, max_time: None, telemetry_mode: TelemetryMode::None }
    }

    /// Sets max rounds to be run. Amount of rounds never exceeds amount of facilities.
    /// Default is None.
    pub fn with_max_rounds(mut self, limit: Option<usize>) -> Self {
        if let Some(limit) = limit {
            self.environment.logger.deref()(format!("configured to use max rounds: {limit}").as_str());
        }
        self.max_rounds = limit;
        self
    }

    /// Sets max running time limit in seconds.
    /// Default is None.
    pub fn with_max_time(mut self, limit: Option<usize>) -> Self {
        if let Some(limit) = limit {
            self.environment.logger.deref()(format!("configured to use max time: {limit}s").as_str());
        }
        self.max_time = limit;
        self
    }

    /// Sets telemetry mode.
    /// Default is `TelemetryMode::None`.
    pub fn with_telemetry(mut self, mode: TelemetryMode) -> Self {
        self.telemetry_mode = mode;
        self
    }

    /// Builds a solver.
    pub fn build(self) -> GenericResult<Solver> {
        if self.max_rounds == Some(0) {
            return Err("max rounds should be greater than zero".into());
        }

        if self.max_time == Some(0) {
            return Err("max time should be greater than zero".into());
        }

        let environment = match self.max_time {
            Some(limit) => {
                let time_quota: Arc<dyn Quota + Send + Sync> = Arc::new(TimeQuota::new(limit as f64));
                let quota: Arc<dyn Quota + Send + Sync> = match self.environment.quota.clone() {
                    Some(inner) => Arc::new(CompositeQuota { quotas: vec![time_quota, inner] }),
                    None => time_quota,
                };

                Arc::new(Environment::new(Some(quota), self.environment.logger.clone()))
            }
            None => self.environment,
        };

        Ok(Solver::new(
            self.problem,
            SolverConfig {
                max_rounds: self.max_rounds,
                telemetry: Telemetry::new(self.telemetry_mode),
                environment,
            },
        ))
    }
}

/// A quota which is reached when any of its inner quotas is reached.
struct CompositeQuota {
    quotas: Vec<Arc<dyn Quota + Send + Sync>>,
}

impl Quota for CompositeQuota {
    fn is_reached(&self) -> bool {
        self.quotas.iter().any(|quota| quota.is_reached())
    }
}
