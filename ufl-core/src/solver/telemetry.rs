//! A module which provides the logic to collect metrics about algorithm execution and simple logging.

#[cfg(test)]
#[path = "../../tests/unit/solver/telemetry_test.rs"]
mod telemetry_test;

use crate::construction::greedy::RoundCommit;
use crate::models::problem::{Cost, FacilityId};
use crate::models::{Problem, Solution};
use crate::utils::{InfoLogger, Timer, UflError};
use std::ops::Deref;

/// Encapsulates different measurements regarding algorithm evaluation.
#[derive(Clone, Debug)]
pub struct Metrics {
    /// Algorithm duration in milliseconds.
    pub duration: usize,
    /// Total amount of rounds.
    pub rounds: usize,
    /// Round history.
    pub history: Vec<RoundMetrics>,
}

/// Represents information about a single round.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundMetrics {
    /// Round index.
    pub round: usize,
    /// Time since solving started, in seconds.
    pub timestamp: f64,
    /// Selected facility.
    pub facility: FacilityId,
    /// A round at which the committed group was found.
    pub threshold: usize,
    /// Ratio of the committed group.
    pub ratio: Cost,
    /// Amount of committed clients.
    pub committed: usize,
    /// Amount of clients left unassigned.
    pub unassigned: usize,
}

/// Specifies a telemetry mode.
pub enum TelemetryMode {
    /// No telemetry at all.
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
    },
    /// Only metrics collection.
    OnlyMetrics,
    /// Both logging and metrics collection.
    All {
        /// A logger type.
        logger: InfoLogger,
    },
}

/// Provides way to collect metrics and write information into log.
pub struct Telemetry {
    metrics: Metrics,
    time: Timer,
    mode: TelemetryMode,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self { time: Timer::start(), metrics: Metrics { duration: 0, rounds: 0, history: vec![] }, mode }
    }

    /// Starts telemetry reporting.
    pub fn start(&mut self) {
        self.time = Timer::start();
    }

    /// Reports problem size before the first round.
    pub fn on_start(&self, problem: &Problem) {
        self.log(
            format!(
                "solving problem with {} facilities, {} clients and {} connection costs",
                problem.facilities.len(),
                problem.clients.len(),
                problem.costs.len()
            )
            .as_str(),
        );
    }

    /// Reports a committed round.
    pub fn on_round(&mut self, commit: &RoundCommit) {
        self.metrics.rounds = commit.round + 1;

        self.log(
            format!(
                "[{}ms] round {}: facility '{}' serves {} clients (threshold: {}, ratio: {:.3}), unassigned: {}",
                self.time.elapsed_millis(),
                commit.round,
                commit.facility,
                commit.clients.len(),
                commit.threshold,
                commit.ratio,
                commit.unassigned
            )
            .as_str(),
        );

        if matches!(self.mode, TelemetryMode::OnlyMetrics | TelemetryMode::All { .. }) {
            self.metrics.history.push(RoundMetrics {
                round: commit.round,
                timestamp: self.time.elapsed_secs_as_f64(),
                facility: commit.facility,
                threshold: commit.threshold,
                ratio: commit.ratio,
                committed: commit.clients.len(),
                unassigned: commit.unassigned,
            });
        }
    }

    /// Reports final result.
    pub fn on_result(&mut self, result: &Result<Solution, UflError>) {
        let elapsed = self.time.elapsed_millis() as usize;

        match result {
            Ok(solution) => self.log(
                format!(
                    "[{}ms] total rounds: {}, opened facilities: {}, cost: {:.2}",
                    elapsed,
                    solution.rounds,
                    solution.assignment.opened().count(),
                    solution.cost
                )
                .as_str(),
            ),
            Err(err) => self.log(format!("[{elapsed}ms] cannot solve: {err}").as_str()),
        }

        self.metrics.duration = elapsed;
    }

    /// Gets metrics.
    pub fn get_metrics(self) -> Option<Metrics> {
        match &self.mode {
            TelemetryMode::OnlyMetrics | TelemetryMode::All { .. } => Some(self.metrics),
            _ => None,
        }
    }

    /// Writes log message.
    pub fn log(&self, message: &str) {
        match &self.mode {
            TelemetryMode::OnlyLogging { logger } => logger.deref()(message),
            TelemetryMode::All { logger } => logger.deref()(message),
            _ => {}
        }
    }
}
