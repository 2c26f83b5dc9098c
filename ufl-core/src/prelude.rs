//! This module reimports a common used types.

pub use crate::models::problem::{Client, ClientId, ConnectionCosts, Cost, Facility, FacilityId};
pub use crate::models::{Assignment, Problem, Solution};

pub use crate::solver::{Builder, Metrics, Solver, SolverConfig, Telemetry, TelemetryMode};

pub use crate::utils::compare_floats;
pub use crate::utils::{Environment, InfoLogger, Quota, TimeQuota};
pub use crate::utils::{GenericError, GenericResult, InfeasibleReason, UflError};
