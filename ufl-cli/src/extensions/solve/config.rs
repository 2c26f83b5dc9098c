//! Solver configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

extern crate serde_json;

use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;
use ufl_core::prelude::*;

/// An algorithm configuration.
#[derive(Clone, Deserialize, Debug, Default)]
pub struct Config {
    /// Specifies algorithm termination configuration.
    pub termination: Option<TerminationConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// A termination configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TerminationConfig {
    /// Max running time in seconds.
    pub max_time: Option<usize>,
    /// Max amount of rounds.
    pub max_rounds: Option<usize>,
}

/// A telemetry configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct TelemetryConfig {
    /// Logging configuration.
    pub logging: Option<LoggingConfig>,
    /// Metrics configuration.
    pub metrics: Option<MetricsConfig>,
}

/// A logging configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled. Default is false.
    pub enabled: bool,
}

/// A metrics configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct MetricsConfig {
    /// Specifies whether metrics collection is enabled. Default is false.
    pub enabled: bool,
}

impl Config {
    /// Returns true if logging is enabled.
    pub fn is_logging_enabled(&self) -> bool {
        self.telemetry.as_ref().and_then(|telemetry| telemetry.logging.as_ref()).is_some_and(|logging| logging.enabled)
    }

    /// Returns true if metrics collection is enabled.
    pub fn is_metrics_enabled(&self) -> bool {
        self.telemetry.as_ref().and_then(|telemetry| telemetry.metrics.as_ref()).is_some_and(|metrics| metrics.enabled)
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, GenericError> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates a solver `Builder` from config file.
pub fn create_builder_from_config_file<R: Read>(
    problem: Arc<Problem>,
    environment: Arc<Environment>,
    reader: BufReader<R>,
) -> Result<Builder, GenericError> {
    read_config(reader).and_then(|config| create_builder_from_config(problem, environment, &config))
}

/// Creates a solver `Builder` from config.
pub fn create_builder_from_config(
    problem: Arc<Problem>,
    environment: Arc<Environment>,
    config: &Config,
) -> Result<Builder, GenericError> {
    let telemetry_mode =
        create_telemetry_mode(config.is_logging_enabled(), config.is_metrics_enabled(), environment.logger.clone());

    let mut builder = Builder::new(problem, environment).with_telemetry(telemetry_mode);

    if let Some(termination) = &config.termination {
        builder = builder.with_max_time(termination.max_time).with_max_rounds(termination.max_rounds);
    }

    Ok(builder)
}

/// Creates telemetry mode from logging and metrics flags.
pub fn create_telemetry_mode(is_logging: bool, is_metrics: bool, logger: InfoLogger) -> TelemetryMode {
    match (is_logging, is_metrics) {
        (true, true) => TelemetryMode::All { logger },
        (true, false) => TelemetryMode::OnlyLogging { logger },
        (false, true) => TelemetryMode::OnlyMetrics,
        (false, false) => TelemetryMode::None,
    }
}
