//! Contains functionality to generate random problems.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/generate/generate_test.rs"]
mod generate_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use ufl_core::prelude::*;

const DEFAULT_MAX_OPENING_COST: Cost = 1000.;
const DEFAULT_MAX_CONNECTION_COST: Cost = 100.;

/// Specifies random problem parameters.
#[derive(Clone, Debug)]
pub struct GenerateConfig {
    /// Amount of facilities.
    pub facilities_size: usize,
    /// Amount of clients.
    pub clients_size: usize,
    /// Random seed, a random one is used if not set.
    pub seed: Option<u64>,
    /// Max opening cost, default is 1000.
    pub max_opening_cost: Option<Cost>,
    /// Max connection cost, default is 100.
    pub max_connection_cost: Option<Cost>,
}

/// Generates a random problem with integral costs uniformly distributed between zero and their
/// max values. Facilities and clients get sequential ids starting from one.
pub fn generate_problem(config: &GenerateConfig) -> Result<Problem, GenericError> {
    if config.facilities_size == 0 {
        return Err("amount of facilities should be greater than zero".into());
    }

    if config.clients_size == 0 {
        return Err("amount of clients should be greater than zero".into());
    }

    let max_opening_cost = get_max_cost(config.max_opening_cost, DEFAULT_MAX_OPENING_COST, "opening")?;
    let max_connection_cost = get_max_cost(config.max_connection_cost, DEFAULT_MAX_CONNECTION_COST, "connection")?;

    let mut rng = config.seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);
    let mut next_cost = |max: Cost| (rng.r#gen::<f64>() * max).round();

    let facilities = (1..=config.facilities_size)
        .map(|id| Facility { id: id as FacilityId, opening_cost: next_cost(max_opening_cost) })
        .collect::<Vec<_>>();
    let clients = (1..=config.clients_size).map(|id| Client { id: id as ClientId }).collect::<Vec<_>>();
    let rows = (0..config.clients_size)
        .map(|_| (0..config.facilities_size).map(|_| next_cost(max_connection_cost)).collect())
        .collect();

    Problem::from_matrix(facilities, clients, rows).map_err(GenericError::from)
}

fn get_max_cost(value: Option<Cost>, default: Cost, name: &str) -> Result<Cost, GenericError> {
    match value {
        Some(value) if !value.is_finite() || value < 0. => {
            Err(format!("max {name} cost should be a non-negative number, got '{value}'").into())
        }
        Some(value) => Ok(value),
        None => Ok(default),
    }
}
