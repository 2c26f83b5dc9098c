//! Calculates total cost of an assignment.

#[cfg(test)]
#[path = "../../tests/unit/construction/aggregation_test.rs"]
mod aggregation_test;

use crate::models::problem::Cost;
use crate::models::{Assignment, Problem};
use crate::utils::UflError;

/// Calculates total cost of the assignment: for each facility with at least one client, its
/// opening cost (once) plus connection costs of all its clients.
pub fn aggregate_cost(problem: &Problem, assignment: &Assignment) -> Result<Cost, UflError> {
    assignment.iter().try_fold(0., |total, (facility, clients)| {
        let opening = problem.opening_cost(facility)?;
        let connection = clients
            .iter()
            .try_fold(0., |acc, &client| problem.connection_cost(facility, client).map(|cost| acc + cost))?;

        Ok(total + opening + connection)
    })
}
