//! Builds per client preference order of facilities.

#[cfg(test)]
#[path = "../../tests/unit/construction/ranking_test.rs"]
mod ranking_test;

use crate::models::Problem;
use crate::models::problem::Cost;
use crate::utils::{UflError, compare_floats};

/// A facility reference with its connection cost from the perspective of one client.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankedEntry {
    /// Index of the facility in the problem.
    pub facility_idx: usize,
    /// Connection cost.
    pub cost: Cost,
}

/// Facilities of one client ordered by connection cost ascending: the client's preference order.
#[derive(Clone, Debug)]
pub struct RankedList {
    /// Index of the client in the problem.
    pub client_idx: usize,
    entries: Vec<RankedEntry>,
}

impl RankedList {
    /// Returns the facility ranked at given position, `None` if position is past the end.
    pub fn at(&self, rank: usize) -> Option<&RankedEntry> {
        self.entries.get(rank)
    }

    /// Returns all entries in preference order.
    pub fn entries(&self) -> &[RankedEntry] {
        self.entries.as_slice()
    }

    /// Returns length of the list.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Creates a ranked list per client in client order. Cost ties keep facility order (stable sort),
/// but this is an implementation detail rather than a contract.
pub fn create_ranked_lists(problem: &Problem) -> Result<Vec<RankedList>, UflError> {
    problem
        .clients
        .iter()
        .enumerate()
        .map(|(client_idx, client)| {
            let mut entries = problem
                .facilities
                .iter()
                .enumerate()
                .map(|(facility_idx, facility)| {
                    problem.connection_cost(facility.id, client.id).map(|cost| RankedEntry { facility_idx, cost })
                })
                .collect::<Result<Vec<_>, _>>()?;

            entries.sort_by(|a, b| compare_floats(a.cost, b.cost));

            Ok(RankedList { client_idx, entries })
        })
        .collect()
}
