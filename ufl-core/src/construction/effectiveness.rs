//! Keeps per facility memory of the most cost-effective client group found across rounds.

#[cfg(test)]
#[path = "../../tests/unit/construction/effectiveness_test.rs"]
mod effectiveness_test;

use crate::models::problem::Cost;
use crate::utils::compare_floats;
use std::cmp::Ordering;

/// A candidate group of clients for one facility.
#[derive(Clone, Debug, PartialEq)]
pub struct CostEffectivenessRecord {
    /// A round at which the group was found.
    pub threshold: usize,
    /// Client indices in the order they were grouped.
    pub clients: Vec<usize>,
    /// Mean cost per client, including opening cost when facility was not opened yet.
    pub ratio: Cost,
}

impl CostEffectivenessRecord {
    /// Creates a record from client indices with their connection costs.
    /// Returns `None` for an empty group.
    pub fn new(threshold: usize, group: &[(usize, Cost)], opening_cost: Option<Cost>) -> Option<Self> {
        if group.is_empty() {
            return None;
        }

        let total = group.iter().map(|(_, cost)| *cost).sum::<Cost>() + opening_cost.unwrap_or(0.);

        Some(Self {
            threshold,
            clients: group.iter().map(|(client_idx, _)| *client_idx).collect(),
            ratio: total / group.len() as Cost,
        })
    }

    /// Returns amount of clients in the group.
    pub fn count(&self) -> usize {
        self.clients.len()
    }
}

/// Remembers per facility the best candidate group seen across rounds.
pub struct CostEffectivenessTracker {
    records: Vec<Option<CostEffectivenessRecord>>,
}

impl CostEffectivenessTracker {
    /// Creates a tracker with empty records for given amount of facilities.
    pub fn new(size: usize) -> Self {
        Self { records: vec![None; size] }
    }

    /// Offers a candidate for the facility. The stored record is kept when the candidate has a
    /// higher ratio, or the same ratio with strictly fewer clients: an older group wins a tie
    /// when it covers more clients. Otherwise, the candidate replaces it.
    /// Returns true if the candidate was accepted.
    pub fn update(&mut self, facility_idx: usize, candidate: CostEffectivenessRecord) -> bool {
        let slot = &mut self.records[facility_idx];

        let accept = match slot.as_ref().filter(|stored| stored.count() > 0) {
            None => true,
            Some(stored) => match compare_floats(candidate.ratio, stored.ratio) {
                Ordering::Less => true,
                Ordering::Equal => candidate.count() >= stored.count(),
                Ordering::Greater => false,
            },
        };

        if accept {
            *slot = Some(candidate);
        }

        accept
    }

    /// Returns the stored record of the facility.
    pub fn get(&self, facility_idx: usize) -> Option<&CostEffectivenessRecord> {
        self.records[facility_idx].as_ref()
    }

    /// Removes and returns the stored record of the facility.
    pub fn take(&mut self, facility_idx: usize) -> Option<CostEffectivenessRecord> {
        self.records[facility_idx].take()
    }

    /// Returns non-empty records with their facility indices in facility order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &CostEffectivenessRecord)> + '_ {
        self.records
            .iter()
            .enumerate()
            .filter_map(|(idx, record)| record.as_ref().filter(|record| record.count() > 0).map(|record| (idx, record)))
    }
}
