//! Solution domain models.

#[cfg(test)]
#[path = "../../tests/unit/models/solution_test.rs"]
mod solution_test;

use crate::models::problem::{ClientId, Cost, Facility, FacilityId};

/// Maps each facility to the ordered sequence of clients it serves. The order of clients is the
/// order in which they were committed. A facility with an empty sequence is not opened.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Assignment {
    served: Vec<(FacilityId, Vec<ClientId>)>,
}

impl Assignment {
    /// Creates an empty assignment for given facilities.
    pub fn new(facilities: &[Facility]) -> Self {
        Self { served: facilities.iter().map(|facility| (facility.id, Vec::new())).collect() }
    }

    /// Appends the client to the sequence of the facility at given index.
    pub fn assign(&mut self, facility_idx: usize, client: ClientId) {
        self.served[facility_idx].1.push(client);
    }

    /// Returns clients served by the facility or `None` if it is not opened.
    pub fn clients(&self, facility: FacilityId) -> Option<&[ClientId]> {
        self.served.iter().find(|(id, clients)| *id == facility && !clients.is_empty()).map(|(_, c)| c.as_slice())
    }

    /// Returns opened facilities with their clients in facility order.
    pub fn iter(&self) -> impl Iterator<Item = (FacilityId, &[ClientId])> + '_ {
        self.served.iter().filter(|(_, clients)| !clients.is_empty()).map(|(id, clients)| (*id, clients.as_slice()))
    }

    /// Returns ids of opened facilities.
    pub fn opened(&self) -> impl Iterator<Item = FacilityId> + '_ {
        self.iter().map(|(facility, _)| facility)
    }

    /// Returns the facility which serves given client.
    pub fn facility_of(&self, client: ClientId) -> Option<FacilityId> {
        self.iter().find(|(_, clients)| clients.contains(&client)).map(|(facility, _)| facility)
    }

    /// Returns total amount of assigned clients.
    pub fn assigned_size(&self) -> usize {
        self.served.iter().map(|(_, clients)| clients.len()).sum()
    }
}

impl FromIterator<(FacilityId, Vec<ClientId>)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (FacilityId, Vec<ClientId>)>>(iter: T) -> Self {
        Self { served: iter.into_iter().collect() }
    }
}

/// A complete solution: every client is assigned.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Total cost: opening costs of opened facilities plus all connection costs.
    pub cost: Cost,
    /// Facility to clients assignment.
    pub assignment: Assignment,
    /// Amount of rounds run by the engine.
    pub rounds: usize,
}
