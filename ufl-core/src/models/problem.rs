//! Problem domain models.

#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use crate::utils::UflError;
use rustc_hash::{FxHashMap, FxHashSet};

/// An identity of a facility, unique among facilities.
pub type FacilityId = i64;

/// An identity of a client, unique among clients.
pub type ClientId = i64;

/// A cost value.
pub type Cost = f64;

/// A candidate site which may be opened at a fixed cost to serve clients.
#[derive(Clone, Debug, PartialEq)]
pub struct Facility {
    /// Facility id.
    pub id: FacilityId,
    /// One-time cost charged when facility is opened.
    pub opening_cost: Cost,
}

/// A demand point which must be connected to exactly one opened facility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Client {
    /// Client id.
    pub id: ClientId,
}

/// Keeps connection costs per (facility, client) pair.
#[derive(Clone, Debug, Default)]
pub struct ConnectionCosts {
    costs: FxHashMap<(FacilityId, ClientId), Cost>,
}

impl ConnectionCosts {
    /// Sets connection cost for given pair, returns previous value if any.
    pub fn insert(&mut self, facility: FacilityId, client: ClientId, cost: Cost) -> Option<Cost> {
        self.costs.insert((facility, client), cost)
    }

    /// Returns connection cost for given pair. A missing pair is an error, never zero.
    pub fn get(&self, facility: FacilityId, client: ClientId) -> Result<Cost, UflError> {
        self.costs.get(&(facility, client)).copied().ok_or(UflError::MissingConnectionCost { facility, client })
    }

    /// Returns amount of defined pairs.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// Returns true if no pair is defined.
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    fn values(&self) -> impl Iterator<Item = (&(FacilityId, ClientId), &Cost)> + '_ {
        self.costs.iter()
    }
}

impl FromIterator<((FacilityId, ClientId), Cost)> for ConnectionCosts {
    fn from_iter<T: IntoIterator<Item = ((FacilityId, ClientId), Cost)>>(iter: T) -> Self {
        Self { costs: iter.into_iter().collect() }
    }
}

/// Defines an Uncapacitated Facility Location problem instance. Immutable once created.
pub struct Problem {
    /// Facilities in input order.
    pub facilities: Vec<Facility>,
    /// Clients in input order.
    pub clients: Vec<Client>,
    /// Connection costs.
    pub costs: ConnectionCosts,

    facility_index: FxHashMap<FacilityId, usize>,
}

impl Problem {
    /// Creates a new instance of `Problem`. Facility and client ids must be unique, all costs
    /// must be finite and non-negative. Missing connection costs are not checked here: they
    /// are reported as soon as the solver needs them.
    pub fn new(facilities: Vec<Facility>, clients: Vec<Client>, costs: ConnectionCosts) -> Result<Self, UflError> {
        let facility_index = facilities.iter().enumerate().try_fold(
            FxHashMap::default(),
            |mut acc: FxHashMap<FacilityId, usize>, (idx, facility)| {
                if acc.insert(facility.id, idx).is_some() {
                    return Err(UflError::malformed(format!("duplicate facility id '{}'", facility.id)));
                }

                if !is_valid_cost(facility.opening_cost) {
                    return Err(UflError::malformed(format!(
                        "invalid opening cost '{}' of facility '{}'",
                        facility.opening_cost, facility.id
                    )));
                }

                Ok(acc)
            },
        )?;

        let mut client_ids = FxHashSet::default();
        if let Some(client) = clients.iter().find(|client| !client_ids.insert(client.id)) {
            return Err(UflError::malformed(format!("duplicate client id '{}'", client.id)));
        }

        if let Some(((facility, client), cost)) = costs.values().find(|(_, cost)| !is_valid_cost(**cost)) {
            return Err(UflError::malformed(format!(
                "invalid connection cost '{cost}' for facility '{facility}' and client '{client}'"
            )));
        }

        Ok(Self { facilities, clients, costs, facility_index })
    }

    /// Creates a new instance of `Problem` from a dense cost matrix where `rows[i][j]` is the cost
    /// to serve `i`-th client from `j`-th facility.
    pub fn from_matrix(
        facilities: Vec<Facility>,
        clients: Vec<Client>,
        rows: Vec<Vec<Cost>>,
    ) -> Result<Self, UflError> {
        if rows.len() != clients.len() {
            return Err(UflError::malformed(format!(
                "expected {} cost rows (one per client), got {}",
                clients.len(),
                rows.len()
            )));
        }

        let costs = rows
            .iter()
            .zip(clients.iter())
            .map(|(row, client)| {
                if row.len() != facilities.len() {
                    return Err(UflError::malformed(format!(
                        "cost row of client '{}' has {} values, expected {}",
                        client.id,
                        row.len(),
                        facilities.len()
                    )));
                }

                Ok(row.iter().zip(facilities.iter()).map(move |(&cost, facility)| ((facility.id, client.id), cost)))
            })
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .flatten()
            .collect();

        Self::new(facilities, clients, costs)
    }

    /// Returns index of facility with given id.
    pub fn facility_index(&self, facility: FacilityId) -> Option<usize> {
        self.facility_index.get(&facility).copied()
    }

    /// Returns opening cost of facility with given id.
    pub fn opening_cost(&self, facility: FacilityId) -> Result<Cost, UflError> {
        self.facility_index(facility)
            .map(|idx| self.facilities[idx].opening_cost)
            .ok_or_else(|| UflError::malformed(format!("unknown facility id '{facility}'")))
    }

    /// Returns connection cost between given facility and client.
    pub fn connection_cost(&self, facility: FacilityId, client: ClientId) -> Result<Cost, UflError> {
        self.costs.get(facility, client)
    }
}

fn is_valid_cost(cost: Cost) -> bool {
    cost.is_finite() && cost >= 0.
}
