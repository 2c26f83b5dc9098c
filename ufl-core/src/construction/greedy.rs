//! The round loop of the greedy heuristic.
//!
//! On each round, clients still unassigned are grouped by their facility at the round's rank,
//! remembered groups are updated and a single facility is selected to serve its group. The loop
//! stops when all clients are served, or with an `Infeasible` error when no facility can be
//! selected, rounds are used up or a quota is reached.

#[cfg(test)]
#[path = "../../tests/unit/construction/greedy_test.rs"]
mod greedy_test;

use crate::construction::effectiveness::{CostEffectivenessRecord, CostEffectivenessTracker};
use crate::construction::ranking::{RankedList, create_ranked_lists};
use crate::models::problem::{ClientId, Cost, FacilityId};
use crate::models::{Assignment, Problem};
use crate::utils::{Environment, InfeasibleReason, UflError, compare_floats};
use std::cmp::Ordering;

/// Specifies a state of the round loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundState {
    /// The next round to run, with its threshold.
    Round(usize),
    /// All clients are assigned.
    Complete,
    /// The loop stopped with unassigned clients.
    Infeasible(InfeasibleReason),
}

/// Describes a facility opened (or reused) on a round.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundCommit {
    /// Round index.
    pub round: usize,
    /// Selected facility.
    pub facility: FacilityId,
    /// A round at which the committed group was found.
    pub threshold: usize,
    /// Cost-effectiveness ratio of the committed group.
    pub ratio: Cost,
    /// Clients moved from unassigned set to the facility, in commit order.
    pub clients: Vec<ClientId>,
    /// Amount of clients left unassigned after the commit.
    pub unassigned: usize,
}

/// Drives the round loop of the greedy heuristic: on round `t`, unassigned clients are grouped
/// by their `t`-th ranked facility, groups are offered to the cost-effectiveness tracker, and
/// the facility with the best remembered group is opened and serves it.
pub struct GreedyRoundEngine<'a> {
    problem: &'a Problem,
    ranked: Vec<RankedList>,
    tracker: CostEffectivenessTracker,
    is_unassigned: Vec<bool>,
    unassigned_size: usize,
    opened: Vec<bool>,
    assignment: Assignment,
    state: RoundState,
    rounds_limit: usize,
    rounds: usize,
}

impl<'a> GreedyRoundEngine<'a> {
    /// Creates a new instance of `GreedyRoundEngine`. Ranks connection costs up front, so it
    /// fails if any facility-client pair has no cost. The amount of rounds never exceeds the
    /// amount of facilities, `max_rounds` can lower it further.
    pub fn new(problem: &'a Problem, max_rounds: Option<usize>) -> Result<Self, UflError> {
        let ranked = create_ranked_lists(problem)?;
        let facilities_size = problem.facilities.len();
        let clients_size = problem.clients.len();

        Ok(Self {
            problem,
            ranked,
            tracker: CostEffectivenessTracker::new(facilities_size),
            is_unassigned: vec![true; clients_size],
            unassigned_size: clients_size,
            opened: vec![false; facilities_size],
            assignment: Assignment::new(problem.facilities.as_slice()),
            state: if clients_size == 0 { RoundState::Complete } else { RoundState::Round(0) },
            rounds_limit: max_rounds.map_or(facilities_size, |max_rounds| max_rounds.min(facilities_size)),
            rounds: 0,
        })
    }

    /// Returns current state.
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Returns amount of unassigned clients.
    pub fn unassigned_size(&self) -> usize {
        self.unassigned_size
    }

    /// Returns the assignment built so far.
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Runs one round. Returns `None` when the loop is already in (or moves to) a terminal state
    /// without committing anything.
    pub fn step(&mut self, environment: &Environment) -> Option<RoundCommit> {
        let round = match self.state {
            RoundState::Round(round) => round,
            _ => return None,
        };

        if round >= self.rounds_limit {
            return self.terminate(InfeasibleReason::RoundsExhausted);
        }

        if environment.is_quota_reached() {
            return self.terminate(InfeasibleReason::QuotaReached);
        }

        self.update_tracker(round);

        let Some(facility_idx) = select_facility(&self.tracker) else {
            return self.terminate(InfeasibleReason::NoViableFacility);
        };

        let commit = self.commit(round, facility_idx);

        self.rounds += 1;
        self.state = if self.unassigned_size == 0 { RoundState::Complete } else { RoundState::Round(round + 1) };

        Some(commit)
    }

    /// Runs rounds till a terminal state, calling `on_commit` after each round.
    /// Returns the complete assignment with the amount of rounds run.
    pub fn run(
        mut self,
        environment: &Environment,
        mut on_commit: impl FnMut(&RoundCommit),
    ) -> Result<(Assignment, usize), UflError> {
        while let Some(commit) = self.step(environment) {
            on_commit(&commit);
        }

        match self.state {
            RoundState::Complete => Ok((self.assignment, self.rounds)),
            RoundState::Infeasible(reason) => Err(UflError::Infeasible {
                reason,
                unassigned: self.unassigned_clients().collect(),
                rounds: self.rounds,
            }),
            RoundState::Round(_) => unreachable!("round loop stopped in non-terminal state"),
        }
    }

    /// Returns ids of unassigned clients in problem order.
    pub fn unassigned_clients(&self) -> impl Iterator<Item = ClientId> + '_ {
        self.problem
            .clients
            .iter()
            .zip(self.is_unassigned.iter())
            .filter(|(_, is_unassigned)| **is_unassigned)
            .map(|(client, _)| client.id)
    }

    fn terminate(&mut self, reason: InfeasibleReason) -> Option<RoundCommit> {
        self.state = RoundState::Infeasible(reason);
        None
    }

    fn update_tracker(&mut self, round: usize) {
        let mut groups: Vec<Vec<(usize, Cost)>> = vec![Vec::new(); self.problem.facilities.len()];

        self.ranked
            .iter()
            .filter(|list| self.is_unassigned[list.client_idx])
            .filter_map(|list| list.at(round).map(|entry| (list.client_idx, entry)))
            .for_each(|(client_idx, entry)| groups[entry.facility_idx].push((client_idx, entry.cost)));

        groups.iter().enumerate().for_each(|(facility_idx, group)| {
            let opening_cost =
                if self.opened[facility_idx] { None } else { Some(self.problem.facilities[facility_idx].opening_cost) };

            if let Some(candidate) = CostEffectivenessRecord::new(round, group.as_slice(), opening_cost) {
                self.tracker.update(facility_idx, candidate);
            }
        });
    }

    fn commit(&mut self, round: usize, facility_idx: usize) -> RoundCommit {
        let record = self.tracker.take(facility_idx).expect("selected facility must have a record");

        let mut clients = Vec::with_capacity(record.count());
        for &client_idx in record.clients.iter() {
            // NOTE a remembered group can be older than assignments made by other facilities
            if !self.is_unassigned[client_idx] {
                continue;
            }

            self.is_unassigned[client_idx] = false;
            self.unassigned_size -= 1;

            let client = self.problem.clients[client_idx].id;
            self.assignment.assign(facility_idx, client);
            clients.push(client);
        }

        if !clients.is_empty() {
            self.opened[facility_idx] = true;
        }

        RoundCommit {
            round,
            facility: self.problem.facilities[facility_idx].id,
            threshold: record.threshold,
            ratio: record.ratio,
            clients,
            unassigned: self.unassigned_size,
        }
    }
}

/// Selects a facility with the lowest remembered ratio. On exact tie, the facility with more
/// clients wins; on full tie, the first one in facility order.
pub fn select_facility(tracker: &CostEffectivenessTracker) -> Option<usize> {
    tracker
        .iter()
        .fold(None, |best: Option<(usize, &CostEffectivenessRecord)>, (idx, record)| match best {
            None => Some((idx, record)),
            Some((_, best_record)) => match compare_floats(record.ratio, best_record.ratio) {
                Ordering::Less => Some((idx, record)),
                Ordering::Equal if record.count() > best_record.count() => Some((idx, record)),
                _ => best,
            },
        })
        .map(|(idx, _)| idx)
}
