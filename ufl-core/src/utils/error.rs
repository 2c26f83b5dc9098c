#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use crate::models::problem::{ClientId, FacilityId};
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl GenericError {
    /// Joins many errors with separator
    pub fn join_many(errs: &[GenericError], separator: &str) -> String {
        errs.iter().map(|err| err.0.clone()).collect::<Vec<_>>().join(separator)
    }
}

impl Display for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}

impl From<UflError> for GenericError {
    fn from(value: UflError) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<Self> for GenericError {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for GenericError {}

impl Hash for GenericError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

/// Specifies why the greedy engine stopped before all clients were served.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InfeasibleReason {
    /// No facility had a non-empty remembered group at the selection step.
    NoViableFacility,
    /// All rounds were used (either one per facility or the configured round limit).
    RoundsExhausted,
    /// An external quota (time limit, interruption) was reached.
    QuotaReached,
}

impl Display for InfeasibleReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InfeasibleReason::NoViableFacility => write!(f, "no viable facility left"),
            InfeasibleReason::RoundsExhausted => write!(f, "all rounds are exhausted"),
            InfeasibleReason::QuotaReached => write!(f, "quota is reached"),
        }
    }
}

/// An error which terminates a single solve invocation.
#[derive(Clone, Debug, PartialEq)]
pub enum UflError {
    /// Problem definition is inconsistent: count mismatches, duplicate ids, invalid cost values.
    MalformedInstance {
        /// A description of the inconsistency.
        cause: String,
    },

    /// A connection cost for the given facility-client pair is not defined.
    MissingConnectionCost {
        /// Facility id.
        facility: FacilityId,
        /// Client id.
        client: ClientId,
    },

    /// Not all clients could be assigned.
    Infeasible {
        /// Termination reason.
        reason: InfeasibleReason,
        /// Clients left unassigned, in problem order.
        unassigned: Vec<ClientId>,
        /// Amount of rounds run before termination.
        rounds: usize,
    },
}

impl UflError {
    /// Creates a new instance of `MalformedInstance` error.
    pub fn malformed(cause: impl Into<String>) -> Self {
        Self::MalformedInstance { cause: cause.into() }
    }
}

impl Display for UflError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            UflError::MalformedInstance { cause } => write!(f, "malformed instance: {cause}"),
            UflError::MissingConnectionCost { facility, client } => {
                write!(f, "missing connection cost for facility '{facility}' and client '{client}'")
            }
            UflError::Infeasible { reason, unassigned, rounds } => write!(
                f,
                "infeasible after {rounds} rounds: {reason}, unassigned clients: [{}]",
                unassigned.iter().map(|client| client.to_string()).collect::<Vec<_>>().join(" ")
            ),
        }
    }
}

impl std::error::Error for UflError {}
