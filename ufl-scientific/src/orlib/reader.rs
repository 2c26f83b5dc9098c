#[cfg(test)]
#[path = "../../tests/unit/orlib/reader_test.rs"]
mod reader_test;

use crate::common::TokenReader;
use std::io::{BufReader, Read};
use ufl_core::prelude::*;

/// A trait to read OR-Library facility location problem. Capacities and demands are ignored,
/// facilities and clients get sequential ids starting from one.
pub trait OrlibProblem {
    /// Reads OR-Library problem.
    fn read_orlib(self) -> Result<Problem, UflError>;
}

impl<R: Read> OrlibProblem for BufReader<R> {
    fn read_orlib(self) -> Result<Problem, UflError> {
        OrlibReader::new(self).read_problem()
    }
}

impl OrlibProblem for String {
    fn read_orlib(self) -> Result<Problem, UflError> {
        OrlibReader::new(BufReader::new(self.as_bytes())).read_problem()
    }
}

struct OrlibReader<R: Read> {
    tokens: TokenReader<R>,
}

impl<R: Read> OrlibReader<R> {
    fn new(reader: BufReader<R>) -> Self {
        Self { tokens: TokenReader::new(reader) }
    }

    fn read_problem(&mut self) -> Result<Problem, UflError> {
        let facilities_size = self.tokens.next_value::<usize>("amount of facilities")?;
        let clients_size = self.tokens.next_value::<usize>("amount of customers")?;

        let facilities = self.read_facilities(facilities_size)?;
        let (clients, rows) = self.read_customers(clients_size, facilities_size)?;

        Problem::from_matrix(facilities, clients, rows)
    }

    fn read_facilities(&mut self, size: usize) -> Result<Vec<Facility>, UflError> {
        (1..=size)
            .map(|id| -> Result<Facility, UflError> {
                // NOTE some files have a literal 'capacity' word instead of the value
                self.tokens.next_token(format!("capacity of facility '{id}'").as_str())?;
                let opening_cost = self.tokens.next_value::<Cost>(format!("opening cost of facility '{id}'").as_str())?;

                Ok(Facility { id: id as FacilityId, opening_cost })
            })
            .collect()
    }

    fn read_customers(
        &mut self,
        clients_size: usize,
        facilities_size: usize,
    ) -> Result<(Vec<Client>, Vec<Vec<Cost>>), UflError> {
        (1..=clients_size)
            .map(|id| -> Result<(Client, Vec<Cost>), UflError> {
                self.tokens.next_value::<Cost>(format!("demand of customer '{id}'").as_str())?;

                let row = (1..=facilities_size)
                    .map(|facility| {
                        self.tokens.next_value::<Cost>(
                            format!("cost of customer '{id}' for facility '{facility}'").as_str(),
                        )
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                Ok((Client { id: id as ClientId }, row))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|customers| customers.into_iter().unzip())
    }
}
