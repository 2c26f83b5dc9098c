#[cfg(test)]
#[path = "../../tests/unit/matrix/reader_test.rs"]
mod reader_test;

use crate::common::*;
use std::fmt::Display;
use std::io::{BufReader, Read};
use std::str::FromStr;
use ufl_core::prelude::*;

/// A trait to read matrix problem: facility ids, opening costs and client ids on the first three
/// lines, then one line of connection costs per client in facility order.
pub trait MatrixProblem {
    /// Reads matrix problem.
    fn read_matrix(self) -> Result<Problem, UflError>;
}

impl<R: Read> MatrixProblem for BufReader<R> {
    fn read_matrix(self) -> Result<Problem, UflError> {
        MatrixReader::new(self).read_problem()
    }
}

impl MatrixProblem for String {
    fn read_matrix(self) -> Result<Problem, UflError> {
        MatrixReader::new(BufReader::new(self.as_bytes())).read_problem()
    }
}

struct MatrixReader<R: Read> {
    buffer: String,
    reader: BufReader<R>,
}

impl<R: Read> MatrixReader<R> {
    fn new(reader: BufReader<R>) -> Self {
        Self { buffer: String::new(), reader }
    }

    fn read_problem(&mut self) -> Result<Problem, UflError> {
        let (facilities, clients) = self.read_definitions()?;

        let rows = clients
            .iter()
            .map(|client| self.read_values::<Cost>(format!("cost row of client '{}'", client.id).as_str()))
            .collect::<Result<Vec<_>, _>>()?;

        Problem::from_matrix(facilities, clients, rows)
    }

    fn read_definitions(&mut self) -> Result<(Vec<Facility>, Vec<Client>), UflError> {
        let facility_ids = self.read_values::<FacilityId>("facility ids")?;
        let opening_costs = self.read_values::<Cost>("opening costs")?;

        if facility_ids.len() != opening_costs.len() {
            return Err(UflError::malformed(format!(
                "expected {} opening costs, got {}",
                facility_ids.len(),
                opening_costs.len()
            )));
        }

        let facilities = facility_ids
            .into_iter()
            .zip(opening_costs)
            .map(|(id, opening_cost)| Facility { id, opening_cost })
            .collect();

        let clients = self.read_values::<ClientId>("client ids")?.into_iter().map(|id| Client { id }).collect();

        Ok((facilities, clients))
    }

    fn read_values<T>(&mut self, what: &str) -> Result<Vec<T>, UflError>
    where
        T: FromStr,
        T::Err: Display,
    {
        if read_line(&mut self.reader, &mut self.buffer)? == 0 {
            return Err(UflError::malformed(format!("unexpected end of file, expected {what}")));
        }

        parse_values(self.buffer.as_str(), what)
    }
}
