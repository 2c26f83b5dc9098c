#[cfg(test)]
#[path = "../../tests/unit/matrix/writer_test.rs"]
mod writer_test;

use std::fmt::Display;
use std::io::{BufWriter, Write};
use ufl_core::prelude::*;

/// A trait to write problem in matrix format.
pub trait MatrixWriter<W: Write> {
    /// Writes problem in matrix format.
    fn write_matrix(&self, writer: &mut BufWriter<W>) -> Result<(), GenericError>;
}

impl<W: Write> MatrixWriter<W> for Problem {
    fn write_matrix(&self, writer: &mut BufWriter<W>) -> Result<(), GenericError> {
        write_values(writer, self.facilities.iter().map(|facility| facility.id))?;
        write_values(writer, self.facilities.iter().map(|facility| facility.opening_cost))?;
        write_values(writer, self.clients.iter().map(|client| client.id))?;

        self.clients.iter().try_for_each(|client| {
            let row = self
                .facilities
                .iter()
                .map(|facility| self.connection_cost(facility.id, client.id))
                .collect::<Result<Vec<_>, _>>()?;

            write_values(writer, row.into_iter())
        })?;

        writer.flush()?;

        Ok(())
    }
}

fn write_values<W: Write, T: Display>(
    writer: &mut BufWriter<W>,
    values: impl Iterator<Item = T>,
) -> Result<(), GenericError> {
    let line = values.map(|value| value.to_string()).collect::<Vec<_>>().join(" ");
    writer.write_all(format!("{line}\n").as_bytes())?;

    Ok(())
}
