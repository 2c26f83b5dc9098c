#[cfg(test)]
#[path = "../../tests/unit/common/text_writer_test.rs"]
mod text_writer_test;

use std::io::{BufWriter, Write};
use ufl_core::prelude::{GenericError, Solution};

/// Writes solution as text: total cost on the first line, then opened facilities in facility
/// order with their clients in commit order.
pub fn write_text_solution<W: Write>(solution: &Solution, writer: &mut BufWriter<W>) -> Result<(), GenericError> {
    writer.write_all(format!("Total cost: {}\n", solution.cost).as_bytes())?;

    solution.assignment.iter().try_for_each(|(facility, clients)| {
        let clients = clients.iter().map(|client| client.to_string()).collect::<Vec<_>>().join(" ");
        writer.write_all(format!("Facility {facility}: [{clients}]\n").as_bytes())
    })?;

    writer.flush()?;

    Ok(())
}
