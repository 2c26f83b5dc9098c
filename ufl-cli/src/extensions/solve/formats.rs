//! Contains format readers and writers.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/formats_test.rs"]
mod formats_test;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use ufl_core::prelude::*;
use ufl_core::solver::RoundMetrics;
use ufl_scientific::common::write_text_solution;
use ufl_scientific::matrix::MatrixProblem;
use ufl_scientific::orlib::OrlibProblem;

/// A reader for problem.
pub struct ProblemReader(pub Box<dyn Fn(File) -> Result<Problem, UflError>>);

/// A writer for solution.
pub struct SolutionWriter(pub Box<dyn Fn(&Solution, Option<&Metrics>, OutWriter) -> Result<(), GenericError>>);

/// An output writer.
pub type OutWriter = BufWriter<Box<dyn Write>>;

type ReaderMap<'a> = HashMap<&'a str, ProblemReader>;
type WriterMap<'a> = HashMap<&'a str, SolutionWriter>;

/// Gets available problem readers.
pub fn get_problem_readers<'a>() -> ReaderMap<'a> {
    let mut readers = ReaderMap::default();

    readers.insert("matrix", ProblemReader(Box::new(|problem: File| BufReader::new(problem).read_matrix())));
    readers.insert("orlib", ProblemReader(Box::new(|problem: File| BufReader::new(problem).read_orlib())));

    readers
}

/// Gets available solution writers.
pub fn get_solution_writers<'a>() -> WriterMap<'a> {
    let mut writers = WriterMap::default();

    writers.insert(
        "text",
        SolutionWriter(Box::new(|solution: &Solution, _: Option<&Metrics>, writer: OutWriter| {
            let mut writer = writer;
            write_text_solution(solution, &mut writer)
        })),
    );
    writers.insert(
        "json",
        SolutionWriter(Box::new(|solution: &Solution, metrics: Option<&Metrics>, writer: OutWriter| {
            let mut writer = writer;
            write_json_solution(solution, metrics, &mut writer)
        })),
    );

    writers
}

/// A solution in json format.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SolutionOutput {
    /// Total cost.
    pub cost: f64,
    /// Amount of rounds run.
    pub rounds: usize,
    /// Opened facilities in facility order.
    pub facilities: Vec<FacilityOutput>,
    /// Solver metrics, if collected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MetricsOutput>,
}

/// An opened facility with its clients.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FacilityOutput {
    /// Facility id.
    pub id: FacilityId,
    /// Clients in commit order.
    pub clients: Vec<ClientId>,
}

/// Solver metrics.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MetricsOutput {
    /// Duration in milliseconds.
    pub duration: usize,
    /// Round history.
    pub history: Vec<RoundOutput>,
}

/// Information about a single round.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RoundOutput {
    /// Round index.
    pub round: usize,
    /// Selected facility.
    pub facility: FacilityId,
    /// A round at which the committed group was found.
    pub threshold: usize,
    /// Ratio of the committed group.
    pub ratio: f64,
    /// Amount of committed clients.
    pub committed: usize,
    /// Amount of clients left unassigned.
    pub unassigned: usize,
}

impl From<&RoundMetrics> for RoundOutput {
    fn from(round: &RoundMetrics) -> Self {
        Self {
            round: round.round,
            facility: round.facility,
            threshold: round.threshold,
            ratio: round.ratio,
            committed: round.committed,
            unassigned: round.unassigned,
        }
    }
}

/// Writes solution in json format.
pub fn write_json_solution<W: Write>(
    solution: &Solution,
    metrics: Option<&Metrics>,
    writer: &mut BufWriter<W>,
) -> Result<(), GenericError> {
    let output = SolutionOutput {
        cost: solution.cost,
        rounds: solution.rounds,
        facilities: solution
            .assignment
            .iter()
            .map(|(id, clients)| FacilityOutput { id, clients: clients.to_vec() })
            .collect(),
        metrics: metrics.map(|metrics| MetricsOutput {
            duration: metrics.duration,
            history: metrics.history.iter().map(RoundOutput::from).collect(),
        }),
    };

    serde_json::to_writer_pretty(&mut *writer, &output).map_err(|err| format!("cannot write json: '{err}'"))?;
    writer.flush()?;

    Ok(())
}
