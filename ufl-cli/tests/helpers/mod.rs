#[path = "../../../ufl-core/tests/helpers/macros.rs"]
#[macro_use]
pub mod macros;

use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;
use ufl_core::prelude::Problem;
use ufl_scientific::matrix::MatrixProblem;

pub const REFERENCE_PROBLEM_PATH: &str = "../data/matrix/reference.txt";
pub const ORLIB_PROBLEM_PATH: &str = "../data/orlib/small.txt";
pub const CONFIG_PATH: &str = "../data/config/config.json";

pub fn create_reference_problem() -> Arc<Problem> {
    Arc::new(BufReader::new(File::open(REFERENCE_PROBLEM_PATH).unwrap()).read_matrix().unwrap())
}
