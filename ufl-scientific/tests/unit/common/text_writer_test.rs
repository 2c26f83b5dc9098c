use super::*;
use crate::helpers::create_reference_problem;
use std::sync::Arc;
use ufl_core::prelude::{Assignment, Environment, Solver, SolverConfig};

fn write_to_string(solution: &Solution) -> String {
    let mut writer = BufWriter::new(Vec::new());
    write_text_solution(solution, &mut writer).expect("cannot write solution");

    String::from_utf8(writer.into_inner().expect("cannot get buffer")).expect("invalid utf8")
}

#[test]
fn can_write_reference_solution() {
    let problem = Arc::new(create_reference_problem());
    let config = SolverConfig { environment: Arc::new(Environment::new(None, Arc::new(|_| ()))), ..Default::default() };
    let (solution, _) = Solver::new(problem, config).solve().expect("cannot solve");

    let content = write_to_string(&solution);

    assert_eq!(content, "Total cost: 38\nFacility 2: [1 2 5 7]\nFacility 4: [3 4 6]\n");
}

#[test]
fn can_write_fractional_cost_and_skip_closed_facilities() {
    let solution = Solution {
        cost: 12.5,
        assignment: Assignment::from_iter(vec![(10, vec![]), (20, vec![-1])]),
        rounds: 1,
    };

    let content = write_to_string(&solution);

    assert_eq!(content, "Total cost: 12.5\nFacility 20: [-1]\n");
}
