use super::*;
use crate::construction::aggregation::aggregate_cost;
use crate::helpers::models::*;
use crate::helpers::random::create_clustered_problem;
use crate::helpers::utils::*;
use crate::models::problem::{ClientId, FacilityId};
use crate::utils::InfeasibleReason;

fn create_config(max_rounds: Option<usize>, mode: TelemetryMode) -> SolverConfig {
    SolverConfig { max_rounds, telemetry: Telemetry::new(mode), environment: Arc::new(test_environment()) }
}

#[test]
fn can_solve_reference_problem() {
    let problem = Arc::new(create_reference_problem());

    let (solution, metrics) =
        Solver::new(problem.clone(), create_config(None, TelemetryMode::None)).solve().expect("cannot solve");

    assert_eq!(solution.cost, 38.);
    assert_eq!(solution.rounds, 3);
    assert_eq!(solution.assignment.clients(2), Some(&[1, 2, 5, 7][..]));
    assert_eq!(solution.assignment.clients(4), Some(&[3, 4, 6][..]));
    assert_eq!(aggregate_cost(problem.as_ref(), &solution.assignment), Ok(solution.cost));
    assert!(metrics.is_none());
}

#[test]
fn can_solve_single_round_problem() {
    let problem = Arc::new(create_single_round_problem());

    let (solution, _) = Solver::new(problem, create_config(None, TelemetryMode::None)).solve().expect("cannot solve");

    assert_eq!(solution.cost, 13.);
    assert_eq!(solution.rounds, 1);
    assert_eq!(solution.assignment.opened().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn can_solve_empty_problem() {
    let problem = Arc::new(create_problem(&[(1, 10.)], &[], &[]));

    let (solution, _) = Solver::new(problem, create_config(None, TelemetryMode::None)).solve().expect("cannot solve");

    assert_eq!(solution.cost, 0.);
    assert_eq!(solution.rounds, 0);
}

#[test]
fn can_return_metrics() {
    let problem = Arc::new(create_reference_problem());

    let (_, metrics) =
        Solver::new(problem, create_config(None, TelemetryMode::OnlyMetrics)).solve().expect("cannot solve");

    let metrics = metrics.expect("no metrics");
    assert_eq!(metrics.rounds, 3);
    assert_eq!(metrics.history.iter().map(|round| round.facility).collect::<Vec<_>>(), vec![2, 2, 4]);
    assert_eq!(metrics.history.iter().map(|round| round.committed).sum::<usize>(), 7);
}

#[test]
fn can_fail_on_missing_connection_cost() {
    let problem = Arc::new(create_sparse_problem(&[(1, 1.), (2, 1.)], &[1], &[((1, 1), 3.)]));

    let result = Solver::new(problem, create_config(None, TelemetryMode::None)).solve();

    assert_eq!(result.err(), Some(UflError::MissingConnectionCost { facility: 2, client: 1 }));
}

#[test]
fn can_fail_on_round_limit() {
    let problem = Arc::new(create_reference_problem());

    let result = Solver::new(problem, create_config(Some(2), TelemetryMode::None)).solve();

    assert_eq!(
        result.err(),
        Some(UflError::Infeasible { reason: InfeasibleReason::RoundsExhausted, unassigned: vec![3, 4, 6], rounds: 2 })
    );
}

parameterized_test! {can_solve_clustered_problem, (facilities_size, clients_size, seed), {
    can_solve_clustered_problem_impl(facilities_size, clients_size, seed);
}}

can_solve_clustered_problem! {
    case01_small: (50, 200, 42),
    case02_large: (200, 1000, 42),
    case03_fewer_clients: (10, 7, 1),
}

fn can_solve_clustered_problem_impl(facilities_size: usize, clients_size: usize, seed: u64) {
    let problem = Arc::new(create_clustered_problem(facilities_size, clients_size, seed));

    let (solution, _) =
        Solver::new(problem.clone(), create_config(None, TelemetryMode::None)).solve().expect("cannot solve");

    assert_eq!(solution.rounds, facilities_size.min(clients_size));
    assert_eq!(solution.assignment.assigned_size(), clients_size);
    (0..facilities_size).for_each(|facility_idx| {
        let expected =
            (facility_idx..clients_size).step_by(facilities_size).map(|idx| idx as ClientId + 1).collect::<Vec<_>>();
        let actual = solution.assignment.clients(facility_idx as FacilityId + 1).map(|clients| clients.to_vec());

        assert_eq!(actual, if expected.is_empty() { None } else { Some(expected) });
    });
    assert_eq!(aggregate_cost(problem.as_ref(), &solution.assignment), Ok(solution.cost));
}
