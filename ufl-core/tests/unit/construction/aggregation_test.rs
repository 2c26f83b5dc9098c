use super::*;
use crate::helpers::models::*;

#[test]
fn can_aggregate_reference_assignment() {
    let problem = create_reference_problem();
    let assignment = Assignment::from_iter(vec![
        (1, vec![]),
        (2, vec![1, 2, 5, 7]),
        (3, vec![]),
        (4, vec![3, 4, 6]),
        (5, vec![]),
    ]);

    let cost = aggregate_cost(&problem, &assignment);

    assert_eq!(cost, Ok(38.));
}

#[test]
fn can_charge_opening_cost_once() {
    let problem = create_single_round_problem();
    let assignment = Assignment::from_iter(vec![(1, vec![1, 2, 3]), (2, vec![])]);

    let cost = aggregate_cost(&problem, &assignment);

    assert_eq!(cost, Ok(13.));
}

#[test]
fn can_aggregate_empty_assignment() {
    let problem = create_problem(&[(1, 10.)], &[], &[]);

    let cost = aggregate_cost(&problem, &Assignment::new(problem.facilities.as_slice()));

    assert_eq!(cost, Ok(0.));
}

#[test]
fn can_fail_on_missing_connection_cost() {
    let problem = create_sparse_problem(&[(1, 1.), (2, 1.)], &[1, 2], &[((1, 1), 1.), ((2, 2), 1.)]);
    let assignment = Assignment::from_iter(vec![(1, vec![1, 2]), (2, vec![])]);

    let cost = aggregate_cost(&problem, &assignment);

    assert_eq!(cost, Err(UflError::MissingConnectionCost { facility: 1, client: 2 }));
}
