use super::*;

#[test]
fn can_display_malformed_instance() {
    let err = UflError::malformed("duplicate client id '1'");

    assert_eq!(err.to_string(), "malformed instance: duplicate client id '1'");
}

#[test]
fn can_display_missing_connection_cost() {
    let err = UflError::MissingConnectionCost { facility: 3, client: 7 };

    assert_eq!(err.to_string(), "missing connection cost for facility '3' and client '7'");
}

parameterized_test! {can_display_infeasible, (reason, unassigned, expected), {
    let err = UflError::Infeasible { reason, unassigned, rounds: 2 };

    assert_eq!(err.to_string(), expected);
}}

can_display_infeasible! {
    case01_rounds: (InfeasibleReason::RoundsExhausted, vec![3, 4], "infeasible after 2 rounds: all rounds are exhausted, unassigned clients: [3 4]"),
    case02_quota: (InfeasibleReason::QuotaReached, vec![1], "infeasible after 2 rounds: quota is reached, unassigned clients: [1]"),
    case03_viable: (InfeasibleReason::NoViableFacility, vec![], "infeasible after 2 rounds: no viable facility left, unassigned clients: []"),
}

#[test]
fn can_convert_domain_error_to_generic() {
    let err: GenericError = UflError::MissingConnectionCost { facility: 1, client: 2 }.into();

    assert_eq!(err, GenericError::from("missing connection cost for facility '1' and client '2'"));
}

#[test]
fn can_join_many_errors() {
    let errs = vec![GenericError::from("first"), GenericError::from("second".to_string())];

    assert_eq!(GenericError::join_many(errs.as_slice(), ", "), "first, second");
}
