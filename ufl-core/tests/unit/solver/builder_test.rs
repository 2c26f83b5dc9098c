use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::*;
use crate::utils::{GenericError, InfeasibleReason, UflError};
use std::sync::Mutex;

fn create_logging_environment(messages: Arc<Mutex<Vec<String>>>) -> Arc<Environment> {
    Arc::new(Environment::new(None, Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))))
}

#[test]
fn can_build_solver_with_limits() {
    let messages = Arc::new(Mutex::new(vec![]));
    let environment = create_logging_environment(messages.clone());

    let solution = Builder::new(Arc::new(create_reference_problem()), environment)
        .with_max_rounds(Some(10))
        .with_max_time(Some(300))
        .build()
        .and_then(|solver| solver.solve().map_err(GenericError::from))
        .map(|(solution, _)| solution)
        .expect("cannot solve");

    assert_eq!(solution.cost, 38.);
    assert_eq!(messages.lock().unwrap().as_slice(), &[
        "configured to use max rounds: 10".to_string(),
        "configured to use max time: 300s".to_string()
    ]);
}

parameterized_test! {can_reject_zero_limits, (max_rounds, max_time, expected), {
    let result = Builder::new(Arc::new(create_reference_problem()), Arc::new(test_environment()))
        .with_max_rounds(max_rounds)
        .with_max_time(max_time)
        .build();

    assert_eq!(result.err(), Some(GenericError::from(expected)));
}}

can_reject_zero_limits! {
    case01_rounds: (Some(0), None, "max rounds should be greater than zero"),
    case02_time: (None, Some(0), "max time should be greater than zero"),
}

#[test]
fn can_keep_existing_quota_with_max_time() {
    let quota: Arc<dyn Quota + Send + Sync> = Arc::new(CountingQuota::new(0));
    let environment = Arc::new(Environment::new(Some(quota), test_logger()));

    let result = Builder::new(Arc::new(create_reference_problem()), environment)
        .with_max_time(Some(300))
        .build()
        .map(|solver| solver.solve());

    match result {
        Ok(Err(UflError::Infeasible { reason, rounds, .. })) => {
            assert_eq!(reason, InfeasibleReason::QuotaReached);
            assert_eq!(rounds, 0);
        }
        _ => unreachable!("unexpected result"),
    }
}

#[test]
fn can_return_metrics_with_telemetry() {
    let (_, metrics) = Builder::new(Arc::new(create_single_round_problem()), Arc::new(test_environment()))
        .with_telemetry(TelemetryMode::All { logger: test_logger() })
        .build()
        .and_then(|solver| solver.solve().map_err(GenericError::from))
        .expect("cannot solve");

    assert_eq!(metrics.map(|metrics| metrics.rounds), Some(1));
}
