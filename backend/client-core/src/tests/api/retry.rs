// Unit tests for the retry policy decisions.

use crate::api::RetryPolicy;
use crate::error::api::ApiError;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;
use std::time::Duration;

use backoff::backoff::Backoff;

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

fn timeout_error() -> ApiError {
    ApiError::Timeout {
        message: "elapsed".into(),
        location: here(),
    }
}

fn network_error() -> ApiError {
    ApiError::NetworkUnavailable {
        message: "connection refused".into(),
        location: here(),
    }
}

fn server_error(status: u16) -> ApiError {
    ApiError::Server {
        status: HttpStatusCode::from(status),
        message: "boom".into(),
        location: here(),
    }
}

/// **VALUE**: Pins the attempt ceiling at 3 (1 initial + 2 retries).
///
/// **WHY THIS MATTERS**: The ceiling bounds how long a user waits on a
/// failing backend. Raising it silently multiplies worst-case latency for
/// every operation.
///
/// **BUG THIS CATCHES**: Any change to the retry budget.
#[test]
fn given_default_policy_when_max_attempts_queried_then_is_three() {
    let policy = RetryPolicy::default();

    assert_eq!(policy.max_attempts(), 3);
}

/// **VALUE**: Proves a timeout is never retried, regardless of budget.
///
/// **WHY THIS MATTERS**: A timeout means the backend is overloaded or the
/// task is intrinsically slow; re-issuing it wastes the user's wait
/// without changing the outcome.
///
/// **BUG THIS CATCHES**: Timeout creeping into the retryable set.
#[test]
fn given_timeout_error_when_should_retry_checked_then_never_retries() {
    // GIVEN: A fresh policy and a classified timeout
    let policy = RetryPolicy::default();
    let error = timeout_error();

    // WHEN/THEN: Not retried even on the first attempt
    assert!(!policy.should_retry(&error, 1));
    assert!(!policy.should_retry(&error, 2));
}

#[test]
fn given_retryable_errors_when_budget_remains_then_retries() {
    // GIVEN: Retryable failures
    let policy = RetryPolicy::default();

    // THEN: Network and server failures are retried while budget remains
    assert!(policy.should_retry(&network_error(), 1));
    assert!(policy.should_retry(&network_error(), 2));
    assert!(policy.should_retry(&server_error(500), 1));
    assert!(policy.should_retry(&server_error(404), 2));
}

#[test]
fn given_exhausted_budget_when_should_retry_checked_then_stops() {
    // GIVEN: The third attempt has already completed
    let policy = RetryPolicy::default();

    // THEN: Even a retryable failure is surfaced instead of re-issued
    assert!(!policy.should_retry(&network_error(), 3));
    assert!(!policy.should_retry(&server_error(503), 3));
}

/// **VALUE**: Pins the delay schedule to a constant 1 second.
///
/// **WHY THIS MATTERS**: The fixed delay is part of the operation's
/// worst-case latency contract; growth would stretch it unpredictably.
///
/// **BUG THIS CATCHES**: Someone swapping the constant schedule for an
/// exponential one.
#[test]
fn given_delay_schedule_when_drained_then_yields_fixed_one_second_delays() {
    // GIVEN: A fresh schedule
    let policy = RetryPolicy::default();
    let mut schedule = policy.delay_schedule();

    // WHEN/THEN: Every delay is exactly one second, with no growth
    assert_eq!(schedule.next_backoff(), Some(Duration::from_secs(1)));
    assert_eq!(schedule.next_backoff(), Some(Duration::from_secs(1)));
}
