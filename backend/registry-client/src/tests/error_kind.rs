use crate::error::{ConfigError, ErrorKind, RegistryError, TransportFailure};

use common::ErrorLocation;
use models::{ApiProblem, ModelError};

use std::time::Duration;

/// **VALUE**: Verifies every error family maps to exactly one kind.
///
/// **WHY THIS MATTERS**: Callers decide whether to retry, fix input or give up from the
/// kind alone; a misclassified error leads to the wrong decision.
///
/// **BUG THIS CATCHES**: Would catch a new variant falling into the wrong bucket.
#[test]
fn given_each_error_family_when_classified_then_kind_matches() {
    assert_eq!(
        RegistryError::invalid_identifier("Group ID", "", "^.{1,512}$").kind(),
        ErrorKind::Validation
    );
    assert_eq!(
        RegistryError::from(ModelError::validation("Version content cannot be empty")).kind(),
        ErrorKind::Validation
    );
    assert_eq!(RegistryError::cancelled().kind(), ErrorKind::Transport);
    assert_eq!(
        RegistryError::api(ApiProblem::new(409, "Conflict")).kind(),
        ErrorKind::Api
    );
    assert_eq!(RegistryError::decode("bad json").kind(), ErrorKind::Decode);
    assert_eq!(RegistryError::encode("bad value").kind(), ErrorKind::Request);

    let config = ConfigError::ValidationError {
        location: ErrorLocation::caller(),
        reason: "Invalid timeout".to_string(),
    };
    assert_eq!(RegistryError::from(config).kind(), ErrorKind::Request);
}

/// **VALUE**: Verifies cancellation and deadline are distinguishable transport failures.
///
/// **BUG THIS CATCHES**: Would catch both being collapsed into a generic timeout.
#[test]
fn given_cancel_and_deadline_when_built_then_failures_differ_and_no_status() {
    let cancelled = RegistryError::cancelled();
    let deadline = RegistryError::deadline_exceeded(Duration::from_millis(250));

    assert_eq!(cancelled.transport_failure(), Some(TransportFailure::Cancelled));
    assert_eq!(
        deadline.transport_failure(),
        Some(TransportFailure::DeadlineExceeded)
    );
    assert_eq!(cancelled.status(), None);
    assert_eq!(deadline.status(), None);
    assert!(deadline.to_string().contains("250ms"));
}

#[test]
fn given_error_when_displayed_then_location_points_at_this_file() {
    let err = RegistryError::decode("bad json");

    assert!(err.to_string().contains("error_kind.rs"));
}

#[test]
fn given_non_param_error_when_asked_for_violations_then_empty() {
    assert!(RegistryError::decode("bad json").violations().is_empty());
}
