//! Retry classification for the polling loop.
//!
//! Kept separate from the loop so the policy is unit-testable on its own.
//! Decisions derive purely from the error's classification: transport
//! failures always retry, server rejections retry unless the code marks the
//! credential itself as unusable.

use std::time::Duration;

use crate::error::Error;

/// How to proceed after a failed retrieval attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RetryDecision {
    Retry { delay: Duration },
    Fail,
}

/// Classify `error` into a decision.
///
/// The delay is the fixed `retry_interval` unless the server attached its
/// own flood-wait hint, which then takes precedence.
pub(crate) fn decide(error: &Error, retry_interval: Duration) -> RetryDecision {
    match error {
        Error::Transport(_) => RetryDecision::Retry {
            delay: retry_interval,
        },
        Error::Api(api_error) if api_error.is_retryable() => RetryDecision::Retry {
            delay: api_error.retry_after().unwrap_or(retry_interval),
        },
        Error::Api(_) | Error::Config { .. } => RetryDecision::Fail,
    }
}
