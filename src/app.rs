//! Run sequencing, terminal outcomes, and reporting.

use tracing::{error, info};

use crate::config::CheckRequest;
use crate::error::{ConfigError, Error};
use crate::github::Reporter;
use crate::orchestrator;
use crate::port::{CredentialValidator, StabilityWaiter};

/// Terminal result of one gate run.
///
/// Every path through the step ends in exactly one of these variants, so
/// [`report`] can dispatch exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// All services stabilized within the budget.
    Stable { attempts: u32 },
    /// Extraction failed before any outbound call was made.
    ConfigError { message: String },
    /// The identity check failed. The run stops early but does not signal
    /// pipeline failure.
    CredentialsInvalid,
    /// Every permitted attempt failed.
    NotStable { retries: u32 },
    /// Anything that escaped the paths above, reported with its message.
    Unexpected { message: String },
}

/// Classify an extraction error into a terminal outcome.
///
/// A missing region (or missing required input) is the handled
/// configuration-error path; malformed values propagate as unexpected
/// errors carrying the decoder's message.
pub fn config_outcome(err: Error) -> Outcome {
    match err {
        Error::Config(
            e @ (ConfigError::MissingRegion | ConfigError::MissingInput { .. }),
        ) => Outcome::ConfigError {
            message: e.to_string(),
        },
        other => Outcome::Unexpected {
            message: other.to_string(),
        },
    }
}

/// Gate on credentials, then drive the retry loop and apply the exhaustion
/// rule.
///
/// The success decision is the comparison `attempts_used > retries`: true
/// exactly when every permitted attempt failed (see
/// [`orchestrator::run`] for the counting convention).
pub async fn execute(
    request: &CheckRequest,
    validator: &dyn CredentialValidator,
    waiter: &dyn StabilityWaiter,
) -> Outcome {
    if !validator.validate(&request.region).await {
        return Outcome::CredentialsInvalid;
    }

    let attempts = orchestrator::run(request, waiter).await;
    if attempts > request.retries {
        if request.verbose {
            error!(
                retries = request.retries,
                "Service is not stable within the retry budget"
            );
        }
        Outcome::NotStable {
            retries: request.retries,
        }
    } else {
        if request.verbose {
            info!(attempts, "Service is stable");
        }
        Outcome::Stable { attempts }
    }
}

/// Report a terminal outcome through the workflow boundary.
///
/// Success writes the attempts-used count as the `retries` step output.
/// `NotStable`, `ConfigError` and `Unexpected` signal step failure with a
/// message. `CredentialsInvalid` only logs: the step exits early without
/// marking the pipeline as failed.
pub fn report(outcome: &Outcome, reporter: &mut Reporter) {
    match outcome {
        Outcome::Stable { attempts } => {
            if let Err(err) = reporter.set_output("retries", &attempts.to_string()) {
                reporter.set_failed(&err.to_string());
            }
        }
        Outcome::ConfigError { message } => reporter.set_failed(message),
        Outcome::CredentialsInvalid => {
            error!("AWS credentials are missing or invalid.");
        }
        Outcome::NotStable { retries } => {
            reporter.set_failed(&format!("Service is not stable after {retries} retries!"));
        }
        Outcome::Unexpected { message } => reporter.set_failed(message),
    }
}
