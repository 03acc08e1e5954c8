//! Bounded-attempt retry loop around the stability waiter.

use tracing::{info, warn};

use crate::config::CheckRequest;
use crate::port::{StabilityWaiter, WaitOutcome};

/// Drive the waiter until it reports stable or the retry budget runs out.
///
/// Returns the 1-based number of attempts consumed, including a final
/// successful one. The counter only increments after a failed attempt, so a
/// run that fails every permitted attempt returns `retries + 1` - one past
/// the budget. Callers detect exhaustion by exactly that comparison
/// (`attempts_used > retries`); the convention is load-bearing and must not
/// change. With a budget of zero the loop body never runs: the function
/// returns 1 without ever invoking the waiter, and the caller's comparison
/// still reports exhaustion.
pub async fn run<W>(request: &CheckRequest, waiter: &W) -> u32
where
    W: StabilityWaiter + ?Sized,
{
    let mut attempt: u32 = 1;
    let mut stable = false;

    while attempt <= request.retries && !stable {
        if request.verbose {
            info!(attempt, "Waiting for service stability");
        }
        match waiter
            .wait_for_stability(&request.cluster, &request.services)
            .await
        {
            WaitOutcome::Stable => stable = true,
            WaitOutcome::NotStable => {
                if request.verbose {
                    warn!(attempt, "Stability check attempt failed");
                }
                attempt += 1;
            }
        }
    }

    attempt
}
