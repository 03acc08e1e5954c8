//! Trait definitions (hexagonal ports) for the two outbound AWS calls.
//!
//! Ports keep the retry and gating logic independent of the SDK so it can
//! be tested against scripted implementations. The real adapters live in
//! [`crate::adapter::aws`].

use async_trait::async_trait;

/// Result of a single stability-wait invocation.
///
/// `NotStable` covers every way an attempt can end short of success: the
/// waiter timing out, an API error, or an explicit non-stable report. The
/// retry loop never needs to distinguish between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    /// Every named service reported a steady running state.
    Stable,
    /// The wait ended without all services stabilizing.
    NotStable,
}

impl WaitOutcome {
    /// Check whether this outcome is `Stable`.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        matches!(self, Self::Stable)
    }
}

/// Verifies that the active AWS credentials resolve to a valid identity.
#[async_trait]
pub trait CredentialValidator: Send + Sync {
    /// Returns `true` when the credentials authenticate in `region`.
    ///
    /// Never errors: expired, missing or malformed credentials and network
    /// failures all collapse to `false`.
    async fn validate(&self, region: &str) -> bool;
}

/// Blocks until a set of services in a cluster report stable, or the
/// platform's fixed wait ceiling elapses.
#[async_trait]
pub trait StabilityWaiter: Send + Sync {
    /// Wait for `services` in `cluster` to reach a stable state.
    async fn wait_for_stability(&self, cluster: &str, services: &[String]) -> WaitOutcome;
}
