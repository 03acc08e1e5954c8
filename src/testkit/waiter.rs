//! Mock implementations of the outbound-call ports.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::port::{CredentialValidator, StabilityWaiter, WaitOutcome};

/// A mock waiter with a scripted queue of outcomes.
///
/// Each call pops the next outcome from the queue; an exhausted queue keeps
/// returning `NotStable`.
pub struct ScriptedWaiter {
    outcomes: Mutex<VecDeque<WaitOutcome>>,
    calls: AtomicU32,
}

impl ScriptedWaiter {
    pub fn new(outcomes: Vec<WaitOutcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: AtomicU32::new(0),
        }
    }

    /// A waiter that fails `failures` times, then reports stable.
    pub fn stable_after(failures: u32) -> Self {
        let mut outcomes = vec![WaitOutcome::NotStable; failures as usize];
        outcomes.push(WaitOutcome::Stable);
        Self::new(outcomes)
    }

    /// A waiter that never reports stable.
    pub fn always_unstable() -> Self {
        Self::new(Vec::new())
    }

    /// Number of wait invocations made so far.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StabilityWaiter for ScriptedWaiter {
    async fn wait_for_stability(&self, _cluster: &str, _services: &[String]) -> WaitOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcomes
            .lock()
            .expect("outcome queue poisoned")
            .pop_front()
            .unwrap_or(WaitOutcome::NotStable)
    }
}

/// A credential validator with a fixed verdict.
pub struct StaticValidator {
    valid: bool,
    calls: AtomicU32,
}

impl StaticValidator {
    pub fn new(valid: bool) -> Self {
        Self {
            valid,
            calls: AtomicU32::new(0),
        }
    }

    /// Number of validation calls made so far.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CredentialValidator for StaticValidator {
    async fn validate(&self, _region: &str) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.valid
    }
}
