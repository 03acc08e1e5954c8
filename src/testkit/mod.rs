//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! - [`ScriptedWaiter`] - pre-loaded wait outcomes with a call counter.
//! - [`StaticValidator`] - fixed credential verdict with a call counter.

mod waiter;

pub use waiter::{ScriptedWaiter, StaticValidator};
