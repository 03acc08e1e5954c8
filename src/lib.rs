//! ECS stability gate - a deployment pipeline step that waits for services
//! to stabilize.
//!
//! Given a cluster name and a list of ECS services, the step repeatedly
//! invokes the SDK's "services stable" waiter until every service reports a
//! steady running state or a bounded retry budget is exhausted. The pipeline
//! succeeds or fails on that result.
//!
//! # Architecture
//!
//! The crate separates the retry decision logic from the AWS calls behind
//! two ports:
//!
//! - [`port::CredentialValidator`] - one STS identity check per run
//! - [`port::StabilityWaiter`] - one blocking stability wait per attempt
//!
//! [`orchestrator`] drives the waiter through the bounded attempt loop and
//! [`app`] applies the exhaustion rule and reports through the workflow
//! boundary in [`github`].
//!
//! # Modules
//!
//! - [`config`] - extraction and validation of the step's inputs
//! - [`github`] - GitHub Actions input/output binding
//! - [`port`] - trait seams for the two outbound AWS calls
//! - [`adapter`] - AWS SDK implementations of the ports
//! - [`orchestrator`] - the bounded retry loop
//! - [`app`] - run sequencing, terminal outcomes, reporting
//! - [`error`] - error types for the crate

pub mod adapter;
pub mod app;
pub mod config;
pub mod error;
pub mod github;
pub mod logging;
pub mod orchestrator;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
