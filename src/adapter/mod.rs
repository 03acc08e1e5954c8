//! Adapter implementations of the outbound-call ports.

pub mod aws;
