//! AWS SDK adapters for the credential and stability ports.

use std::time::Duration;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_ecs::client::Waiters;
use tracing::{debug, error};

use crate::port::{CredentialValidator, StabilityWaiter, WaitOutcome};

/// Ceiling for a single stability wait.
///
/// The SDK waiter polls `DescribeServices` internally at its own cadence;
/// one attempt is abandoned once this much time has passed without every
/// service reporting stable. Sized so a single attempt can sit out a full
/// rolling deployment before the retry loop gives up on it.
pub const MAX_WAIT: Duration = Duration::from_secs(600);

/// Load the shared SDK configuration pinned to `region`.
pub async fn sdk_config(region: &str) -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_owned()))
        .load()
        .await
}

/// Validates credentials with an STS `GetCallerIdentity` call.
///
/// Stateless; a fresh client is built per call so the verdict always
/// reflects the current credential chain.
pub struct StsCredentialValidator;

#[async_trait]
impl CredentialValidator for StsCredentialValidator {
    async fn validate(&self, region: &str) -> bool {
        let config = sdk_config(region).await;
        let client = aws_sdk_sts::Client::new(&config);

        match client.get_caller_identity().send().await {
            Ok(identity) => {
                debug!(
                    account = identity.account().unwrap_or("unknown"),
                    "credentials resolved to a valid identity"
                );
                true
            }
            Err(err) => {
                error!(error = ?err, "Error validating AWS credentials");
                false
            }
        }
    }
}

/// Drives the ECS `services_stable` waiter for one attempt at a time.
pub struct EcsStabilityWaiter {
    client: aws_sdk_ecs::Client,
}

impl EcsStabilityWaiter {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_ecs::Client::new(config),
        }
    }
}

#[async_trait]
impl StabilityWaiter for EcsStabilityWaiter {
    async fn wait_for_stability(&self, cluster: &str, services: &[String]) -> WaitOutcome {
        let result = self
            .client
            .wait_until_services_stable()
            .cluster(cluster)
            .set_services(Some(services.to_vec()))
            .wait(MAX_WAIT)
            .await;

        match result {
            Ok(_) => WaitOutcome::Stable,
            // Timeout, API error and an explicit non-stable report all
            // collapse to the same outcome; the retry loop treats them alike.
            Err(err) => {
                debug!(error = ?err, "stability wait ended without success");
                WaitOutcome::NotStable
            }
        }
    }
}
