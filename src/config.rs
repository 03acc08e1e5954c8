//! Step input extraction and validation.

use crate::error::{ConfigError, Result};
use crate::github::Inputs;

/// Immutable request describing one stability check.
///
/// Built once by [`CheckRequest::from_inputs`] and passed by reference to
/// everything downstream.
#[derive(Debug, Clone)]
pub struct CheckRequest {
    /// AWS region the identity check and ECS client are scoped to.
    pub region: String,
    /// Name of the ECS cluster hosting the services.
    pub cluster: String,
    /// Services to check; never empty.
    pub services: Vec<String>,
    /// Maximum number of stability-check attempts.
    pub retries: u32,
    /// Emit per-attempt progress logs.
    pub verbose: bool,
}

impl CheckRequest {
    /// Extract and validate the request from the step's input surface.
    ///
    /// The region falls back from the `aws-region` input to the
    /// `AWS_REGION` environment variable; with both absent extraction fails
    /// with [`ConfigError::MissingRegion`]. The service list arrives as a
    /// JSON array of strings and is decoded here; decode failures propagate
    /// to the caller.
    pub fn from_inputs(inputs: &Inputs) -> Result<Self> {
        let region = inputs
            .input("aws-region")
            .or_else(|| inputs.env("AWS_REGION"))
            .ok_or(ConfigError::MissingRegion)?;

        let retries = inputs
            .input("retries")
            .ok_or(ConfigError::MissingInput { input: "retries" })?
            .parse::<u32>()
            .map_err(|e| ConfigError::InvalidValue {
                input: "retries",
                reason: e.to_string(),
            })?;

        let cluster = inputs.input("ecs-cluster").ok_or(ConfigError::MissingInput {
            input: "ecs-cluster",
        })?;

        let raw_services = inputs
            .input("ecs-services")
            .ok_or(ConfigError::MissingInput {
                input: "ecs-services",
            })?;
        let services: Vec<String> = serde_json::from_str(&raw_services)?;
        if services.is_empty() {
            return Err(ConfigError::InvalidValue {
                input: "ecs-services",
                reason: "service list is empty".into(),
            }
            .into());
        }

        // The runner passes booleans as strings; only the literal "true"
        // enables verbose logging.
        let verbose = inputs.input("verbose").as_deref() == Some("true");

        Ok(Self {
            region,
            cluster,
            services,
            retries,
            verbose,
        })
    }
}
