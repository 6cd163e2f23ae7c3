// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Failure types for configuration resolution. Any error here is fatal to the
//! resolution of one network function: there is no partial [`ConfigSet`].
//!
//! [`ConfigSet`]: crate::configset::ConfigSet

use thiserror::Error;

/// Failure of the externally supplied lookup capability.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LookupError {
    #[error("Object '{namespace}/{name}' not found")]
    NotFound { name: String, namespace: String },
    #[error("Lookup backend failure: {0}")]
    Backend(String),
}

/// The reasons why resolving a network function's configuration may fail
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unsupported api-version '{0}'")]
    UnsupportedApiVersion(String),
    #[error("Not all mandatory kinds available. Missing: {}", missing.join(", "))]
    IncompleteConfig { missing: Vec<String> },
    #[error("Malformed configuration payload: {0}")]
    MalformedPayload(String),
    #[error("Provider '{0}' not found in any referenced NFDeployment")]
    NoSuchProvider(String),
    #[error("Interface '{0}' not found")]
    NoSuchInterface(String),
    #[error("Bad address '{0}' on interface '{1}': {2}")]
    BadInterfaceAddress(String, String, String),
    #[error("Config lookup failed: {0}")]
    Lookup(#[from] LookupError),
}
