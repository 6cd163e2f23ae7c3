// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Failure type for the O1 control channel. Every fallible operation in this
//! crate returns an [`O1Error`]; nothing is retried internally.

use thiserror::Error;

/// The ways an O1 exchange or procedure can fail
#[derive(Error, Debug)]
pub enum O1Error {
    #[error("Failed to connect to {endpoint}: {reason}")]
    ConnectFailed { endpoint: String, reason: String },

    #[error("Failed to send command '{command}': {reason}")]
    SendFailed { command: String, reason: String },

    #[error("Receive failure: {0}")]
    ReceiveFailed(String),

    #[error("Command '{command}' was not acknowledged by the element. Reply: {reply:?}")]
    CommandRejected { command: String, reply: String },

    #[error("Malformed status report: {0}")]
    MalformedStatus(String),

    #[error("Unsupported bandwidth '{value}': allowed values are {allowed:?} MHz")]
    UnsupportedBandwidth { value: String, allowed: Vec<u32> },

    #[error(
        "Element reports bandwidth {reported} MHz after reconfiguration to {requested} MHz"
    )]
    VerifyFailed { requested: String, reported: String },

    #[error("Operation cancelled")]
    Cancelled,
}
