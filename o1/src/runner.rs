// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Seam between the TCP session and the layers built on top of it. The status
//! decoder and the bandwidth procedure only need "send a command, give me the
//! raw reply", so they are written against this trait and can be exercised
//! with scripted fakes.

use async_trait::async_trait;

use crate::errors::O1Error;

/// One request/response exchange with a network element
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Send `command` and return the element's raw reply, success marker and
    /// all. The reply never contains the element's end-of-reply prompt line.
    async fn run_command(&self, command: &str) -> Result<String, O1Error>;
}
