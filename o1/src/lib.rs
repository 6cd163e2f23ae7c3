// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! O1 control-channel client for OAI RAN network elements. The softmodem exposes a
//! line-oriented telnet-style interface; this crate speaks it over short-lived TCP
//! sessions (one connection per command) and builds the bandwidth reconfiguration
//! procedure on top: query the element's reported channel bandwidth, stop the modem,
//! apply the new bandwidth, restart it and verify the element actually changed.

#![deny(
    unsafe_code,
    clippy::all,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

pub mod bandwidth;
pub mod codec;
pub mod errors;
pub mod runner;
pub mod session;
pub mod stats;

pub use bandwidth::{BandwidthChange, BandwidthReconfigurer}; // re-export
pub use codec::O1CommandSet; // re-export
pub use errors::O1Error; // re-export
pub use runner::CommandRunner; // re-export
pub use session::{ControlSession, SessionConfig}; // re-export
