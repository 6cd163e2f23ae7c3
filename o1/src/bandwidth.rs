// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Bandwidth reconfiguration procedure: drive one element from its current
//! channel bandwidth to a requested one. The element only applies a new
//! bandwidth while the modem is stopped, so the procedure is a strict
//! stop / bwconfig / start sequence, preceded by a query (to short-circuit
//! when nothing needs to change) and followed by a verification query.

use std::collections::BTreeSet;

use tracing::{error, info};

use crate::codec::{O1CommandSet, is_success};
use crate::errors::O1Error;
use crate::runner::CommandRunner;
use crate::stats::current_bandwidth;

/// Outcome of a successful [`BandwidthReconfigurer::reconfigure`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BandwidthChange {
    /// The element already ran at the requested bandwidth; nothing was sent.
    Unchanged,
    /// The element was stopped, reconfigured and restarted.
    Reconfigured { from: String },
}

/// The reconfiguration procedure for one element type: which command strings
/// to use and which bandwidth values the element supports.
#[derive(Debug, Clone)]
pub struct BandwidthReconfigurer {
    commands: O1CommandSet,
    allowed_mhz: BTreeSet<u32>,
}

impl Default for BandwidthReconfigurer {
    fn default() -> Self {
        Self {
            commands: O1CommandSet::default(),
            allowed_mhz: BTreeSet::from([20, 40]),
        }
    }
}

impl BandwidthReconfigurer {
    /// Procedure with the OAI softmodem command set and its supported
    /// bandwidths, 20 and 40 MHz.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Procedure with custom commands and supported values.
    #[must_use]
    pub fn with_commands(
        commands: O1CommandSet,
        allowed_mhz: impl IntoIterator<Item = u32>,
    ) -> Self {
        Self {
            commands,
            allowed_mhz: allowed_mhz.into_iter().collect(),
        }
    }

    /// Reject unsupported values before any I/O happens. The value must be
    /// the canonical spelling of an allowed bandwidth: it goes on the wire
    /// verbatim and is string-compared against the element's reports, so
    /// variants like `040` or `+40` could never verify.
    fn check_supported(&self, value: &str) -> Result<(), O1Error> {
        let supported = self
            .allowed_mhz
            .iter()
            .any(|mhz| value == mhz.to_string());
        if supported {
            Ok(())
        } else {
            Err(O1Error::UnsupportedBandwidth {
                value: value.to_string(),
                allowed: self.allowed_mhz.iter().copied().collect(),
            })
        }
    }

    /// Drive the element at the other end of `runner` to `target` MHz.
    ///
    /// Aborts on the first command the element does not acknowledge, without
    /// retry and without rollback: if `stop_modem` succeeded and a later step
    /// fails, the element is left stopped. Do not blindly re-run the
    /// procedure in that situation. A second `stop_modem` against an already
    /// stopped modem has undefined effect; re-query the element's state first.
    pub async fn reconfigure<R: CommandRunner + ?Sized>(
        &self,
        runner: &R,
        target: &str,
    ) -> Result<BandwidthChange, O1Error> {
        self.check_supported(target)?;

        let current = current_bandwidth(runner, &self.commands).await?;
        if current == target {
            info!("Element already runs at {target} MHz, nothing to do");
            return Ok(BandwidthChange::Unchanged);
        }

        info!("Reconfiguring channel bandwidth from {current} to {target} MHz");
        let sequence = [
            self.commands.stop_modem.clone(),
            self.commands.bwconfig_for(target),
            self.commands.start_modem.clone(),
        ];
        for command in sequence {
            let reply = runner.run_command(&command).await?;
            if !is_success(&reply) {
                error!("Element rejected '{command}'; it may be left stopped");
                return Err(O1Error::CommandRejected { command, reply });
            }
        }

        /* the element accepted all three commands: confirm it took effect */
        let reported = current_bandwidth(runner, &self.commands).await?;
        if reported != target {
            error!("Element still reports {reported} MHz after reconfiguration to {target} MHz");
            return Err(O1Error::VerifyFailed {
                requested: target.to_string(),
                reported,
            });
        }
        info!("Channel bandwidth reconfigured to {target} MHz");
        Ok(BandwidthChange::Reconfigured { from: current })
    }
}
