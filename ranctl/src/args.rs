// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

pub use clap::Parser;
use clap::{Args, Subcommand};
use std::time::Duration;

use o1::session::SessionConfig;

#[derive(Parser)]
#[command(name = "ranctl")]
#[command(version = "0.1.0")]
#[command(about = "Operator tool for OAI RAN network elements", long_about = None)]
pub struct CmdArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the element's O1 status report
    Stats(EndpointArgs),
    /// Query or change the element's channel bandwidth
    Bandwidth {
        #[command(subcommand)]
        action: BandwidthCmd,
    },
}

#[derive(Subcommand)]
pub enum BandwidthCmd {
    /// Print the current channel bandwidth in MHz
    Get(EndpointArgs),
    /// Reconfigure the channel bandwidth (stops and restarts the modem)
    Set {
        /// Requested bandwidth in MHz (20 or 40)
        mhz: String,
        #[command(flatten)]
        endpoint: EndpointArgs,
    },
}

#[derive(Args)]
pub struct EndpointArgs {
    /// Host of the element's O1 telnet interface
    #[arg(long)]
    pub host: String,

    /// Port of the element's O1 telnet interface
    #[arg(long, default_value_t = 9090)]
    pub port: u16,

    /// Connect timeout, in seconds
    #[arg(long, value_name = "seconds", default_value_t = 5)]
    pub connect_timeout: u64,

    /// Idle read deadline, in seconds
    #[arg(long, value_name = "seconds", default_value_t = 5)]
    pub idle_timeout: u64,
}

impl EndpointArgs {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            connect_timeout: Duration::from_secs(self.connect_timeout),
            idle_timeout: Duration::from_secs(self.idle_timeout),
            ..SessionConfig::default()
        }
    }
}
