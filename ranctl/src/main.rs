// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

#![deny(clippy::all, clippy::pedantic)]
#![deny(rustdoc::all)]
#![allow(rustdoc::missing_crate_level_docs)]

mod args;

use crate::args::{BandwidthCmd, CmdArgs, Command, EndpointArgs, Parser};

use o1::bandwidth::{BandwidthChange, BandwidthReconfigurer};
use o1::errors::O1Error;
use o1::session::ControlSession;
use o1::stats::{current_bandwidth, get_stats};
use o1::O1CommandSet;

use tracing::{error, info};

fn init_logging() {
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_level(true)
        .init();
}

fn open_session(endpoint: &EndpointArgs) -> ControlSession {
    let session =
        ControlSession::new(endpoint.host.clone(), endpoint.port).with_config(endpoint.session_config());

    /* Ctrl-C aborts any in-flight connect or read */
    let cancel = session.cancel_token();
    ctrlc::set_handler(move || cancel.cancel()).expect("failed to set SIGINT handler");
    session
}

async fn run_stats(session: &ControlSession) -> Result<(), O1Error> {
    let stats = get_stats(session, &O1CommandSet::default()).await?;
    let rendered = serde_json::to_string_pretty(&stats)
        .map_err(|e| O1Error::MalformedStatus(e.to_string()))?;
    println!("{rendered}");
    Ok(())
}

async fn run_get(session: &ControlSession) -> Result<(), O1Error> {
    let bw = current_bandwidth(session, &O1CommandSet::default()).await?;
    println!("{bw}");
    Ok(())
}

async fn run_set(session: &ControlSession, mhz: &str) -> Result<(), O1Error> {
    let change = BandwidthReconfigurer::new().reconfigure(session, mhz).await?;
    match change {
        BandwidthChange::Unchanged => {
            info!("Element already runs at {mhz} MHz; no commands issued");
        }
        BandwidthChange::Reconfigured { from } => {
            info!("Element reconfigured from {from} to {mhz} MHz and verified");
        }
    }
    Ok(())
}

fn main() {
    let args = CmdArgs::parse();
    init_logging();

    /* create runtime */
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_io()
        .enable_time()
        .build()
        .expect("Tokio runtime creation failed");

    let outcome = match args.command {
        Command::Stats(endpoint) => {
            let session = open_session(&endpoint);
            rt.block_on(run_stats(&session))
        }
        Command::Bandwidth { action } => match action {
            BandwidthCmd::Get(endpoint) => {
                let session = open_session(&endpoint);
                rt.block_on(run_get(&session))
            }
            BandwidthCmd::Set { mhz, endpoint } => {
                let session = open_session(&endpoint);
                rt.block_on(run_set(&session, &mhz))
            }
        },
    };

    if let Err(e) = outcome {
        match &e {
            O1Error::VerifyFailed { .. } => {
                error!("Element did not reach the requested state: {e}");
            }
            O1Error::CommandRejected { .. } => {
                error!("Element rejected a command; it may be left stopped: {e}");
            }
            _ => error!("{e}"),
        }
        std::process::exit(1);
    }
}
