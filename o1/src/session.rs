// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! One-shot TCP control session against a network element. The softmodem's
//! telnet server never signals end-of-stream, so a reply has to be framed
//! heuristically: every reply ends with a bare prompt line (`softmodem_gnb`),
//! and any sufficiently long silence is also treated as end of reply. Each
//! [`ControlSession::run_command`] call opens a fresh connection and drops it
//! before returning; connections are never reused.

use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::errors::O1Error;
use crate::runner::CommandRunner;

/// Timeouts and framing parameters of a control session. The defaults match
/// the OAI softmodem: 5 s to connect, a 5 s idle deadline refreshed on every
/// received character, and `softmodem_gnb` as the end-of-reply prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
    pub end_marker: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(5),
            end_marker: "softmodem_gnb".to_string(),
        }
    }
}

/// Client side of the O1 control channel of one network element.
///
/// Holds no connection state: every command opens its own TCP connection and
/// closes it on every exit path. Calls against *different* elements may run
/// concurrently; two concurrent calls against the *same* element race at the
/// transport level. Callers that need serialized access to one element must
/// serialize externally.
#[derive(Debug, Clone)]
pub struct ControlSession {
    host: String,
    port: u16,
    config: SessionConfig,
    cancel: CancellationToken,
}

impl ControlSession {
    /// Create a session for the element at `host:port` with default settings.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            config: SessionConfig::default(),
            cancel: CancellationToken::new(),
        }
    }

    /// Replace the session settings.
    #[must_use]
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Token cancelling any in-flight connect or read of this session.
    /// Cancellation surfaces as [`O1Error::Cancelled`].
    #[must_use]
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Perform one request/response exchange: connect, send `command`, read
    /// the reply until the end marker or an idle timeout, and close.
    pub async fn run_command(&self, command: &str) -> Result<String, O1Error> {
        let mut stream = self.connect().await?;
        let res = self.exchange(&mut stream, command).await;
        /* stream dropped here: the connection is closed on every path */
        res
    }

    async fn connect(&self) -> Result<TcpStream, O1Error> {
        let endpoint = format!("{}:{}", self.host, self.port);
        debug!("Connecting to element at {endpoint}...");
        let stream = tokio::select! {
            () = self.cancel.cancelled() => return Err(O1Error::Cancelled),
            res = timeout(self.config.connect_timeout, TcpStream::connect(&endpoint)) => res
                .map_err(|_| O1Error::ConnectFailed {
                    endpoint: endpoint.clone(),
                    reason: format!("no connection within {:?}", self.config.connect_timeout),
                })?
                .map_err(|e| O1Error::ConnectFailed {
                    endpoint: endpoint.clone(),
                    reason: e.to_string(),
                })?,
        };
        debug!("Connected to {endpoint}");
        Ok(stream)
    }

    async fn exchange(&self, stream: &mut TcpStream, command: &str) -> Result<String, O1Error> {
        debug!("Sending command '{command}'");
        let mut request = command.as_bytes().to_vec();
        request.push(b'\n');
        stream
            .write_all(&request)
            .await
            .map_err(|e| O1Error::SendFailed {
                command: command.to_string(),
                reason: e.to_string(),
            })?;
        self.read_reply(stream).await
    }

    /// Accumulate the reply one character at a time. Only `\n`-terminated
    /// lines make it into the output; the loop ends when the current
    /// unterminated line equals the end marker (the prompt line is not part
    /// of the reply), on a clean EOF, or when the idle deadline expires with
    /// no new data. Timeout and EOF are benign terminations, not errors.
    async fn read_reply(&self, stream: &mut TcpStream) -> Result<String, O1Error> {
        let mut out = String::new();
        let mut line = String::new();
        let mut byte = [0u8; 1];
        loop {
            let read = tokio::select! {
                () = self.cancel.cancelled() => return Err(O1Error::Cancelled),
                res = timeout(self.config.idle_timeout, stream.read(&mut byte)) => res,
            };
            match read {
                Err(_) => {
                    warn!("Element went silent for {:?}, ending read", self.config.idle_timeout);
                    break;
                }
                Ok(Ok(0)) => break,
                Ok(Ok(_)) => {}
                Ok(Err(e)) => return Err(O1Error::ReceiveFailed(e.to_string())),
            }
            if byte[0] == b'\n' {
                out.push_str(&line);
                out.push('\n');
                line.clear();
            } else {
                line.push(char::from(byte[0]));
            }
            if line == self.config.end_marker {
                break;
            }
        }
        debug!("Read {} octets of reply", out.len());
        Ok(out)
    }
}

#[async_trait]
impl CommandRunner for ControlSession {
    async fn run_command(&self, command: &str) -> Result<String, O1Error> {
        ControlSession::run_command(self, command).await
    }
}
