// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Status reporting: the softmodem's `o1 stats` command returns a JSON blob
//! (followed by the success marker) describing the element's O1 view. Only
//! one leaf of it is consumed here, the downlink channel bandwidth at
//! `o1-config` / `NRCELLDU` / `nrcelldu3gpp:bSChannelBwDL`.

use serde_json::Value;
use tracing::debug;

use crate::codec::{O1CommandSet, strip_marker};
use crate::errors::O1Error;
use crate::runner::CommandRunner;

/// Leaf holding the downlink channel bandwidth, in MHz.
pub const BANDWIDTH_LEAF: &str = "nrcelldu3gpp:bSChannelBwDL";

/// Objects traversed to reach [`BANDWIDTH_LEAF`].
pub const BANDWIDTH_PATH: [&str; 2] = ["o1-config", "NRCELLDU"];

/// Fetch and decode the element's status report.
pub async fn get_stats<R: CommandRunner + ?Sized>(
    runner: &R,
    commands: &O1CommandSet,
) -> Result<Value, O1Error> {
    let reply = runner.run_command(&commands.stats).await?;
    let payload = strip_marker(&reply).ok_or_else(|| O1Error::CommandRejected {
        command: commands.stats.clone(),
        reply: reply.clone(),
    })?;
    serde_json::from_str(payload)
        .map_err(|e| O1Error::MalformedStatus(format!("status report is not valid JSON: {e}")))
}

/// Report the element's current channel bandwidth, as the canonical string
/// form of the numeric leaf (e.g. `"40"`). The key path is rigid: a missing
/// key or a non-object/non-numeric node anywhere along it is an error.
pub async fn current_bandwidth<R: CommandRunner + ?Sized>(
    runner: &R,
    commands: &O1CommandSet,
) -> Result<String, O1Error> {
    let stats = get_stats(runner, commands).await?;
    let mut node = &stats;
    for key in BANDWIDTH_PATH {
        node = node.get(key).ok_or_else(|| {
            O1Error::MalformedStatus(format!("status report has no object '{key}'"))
        })?;
    }
    let leaf = node.get(BANDWIDTH_LEAF).ok_or_else(|| {
        O1Error::MalformedStatus(format!("status report has no field '{BANDWIDTH_LEAF}'"))
    })?;
    let value = leaf.as_number().ok_or_else(|| {
        O1Error::MalformedStatus(format!("field '{BANDWIDTH_LEAF}' is not a number: {leaf}"))
    })?;
    /* integral values render without a fraction, whether the element sent
     * 40 or 40.0; the procedure string-compares this against its target */
    let rendered = match value.as_f64() {
        Some(f) if f.fract() == 0.0 => format!("{f:.0}"),
        _ => value.to_string(),
    };
    debug!("Element reports channel bandwidth {rendered} MHz");
    Ok(rendered)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    /// Replies with a fixed script, one entry per call, recording commands.
    pub(crate) struct ScriptedRunner {
        replies: Mutex<Vec<String>>,
        pub(crate) commands: Mutex<Vec<String>>,
    }
    impl ScriptedRunner {
        pub(crate) fn new(replies: &[&str]) -> Self {
            let mut replies: Vec<String> = replies.iter().map(ToString::to_string).collect();
            replies.reverse();
            Self {
                replies: Mutex::new(replies),
                commands: Mutex::new(Vec::new()),
            }
        }
        pub(crate) fn calls(&self) -> Vec<String> {
            self.commands.lock().unwrap().clone()
        }
    }
    #[async_trait]
    impl CommandRunner for ScriptedRunner {
        async fn run_command(&self, command: &str) -> Result<String, O1Error> {
            self.commands.lock().unwrap().push(command.to_string());
            self.replies
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| O1Error::ReceiveFailed("script exhausted".to_string()))
        }
    }

    const STATS_40: &str =
        "{\"o1-config\":{\"NRCELLDU\":{\"nrcelldu3gpp:bSChannelBwDL\":40}}}\nOK\n";

    #[tokio::test]
    async fn bandwidth_extracted_from_stats() {
        let runner = ScriptedRunner::new(&[STATS_40]);
        let bw = current_bandwidth(&runner, &O1CommandSet::default())
            .await
            .unwrap();
        assert_eq!(bw, "40");
        assert_eq!(runner.calls(), vec!["o1 stats".to_string()]);
    }

    #[tokio::test]
    async fn float_leaf_renders_without_fraction() {
        let runner = ScriptedRunner::new(&[
            "{\"o1-config\":{\"NRCELLDU\":{\"nrcelldu3gpp:bSChannelBwDL\":40.0}}}\nOK\n",
        ]);
        let bw = current_bandwidth(&runner, &O1CommandSet::default())
            .await
            .unwrap();
        assert_eq!(bw, "40");
    }

    #[tokio::test]
    async fn fractional_leaf_keeps_its_fraction() {
        let runner = ScriptedRunner::new(&[
            "{\"o1-config\":{\"NRCELLDU\":{\"nrcelldu3gpp:bSChannelBwDL\":40.5}}}\nOK\n",
        ]);
        let bw = current_bandwidth(&runner, &O1CommandSet::default())
            .await
            .unwrap();
        assert_eq!(bw, "40.5");
    }

    #[tokio::test]
    async fn rejected_stats_reply_is_an_error() {
        let runner = ScriptedRunner::new(&["unknown command\n"]);
        let err = get_stats(&runner, &O1CommandSet::default())
            .await
            .unwrap_err();
        assert!(matches!(err, O1Error::CommandRejected { command, .. } if command == "o1 stats"));
    }

    #[tokio::test]
    async fn garbage_payload_is_an_error() {
        let runner = ScriptedRunner::new(&["not json\nOK\n"]);
        let err = get_stats(&runner, &O1CommandSet::default())
            .await
            .unwrap_err();
        assert!(matches!(err, O1Error::MalformedStatus(_)));
    }

    #[tokio::test]
    async fn missing_path_step_is_an_error() {
        let runner = ScriptedRunner::new(&["{\"o1-config\":{}}\nOK\n"]);
        let err = current_bandwidth(&runner, &O1CommandSet::default())
            .await
            .unwrap_err();
        assert!(matches!(err, O1Error::MalformedStatus(msg) if msg.contains("NRCELLDU")));
    }

    #[tokio::test]
    async fn non_numeric_leaf_is_an_error() {
        let runner = ScriptedRunner::new(&[
            "{\"o1-config\":{\"NRCELLDU\":{\"nrcelldu3gpp:bSChannelBwDL\":\"40\"}}}\nOK\n",
        ]);
        let err = current_bandwidth(&runner, &O1CommandSet::default())
            .await
            .unwrap_err();
        assert!(matches!(err, O1Error::MalformedStatus(_)));
    }
}
