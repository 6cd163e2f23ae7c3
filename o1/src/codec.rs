// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Stateless framing rules for the O1 text protocol, plus the command strings
//! the softmodem understands. The softmodem acknowledges every successful
//! command by ending its reply with a literal `OK` line; there is no other
//! success signal on the wire.

/// Trailing marker the softmodem appends to every successful reply.
pub const SUCCESS_MARKER: &str = "OK\n";

/// Tells if a raw reply carries the success marker. This is a predicate, not a
/// parser: anything shorter than the marker is simply not a success.
#[must_use]
pub fn is_success(output: &str) -> bool {
    output.ends_with(SUCCESS_MARKER)
}

/// Strip the success marker off a reply, yielding the payload that preceded it.
/// Returns `None` when the reply is not a success.
#[must_use]
pub fn strip_marker(output: &str) -> Option<&str> {
    output.strip_suffix(SUCCESS_MARKER)
}

/// The command strings used against one element type. The defaults are the
/// commands of the OAI softmodem's O1 telnet module; all of them can be
/// overridden when targeting an element with a different command surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct O1CommandSet {
    pub stats: String,
    pub stop_modem: String,
    pub bwconfig: String,
    pub start_modem: String,
}

impl Default for O1CommandSet {
    fn default() -> Self {
        Self {
            stats: "o1 stats".to_string(),
            stop_modem: "o1 stop_modem".to_string(),
            bwconfig: "o1 bwconfig".to_string(),
            start_modem: "o1 start_modem".to_string(),
        }
    }
}

impl O1CommandSet {
    /// Build the bandwidth-change command for the given value.
    #[must_use]
    pub fn bwconfig_for(&self, value: &str) -> String {
        format!("{} {value}", self.bwconfig)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn success_marker_is_trailing() {
        assert!(is_success("stats {}\nOK\n"));
        assert!(is_success("OK\n"));
        assert!(!is_success("ERR\n"));
        assert!(!is_success("OK\nmore\n"));
        assert!(!is_success("OK"));
        assert!(!is_success("K\n"));
        assert!(!is_success(""));
    }

    #[test]
    fn marker_stripping() {
        assert_eq!(strip_marker("{\"a\":1}\nOK\n"), Some("{\"a\":1}\n"));
        assert_eq!(strip_marker("OK\n"), Some(""));
        assert_eq!(strip_marker("ERR\n"), None);
    }

    #[test]
    fn bwconfig_formatting() {
        let commands = O1CommandSet::default();
        assert_eq!(commands.bwconfig_for("40"), "o1 bwconfig 40");
    }
}
