// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! The resolved configuration of one network function: raw payloads indexed
//! by the `kind` each payload declares about itself. Indirect references may
//! yield several payloads per kind; inline references yield at most one, and
//! must cover a mandatory set of kinds to be considered complete.

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use bytes::Bytes;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::errors::ConfigError;

/// Name of a configuration kind (`PLMN`, `RANConfig`, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KindName(String);

impl KindName {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl From<&str> for KindName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}
impl From<String> for KindName {
    fn from(name: String) -> Self {
        Self(name)
    }
}
impl Borrow<str> for KindName {
    fn borrow(&self) -> &str {
        &self.0
    }
}
impl fmt::Display for KindName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Which reference style produced a [`ResolvedConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Fetched through an indirect reference.
    Referenced,
    /// Embedded in the network function's own inline container.
    Own,
}

/// One resolved configuration payload. The payload bytes are kept verbatim;
/// the kind is read out of the payload itself when the object is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    kind: KindName,
    raw: Bytes,
    origin: ConfigOrigin,
}

impl ResolvedConfig {
    /// Build from a raw payload, reading its `kind` field. A payload that
    /// does not decode, or decodes without a string `kind`, is an error,
    /// never a default.
    pub(crate) fn from_payload(raw: Bytes, origin: ConfigOrigin) -> Result<Self, ConfigError> {
        #[derive(Deserialize)]
        struct KindProbe {
            kind: String,
        }
        let probe: KindProbe = serde_json::from_slice(&raw)
            .map_err(|e| ConfigError::MalformedPayload(format!("cannot read kind: {e}")))?;
        Ok(Self {
            kind: KindName::from(probe.kind),
            raw,
            origin,
        })
    }

    #[must_use]
    pub fn kind(&self) -> &KindName {
        &self.kind
    }
    #[must_use]
    pub fn raw(&self) -> &Bytes {
        &self.raw
    }
    #[must_use]
    pub fn origin(&self) -> ConfigOrigin {
        self.origin
    }

    /// Re-decode the payload into a typed model.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ConfigError> {
        serde_json::from_slice(&self.raw).map_err(|e| {
            ConfigError::MalformedPayload(format!("cannot decode '{}' payload: {e}", self.kind))
        })
    }
}

/// The set of kind names an inline-style resolution must cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MandatoryKinds(BTreeSet<KindName>);

impl Default for MandatoryKinds {
    /// The kinds every OAI RAN network function needs.
    fn default() -> Self {
        Self::new(["PLMN", "RANConfig", "OAIConfig"])
    }
}

impl MandatoryKinds {
    pub fn new<I, K>(kinds: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<KindName>,
    {
        Self(kinds.into_iter().map(Into::into).collect())
    }
    pub fn iter(&self) -> impl Iterator<Item = &KindName> {
        self.0.iter()
    }
    #[must_use]
    pub fn contains(&self, kind: &str) -> bool {
        self.0.contains(kind)
    }
}

/// Kind-indexed configuration of one network function. Exactly one of the two
/// maps ends up populated by a resolution pass over a well-formed reference
/// list, depending on the style the list declares.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSet {
    referenced: BTreeMap<KindName, Vec<ResolvedConfig>>,
    own: BTreeMap<KindName, ResolvedConfig>,
}

impl ConfigSet {
    /// Create an empty config set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an indirectly referenced config; a kind may collect several
    /// entries, kept in insertion order.
    pub(crate) fn add_referenced(&mut self, config: ResolvedConfig) {
        self.referenced
            .entry(config.kind().clone())
            .or_default()
            .push(config);
    }

    /// Store an inline config for its kind. Last write wins.
    pub(crate) fn set_own(&mut self, config: ResolvedConfig) {
        self.own.insert(config.kind().clone(), config);
    }

    /// All indirectly referenced configs of a kind, in input order.
    #[must_use]
    pub fn referenced(&self, kind: &str) -> &[ResolvedConfig] {
        self.referenced.get(kind).map_or(&[], Vec::as_slice)
    }

    /// The inline config of a kind, if any.
    #[must_use]
    pub fn own(&self, kind: &str) -> Option<&ResolvedConfig> {
        self.own.get(kind)
    }

    /// Kinds present in the inline map.
    pub fn own_kinds(&self) -> impl Iterator<Item = &KindName> {
        self.own.keys()
    }

    /// Tells if nothing was resolved into this set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.referenced.is_empty() && self.own.is_empty()
    }

    /// Mandatory kinds the inline map does not cover.
    #[must_use]
    pub fn missing_kinds(&self, mandatory: &MandatoryKinds) -> Vec<KindName> {
        mandatory
            .iter()
            .filter(|kind| !self.own.contains_key(kind.as_str()))
            .cloned()
            .collect()
    }
}
