// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Resolution of a network function's configuration references into a
//! [`ConfigSet`]. The resolver walks the reference list in declared order,
//! classifies each reference by its api-version and fetches the pointed-to
//! object through a caller-supplied [`ConfigLookup`] capability. Any failure
//! aborts the walk; there is no partial result.

use async_trait::async_trait;
use bytes::Bytes;
use serde::Deserialize;
use serde_json::value::RawValue;
use tracing::{debug, error};

use crate::configset::{ConfigOrigin, ConfigSet, MandatoryKinds, ResolvedConfig};
use crate::errors::{ConfigError, LookupError};
use crate::reference::{ConfigReference, ReferenceStyle};

/// Capability to fetch a raw configuration object by name and namespace.
/// Supplied by the caller; in production this is backed by the cluster
/// API, in tests by a map.
#[async_trait]
pub trait ConfigLookup: Send + Sync {
    async fn fetch(&self, name: &str, namespace: &str) -> Result<Bytes, LookupError>;
}

/// Wrapper fetched through an indirect reference: its spec embeds exactly
/// one configuration payload.
#[derive(Deserialize)]
struct IndirectWrapper<'a> {
    #[serde(borrow)]
    spec: IndirectSpec<'a>,
}
#[derive(Deserialize)]
struct IndirectSpec<'a> {
    #[serde(borrow)]
    config: &'a RawValue,
}

/// Container fetched through an inline reference: its spec embeds the
/// network function's own payload list.
#[derive(Deserialize)]
struct InlineContainer<'a> {
    #[serde(borrow)]
    spec: InlineSpec<'a>,
}
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineSpec<'a> {
    #[serde(borrow)]
    config_refs: Vec<&'a RawValue>,
}

/// Turns reference lists into [`ConfigSet`]s. Holds the mandatory-kind set
/// inline resolutions are checked against.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    mandatory: MandatoryKinds,
}

impl Resolver {
    /// Resolver with the default mandatory kinds (PLMN, RANConfig, OAIConfig).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver with a custom mandatory-kind set.
    #[must_use]
    pub fn with_mandatory(mandatory: MandatoryKinds) -> Self {
        Self { mandatory }
    }

    /// Resolve `references` in declared order. The first unrecognized
    /// api-version, failed lookup, malformed payload or incomplete inline
    /// container aborts the resolution; no later reference is looked up.
    pub async fn resolve<L: ConfigLookup + ?Sized>(
        &self,
        references: &[ConfigReference],
        lookup: &L,
    ) -> Result<ConfigSet, ConfigError> {
        let mut set = ConfigSet::new();
        for reference in references {
            debug!("Resolving config reference '{}'", reference.name);
            match reference.style()? {
                ReferenceStyle::Indirect => {
                    self.resolve_indirect(reference, lookup, &mut set).await?;
                }
                ReferenceStyle::Inline => {
                    self.resolve_inline(reference, lookup, &mut set).await?;
                }
            }
        }
        Ok(set)
    }

    async fn resolve_indirect<L: ConfigLookup + ?Sized>(
        &self,
        reference: &ConfigReference,
        lookup: &L,
        set: &mut ConfigSet,
    ) -> Result<(), ConfigError> {
        let body = lookup.fetch(&reference.name, &reference.namespace).await?;
        let wrapper: IndirectWrapper<'_> = serde_json::from_slice(&body).map_err(|e| {
            ConfigError::MalformedPayload(format!("bad config wrapper '{}': {e}", reference.name))
        })?;
        let payload = Bytes::copy_from_slice(wrapper.spec.config.get().as_bytes());
        let resolved = ResolvedConfig::from_payload(payload, ConfigOrigin::Referenced)?;
        debug!(
            "Reference '{}' resolved to a '{}' config",
            reference.name,
            resolved.kind()
        );
        set.add_referenced(resolved);
        Ok(())
    }

    async fn resolve_inline<L: ConfigLookup + ?Sized>(
        &self,
        reference: &ConfigReference,
        lookup: &L,
        set: &mut ConfigSet,
    ) -> Result<(), ConfigError> {
        let body = lookup.fetch(&reference.name, &reference.namespace).await?;
        let container: InlineContainer<'_> = serde_json::from_slice(&body).map_err(|e| {
            ConfigError::MalformedPayload(format!(
                "bad config container '{}': {e}",
                reference.name
            ))
        })?;
        for payload in container.spec.config_refs {
            let payload = Bytes::copy_from_slice(payload.get().as_bytes());
            let resolved = ResolvedConfig::from_payload(payload, ConfigOrigin::Own)?;
            debug!(
                "Container '{}' carries a '{}' config",
                reference.name,
                resolved.kind()
            );
            set.set_own(resolved);
        }
        let missing = set.missing_kinds(&self.mandatory);
        if !missing.is_empty() {
            let missing: Vec<String> = missing.iter().map(ToString::to_string).collect();
            error!(
                "Container '{}' leaves mandatory kinds uncovered: {}",
                reference.name,
                missing.join(", ")
            );
            return Err(ConfigError::IncompleteConfig { missing });
        }
        Ok(())
    }
}
