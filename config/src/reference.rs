// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Configuration references as they appear in a network function's spec: a
//! name in a namespace plus an api-version discriminator telling which of the
//! two reference styles the pointed-to object uses.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Api-version of indirect references: the looked-up object wraps one payload.
pub const INDIRECT_API_VERSION: &str = "ref.nephio.org/v1alpha1";

/// Api-version of inline references: the looked-up object embeds the network
/// function's own payload list.
pub const INLINE_API_VERSION: &str = "workload.nephio.org/v1alpha1";

/// The two reference styles a [`ConfigReference`] can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceStyle {
    Indirect,
    Inline,
}

/// A typed pointer to configuration data, taken verbatim from a network
/// function's parameter references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigReference {
    pub api_version: String,
    pub name: String,
    #[serde(default)]
    pub namespace: String,
}

impl ConfigReference {
    pub fn new(
        api_version: impl Into<String>,
        name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            api_version: api_version.into(),
            name: name.into(),
            namespace: namespace.into(),
        }
    }

    /// Classify this reference by its api-version. An identifier that is
    /// neither of the two recognized ones is an error, not a default.
    pub fn style(&self) -> Result<ReferenceStyle, ConfigError> {
        match self.api_version.as_str() {
            INDIRECT_API_VERSION => Ok(ReferenceStyle::Indirect),
            INLINE_API_VERSION => Ok(ReferenceStyle::Inline),
            other => Err(ConfigError::UnsupportedApiVersion(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn style_classification() {
        let indirect = ConfigReference::new(INDIRECT_API_VERSION, "cucp", "oai");
        assert_eq!(indirect.style(), Ok(ReferenceStyle::Indirect));

        let inline = ConfigReference::new(INLINE_API_VERSION, "nf-config", "oai");
        assert_eq!(inline.style(), Ok(ReferenceStyle::Inline));
    }

    #[test]
    fn unknown_api_version_is_rejected() {
        let bogus = ConfigReference::new("dummy-api", "x", "oai");
        assert_eq!(
            bogus.style(),
            Err(ConfigError::UnsupportedApiVersion("dummy-api".to_string()))
        );
    }

    #[test]
    fn deserializes_from_spec_form() {
        let reference: ConfigReference = serde_json::from_str(
            "{\"apiVersion\":\"ref.nephio.org/v1alpha1\",\"name\":\"cucp\"}",
        )
        .unwrap();
        assert_eq!(reference.api_version, INDIRECT_API_VERSION);
        assert_eq!(reference.name, "cucp");
        assert_eq!(reference.namespace, "");
    }
}
