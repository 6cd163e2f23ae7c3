// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! The NFDeployment payload model and its helpers: provider identifiers,
//! interface configuration selection and provider search over a resolved
//! [`ConfigSet`].

use std::net::IpAddr;
use std::str::FromStr;

use ipnet::IpNet;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};
use tracing::debug;

use crate::configset::ConfigSet;
use crate::errors::ConfigError;
use crate::kinds::ObjectMeta;
use crate::reference::ConfigReference;

/// The network function providers this system can deploy.
#[derive(AsRefStr, EnumString, Display, EnumIter, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    #[strum(serialize = "cucp.openairinterface.org")]
    Cucp,
    #[strum(serialize = "cuup.openairinterface.org")]
    Cuup,
    #[strum(serialize = "du.openairinterface.org")]
    Du,
}

impl Provider {
    /// Tells if a provider string names a supported provider.
    #[must_use]
    pub fn is_supported(provider: &str) -> bool {
        Provider::from_str(provider).is_ok()
    }

    /// All supported provider identifiers.
    pub fn supported() -> impl Iterator<Item = Provider> {
        Provider::iter()
    }
}

/// IPv4 addressing of one interface, address in CIDR form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ipv4Config {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
}

/// One attachment of a network function to a network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv4: Option<Ipv4Config>,
    #[serde(default, rename = "vlanID", skip_serializing_if = "Option::is_none")]
    pub vlan_id: Option<u16>,
}

/// Spec of a deployed network function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NfDeploymentSpec {
    pub provider: String,
    #[serde(default)]
    pub interfaces: Vec<InterfaceConfig>,
    #[serde(default)]
    pub parameters_refs: Vec<ConfigReference>,
}

/// A network function deployment object, as embedded in indirect references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NfDeployment {
    #[serde(default)]
    pub metadata: ObjectMeta,
    pub spec: NfDeploymentSpec,
}
impl NfDeployment {
    pub const KIND: &'static str = "NFDeployment";
}

/// All interface configs with the given name, in declared order.
#[must_use]
pub fn interface_configs<'a>(
    interfaces: &'a [InterfaceConfig],
    name: &str,
) -> Vec<&'a InterfaceConfig> {
    interfaces.iter().filter(|i| i.name == name).collect()
}

/// The first interface config with the given name.
pub fn first_interface_config<'a>(
    interfaces: &'a [InterfaceConfig],
    name: &str,
) -> Result<&'a InterfaceConfig, ConfigError> {
    interfaces
        .iter()
        .find(|i| i.name == name)
        .ok_or_else(|| ConfigError::NoSuchInterface(name.to_string()))
}

/// The IPv4 address (without prefix length) of the first interface config
/// with the given name.
pub fn first_interface_ipv4(
    interfaces: &[InterfaceConfig],
    name: &str,
) -> Result<IpAddr, ConfigError> {
    let interface = first_interface_config(interfaces, name)?;
    let ipv4 = interface.ipv4.as_ref().ok_or_else(|| {
        ConfigError::BadInterfaceAddress(
            String::new(),
            name.to_string(),
            "no ipv4 configured".to_string(),
        )
    })?;
    let net = IpNet::from_str(&ipv4.address).map_err(|e| {
        ConfigError::BadInterfaceAddress(ipv4.address.clone(), name.to_string(), e.to_string())
    })?;
    Ok(net.addr())
}

impl ConfigSet {
    /// Decode the indirectly referenced entries of `kind` as NFDeployments
    /// and return the first one owned by `provider`. A payload that does not
    /// decode is an error, not a skip.
    pub fn find_by_provider(
        &self,
        kind: &str,
        provider: Provider,
    ) -> Result<NfDeployment, ConfigError> {
        for entry in self.referenced(kind) {
            let nf: NfDeployment = entry.decode()?;
            if nf.spec.provider == provider.as_ref() {
                debug!("Found '{}' config for provider {provider}", kind);
                return Ok(nf);
            }
        }
        Err(ConfigError::NoSuchProvider(provider.to_string()))
    }
}
