// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Typed models for the known configuration kinds. The resolver itself stays
//! generic (it only probes the `kind` field at the boundary); consumers that
//! know the kind universe dispatch on [`KnownConfig`] instead of re-reading
//! string tags out of generic documents.

use serde::{Deserialize, Serialize};

use crate::nf::NfDeployment;

/// The metadata subset carried by every configuration object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub namespace: String,
}

/// Public land mobile network identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlmnSpec {
    pub mcc: String,
    pub mnc: String,
    pub mnc_length: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlmnConfig {
    #[serde(default)]
    pub metadata: ObjectMeta,
    pub spec: PlmnSpec,
}
impl PlmnConfig {
    pub const KIND: &'static str = "PLMN";
}

/// Cell and carrier parameters of a RAN deployment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RanConfigSpec {
    pub cell_identity: String,
    #[serde(rename = "physicalCellID")]
    pub physical_cell_id: u32,
    pub downlink_frequency_band: u32,
    pub downlink_sub_carrier_spacing: u16,
    pub downlink_carrier_bandwidth: u32,
    pub uplink_frequency_band: u32,
    pub uplink_sub_carrier_spacing: u16,
    pub uplink_carrier_bandwidth: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RanConfig {
    #[serde(default)]
    pub metadata: ObjectMeta,
    pub spec: RanConfigSpec,
}
impl RanConfig {
    pub const KIND: &'static str = "RANConfig";
}

/// OAI software parameters (container image to run).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OaiConfigSpec {
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OaiConfig {
    #[serde(default)]
    pub metadata: ObjectMeta,
    pub spec: OaiConfigSpec,
}
impl OaiConfig {
    pub const KIND: &'static str = "OAIConfig";
}

/// A configuration payload of one of the known kinds, dispatched on the
/// `kind` tag embedded in the document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind")]
pub enum KnownConfig {
    #[serde(rename = "PLMN")]
    Plmn(PlmnConfig),
    #[serde(rename = "RANConfig")]
    Ran(RanConfig),
    #[serde(rename = "OAIConfig")]
    Oai(OaiConfig),
    #[serde(rename = "NFDeployment")]
    NfDeployment(NfDeployment),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_kinds_dispatch_on_the_tag() {
        let plmn: KnownConfig = serde_json::from_str(
            "{\"kind\":\"PLMN\",\"spec\":{\"mcc\":\"001\",\"mnc\":\"01\",\"mncLength\":2}}",
        )
        .unwrap();
        let KnownConfig::Plmn(plmn) = plmn else {
            panic!("decoded wrong variant: {plmn:?}");
        };
        assert_eq!(plmn.spec.mcc, "001");
        assert_eq!(plmn.spec.mnc_length, 2);

        let oai: KnownConfig = serde_json::from_str(
            "{\"kind\":\"OAIConfig\",\"metadata\":{\"name\":\"oai\"},\"spec\":{\"image\":\"oai-gnb:2.0\"}}",
        )
        .unwrap();
        assert!(matches!(oai, KnownConfig::Oai(c) if c.spec.image == "oai-gnb:2.0"));
    }

    #[test]
    fn ran_config_uses_the_source_field_spellings() {
        let ran: KnownConfig = serde_json::from_str(
            "{\"kind\":\"RANConfig\",\"spec\":{\
             \"cellIdentity\":\"000000001\",\"physicalCellID\":3,\
             \"downlinkFrequencyBand\":78,\"downlinkSubCarrierSpacing\":30,\
             \"downlinkCarrierBandwidth\":106,\"uplinkFrequencyBand\":78,\
             \"uplinkSubCarrierSpacing\":30,\"uplinkCarrierBandwidth\":106}}",
        )
        .unwrap();
        let KnownConfig::Ran(ran) = ran else {
            panic!("decoded wrong variant: {ran:?}");
        };
        assert_eq!(ran.spec.physical_cell_id, 3);
        assert_eq!(ran.spec.downlink_carrier_bandwidth, 106);
    }

    #[test]
    fn unknown_kind_fails_the_typed_decode() {
        let res: Result<KnownConfig, _> =
            serde_json::from_str("{\"kind\":\"Mystery\",\"spec\":{}}");
        assert!(res.is_err());
    }
}
