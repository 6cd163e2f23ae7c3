// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Configuration model for RAN network functions. A network function declares
//! a list of configuration references; this crate resolves them, through a
//! caller-supplied lookup capability, into a [`ConfigSet`] indexed by the
//! `kind` each resolved payload declares about itself. Two reference styles
//! exist side by side: indirect references (one wrapped payload per referenced
//! object) and inline references (a container embedding the network function's
//! own payload list, subject to a mandatory-kind completeness check).

#![deny(
    unsafe_code,
    clippy::all,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

pub mod configset;
pub mod errors;
pub mod kinds;
pub mod nf;
pub mod reference;
pub mod resolver;

pub use configset::{ConfigOrigin, ConfigSet, KindName, MandatoryKinds, ResolvedConfig}; // re-export
pub use errors::{ConfigError, LookupError}; // re-export
pub use kinds::KnownConfig; // re-export
pub use nf::{NfDeployment, Provider}; // re-export
pub use reference::{ConfigReference, ReferenceStyle}; // re-export
pub use resolver::{ConfigLookup, Resolver}; // re-export
