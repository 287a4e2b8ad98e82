//! Bundle metadata document
//!
//! The [`Bundle`] is the root of the document. It is built once when decoded
//! (or programmatically) and read thereafter.

pub mod image;
pub mod location;
pub mod metadata;
mod serialization;


use std::collections::BTreeMap;

use serde::Serialize;

use crate::definition::ParameterDefinition;
use crate::error::Result;

pub use image::{BaseImage, Image, ImagePlatform, InvocationImage};
pub use location::{Location, LocationRef};
pub use metadata::{Action, Maintainer};

/// Version string reserved by the format and never valid for a bundle
pub const RESERVED_VERSION: &str = "latest";

/// A CNAB metadata document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    pub name: String,
    pub version: String,
    pub description: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub maintainers: Vec<Maintainer>,

    pub invocation_images: Vec<InvocationImage>,

    pub images: BTreeMap<String, Image>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub actions: BTreeMap<String, Action>,

    pub parameters: BTreeMap<String, ParameterDefinition>,

    pub credentials: BTreeMap<String, Location>,

    /// Auxiliary data whose meaning is defined outside of the bundle format
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub custom: BTreeMap<String, serde_json::Value>,
}

impl Bundle {
    /// Create an empty bundle with the given name and version
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    /// Validate the bundle contents
    ///
    /// Checks run in order and the first failure is returned: at least one
    /// invocation image, a non-reserved version, then each invocation image
    /// in sequence.
    pub fn validate(&self) -> Result<()> {
        crate::validation::validate_bundle(self)
    }

    /// Parse a bundle from its JSON encoding
    pub fn from_json(json: &str) -> Result<Self> {
        crate::codec::decode(json.as_bytes())
    }

    /// Serialize the bundle to its canonical JSON encoding
    pub fn to_canonical_json(&self) -> Result<String> {
        let bytes = crate::codec::encode(self)?;
        String::from_utf8(bytes).map_err(|e| crate::error::encode_failed(e.to_string()))
    }

    /// Look up a custom extension entry by key
    pub fn custom_extension(&self, key: &str) -> Option<&serde_json::Value> {
        self.custom.get(key)
    }

    /// Names of parameters that must be supplied by the caller
    pub fn required_parameters(&self) -> impl Iterator<Item = &str> {
        self.parameters
            .iter()
            .filter(|(_, def)| def.required)
            .map(|(name, _)| name.as_str())
    }
}
