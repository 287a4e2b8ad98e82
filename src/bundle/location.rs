//! Destinations for resolved values inside the invocation image

use serde::{Deserialize, Serialize};

/// Where a value is written inside the invocation image
///
/// A location may be a file (by path), an environment variable, or both.
/// Neither is enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub path: String,

    #[serde(rename = "env", skip_serializing_if = "String::is_empty")]
    pub environment_variable: String,
}

impl Location {
    pub fn path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn env(name: impl Into<String>) -> Self {
        Self {
            environment_variable: name.into(),
            ..Self::default()
        }
    }
}

/// A location within the invocation package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocationRef {
    pub path: String,
    pub field: String,
    pub media_type: String,
}
