//! Descriptive records attached to a bundle

use serde::{Deserialize, Serialize};

/// A maintainer of the bundle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Maintainer {
    /// User or organization name
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
}

impl Maintainer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A custom (non-core) action
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Action {
    /// Whether this action modifies the release
    ///
    /// Must be true if it is possible for the action to modify a release.
    #[serde(skip_serializing_if = "is_false")]
    pub modifies: bool,

    /// The action is purely informational: no credentials are required and
    /// the runtime does not track its invocation
    #[serde(skip_serializing_if = "is_false")]
    pub stateless: bool,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(b: &bool) -> bool {
    !*b
}
