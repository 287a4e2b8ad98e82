//! Image types shared by the bundle's image map and its invocation images

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validation::ImageValidator;

/// Fields shared across image types
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BaseImage {
    /// Image type discriminator, e.g. `docker` or `oci`
    pub image_type: String,

    /// Image reference, e.g. `name:tag`
    pub image: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub original_image: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub digest: String,

    /// Image size in bytes, 0 when unknown
    #[serde(skip_serializing_if = "is_zero")]
    pub size: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<ImagePlatform>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub media_type: String,
}

impl BaseImage {
    /// Create a base image with the given type and reference
    pub fn new(image_type: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            image_type: image_type.into(),
            image: image.into(),
            ..Self::default()
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(n: &u64) -> bool {
    *n == 0
}

/// Platform an image is built for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagePlatform {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub architecture: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub os: String,
}

/// A container image that makes up part of the application
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    #[serde(flatten)]
    pub base: BaseImage,

    #[serde(default)]
    pub description: String,
}

impl Image {
    pub fn new(base: BaseImage, description: impl Into<String>) -> Self {
        Self {
            base,
            description: description.into(),
        }
    }
}

/// An image that carries out the bundle's actions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationImage {
    #[serde(flatten)]
    pub base: BaseImage,
}

impl InvocationImage {
    pub fn new(image_type: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            base: BaseImage::new(image_type, image),
        }
    }

    /// Validate the image against the rule registered for its image type
    pub fn validate(&self) -> Result<()> {
        ImageValidator::default().validate(self)
    }
}

impl From<BaseImage> for InvocationImage {
    fn from(base: BaseImage) -> Self {
        Self { base }
    }
}
