//! Structural validation of bundles and their invocation images
//!
//! Image checks are keyed on the `imageType` discriminator. Each known type
//! maps to a rule; types without a rule are accepted unchecked.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::bundle::{Bundle, InvocationImage, RESERVED_VERSION};
use crate::error::{self, Result};

/// A validation rule for one image type
pub type ImageRule = fn(&InvocationImage) -> Result<()>;

/// Validate the bundle contents, returning the first failure
pub fn validate_bundle(bundle: &Bundle) -> Result<()> {
    validate_bundle_with(bundle, &ImageValidator::default())
}

/// Validate the bundle contents using a custom image rule registry
pub fn validate_bundle_with(bundle: &Bundle, images: &ImageValidator) -> Result<()> {
    if bundle.invocation_images.is_empty() {
        return Err(error::no_invocation_image());
    }

    if bundle.version == RESERVED_VERSION {
        return Err(error::reserved_version());
    }

    for image in &bundle.invocation_images {
        images.validate(image)?;
    }

    debug!(
        bundle = %bundle.name,
        version = %bundle.version,
        "bundle passed structural validation"
    );
    Ok(())
}

/// Registry of image validation rules keyed by image type
#[derive(Clone)]
pub struct ImageValidator {
    rules: BTreeMap<String, ImageRule>,
    fallback: ImageRule,
}

impl std::fmt::Debug for ImageValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageValidator")
            .field("image_types", &self.rules.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl Default for ImageValidator {
    fn default() -> Self {
        Self::empty()
            .with_rule("docker", require_tag)
            .with_rule("oci", require_tag)
    }
}

impl ImageValidator {
    /// A registry with no rules, accepting every image
    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
            fallback: accept_any,
        }
    }

    /// Add or replace the rule for an image type
    #[must_use]
    pub fn with_rule(mut self, image_type: impl Into<String>, rule: ImageRule) -> Self {
        self.rules.insert(image_type.into(), rule);
        self
    }

    /// Replace the rule applied to unrecognized image types
    #[must_use]
    pub fn with_fallback(mut self, rule: ImageRule) -> Self {
        self.fallback = rule;
        self
    }

    /// Whether a rule is registered for the image type
    pub fn recognizes(&self, image_type: &str) -> bool {
        self.rules.contains_key(image_type)
    }

    /// Image types with a registered rule, in sorted order
    pub fn image_types(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Validate an invocation image against the rule for its type
    pub fn validate(&self, image: &InvocationImage) -> Result<()> {
        match self.rules.get(&image.base.image_type) {
            Some(rule) => rule(image),
            None => {
                warn!(
                    image_type = %image.base.image_type,
                    image = %image.base.image,
                    "no validation rules for image type, accepting"
                );
                (self.fallback)(image)
            }
        }
    }
}

/// Docker and OCI references must carry a tag
///
/// Only the presence of a `:` separator is checked; the reference is not
/// parsed.
pub fn require_tag(image: &InvocationImage) -> Result<()> {
    if image.base.image.contains(':') {
        Ok(())
    } else {
        Err(error::missing_tag(&image.base.image))
    }
}

/// Accept any image
pub fn accept_any(_image: &InvocationImage) -> Result<()> {
    Ok(())
}
