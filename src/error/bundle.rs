//! Structural validation errors

use super::BundleError;

/// Creates an error for a bundle without invocation images
pub fn no_invocation_image() -> BundleError {
    BundleError::NoInvocationImage
}

/// Creates an error for a bundle using the reserved `latest` version
pub fn reserved_version() -> BundleError {
    BundleError::ReservedVersion
}

/// Creates a missing tag error for an image reference
pub fn missing_tag(image: impl Into<String>) -> BundleError {
    BundleError::MissingTag {
        image: image.into(),
    }
}
