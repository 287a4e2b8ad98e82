//! Encoding and decoding errors

use super::BundleError;

/// Creates a decode failed error
pub fn decode_failed(reason: impl Into<String>) -> BundleError {
    BundleError::DecodeFailed {
        reason: reason.into(),
    }
}

/// Creates an encode failed error
pub fn encode_failed(reason: impl Into<String>) -> BundleError {
    BundleError::EncodeFailed {
        reason: reason.into(),
    }
}

/// Creates a values file parse error
pub fn values_parse_failed(path: impl Into<String>, reason: impl Into<String>) -> BundleError {
    BundleError::ValuesParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid `--set` input error
pub fn invalid_set_value(input: impl Into<String>) -> BundleError {
    BundleError::InvalidSetValue {
        input: input.into(),
    }
}

/// Creates a digest mismatch error
pub fn digest_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> BundleError {
    BundleError::DigestMismatch {
        expected: expected.into(),
        actual: actual.into(),
    }
}
