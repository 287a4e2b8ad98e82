//! File system errors

use super::BundleError;

/// Creates a file not found error
pub fn not_found(path: impl Into<String>) -> BundleError {
    BundleError::FileNotFound { path: path.into() }
}

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> BundleError {
    BundleError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> BundleError {
    BundleError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
