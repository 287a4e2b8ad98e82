//! Error types and handling for cnab-bundle
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`bundle`]: Structural validation errors
//! - [`parameter`]: Parameter resolution errors
//! - [`codec`]: Encoding and decoding errors
//! - [`fs`]: File system errors

pub mod bundle;
pub mod codec;
pub mod fs;
pub mod parameter;

pub use bundle::{missing_tag, no_invocation_image, reserved_version};
pub use codec::{
    decode_failed, digest_mismatch, encode_failed, invalid_set_value, values_parse_failed,
};
pub use fs::{
    not_found as file_not_found, read_failed as file_read_failed,
    write_failed as file_write_failed,
};
pub use parameter::{invalid_value as invalid_parameter_value, missing_required};

use miette::Diagnostic;
use thiserror::Error;

use crate::definition::ParameterValueError;

/// Main error type for bundle operations
#[derive(Error, Diagnostic, Debug)]
pub enum BundleError {
    // Structural errors
    #[error("at least one invocation image must be defined in the bundle")]
    #[diagnostic(
        code(cnab_bundle::bundle::no_invocation_image),
        help("Add an entry to 'invocationImages'")
    )]
    NoInvocationImage,

    #[error("'latest' is not a valid bundle version")]
    #[diagnostic(
        code(cnab_bundle::bundle::reserved_version),
        help("Use a concrete version such as 1.0.0")
    )]
    ReservedVersion,

    #[error("tag is required: {image}")]
    #[diagnostic(
        code(cnab_bundle::bundle::missing_tag),
        help("Docker and OCI image references must include a tag, e.g. name:1.0")
    )]
    MissingTag { image: String },

    // Parameter errors
    #[error("can't use {value} as value of {name}: {reason}")]
    #[diagnostic(code(cnab_bundle::parameter::invalid_value))]
    InvalidParameterValue {
        name: String,
        value: serde_json::Value,
        #[source]
        reason: ParameterValueError,
    },

    #[error("parameter \"{name}\" is required")]
    #[diagnostic(
        code(cnab_bundle::parameter::missing_required),
        help("Supply a value with --set {name}=<value> or in a values file")
    )]
    MissingRequiredParameter { name: String },

    // Codec errors
    #[error("Failed to decode bundle: {reason}")]
    #[diagnostic(code(cnab_bundle::codec::decode_failed))]
    DecodeFailed { reason: String },

    #[error("Failed to encode bundle: {reason}")]
    #[diagnostic(code(cnab_bundle::codec::encode_failed))]
    EncodeFailed { reason: String },

    #[error("Failed to parse values file: {path}: {reason}")]
    #[diagnostic(
        code(cnab_bundle::codec::values_parse_failed),
        help("A values file must be a YAML or JSON mapping of parameter names to values")
    )]
    ValuesParseFailed { path: String, reason: String },

    #[error("Invalid --set value: {input}")]
    #[diagnostic(
        code(cnab_bundle::codec::invalid_set_value),
        help("Use the form name=value")
    )]
    InvalidSetValue { input: String },

    #[error("Digest mismatch: expected {expected}, got {actual}")]
    #[diagnostic(
        code(cnab_bundle::codec::digest_mismatch),
        help("The bundle content differs from the one the digest was taken from")
    )]
    DigestMismatch { expected: String, actual: String },

    // CLI errors
    #[error("Unsupported shell: {shell}")]
    #[diagnostic(
        code(cnab_bundle::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(cnab_bundle::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(cnab_bundle::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(cnab_bundle::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(cnab_bundle::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for BundleError {
    fn from(err: std::io::Error) -> Self {
        BundleError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for BundleError {
    fn from(err: serde_json::Error) -> Self {
        BundleError::DecodeFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BundleError>;
