//! cnab-bundle - CNAB bundle metadata documents
//!
//! Data model, canonical JSON codec, structural validation and parameter
//! resolution for CNAB `bundle.json` documents.
//!
//! ```
//! use cnab_bundle::{Bundle, resolver};
//!
//! let bundle = Bundle::from_json(r#"{
//!     "name": "hello",
//!     "version": "0.1.0",
//!     "invocationImages": [{ "imageType": "docker", "image": "hello:0.1.0" }],
//!     "parameters": { "replicas": { "type": "int", "defaultValue": 3 } }
//! }"#)?;
//! bundle.validate()?;
//!
//! let values = resolver::values_or_defaults(&Default::default(), &bundle)?;
//! assert_eq!(values["replicas"], 3);
//! # Ok::<(), cnab_bundle::error::BundleError>(())
//! ```

pub mod bundle;
pub mod cli;
pub mod codec;
pub mod commands;
pub mod definition;
pub mod error;
pub mod hash;
pub mod logging;
pub mod resolver;
pub mod validation;
pub mod values;

pub use bundle::{
    Action, BaseImage, Bundle, Image, ImagePlatform, InvocationImage, Location, LocationRef,
    Maintainer,
};
pub use definition::{ParameterDefinition, ParameterType, ParameterValueError};
pub use error::{BundleError, Result};
pub use resolver::{ParameterValues, resolve_values, values_or_defaults};
pub use validation::{ImageValidator, validate_bundle};
