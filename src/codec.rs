//! Canonical JSON encoding of bundle documents
//!
//! The canonical form is compact JSON with object keys sorted at every level,
//! so the same logical document always serializes to the same bytes.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use crate::bundle::Bundle;
use crate::error::{self, BundleError, Result};

/// Decode a bundle from its JSON encoding
pub fn decode(bytes: &[u8]) -> Result<Bundle> {
    serde_json::from_slice(bytes).map_err(|e| error::decode_failed(e.to_string()))
}

/// Encode a bundle into canonical JSON bytes
pub fn encode(bundle: &Bundle) -> Result<Vec<u8>> {
    // Going through `Value` sorts object keys, as its map is ordered
    let value = serde_json::to_value(bundle).map_err(|e| error::encode_failed(e.to_string()))?;
    serde_json::to_vec(&value).map_err(|e| error::encode_failed(e.to_string()))
}

/// Read a bundle from a reader
pub fn parse_reader<R: Read>(reader: R) -> Result<Bundle> {
    serde_json::from_reader(reader).map_err(|e| error::decode_failed(e.to_string()))
}

/// Read a bundle from a file
pub fn read_file(path: &Path) -> Result<Bundle> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => error::file_not_found(path.display().to_string()),
        _ => error::file_read_failed(path.display().to_string(), e.to_string()),
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read bundle file");
    decode(&bytes)
}

/// Write the canonical encoding to a writer, returning the bytes written
pub fn write_to<W: Write>(bundle: &Bundle, mut writer: W) -> Result<u64> {
    let bytes = encode(bundle)?;
    writer.write_all(&bytes)?;
    Ok(bytes.len() as u64)
}

/// Write the canonical encoding to a file
///
/// The file is replaced atomically through a temporary file in the same
/// directory. An existing file keeps its permissions; a new file gets the
/// usual umask-derived mode.
pub fn write_file(bundle: &Bundle, path: &Path) -> Result<()> {
    let bytes = encode(bundle)?;
    let write_failed =
        |reason: String| error::file_write_failed(path.display().to_string(), reason);

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut temp = builder
        .tempfile_in(dir)
        .map_err(|e| write_failed(e.to_string()))?;
    if let Ok(existing) = fs::metadata(path) {
        temp.as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| write_failed(e.to_string()))?;
    }
    temp.write_all(&bytes).map_err(|e| write_failed(e.to_string()))?;
    temp.persist(path).map_err(|e| write_failed(e.error.to_string()))?;

    debug!(path = %path.display(), bytes = bytes.len(), "wrote bundle file");
    Ok(())
}

impl std::str::FromStr for Bundle {
    type Err = BundleError;

    fn from_str(s: &str) -> Result<Self> {
        decode(s.as_bytes())
    }
}
