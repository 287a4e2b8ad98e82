//! BLAKE3 content digests of canonical bundle encodings

use blake3::Hasher;

use crate::bundle::Bundle;
use crate::codec;
use crate::error::Result;

/// Digest prefix for BLAKE3 digests
pub const HASH_PREFIX: &str = "blake3:";

/// Calculate the BLAKE3 digest of raw bytes
pub fn hash_bytes(bytes: &[u8]) -> String {
    let mut hasher = Hasher::new();
    hasher.update(bytes);
    format!("{}{}", HASH_PREFIX, hasher.finalize().to_hex())
}

/// Calculate the digest of a bundle's canonical encoding
///
/// Logically equal bundles always share a digest.
pub fn digest(bundle: &Bundle) -> Result<String> {
    Ok(hash_bytes(&codec::encode(bundle)?))
}

/// Verify a digest matches the expected value
pub fn verify_hash(expected: &str, actual: &str) -> bool {
    // Normalize both digests (ensure prefix)
    let normalize = |h: &str| {
        if h.starts_with(HASH_PREFIX) {
            h.to_string()
        } else {
            format!("{HASH_PREFIX}{h}")
        }
    };

    normalize(expected) == normalize(actual)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::bundle::InvocationImage;

    #[test]
    fn test_hash_bytes() {
        let hash = hash_bytes(b"test content");
        assert!(hash.starts_with(HASH_PREFIX));
        assert_eq!(hash.len(), HASH_PREFIX.len() + 64);
    }

    #[test]
    fn test_digest_deterministic() {
        let mut bundle = Bundle::new("foo", "1.0");
        bundle
            .invocation_images
            .push(InvocationImage::new("docker", "foo:1.0"));

        let reparsed = codec::decode(&codec::encode(&bundle).unwrap()).unwrap();
        assert_eq!(digest(&bundle).unwrap(), digest(&reparsed).unwrap());
    }

    #[test]
    fn test_digest_changes_with_content() {
        let a = Bundle::new("foo", "1.0");
        let b = Bundle::new("foo", "1.1");
        assert_ne!(digest(&a).unwrap(), digest(&b).unwrap());
    }

    #[test]
    fn test_verify_hash() {
        let hash1 = format!("{HASH_PREFIX}abc123");
        let hash2 = hash1.clone();
        assert!(verify_hash(&hash1, &hash2));

        // With and without prefix
        assert!(verify_hash(&hash1, "abc123"));

        let hash3 = format!("{HASH_PREFIX}def456");
        assert!(!verify_hash(&hash1, &hash3));
    }
}
