//! Version command implementation

use std::io::Write;

use crate::bundle::RESERVED_VERSION;
use crate::definition::ParameterType;
use crate::error::Result;
use crate::hash::HASH_PREFIX;
use crate::validation::ImageValidator;

/// Run version command
pub fn run() -> Result<()> {
    write_info(&mut std::io::stdout().lock())
}

fn write_info<W: Write>(out: &mut W) -> Result<()> {
    let validator = ImageValidator::default();
    let image_types: Vec<_> = validator.image_types().collect();
    let parameter_types: Vec<_> = ParameterType::ALL.iter().map(|t| t.as_str()).collect();

    writeln!(out, "cnab-bundle {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out)?;
    writeln!(out, "Bundle format:")?;
    writeln!(out, "  Encoding: canonical JSON (compact, sorted keys)")?;
    writeln!(out, "  Digest: {}", HASH_PREFIX.trim_end_matches(':'))?;
    writeln!(out, "  Reserved version: {RESERVED_VERSION}")?;
    writeln!(out, "  Checked image types: {}", image_types.join(", "))?;
    writeln!(out, "  Parameter types: {}", parameter_types.join(", "))?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_version_reports_bundle_format() {
        let mut out = Vec::new();
        write_info(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.starts_with(&format!("cnab-bundle {}", env!("CARGO_PKG_VERSION"))));
        assert!(out.contains("Digest: blake3"));
        assert!(out.contains("Reserved version: latest"));
        assert!(out.contains("Checked image types: docker, oci"));
        assert!(out.contains("Parameter types: string, int, bool"));
    }
}
