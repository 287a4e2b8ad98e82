//! Digest command implementation

use crate::cli::DigestArgs;
use crate::error::{self, Result};
use crate::{codec, hash};

pub fn run(args: DigestArgs) -> Result<()> {
    let bundle = codec::read_file(&args.file)?;
    let digest = hash::digest(&bundle)?;

    if let Some(expected) = args.verify {
        if !hash::verify_hash(&expected, &digest) {
            return Err(error::digest_mismatch(expected, digest));
        }
    }

    println!("{digest}");
    Ok(())
}
