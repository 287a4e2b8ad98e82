//! Params command implementation

use crate::cli::ParamsArgs;
use crate::error::{self, Result};
use crate::{codec, resolver, values};

pub fn run(args: ParamsArgs) -> Result<()> {
    let bundle = codec::read_file(&args.file)?;
    let supplied = values::collect(args.values.as_deref(), &args.set)?;
    let resolved = resolver::values_or_defaults(&supplied, &bundle)?;

    let output =
        serde_json::to_string_pretty(&resolved).map_err(|e| error::encode_failed(e.to_string()))?;
    println!("{output}");
    Ok(())
}
