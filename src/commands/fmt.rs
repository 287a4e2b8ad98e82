//! Fmt command implementation

use std::io::Write;

use crate::cli::FmtArgs;
use crate::codec;
use crate::error::Result;

pub fn run(args: FmtArgs) -> Result<()> {
    let bundle = codec::read_file(&args.file)?;

    match args.output {
        Some(path) => codec::write_file(&bundle, &path),
        None => {
            let mut stdout = std::io::stdout().lock();
            codec::write_to(&bundle, &mut stdout)?;
            writeln!(stdout)?;
            Ok(())
        }
    }
}
