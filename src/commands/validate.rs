//! Validate command implementation

use console::Style;

use crate::cli::ValidateArgs;
use crate::codec;
use crate::error::Result;

pub fn run(args: ValidateArgs) -> Result<()> {
    let bundle = codec::read_file(&args.file)?;
    bundle.validate()?;

    println!(
        "{} {} is valid",
        Style::new().green().bold().apply_to("✓"),
        Style::new()
            .bold()
            .apply_to(format!("{}@{}", bundle.name, bundle.version)),
    );
    Ok(())
}
