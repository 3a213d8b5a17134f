//! Show version information

use crate::cli::Output;
use anyhow::Result;

/// Execute the version command
pub async fn execute(output: &Output) -> Result<()> {
    println!("{} {}", crate::PKG_NAME, crate::VERSION);
    output.verbose(crate::PKG_DESCRIPTION);
    Ok(())
}
