//! The external token generator run before bundling.

use std::path::Path;
use std::process::Command;

use crate::{Error, Result};

/// Run `command` (program followed by arguments) in `dir` with inherited
/// standard streams. An empty command does nothing.
pub fn run_generator(command: &[String], dir: &Path) -> Result<()> {
    let Some((program, args)) = command.split_first() else {
        return Ok(());
    };

    tracing::info!(command = %command.join(" "), "running token generator");
    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .map_err(|e| Error::generator(command, e))?;

    if !status.success() {
        return Err(Error::generator(command, status));
    }
    Ok(())
}
