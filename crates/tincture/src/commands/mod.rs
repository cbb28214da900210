//! One module per subcommand.

mod build;
mod bundle;
mod ingest;
mod themes;

use std::io::Write;
use std::path::Path;

use tincture_style::files::write_atomic;

use crate::cli::Command;
use crate::config::Config;
use crate::error::Result;

/// Dispatch a parsed subcommand.
pub fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Build(args) => build::run(args, config),
        Command::Ingest(args) => ingest::run(args, config),
        Command::Bundle(args) => bundle::run(args, config),
        Command::Themes(args) => themes::run(args, config),
    }
}

/// Write `text` to `output`, or to standard output when none is given.
fn emit(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            write_atomic(path, text)?;
            tracing::info!(output = %path.display(), "wrote stylesheet");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
