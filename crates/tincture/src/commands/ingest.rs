use tincture_style::Error;
use tincture_style::ingest::ingest_file;

use crate::cli::IngestArgs;
use crate::config::Config;
use crate::error::Result;

const USAGE: &str = "tincture ingest <input.css>";

pub fn run(args: IngestArgs, config: &Config) -> Result<()> {
    let input = args.input.ok_or_else(|| Error::missing_input(USAGE))?;
    let presets_dir = args.presets_dir.as_deref().unwrap_or(&config.presets_dir);

    let output = ingest_file(&input, presets_dir)?;
    println!("{}", output.display());
    Ok(())
}
