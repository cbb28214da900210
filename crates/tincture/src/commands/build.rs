use tincture_style::presets::PresetCatalog;
use tincture_style::serialize::{SerializeOptions, serialize_themes};

use super::emit;
use crate::cli::BuildArgs;
use crate::config::Config;
use crate::error::Result;

pub fn run(args: BuildArgs, config: &Config) -> Result<()> {
    let presets_dir = args.presets.as_deref().unwrap_or(&config.presets_dir);
    let catalog = PresetCatalog::with_dir(presets_dir)?;

    let ids = if args.themes.is_empty() {
        &config.build.themes
    } else {
        &args.themes
    };
    let themes = if ids.is_empty() {
        catalog.themes().to_vec()
    } else {
        catalog.select(ids)?
    };

    let options = SerializeOptions {
        strict: args.strict || config.build.strict,
        design_tokens: args.tokens || config.build.design_tokens,
    };
    tracing::debug!(themes = themes.len(), ?options, "serializing themes");

    emit(&serialize_themes(&themes, &options), args.output.as_deref())
}
