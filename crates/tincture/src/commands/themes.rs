use tincture_style::normalize::render_theme_layer;

use super::emit;
use crate::cli::ThemesArgs;
use crate::config::Config;
use crate::error::Result;

pub fn run(args: ThemesArgs, config: &Config) -> Result<()> {
    let source = args.source.as_deref().unwrap_or(&config.themes.source_dir);
    let output = args.output.unwrap_or_else(|| config.themes_output());

    match render_theme_layer(source)? {
        Some(css) => emit(&css, Some(output.as_path())),
        None => Ok(()),
    }
}
