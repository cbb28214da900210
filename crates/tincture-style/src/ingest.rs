//! Ingesting a hand-authored stylesheet into a preset source file.

use std::path::{Path, PathBuf};

use crate::files::write_atomic;
use crate::naming::export_identifier;
use crate::parser::parse_css;
use crate::source::PresetSource;
use crate::{Error, Result};

/// Extension of generated preset sources.
pub const PRESET_EXTENSION: &str = "toml";

/// Path the preset for `input` is written to.
pub fn output_path(input: &Path, presets_dir: &Path) -> PathBuf {
    let stem = file_stem(input);
    presets_dir.join(format!("{stem}.{PRESET_EXTENSION}"))
}

/// Parse `input` and write its preset source into `presets_dir`.
///
/// Nothing is written if the stylesheet fails to parse. Returns the path of
/// the generated file.
pub fn ingest_file(input: &Path, presets_dir: &Path) -> Result<PathBuf> {
    let css = std::fs::read_to_string(input).map_err(|e| Error::io(input, e))?;
    let stem = file_stem(input);

    let theme = parse_css(&css)?;
    tracing::debug!(
        input = %input.display(),
        light = theme.light.colors.len(),
        dark = theme.dark.colors.len(),
        "parsed stylesheet"
    );

    let source = PresetSource::from_parsed(export_identifier(&stem), theme);
    let origin = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| stem.clone());
    let text = source.to_toml(&origin)?;

    let output = output_path(input, presets_dir);
    write_atomic(&output, &text)?;
    tracing::info!(output = %output.display(), export = %source.export, "generated preset");
    Ok(output)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
