//! The preset catalogue: built-in themes plus preset sources on disk.

mod builtin;

pub use builtin::{builtin_presets, canvas, midnight};

use std::path::{Path, PathBuf};

use crate::ingest::PRESET_EXTENSION;
use crate::source::PresetSource;
use crate::theme::ThemeDefinition;
use crate::{Error, Result};

/// Load every preset source in `dir`, ordered by file name.
///
/// A missing directory yields no presets.
pub fn load_presets(dir: &Path) -> Result<Vec<ThemeDefinition>> {
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "no presets directory");
        return Ok(Vec::new());
    }

    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|e| Error::io(dir, e))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some(PRESET_EXTENSION))
        .collect();
    paths.sort();

    paths.iter().map(|path| load_preset(path)).collect()
}

/// Load a single preset source file.
pub fn load_preset(path: &Path) -> Result<ThemeDefinition> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let source = PresetSource::from_toml(&text, path)?;
    tracing::debug!(path = %path.display(), id = %source.id, "loaded preset");
    Ok(source.into_definition())
}

/// An ordered collection of themes.
#[derive(Debug, Clone, Default)]
pub struct PresetCatalog {
    themes: Vec<ThemeDefinition>,
}

impl PresetCatalog {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalogue of the built-in presets.
    pub fn builtin() -> Self {
        Self {
            themes: builtin_presets(),
        }
    }

    /// Built-in presets followed by the preset sources in `dir`.
    pub fn with_dir(dir: &Path) -> Result<Self> {
        let mut catalog = Self::builtin();
        catalog.extend(load_presets(dir)?);
        Ok(catalog)
    }

    /// Append a theme.
    pub fn push(&mut self, theme: ThemeDefinition) {
        self.themes.push(theme);
    }

    /// Find a theme by id. The first theme with the id wins.
    pub fn find(&self, id: &str) -> Option<&ThemeDefinition> {
        self.themes.iter().find(|theme| theme.id == id)
    }

    /// Themes whose ids are in `ids`, in the order of `ids`. The first
    /// unknown id is an [`Error::UnknownTheme`].
    pub fn select(&self, ids: &[String]) -> Result<Vec<ThemeDefinition>> {
        ids.iter()
            .map(|id| self.find(id).cloned().ok_or_else(|| Error::unknown_theme(id.as_str())))
            .collect()
    }

    /// All themes in catalogue order.
    pub fn themes(&self) -> &[ThemeDefinition] {
        &self.themes
    }

    /// Number of themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Check if the catalogue is empty.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

impl Extend<ThemeDefinition> for PresetCatalog {
    fn extend<I: IntoIterator<Item = ThemeDefinition>>(&mut self, iter: I) {
        self.themes.extend(iter);
    }
}
