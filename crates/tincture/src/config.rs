//! `tincture.toml` configuration.
//!
//! Every field is optional. Relative paths are resolved against the
//! directory holding the configuration file, and command-line flags take
//! precedence over anything set here.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tincture_style::bundle::{BundleLayout, GENERATED_DIR};

use crate::error::{CliError, Result};

/// File name looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE: &str = "tincture.toml";

/// Default directory of preset sources.
pub const DEFAULT_PRESETS_DIR: &str = "tokens/themes/presets";
/// Default styles root.
pub const DEFAULT_STYLES_DIR: &str = "styles";
/// Default directory of ingest stylesheets for the theme layer.
pub const DEFAULT_THEMES_SOURCE: &str = "tokens/themes/ingest";
/// Theme layer file name inside the generated directory.
pub const THEMES_FILE: &str = "themes.css";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub presets_dir: PathBuf,
    pub styles_dir: PathBuf,
    pub build: BuildConfig,
    pub bundle: BundleConfig,
    pub themes: ThemesConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            presets_dir: DEFAULT_PRESETS_DIR.into(),
            styles_dir: DEFAULT_STYLES_DIR.into(),
            build: BuildConfig::default(),
            bundle: BundleConfig::default(),
            themes: ThemesConfig::default(),
        }
    }
}

/// `[build]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    pub strict: bool,
    pub design_tokens: bool,
    /// Theme ids rendered when no `--theme` flag is given. Empty means all.
    pub themes: Vec<String>,
}

/// `[bundle]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BundleConfig {
    pub entry: String,
    pub output: String,
    /// Token generator command run before bundling, program first.
    pub generator: Vec<String>,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            entry: BundleLayout::DEFAULT_ENTRY.into(),
            output: BundleLayout::DEFAULT_BUNDLE.into(),
            generator: Vec::new(),
        }
    }
}

/// `[themes]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemesConfig {
    pub source_dir: PathBuf,
    pub output: Option<PathBuf>,
}

impl Default for ThemesConfig {
    fn default() -> Self {
        Self {
            source_dir: DEFAULT_THEMES_SOURCE.into(),
            output: None,
        }
    }
}

impl Config {
    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one, `tincture.toml` in the
    /// working directory is used when present, otherwise the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(CONFIG_FILE);
                if path.is_file() {
                    Self::from_file(path)
                } else {
                    tracing::debug!("no {CONFIG_FILE}, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Read and parse a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| CliError::config(path, e))?;
        let config = Self::parse(&text).map_err(|e| CliError::config(path, e))?;
        tracing::debug!(path = %path.display(), "loaded configuration");

        let base = path.parent().unwrap_or(Path::new(""));
        Ok(config.relative_to(base))
    }

    /// Parse configuration text without resolving paths.
    pub fn parse(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Resolve every relative path against `base`.
    pub fn relative_to(mut self, base: &Path) -> Self {
        let resolve = |path: &mut PathBuf| {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        };
        resolve(&mut self.presets_dir);
        resolve(&mut self.styles_dir);
        resolve(&mut self.themes.source_dir);
        if let Some(output) = self.themes.output.as_mut() {
            resolve(output);
        }
        self
    }

    /// Bundle layout under `styles_dir`, with the configured file names.
    pub fn bundle_layout(&self, styles_dir: &Path) -> BundleLayout {
        BundleLayout {
            styles_dir: styles_dir.to_path_buf(),
            entry_file: self.bundle.entry.clone(),
            bundle_file: self.bundle.output.clone(),
        }
    }

    /// Where the theme layer is written when no output is given.
    pub fn themes_output(&self) -> PathBuf {
        self.themes
            .output
            .clone()
            .unwrap_or_else(|| self.styles_dir.join(GENERATED_DIR).join(THEMES_FILE))
    }
}
