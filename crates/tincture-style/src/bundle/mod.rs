//! Stitching generated stylesheet fragments into one distributable file.
//!
//! Bundling runs in three steps: the external token generator (optional),
//! writing the entry stylesheet of `@import` directives, and inlining those
//! imports into the bundle.

mod entry;
mod generator;
mod inline;

pub use entry::{BASE_TOKEN_FILES, ENTRY_HEADER, FAMILY_PREFIX, GENERATED_DIR, render_entry};
pub use generator::run_generator;
pub use inline::inline_imports;

use std::path::{Path, PathBuf};

use crate::Result;
use crate::files::write_atomic;

/// File layout of a styles directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleLayout {
    /// Styles root.
    pub styles_dir: PathBuf,
    /// Entry stylesheet name, relative to the root.
    pub entry_file: String,
    /// Bundle name, relative to the root.
    pub bundle_file: String,
}

impl BundleLayout {
    /// Default entry stylesheet name.
    pub const DEFAULT_ENTRY: &'static str = "tincture.css";
    /// Default bundle name.
    pub const DEFAULT_BUNDLE: &'static str = "tincture.bundle.css";

    /// Layout with the default file names.
    pub fn new(styles_dir: impl Into<PathBuf>) -> Self {
        Self {
            styles_dir: styles_dir.into(),
            entry_file: Self::DEFAULT_ENTRY.into(),
            bundle_file: Self::DEFAULT_BUNDLE.into(),
        }
    }

    /// Path of the entry stylesheet.
    pub fn entry_path(&self) -> PathBuf {
        self.styles_dir.join(&self.entry_file)
    }

    /// Path of the bundle.
    pub fn bundle_path(&self) -> PathBuf {
        self.styles_dir.join(&self.bundle_file)
    }

    /// Directory of generated fragments.
    pub fn generated_dir(&self) -> PathBuf {
        self.styles_dir.join(GENERATED_DIR)
    }
}

/// Result of a bundling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleReport {
    /// Written entry stylesheet.
    pub entry: PathBuf,
    /// Written bundle.
    pub bundle: PathBuf,
    /// Number of lines in the bundle.
    pub lines: usize,
}

/// Run the generator (if any), then write the entry stylesheet and the
/// bundle. A failing generator stops the run before anything is written.
pub fn bundle(layout: &BundleLayout, generator: Option<&[String]>) -> Result<BundleReport> {
    if let Some(command) = generator {
        run_generator(command, &layout.styles_dir)?;
    }

    let entry = layout.entry_path();
    write_atomic(&entry, &render_entry(&layout.styles_dir)?)?;
    tracing::info!(entry = %entry.display(), "wrote entry stylesheet");

    let bundled = inline_imports(&entry)?;
    let bundle = layout.bundle_path();
    write_atomic(&bundle, &bundled)?;

    let lines = bundled.lines().count();
    tracing::info!(bundle = %bundle.display(), lines, "wrote bundle");

    Ok(BundleReport {
        entry,
        bundle,
        lines,
    })
}

/// Convenience for [`bundle`] with the default layout under `styles_dir`.
pub fn bundle_dir(styles_dir: &Path) -> Result<BundleReport> {
    bundle(&BundleLayout::new(styles_dir), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn bundle_writes_entry_and_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join(".generated")).unwrap();
        fs::write(root.join(".generated/core.css"), ":root { --core: 1; }\n").unwrap();
        fs::write(root.join(".generated/family-a-overlay.css"), ":root { --overlay: 2; }\n").unwrap();

        let report = bundle_dir(root).unwrap();
        assert_eq!(report.entry, root.join(BundleLayout::DEFAULT_ENTRY));
        assert!(report.entry.exists());

        let bundled = fs::read_to_string(&report.bundle).unwrap();
        assert!(bundled.contains("/* Bundled: ./.generated/core.css */\n:root { --core: 1; }"));
        assert!(bundled.contains("--overlay: 2;"));
        assert!(!bundled.contains("@import"));
        assert_eq!(report.lines, bundled.lines().count());
    }

    #[cfg(unix)]
    #[test]
    fn failing_generator_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let layout = BundleLayout::new(dir.path());
        let command = vec!["false".to_string()];

        assert!(bundle(&layout, Some(command.as_slice())).is_err());
        assert!(!layout.entry_path().exists());
        assert!(!layout.bundle_path().exists());
    }
}
