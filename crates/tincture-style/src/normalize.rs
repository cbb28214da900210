//! The normalized theme layer.
//!
//! Ingest stylesheets use the role vocabulary of their origin (`primary`,
//! `muted-foreground`, ...). This layer maps those roles onto the component
//! vocabulary (`action-primary-bg`, `surface-fg-muted`, ...) and writes one
//! `[data-theme="<name>"]` block per stylesheet with `--theme-*` properties.
//! Feedback states that every theme must provide are filled in with fixed
//! defaults when a stylesheet omits them.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::color::{HslColor, parse_hsl};
use crate::parser::{BlockSelectors, Declarations, extract_block};
use crate::{Error, Result};

/// Source role to normalized role.
pub const NORMALIZED_KEYS: &[(&str, &str)] = &[
    // Surfaces
    ("background", "surface-bg"),
    ("foreground", "surface-fg"),
    ("card", "surface-elevated"),
    ("card-foreground", "surface-elevated-fg"),
    ("muted", "surface-muted"),
    ("muted-foreground", "surface-fg-muted"),
    ("border", "surface-border"),
    ("input", "surface-border"),
    // Actions
    ("primary", "action-primary-bg"),
    ("primary-foreground", "action-primary-fg"),
    ("secondary", "action-secondary-bg"),
    ("secondary-foreground", "action-secondary-fg"),
    ("accent", "action-accent-bg"),
    ("accent-foreground", "action-accent-fg"),
    ("ring", "action-focus-ring"),
    // States
    ("destructive", "state-error-bg"),
    ("destructive-foreground", "state-error-fg"),
    ("success", "state-success-bg"),
    ("success-foreground", "state-success-fg"),
    ("success-border", "state-success-border"),
    ("warning", "state-warning-bg"),
    ("warning-foreground", "state-warning-fg"),
    ("warning-border", "state-warning-border"),
    ("info", "state-info-bg"),
    ("info-foreground", "state-info-fg"),
    // Overlays
    ("popover", "overlay-bg"),
    ("popover-foreground", "overlay-fg"),
    // Sidebar
    ("sidebar", "sidebar-bg"),
    ("sidebar-background", "sidebar-bg"),
    ("sidebar-foreground", "sidebar-fg"),
    ("sidebar-accent", "sidebar-accent-bg"),
    ("sidebar-accent-foreground", "sidebar-accent-fg"),
    ("sidebar-primary", "sidebar-primary-bg"),
    ("sidebar-primary-foreground", "sidebar-primary-fg"),
];

/// States filled in when a stylesheet does not define them.
pub const REQUIRED_STATES: &[(&str, HslColor)] = &[
    ("success", HslColor::new(142.0, 76.0, 36.0)),
    ("success-foreground", HslColor::new(0.0, 0.0, 100.0)),
    ("warning", HslColor::new(38.0, 92.0, 50.0)),
    ("warning-foreground", HslColor::new(0.0, 0.0, 0.0)),
    ("info", HslColor::new(221.0, 83.0, 53.0)),
    ("info-foreground", HslColor::new(0.0, 0.0, 100.0)),
];

/// First line of the generated theme layer.
pub const LAYER_HEADER: &str = "/* AUTO-GENERATED - THEME LAYER (normalized vocabulary) */\n\n";

/// Normalized role for a source role; unknown roles pass through.
pub fn normalize_key(key: &str) -> &str {
    NORMALIZED_KEYS
        .iter()
        .find(|(source, _)| *source == key)
        .map_or(key, |(_, normalized)| *normalized)
}

/// Colors of one mode, keyed by source role.
pub type ModeColors = IndexMap<String, HslColor>;

/// Color declarations of one stylesheet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThemeColors {
    /// `:root` colors.
    pub light: ModeColors,
    /// `.dark` colors.
    pub dark: ModeColors,
}

/// Collect the HSL colors of the `:root` and `.dark` blocks.
///
/// Values that are not HSL colors are skipped; radii, fonts and the like
/// have no place in this layer.
pub fn collect_colors(css: &str) -> ThemeColors {
    let selectors = BlockSelectors::default();
    ThemeColors {
        light: hsl_only(&extract_block(css, &selectors.light)),
        dark: hsl_only(&extract_block(css, &selectors.dark)),
    }
}

fn hsl_only(declarations: &Declarations) -> ModeColors {
    declarations
        .iter()
        .filter_map(|(name, value)| parse_hsl(value).ok().map(|color| (name.clone(), color)))
        .collect()
}

fn with_required_states(colors: &ModeColors) -> ModeColors {
    let mut colors = colors.clone();
    for (state, color) in REQUIRED_STATES {
        colors.entry((*state).to_string()).or_insert(*color);
    }
    colors
}

/// Render the normalized blocks for one theme.
///
/// The light block is always written; the dark block only if the source
/// declared dark colors.
pub fn render_theme(name: &str, colors: &ThemeColors) -> String {
    let mut css = String::new();
    let _ = writeln!(css, "/* {name} - Normalized vocabulary */");
    write_block(&mut css, &format!("[data-theme=\"{name}\"]"), &colors.light);

    if !colors.dark.is_empty() {
        write_block(&mut css, &format!("[data-theme=\"{name}\"].dark"), &colors.dark);
    }
    css
}

fn write_block(css: &mut String, selector: &str, colors: &ModeColors) {
    let _ = writeln!(css, "{selector} {{");
    for (key, color) in &with_required_states(colors) {
        let _ = writeln!(css, "  --theme-{}: {};", normalize_key(key), color.to_css_function());
    }
    css.push_str("}\n\n");
}

/// Render the theme layer for every `.css` file in `dir`, ordered by file
/// name. Each theme is named after its file stem.
///
/// Returns `None` when `dir` does not exist.
pub fn render_theme_layer(dir: &Path) -> Result<Option<String>> {
    if !dir.is_dir() {
        tracing::warn!(dir = %dir.display(), "no theme sources directory, skipping theme layer");
        return Ok(None);
    }

    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|e| Error::io(dir, e))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("css"))
        .collect();
    paths.sort();

    let mut css = String::from(LAYER_HEADER);
    for path in &paths {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        tracing::debug!(theme = %name, "normalizing theme");
        css.push_str(&render_theme(&name, &collect_colors(&content)));
    }
    Ok(Some(css))
}
