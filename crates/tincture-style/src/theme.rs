//! Theme definitions: metadata plus a light and a dark mode.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::color::HslColor;

/// Color roles of a mode, keyed by capitalized-boundary role name.
///
/// Declaration order is preserved and is the order roles are emitted in.
pub type ThemeColors = IndexMap<String, HslColor>;

/// A named, versioned theme.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThemeDefinition {
    /// Stable lowercase-hyphenated slug, used as the `data-theme` value.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Author, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Version string, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// The light and dark variants.
    #[serde(default)]
    pub modes: ThemeModes,
}

/// Light and dark variants of a theme.
///
/// Both are required for built-in presets; older preset sources may omit
/// either one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThemeModes {
    /// Light variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light: Option<ThemeMode>,
    /// Dark variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark: Option<ThemeMode>,
}

/// One variant of a theme.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThemeMode {
    /// Semantic color roles.
    #[serde(default)]
    pub colors: ThemeColors,
    /// Font families and letter spacing.
    #[serde(default)]
    pub typography: Typography,
    /// Radius and spacing base values.
    #[serde(default)]
    pub spacing: Spacing,
    /// Base drop shadow.
    #[serde(default)]
    pub shadow: Shadow,
}

/// Font families plus letter spacing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    /// Sans-serif family stack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sans: Option<String>,
    /// Serif family stack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serif: Option<String>,
    /// Monospace family stack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mono: Option<String>,
    /// Letter spacing in `em`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
}

/// Base sizing values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    /// Corner radius base, in `rem`.
    pub radius: f64,
    /// Spacing scale base, in `rem`.
    pub spacing: f64,
}

impl Spacing {
    /// Default corner radius.
    pub const DEFAULT_RADIUS: f64 = 0.5;
    /// Default spacing base.
    pub const DEFAULT_SPACING: f64 = 0.25;
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            radius: Self::DEFAULT_RADIUS,
            spacing: Self::DEFAULT_SPACING,
        }
    }
}

/// Base drop shadow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Shadow color.
    pub color: HslColor,
    /// Horizontal offset in `px`.
    pub x: f64,
    /// Vertical offset in `px`.
    pub y: f64,
    /// Blur radius in `px`.
    pub blur: f64,
    /// Spread radius in `px`.
    pub spread: f64,
    /// Opacity, 0-1.
    pub opacity: f64,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            color: HslColor::BLACK,
            x: 0.0,
            y: 1.0,
            blur: 3.0,
            spread: 0.0,
            opacity: 0.1,
        }
    }
}

impl ThemeDefinition {
    /// Create a theme with no modes.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the author.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the light mode.
    pub fn light(mut self, mode: ThemeMode) -> Self {
        self.modes.light = Some(mode);
        self
    }

    /// Set the dark mode.
    pub fn dark(mut self, mode: ThemeMode) -> Self {
        self.modes.dark = Some(mode);
        self
    }
}

impl ThemeMode {
    /// Create an empty mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mode from `(role, color)` pairs.
    pub fn from_colors<'a>(colors: impl IntoIterator<Item = (&'a str, HslColor)>) -> Self {
        Self {
            colors: colors
                .into_iter()
                .map(|(role, color)| (role.to_string(), color))
                .collect(),
            ..Default::default()
        }
    }

    /// Set a color role.
    pub fn color(mut self, role: impl Into<String>, color: HslColor) -> Self {
        self.colors.insert(role.into(), color);
        self
    }

    /// Set the typography.
    pub fn typography(mut self, typography: Typography) -> Self {
        self.typography = typography;
        self
    }

    /// Set the spacing values.
    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the shadow.
    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = shadow;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_modes() {
        let theme = ThemeDefinition::new("midnight", "Midnight")
            .description("Deep blues")
            .light(ThemeMode::new().color("primary", HslColor::new(200.0, 50.0, 50.0)));

        assert_eq!(theme.id, "midnight");
        assert!(theme.modes.dark.is_none());
        let light = theme.modes.light.as_ref().unwrap();
        assert_eq!(light.colors["primary"], HslColor::new(200.0, 50.0, 50.0));
    }

    #[test]
    fn colors_keep_insertion_order() {
        let mode = ThemeMode::from_colors([
            ("ring", HslColor::BLACK),
            ("background", HslColor::WHITE),
            ("primary", HslColor::BLACK),
        ]);
        let keys: Vec<_> = mode.colors.keys().map(String::as_str).collect();
        assert_eq!(keys, ["ring", "background", "primary"]);
    }
}
