//! Preset source files: the generated, importable form of an ingested theme.
//!
//! A preset source is a TOML document naming the exported identifier of the
//! theme and carrying both modes in the parsed shape:
//!
//! ```toml
//! export = "midnightBlue"
//! id = "midnight-blue"
//! name = "midnight Blue"
//! description = "Generated theme"
//!
//! [modes.light.colors]
//! primary = { h = 220.0, s = 90.0, l = 56.0 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::naming::{display_name, kebab_case};
use crate::parser::{ParsedMode, ParsedTheme};
use crate::theme::{ThemeDefinition, ThemeModes};
use crate::{Error, Result};

/// Description written into generated presets.
pub const GENERATED_DESCRIPTION: &str = "Generated theme";

/// A preset source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetSource {
    /// Exported identifier, in capitalized-boundary form.
    pub export: String,
    /// Theme slug.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Author, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Version, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Light and dark modes.
    #[serde(default)]
    pub modes: SourceModes,
}

/// Modes of a preset source. Either may be absent in hand-written sources.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceModes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light: Option<ParsedMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark: Option<ParsedMode>,
}

impl PresetSource {
    /// Build the source for a parsed stylesheet.
    ///
    /// The `id` is the hyphenated form of `export`.
    pub fn from_parsed(export: impl Into<String>, theme: ParsedTheme) -> Self {
        let export = export.into();
        Self {
            id: kebab_case(&export),
            name: display_name(&export),
            description: GENERATED_DESCRIPTION.to_string(),
            author: None,
            version: None,
            modes: SourceModes {
                light: Some(theme.light),
                dark: Some(theme.dark),
            },
            export,
        }
    }

    /// Render as a TOML document with a provenance comment.
    pub fn to_toml(&self, origin: &str) -> Result<String> {
        let body = toml::to_string_pretty(self).map_err(|e| Error::preset_source(origin, e))?;
        Ok(format!("# Generated by `tincture ingest` from {origin}. Do not edit.\n\n{body}"))
    }

    /// Parse a TOML document. `path` is only used for error messages.
    pub fn from_toml(text: &str, path: impl AsRef<Path>) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::preset_source(path.as_ref(), e))
    }

    /// Convert into a theme definition.
    pub fn into_definition(self) -> ThemeDefinition {
        ThemeDefinition {
            id: self.id,
            name: self.name,
            description: self.description,
            author: self.author,
            version: self.version,
            modes: ThemeModes {
                light: self.modes.light.map(ParsedMode::into_theme_mode),
                dark: self.modes.dark.map(ParsedMode::into_theme_mode),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::HslColor;
    use crate::parser::parse_css;

    #[test]
    fn identifiers_from_export() {
        let source = PresetSource::from_parsed("midnightBlue", ParsedTheme::default());
        assert_eq!(source.id, "midnight-blue");
        assert_eq!(source.name, "midnight Blue");
        assert_eq!(source.description, GENERATED_DESCRIPTION);
    }

    #[test]
    fn toml_document_reads_back() {
        let css = ":root { --primary: hsl(220 90% 56%); --font-sans: Inter; --shadow-x: 1px; }\n.dark { --sidebar-ring: hsl(217 91% 60%); }";
        let source = PresetSource::from_parsed("ocean", parse_css(css).unwrap());

        let text = source.to_toml("ocean.css").unwrap();
        assert!(text.starts_with("# Generated by `tincture ingest` from ocean.css"));
        assert!(text.contains("export = \"ocean\""));

        let back = PresetSource::from_toml(&text, "ocean.toml").unwrap();
        assert_eq!(back, source);
    }

    #[test]
    fn definition_flattens_modes() {
        let css = ":root { --primary: hsl(220 90% 56%); }\n.dark { --sidebar-ring: hsl(217 91% 60%); }";
        let theme = PresetSource::from_parsed("ocean", parse_css(css).unwrap()).into_definition();
        assert_eq!(theme.id, "ocean");
        let dark = theme.modes.dark.unwrap();
        assert_eq!(dark.colors["sidebarRing"], HslColor::new(217.0, 91.0, 60.0));
    }

    #[test]
    fn hand_written_source_without_dark_mode() {
        let text = r#"
export = "paper"
id = "paper"
name = "Paper"

[modes.light.colors]
background = { h = 0.0, s = 0.0, l = 100.0 }
"#;
        let theme = PresetSource::from_toml(text, "paper.toml").unwrap().into_definition();
        assert!(theme.modes.dark.is_none());
        assert_eq!(theme.modes.light.unwrap().colors["background"], HslColor::WHITE);
    }

    #[test]
    fn invalid_toml_is_reported_with_path() {
        let err = PresetSource::from_toml("export = ", "broken.toml").unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }
}
