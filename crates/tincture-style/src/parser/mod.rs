//! Reading theme tokens back out of CSS.
//!
//! Two blocks are read from a stylesheet, a light block (`:root` by default)
//! and a dark block (`.dark`). Each declaration is classified and folded
//! into a [`ParsedMode`]. A color value that is not valid HSL aborts the
//! whole parse.

mod blocks;
mod classify;
mod mode;

pub use blocks::{Declarations, extract_block, parse_declarations};
pub use classify::{Token, classify, leading_number};
pub use mode::{BaseValue, Contextual, ParsedMode, ShadowBase, Shadows};

use crate::Result;

/// Selectors of the two blocks read from a stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSelectors {
    /// Selector of the light block.
    pub light: String,
    /// Selector of the dark block.
    pub dark: String,
}

impl BlockSelectors {
    /// Selectors of a serialized theme, so generated CSS can be read back.
    pub fn for_theme(id: &str) -> Self {
        Self {
            light: format!("[data-theme=\"{id}\"]"),
            dark: format!("[data-theme=\"{id}\"].dark"),
        }
    }
}

impl Default for BlockSelectors {
    fn default() -> Self {
        Self {
            light: ":root".into(),
            dark: ".dark".into(),
        }
    }
}

/// Light and dark modes read from one stylesheet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedTheme {
    /// Tokens from the light block.
    pub light: ParsedMode,
    /// Tokens from the dark block.
    pub dark: ParsedMode,
}

/// Parse a stylesheet using the `:root` / `.dark` convention.
pub fn parse_css(css: &str) -> Result<ParsedTheme> {
    parse_theme_css(css, &BlockSelectors::default())
}

/// Parse a stylesheet with explicit block selectors.
pub fn parse_theme_css(css: &str, selectors: &BlockSelectors) -> Result<ParsedTheme> {
    Ok(ParsedTheme {
        light: parse_mode(&extract_block(css, &selectors.light))?,
        dark: parse_mode(&extract_block(css, &selectors.dark))?,
    })
}

/// Classify every declaration of a block and fold the tokens into a mode.
pub fn parse_mode(declarations: &Declarations) -> Result<ParsedMode> {
    let mut mode = ParsedMode::default();
    for (name, value) in declarations {
        match classify(name, value)? {
            Some(token) => mode.apply(token),
            None => tracing::trace!(property = %name, "not a theme token"),
        }
    }
    Ok(mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::color::HslColor;

    #[test]
    fn parses_mixed_root_block() {
        let css = ":root { --primary: hsl(220 90% 56%); --sidebar-background: hsl(0 0% 98%); --chart-1: hsl(12 76% 61%); --radius: 0.5; }";
        let theme = parse_css(css).unwrap();
        let light = &theme.light;

        assert_eq!(light.colors.len(), 1);
        assert_eq!(light.colors["primary"], HslColor::new(220.0, 90.0, 56.0));
        assert_eq!(light.contextual.sidebar["background"], HslColor::new(0.0, 0.0, 98.0));
        assert_eq!(light.charts["chart1"], HslColor::new(12.0, 76.0, 61.0));
        assert_eq!(light.radius.base, Some(0.5));
        assert!(light.typography.is_empty());
        assert!(light.shadows.base.is_none());
        assert!(light.spacing.base.is_none());
        assert!(theme.dark.is_empty());
    }

    #[test]
    fn missing_root_gives_empty_light_mode() {
        let css = ".dark { --background: hsl(222 47% 11%); }";
        let theme = parse_css(css).unwrap();
        assert!(theme.light.colors.is_empty());
        assert_eq!(theme.dark.colors["background"], HslColor::new(222.0, 47.0, 11.0));
    }

    #[test]
    fn shadow_color_populates_shadow_base() {
        let css = ":root { --shadow-color: hsl(0 0% 0%); --shadow-opacity: 0.1; }";
        let light = parse_css(css).unwrap().light;
        let base = light.shadows.base.unwrap();
        assert_eq!(base.color, Some(HslColor::BLACK));
        assert_eq!(base.opacity, Some(0.1));
    }

    #[test]
    fn malformed_hsl_aborts() {
        let css = ":root { --radius: 1; --primary: hsl(not a color); }";
        assert!(matches!(parse_css(css), Err(Error::InvalidHsl { .. })));
    }

    #[test]
    fn serializer_spellings_never_abort_a_parse() {
        let css = ":root { --color-primary: #3b82f6; --chart1: var(--x); --primary: hsl(220 90% 56%); }";
        let light = parse_css(css).unwrap().light;
        assert_eq!(light.colors.len(), 1);
        assert_eq!(light.colors["primary"], HslColor::new(220.0, 90.0, 56.0));
        assert!(light.charts.is_empty());
    }

    #[test]
    fn malformed_hsl_in_dark_aborts() {
        let css = ":root { --primary: hsl(1 2% 3%); } .dark { --ring: rgb(0, 0, 0); }";
        assert!(parse_css(css).is_err());
    }
}
