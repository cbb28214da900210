//! The structured shape a parsed CSS block is folded into.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::classify::{Token, leading_number};
use crate::color::HslColor;
use crate::naming::capitalize;
use crate::roles::SIDEBAR_PREFIX;
use crate::theme::{Shadow, Spacing, ThemeMode, Typography};

/// One mode as read from CSS, before it is flattened into a [`ThemeMode`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParsedMode {
    /// Base color roles.
    #[serde(default)]
    pub colors: IndexMap<String, HslColor>,
    /// Colors scoped to a UI region.
    #[serde(default)]
    pub contextual: Contextual,
    /// Chart series colors.
    #[serde(default)]
    pub charts: IndexMap<String, HslColor>,
    /// Font settings as raw text.
    #[serde(default)]
    pub typography: IndexMap<String, String>,
    /// Radius scale.
    #[serde(default)]
    pub radius: BaseValue,
    /// Shadow scale.
    #[serde(default)]
    pub shadows: Shadows,
    /// Spacing scale.
    #[serde(default)]
    pub spacing: BaseValue,
}

/// Region-scoped colors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Contextual {
    /// Sidebar colors, keyed by capitalized sub-role.
    #[serde(default)]
    pub sidebar: IndexMap<String, HslColor>,
}

/// A scale with only a base step.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BaseValue {
    /// Base step, if declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<f64>,
}

/// Shadow scale.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Shadows {
    /// Base shadow, present once any shadow property is declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<ShadowBase>,
}

/// Base shadow components, each optional.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShadowBase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spread: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<HslColor>,
}

impl ParsedMode {
    /// Apply one classified token.
    pub fn apply(&mut self, token: Token) {
        match token {
            Token::Color { key, color } => {
                self.colors.insert(key, color);
            }
            Token::Sidebar { key, color } => {
                self.contextual.sidebar.insert(key, color);
            }
            Token::Chart { key, color } => {
                self.charts.insert(key, color);
            }
            Token::Font { key, value } => {
                self.typography.insert(key, value);
            }
            Token::Radius(value) => self.radius.base = Some(value),
            Token::Shadow { component, value } => {
                let base = self.shadows.base.get_or_insert_default();
                match component {
                    "x" => base.x = Some(value),
                    "y" => base.y = Some(value),
                    "blur" => base.blur = Some(value),
                    "spread" => base.spread = Some(value),
                    "opacity" => base.opacity = Some(value),
                    _ => {}
                }
            }
            Token::ShadowColor(color) => {
                self.shadows.base.get_or_insert_default().color = Some(color);
            }
            Token::Spacing(value) => self.spacing.base = Some(value),
        }
    }

    /// Returns true if nothing was declared.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Every color of this mode under its flat role key: base roles, then
    /// `sidebar<Sub>` roles, then chart series.
    pub fn color_roles(&self) -> IndexMap<String, HslColor> {
        let mut roles = self.colors.clone();
        for (sub, color) in &self.contextual.sidebar {
            roles.insert(format!("{SIDEBAR_PREFIX}{}", capitalize(sub)), *color);
        }
        roles.extend(self.charts.iter().map(|(k, v)| (k.clone(), *v)));
        roles
    }

    /// Flatten into a [`ThemeMode`], filling absent numbers with defaults.
    pub fn into_theme_mode(self) -> ThemeMode {
        let colors = self.color_roles();

        let font = |key: &str| self.typography.get(key).cloned();
        let typography = Typography {
            sans: font("sans"),
            serif: font("serif"),
            mono: font("mono"),
            letter_spacing: self
                .typography
                .get("letterSpacing")
                .and_then(|v| leading_number(v)),
        };

        let spacing = Spacing {
            radius: self.radius.base.unwrap_or(Spacing::DEFAULT_RADIUS),
            spacing: self.spacing.base.unwrap_or(Spacing::DEFAULT_SPACING),
        };

        let defaults = Shadow::default();
        let shadow = match self.shadows.base {
            Some(base) => Shadow {
                color: base.color.unwrap_or(defaults.color),
                x: base.x.unwrap_or(defaults.x),
                y: base.y.unwrap_or(defaults.y),
                blur: base.blur.unwrap_or(defaults.blur),
                spread: base.spread.unwrap_or(defaults.spread),
                opacity: base.opacity.unwrap_or(defaults.opacity),
            },
            None => defaults,
        };

        ThemeMode {
            colors,
            typography,
            spacing,
            shadow,
        }
    }
}

impl FromIterator<Token> for ParsedMode {
    fn from_iter<I: IntoIterator<Item = Token>>(tokens: I) -> Self {
        tokens.into_iter().fold(Self::default(), |mut mode, token| {
            mode.apply(token);
            mode
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadow_base_created_on_first_component() {
        let mut mode = ParsedMode::default();
        assert!(mode.shadows.base.is_none());
        mode.apply(Token::Shadow { component: "y", value: 2.0 });
        mode.apply(Token::ShadowColor(HslColor::BLACK));
        let base = mode.shadows.base.unwrap();
        assert_eq!(base.y, Some(2.0));
        assert_eq!(base.color, Some(HslColor::BLACK));
        assert_eq!(base.x, None);
    }

    #[test]
    fn flatten_to_theme_mode() {
        let mode: ParsedMode = [
            Token::Color { key: "primary".into(), color: HslColor::new(1.0, 2.0, 3.0) },
            Token::Sidebar { key: "primaryForeground".into(), color: HslColor::WHITE },
            Token::Chart { key: "chart2".into(), color: HslColor::BLACK },
            Token::Font { key: "mono".into(), value: "JetBrains Mono".into() },
            Token::Font { key: "letterSpacing".into(), value: "0.02em".into() },
            Token::Radius(0.75),
        ]
        .into_iter()
        .collect();

        let theme_mode = mode.into_theme_mode();
        let keys: Vec<_> = theme_mode.colors.keys().map(String::as_str).collect();
        assert_eq!(keys, ["primary", "sidebarPrimaryForeground", "chart2"]);
        assert_eq!(theme_mode.typography.mono.as_deref(), Some("JetBrains Mono"));
        assert_eq!(theme_mode.typography.letter_spacing, Some(0.02));
        assert_eq!(theme_mode.spacing.radius, 0.75);
        assert_eq!(theme_mode.spacing.spacing, Spacing::DEFAULT_SPACING);
        assert_eq!(theme_mode.shadow, Shadow::default());
    }

    #[test]
    fn empty_mode() {
        assert!(ParsedMode::default().is_empty());
        assert!(!ParsedMode::from_iter([Token::Spacing(1.0)]).is_empty());
    }
}
