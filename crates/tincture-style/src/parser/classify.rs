//! Classification of custom-property names into theme tokens.
//!
//! Rules are tried in priority order and the first match wins:
//!
//! 1. a base color role (`primary`, `muted-foreground`, ...)
//! 2. `sidebar-<sub>`
//! 3. `chart-<n>`
//! 4. `font-<sub>`
//! 5. `radius`
//! 6. `shadow-<x|y|blur|spread|opacity>`
//! 7. `shadow-color`
//! 8. `spacing`
//!
//! Names with the `color-` prefix and unhyphenated `chart<n>` names are the
//! serializer's spelling and only match the color rules. They are read when
//! their value is an HSL color and dropped otherwise, like any name outside
//! the vocabulary.

use std::sync::LazyLock;

use regex::Regex;

use crate::Result;
use crate::color::{HslColor, parse_hsl};
use crate::naming::camel_case;
use crate::roles::{SHADOW_COMPONENTS, is_base_role};

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("number pattern is valid")
});

/// A classified theme token.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Base color role, keyed in capitalized-boundary form.
    Color { key: String, color: HslColor },
    /// Sidebar color, keyed by its capitalized sub-role.
    Sidebar { key: String, color: HslColor },
    /// Chart series color, keyed `chart<n>`.
    Chart { key: String, color: HslColor },
    /// Font setting, kept as raw text.
    Font { key: String, value: String },
    /// Base corner radius.
    Radius(f64),
    /// Numeric shadow component.
    Shadow { component: &'static str, value: f64 },
    /// Shadow color.
    ShadowColor(HslColor),
    /// Spacing base.
    Spacing(f64),
}

/// Classify one declaration.
///
/// Returns `Ok(None)` for names outside the vocabulary, for serializer
/// spellings whose value is not HSL, and for numeric tokens whose value has
/// no leading number. A standard color name whose value is not a valid HSL
/// triple is an error.
pub fn classify(name: &str, value: &str) -> Result<Option<Token>> {
    if let Some(role) = name.strip_prefix("color-") {
        return Ok(serialized_color(name, role, value));
    }

    if let Some(token) = classify_color(name, value)? {
        return Ok(Some(token));
    }

    if let Some(sub) = name.strip_prefix("font-") {
        return Ok(Some(Token::Font {
            key: camel_case(sub),
            value: without_important(value).to_string(),
        }));
    }

    if name == "radius" {
        return Ok(numeric(name, value).map(Token::Radius));
    }

    if let Some(component) = name.strip_prefix("shadow-")
        && !name.contains("color")
    {
        let Some(component) = SHADOW_COMPONENTS.iter().copied().find(|c| *c == component) else {
            return Ok(None);
        };
        return Ok(numeric(name, value).map(|value| Token::Shadow { component, value }));
    }

    if name == "shadow-color" {
        return Ok(Some(Token::ShadowColor(parse_hsl(value)?)));
    }

    if name == "spacing" {
        return Ok(numeric(name, value).map(Token::Spacing));
    }

    Ok(None)
}

fn classify_color(name: &str, value: &str) -> Result<Option<Token>> {
    if is_base_role(name) || name.starts_with("sidebar-") || name.starts_with("chart-") {
        return Ok(color_token(name, parse_hsl(value)?));
    }

    if is_serialized_chart(name) {
        return Ok(serialized_color(name, name, value));
    }

    Ok(None)
}

/// Classify a name in the serializer's spelling. A value that is not HSL
/// drops the declaration instead of failing the parse.
fn serialized_color(name: &str, role: &str, value: &str) -> Option<Token> {
    match parse_hsl(value) {
        Ok(color) => color_token(role, color),
        Err(_) => {
            tracing::debug!(property = name, value, "skipping non-HSL value");
            None
        }
    }
}

fn color_token(role: &str, color: HslColor) -> Option<Token> {
    if is_base_role(role) {
        return Some(Token::Color {
            key: camel_case(role),
            color,
        });
    }

    if let Some(sub) = role.strip_prefix("sidebar-") {
        return Some(Token::Sidebar {
            key: camel_case(sub),
            color,
        });
    }

    let series = role
        .strip_prefix("chart-")
        .or_else(|| is_serialized_chart(role).then(|| &role["chart".len()..]))?;
    Some(Token::Chart {
        key: format!("chart{series}"),
        color,
    })
}

/// `chart3`, the serializer's name for series `3`.
fn is_serialized_chart(name: &str) -> bool {
    name.strip_prefix("chart")
        .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
}

/// Strip a trailing `!important` written by the strict stylesheet.
fn without_important(value: &str) -> &str {
    value
        .trim_end()
        .strip_suffix("!important")
        .map_or(value, str::trim_end)
}

/// Read the leading decimal number of a value (`0.5rem` reads as `0.5`).
pub fn leading_number(value: &str) -> Option<f64> {
    LEADING_NUMBER
        .find(value)
        .and_then(|m| m.as_str().trim().parse::<f64>().ok())
}

fn numeric(name: &str, value: &str) -> Option<f64> {
    let number = leading_number(value);
    if number.is_none() {
        tracing::warn!(property = name, value, "skipping non-numeric value");
    }
    number
}
