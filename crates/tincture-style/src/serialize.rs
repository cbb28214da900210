//! Rendering theme definitions as CSS custom-property blocks.
//!
//! Each theme becomes a `[data-theme="<id>"]` block sourced from its light
//! mode and a `[data-theme="<id>"].dark` block sourced from its dark mode.
//! Color roles are written as `--color-<hyphenated-role>: <h> <s>% <l>%;`.

use std::fmt::Write as _;

use crate::naming::kebab_case;
use crate::theme::{ThemeDefinition, ThemeMode};

/// Fixed comment lines at the top of every generated stylesheet.
pub const HEADER: [&str; 3] = [
    "/* AUTO-GENERATED FILE - DO NOT EDIT */",
    "/* Source: tincture theme presets */",
    "/* Regenerate with `tincture build` */",
];

/// Options controlling CSS output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SerializeOptions {
    /// Always emit both blocks and mark every declaration `!important`.
    pub strict: bool,
    /// Also emit font, radius, shadow and spacing tokens after the colors.
    pub design_tokens: bool,
}

impl SerializeOptions {
    /// Options for the stricter override stylesheet.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Default::default()
        }
    }

    /// Enable or disable the non-color design tokens.
    pub fn with_design_tokens(mut self, enabled: bool) -> Self {
        self.design_tokens = enabled;
        self
    }
}

/// Render a sequence of themes as one stylesheet.
///
/// Themes are written in the order given. Roles absent from a mode are
/// simply absent from its block.
pub fn serialize_themes(themes: &[ThemeDefinition], options: &SerializeOptions) -> String {
    let mut css = HEADER.join("\n");
    css.push_str("\n\n");

    let blocks: Vec<String> = themes
        .iter()
        .map(|theme| serialize_theme(theme, options))
        .collect();
    css.push_str(&blocks.join("\n"));
    css
}

/// Render a single theme: header comment, light block, dark block.
pub fn serialize_theme(theme: &ThemeDefinition, options: &SerializeOptions) -> String {
    let mut css = String::new();
    let _ = writeln!(css, "/* {} — {} */", theme.name, theme.description);

    let selector = format!("[data-theme=\"{}\"]", theme.id);
    let light = theme.modes.light.as_ref();
    let dark = theme.modes.dark.as_ref();

    if light.is_some() || options.strict {
        write_block(&mut css, &selector, light, options);
    }

    if dark.is_some() || options.strict {
        if light.is_some() || options.strict {
            css.push('\n');
        }
        write_block(&mut css, &format!("{selector}.dark"), dark, options);
    }

    css
}

fn write_block(css: &mut String, selector: &str, mode: Option<&ThemeMode>, options: &SerializeOptions) {
    let _ = writeln!(css, "{selector} {{");
    if let Some(mode) = mode {
        for (name, value) in declarations(mode, options) {
            write_declaration(css, &name, &value, options);
        }
    }
    css.push_str("}\n");
}

fn write_declaration(css: &mut String, name: &str, value: &str, options: &SerializeOptions) {
    let important = if options.strict { " !important" } else { "" };
    let _ = writeln!(css, "  --{name}: {value}{important};");
}

/// Custom-property `(name, value)` pairs for one mode, without the `--`.
pub fn declarations(mode: &ThemeMode, options: &SerializeOptions) -> Vec<(String, String)> {
    let mut out: Vec<(String, String)> = mode
        .colors
        .iter()
        .map(|(role, color)| (format!("color-{}", kebab_case(role)), color.to_css_triple()))
        .collect();

    if options.design_tokens {
        let typography = &mode.typography;
        for (role, family) in [
            ("sans", &typography.sans),
            ("serif", &typography.serif),
            ("mono", &typography.mono),
        ] {
            if let Some(family) = family {
                out.push((format!("font-{role}"), family.clone()));
            }
        }
        if let Some(spacing) = typography.letter_spacing {
            out.push((format!("font-{}", kebab_case("letterSpacing")), spacing.to_string()));
        }

        out.push(("radius".into(), mode.spacing.radius.to_string()));

        let shadow = &mode.shadow;
        for (component, value) in [
            ("x", shadow.x),
            ("y", shadow.y),
            ("blur", shadow.blur),
            ("spread", shadow.spread),
            ("opacity", shadow.opacity),
        ] {
            out.push((format!("shadow-{component}"), value.to_string()));
        }
        out.push(("shadow-color".into(), shadow.color.to_css_function()));

        out.push(("spacing".into(), mode.spacing.spacing.to_string()));
    }

    out
}
