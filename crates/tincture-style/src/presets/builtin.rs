//! Built-in theme presets.

use crate::color::HslColor;
use crate::theme::{Shadow, Spacing, ThemeDefinition, ThemeMode, Typography};

const fn hsl(h: f64, s: f64, l: f64) -> HslColor {
    HslColor::new(h, s, l)
}

const CANVAS_LIGHT: &[(&str, HslColor)] = &[
    ("background", hsl(0.0, 0.0, 100.0)),
    ("foreground", hsl(240.0, 10.0, 3.9)),
    ("card", hsl(0.0, 0.0, 100.0)),
    ("cardForeground", hsl(240.0, 10.0, 3.9)),
    ("popover", hsl(0.0, 0.0, 100.0)),
    ("popoverForeground", hsl(240.0, 10.0, 3.9)),
    ("primary", hsl(240.0, 5.9, 10.0)),
    ("primaryForeground", hsl(0.0, 0.0, 98.0)),
    ("secondary", hsl(240.0, 4.8, 95.9)),
    ("secondaryForeground", hsl(240.0, 5.9, 10.0)),
    ("muted", hsl(240.0, 4.8, 95.9)),
    ("mutedForeground", hsl(240.0, 3.8, 46.1)),
    ("accent", hsl(240.0, 4.8, 95.9)),
    ("accentForeground", hsl(240.0, 5.9, 10.0)),
    ("destructive", hsl(0.0, 84.2, 60.2)),
    ("destructiveForeground", hsl(0.0, 0.0, 98.0)),
    ("border", hsl(240.0, 5.9, 90.0)),
    ("input", hsl(240.0, 5.9, 90.0)),
    ("ring", hsl(240.0, 10.0, 3.9)),
    ("sidebarBackground", hsl(0.0, 0.0, 98.0)),
    ("sidebarForeground", hsl(240.0, 5.3, 26.1)),
    ("sidebarPrimary", hsl(240.0, 5.9, 10.0)),
    ("sidebarPrimaryForeground", hsl(0.0, 0.0, 98.0)),
    ("sidebarAccent", hsl(240.0, 4.8, 95.9)),
    ("sidebarAccentForeground", hsl(240.0, 5.9, 10.0)),
    ("sidebarBorder", hsl(220.0, 13.0, 91.0)),
    ("sidebarRing", hsl(217.2, 91.2, 59.8)),
    ("chart1", hsl(12.0, 76.0, 61.0)),
    ("chart2", hsl(173.0, 58.0, 39.0)),
    ("chart3", hsl(197.0, 37.0, 24.0)),
    ("chart4", hsl(43.0, 74.0, 66.0)),
    ("chart5", hsl(27.0, 87.0, 67.0)),
];

const CANVAS_DARK: &[(&str, HslColor)] = &[
    ("background", hsl(240.0, 10.0, 3.9)),
    ("foreground", hsl(0.0, 0.0, 98.0)),
    ("card", hsl(240.0, 10.0, 3.9)),
    ("cardForeground", hsl(0.0, 0.0, 98.0)),
    ("popover", hsl(240.0, 10.0, 3.9)),
    ("popoverForeground", hsl(0.0, 0.0, 98.0)),
    ("primary", hsl(0.0, 0.0, 98.0)),
    ("primaryForeground", hsl(240.0, 5.9, 10.0)),
    ("secondary", hsl(240.0, 3.7, 15.9)),
    ("secondaryForeground", hsl(0.0, 0.0, 98.0)),
    ("muted", hsl(240.0, 3.7, 15.9)),
    ("mutedForeground", hsl(240.0, 5.0, 64.9)),
    ("accent", hsl(240.0, 3.7, 15.9)),
    ("accentForeground", hsl(0.0, 0.0, 98.0)),
    ("destructive", hsl(0.0, 62.8, 30.6)),
    ("destructiveForeground", hsl(0.0, 0.0, 98.0)),
    ("border", hsl(240.0, 3.7, 15.9)),
    ("input", hsl(240.0, 3.7, 15.9)),
    ("ring", hsl(240.0, 4.9, 83.9)),
    ("sidebarBackground", hsl(240.0, 5.9, 10.0)),
    ("sidebarForeground", hsl(240.0, 4.8, 95.9)),
    ("sidebarPrimary", hsl(224.3, 76.3, 48.0)),
    ("sidebarPrimaryForeground", hsl(0.0, 0.0, 100.0)),
    ("sidebarAccent", hsl(240.0, 3.7, 15.9)),
    ("sidebarAccentForeground", hsl(240.0, 4.8, 95.9)),
    ("sidebarBorder", hsl(240.0, 3.7, 15.9)),
    ("sidebarRing", hsl(217.2, 91.2, 59.8)),
    ("chart1", hsl(220.0, 70.0, 50.0)),
    ("chart2", hsl(160.0, 60.0, 45.0)),
    ("chart3", hsl(30.0, 80.0, 55.0)),
    ("chart4", hsl(280.0, 65.0, 60.0)),
    ("chart5", hsl(340.0, 75.0, 55.0)),
];

const MIDNIGHT_LIGHT: &[(&str, HslColor)] = &[
    ("background", hsl(210.0, 40.0, 98.0)),
    ("foreground", hsl(222.2, 47.4, 11.2)),
    ("card", hsl(0.0, 0.0, 100.0)),
    ("cardForeground", hsl(222.2, 47.4, 11.2)),
    ("popover", hsl(0.0, 0.0, 100.0)),
    ("popoverForeground", hsl(222.2, 47.4, 11.2)),
    ("primary", hsl(221.2, 83.2, 53.3)),
    ("primaryForeground", hsl(210.0, 40.0, 98.0)),
    ("secondary", hsl(210.0, 40.0, 96.1)),
    ("secondaryForeground", hsl(222.2, 47.4, 11.2)),
    ("muted", hsl(210.0, 40.0, 96.1)),
    ("mutedForeground", hsl(215.4, 16.3, 46.9)),
    ("accent", hsl(210.0, 40.0, 96.1)),
    ("accentForeground", hsl(222.2, 47.4, 11.2)),
    ("destructive", hsl(0.0, 84.2, 60.2)),
    ("destructiveForeground", hsl(210.0, 40.0, 98.0)),
    ("border", hsl(214.3, 31.8, 91.4)),
    ("input", hsl(214.3, 31.8, 91.4)),
    ("ring", hsl(221.2, 83.2, 53.3)),
    ("sidebarBackground", hsl(210.0, 40.0, 96.1)),
    ("sidebarForeground", hsl(222.2, 47.4, 11.2)),
    ("sidebarPrimary", hsl(221.2, 83.2, 53.3)),
    ("sidebarPrimaryForeground", hsl(210.0, 40.0, 98.0)),
    ("sidebarAccent", hsl(214.3, 31.8, 91.4)),
    ("sidebarAccentForeground", hsl(222.2, 47.4, 11.2)),
    ("sidebarBorder", hsl(214.3, 31.8, 91.4)),
    ("sidebarRing", hsl(221.2, 83.2, 53.3)),
    ("chart1", hsl(221.2, 83.2, 53.3)),
    ("chart2", hsl(199.0, 89.0, 48.0)),
    ("chart3", hsl(262.0, 83.0, 58.0)),
    ("chart4", hsl(173.0, 80.0, 40.0)),
    ("chart5", hsl(43.0, 96.0, 56.0)),
];

const MIDNIGHT_DARK: &[(&str, HslColor)] = &[
    ("background", hsl(222.2, 84.0, 4.9)),
    ("foreground", hsl(210.0, 40.0, 98.0)),
    ("card", hsl(222.2, 84.0, 4.9)),
    ("cardForeground", hsl(210.0, 40.0, 98.0)),
    ("popover", hsl(222.2, 84.0, 4.9)),
    ("popoverForeground", hsl(210.0, 40.0, 98.0)),
    ("primary", hsl(217.2, 91.2, 59.8)),
    ("primaryForeground", hsl(222.2, 47.4, 11.2)),
    ("secondary", hsl(217.2, 32.6, 17.5)),
    ("secondaryForeground", hsl(210.0, 40.0, 98.0)),
    ("muted", hsl(217.2, 32.6, 17.5)),
    ("mutedForeground", hsl(215.0, 20.2, 65.1)),
    ("accent", hsl(217.2, 32.6, 17.5)),
    ("accentForeground", hsl(210.0, 40.0, 98.0)),
    ("destructive", hsl(0.0, 62.8, 30.6)),
    ("destructiveForeground", hsl(210.0, 40.0, 98.0)),
    ("border", hsl(217.2, 32.6, 17.5)),
    ("input", hsl(217.2, 32.6, 17.5)),
    ("ring", hsl(224.3, 76.3, 48.0)),
    ("sidebarBackground", hsl(222.2, 84.0, 4.9)),
    ("sidebarForeground", hsl(210.0, 40.0, 96.1)),
    ("sidebarPrimary", hsl(217.2, 91.2, 59.8)),
    ("sidebarPrimaryForeground", hsl(222.2, 47.4, 11.2)),
    ("sidebarAccent", hsl(217.2, 32.6, 17.5)),
    ("sidebarAccentForeground", hsl(210.0, 40.0, 98.0)),
    ("sidebarBorder", hsl(217.2, 32.6, 17.5)),
    ("sidebarRing", hsl(224.3, 76.3, 48.0)),
    ("chart1", hsl(217.2, 91.2, 59.8)),
    ("chart2", hsl(199.0, 89.0, 58.0)),
    ("chart3", hsl(262.0, 83.0, 68.0)),
    ("chart4", hsl(173.0, 70.0, 50.0)),
    ("chart5", hsl(43.0, 96.0, 60.0)),
];

fn typography() -> Typography {
    Typography {
        sans: Some("Inter, ui-sans-serif, system-ui, sans-serif".into()),
        serif: Some("ui-serif, Georgia, serif".into()),
        mono: Some("\"JetBrains Mono\", ui-monospace, monospace".into()),
        letter_spacing: Some(0.0),
    }
}

fn mode(colors: &[(&str, HslColor)], shadow_opacity: f64) -> ThemeMode {
    ThemeMode::from_colors(colors.iter().copied())
        .typography(typography())
        .spacing(Spacing::default())
        .shadow(Shadow {
            opacity: shadow_opacity,
            ..Shadow::default()
        })
}

/// Neutral gray theme.
pub fn canvas() -> ThemeDefinition {
    ThemeDefinition::new("canvas", "Canvas")
        .description("Neutral zinc surfaces with high-contrast text")
        .author("Tincture")
        .version("1.0.0")
        .light(mode(CANVAS_LIGHT, 0.1))
        .dark(mode(CANVAS_DARK, 0.4))
}

/// Blue-accented theme with a deep navy dark mode.
pub fn midnight() -> ThemeDefinition {
    ThemeDefinition::new("midnight", "Midnight")
        .description("Cool slate surfaces with a blue accent")
        .author("Tincture")
        .version("1.0.0")
        .light(mode(MIDNIGHT_LIGHT, 0.08))
        .dark(mode(MIDNIGHT_DARK, 0.5))
}

/// All built-in presets, in catalogue order.
pub fn builtin_presets() -> Vec<ThemeDefinition> {
    vec![canvas(), midnight()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::color_roles;

    #[test]
    fn builtins_cover_vocabulary_in_both_modes() {
        let roles = color_roles();
        for theme in builtin_presets() {
            for mode in [&theme.modes.light, &theme.modes.dark] {
                let mode = mode.as_ref().expect("built-in presets define both modes");
                let keys: Vec<_> = mode.colors.keys().cloned().collect();
                assert_eq!(keys, roles, "theme {}", theme.id);
                assert!(mode.colors.values().all(HslColor::is_valid));
            }
        }
    }

    #[test]
    fn builtin_ids_are_slugs() {
        for theme in builtin_presets() {
            assert!(theme.id.chars().all(|c| c.is_ascii_lowercase() || c == '-'));
        }
    }
}
