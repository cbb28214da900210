//! Integration tests: serializing themes and reading the CSS back.

use tincture_style::naming::{camel_case, kebab_case};
use tincture_style::parser::{BlockSelectors, parse_theme_css};
use tincture_style::prelude::*;
use tincture_style::presets::builtin_presets;
use tincture_style::roles;

#[test]
fn builtin_presets_survive_serialize_then_parse() {
    let themes = builtin_presets();
    let css = serialize_themes(&themes, &SerializeOptions::default());

    for theme in &themes {
        let parsed = parse_theme_css(&css, &BlockSelectors::for_theme(&theme.id)).unwrap();
        let light = theme.modes.light.as_ref().unwrap();
        let dark = theme.modes.dark.as_ref().unwrap();

        assert_eq!(parsed.light.color_roles(), light.colors, "light {}", theme.id);
        assert_eq!(parsed.dark.color_roles(), dark.colors, "dark {}", theme.id);
    }
}

#[test]
fn strict_output_reads_back_too() {
    let themes = builtin_presets();
    let css = serialize_themes(&themes, &SerializeOptions::strict());
    assert!(css.lines().filter(|l| l.contains("--color-")).all(|l| l.ends_with(" !important;")));

    let parsed = parse_theme_css(&css, &BlockSelectors::for_theme("midnight")).unwrap();
    assert_eq!(parsed.dark.color_roles(), themes[1].modes.dark.as_ref().unwrap().colors);
}

#[test]
fn full_mode_survives_with_design_tokens() {
    let theme = tincture_style::presets::canvas();
    let options = SerializeOptions::default().with_design_tokens(true);
    let css = serialize_themes(std::slice::from_ref(&theme), &options);

    assert!(css.contains("  --radius: 0.5;"));
    assert!(css.contains("  --shadow-color: hsl(0 0% 0%);"));

    let parsed = parse_theme_css(&css, &BlockSelectors::for_theme("canvas")).unwrap();
    assert_eq!(Some(parsed.light.into_theme_mode()), theme.modes.light);
    assert_eq!(Some(parsed.dark.into_theme_mode()), theme.modes.dark);
}

#[test]
fn strict_design_tokens_survive_including_fonts() {
    let theme = tincture_style::presets::canvas();
    let options = SerializeOptions::strict().with_design_tokens(true);
    let css = serialize_themes(std::slice::from_ref(&theme), &options);
    assert!(css.contains("  --font-sans: ") && css.contains(" !important;"));

    let parsed = parse_theme_css(&css, &BlockSelectors::for_theme("canvas")).unwrap();
    let light = parsed.light.into_theme_mode();
    assert!(!light.typography.sans.as_deref().unwrap_or_default().contains("!important"));
    assert_eq!(Some(light), theme.modes.light);
    assert_eq!(Some(parsed.dark.into_theme_mode()), theme.modes.dark);
}

#[test]
fn vocabulary_is_in_lockstep() {
    // Every role the serializer can emit is classified back to the same key.
    for role in roles::color_roles() {
        let name = format!("color-{}", kebab_case(&role));
        let css = format!(":root {{ --{name}: 1 2% 3%; }}");
        let parsed = parse_css(&css).unwrap();
        let roles = parsed.light.color_roles();
        assert_eq!(roles.len(), 1, "{name}");
        assert!(roles.contains_key(&role), "{name} -> {roles:?}");
        assert_eq!(kebab_case(&camel_case(&kebab_case(&role))), kebab_case(&role));
    }
}

#[test]
fn serialized_scenario_lines() {
    let theme = ThemeDefinition::new("midnight", "Midnight")
        .light(ThemeMode::new().color("primary", HslColor::new(200.0, 50.0, 50.0)));
    let css = serialize_themes(&[theme], &SerializeOptions::default());

    let lines: Vec<_> = css.lines().collect();
    let at = lines
        .iter()
        .position(|l| *l == "[data-theme=\"midnight\"] {")
        .expect("light block header");
    assert_eq!(lines[at + 1], "  --color-primary: 200 50% 50%;");
}

#[test]
fn parsed_scenario_shape() {
    let css = ":root { --primary: hsl(220 90% 56%); --sidebar-background: hsl(0 0% 98%); --chart-1: hsl(12 76% 61%); --radius: 0.5; }";
    let light = parse_css(css).unwrap().light;

    let mut expected = ParsedMode::default();
    expected.colors.insert("primary".into(), HslColor::new(220.0, 90.0, 56.0));
    expected
        .contextual
        .sidebar
        .insert("background".into(), HslColor::new(0.0, 0.0, 98.0));
    expected.charts.insert("chart1".into(), HslColor::new(12.0, 76.0, 61.0));
    expected.radius.base = Some(0.5);

    assert_eq!(light, expected);
}
