//! Extraction of custom-property declarations from CSS blocks.
//!
//! Blocks are matched textually: the content between the first `{` after
//! the selector and the next `}`. Nested braces are not supported.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"--([\w-]+):\s*([^;]+);").expect("declaration pattern is valid")
});

/// Custom properties of one block, name (without `--`) to raw value.
pub type Declarations = IndexMap<String, String>;

/// Extract the custom properties declared in the first block opened by
/// `selector`.
///
/// Later declarations of the same name override earlier ones. A missing
/// block yields an empty map.
pub fn extract_block(css: &str, selector: &str) -> Declarations {
    match block_body(css, selector) {
        Some(body) => parse_declarations(body),
        None => {
            tracing::debug!(selector, "block not found");
            Declarations::new()
        }
    }
}

/// Body of the first non-empty block opened by `selector`: the text after
/// the `{` that follows it (whitespace allowed) up to the next `}`.
fn block_body<'a>(css: &'a str, selector: &str) -> Option<&'a str> {
    if selector.is_empty() {
        return None;
    }

    css.match_indices(selector).find_map(|(start, _)| {
        let body = css[start + selector.len()..].trim_start().strip_prefix('{')?;
        let end = body.find('}')?;
        (end > 0).then(|| &body[..end])
    })
}

/// Collect every `--name: value;` declaration in a block body.
pub fn parse_declarations(body: &str) -> Declarations {
    DECLARATION
        .captures_iter(body)
        .map(|caps| (caps[1].to_string(), caps[2].trim().to_string()))
        .fold(Declarations::new(), |mut decls, (name, value)| {
            decls.insert(name, value);
            decls
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_root_block() {
        let css = ":root {\n  --primary: hsl(220 90% 56%);\n  --radius: 0.5rem;\n}";
        let decls = extract_block(css, ":root");
        assert_eq!(decls.len(), 2);
        assert_eq!(decls["primary"], "hsl(220 90% 56%)");
        assert_eq!(decls["radius"], "0.5rem");
    }

    #[test]
    fn missing_block_is_empty() {
        let css = ".dark { --primary: hsl(1 2% 3%); }";
        assert!(extract_block(css, ":root").is_empty());
        assert_eq!(extract_block(css, ".dark").len(), 1);
    }

    #[test]
    fn last_declaration_wins() {
        let decls = parse_declarations("--ring: hsl(1 1% 1%); --ring: hsl(2 2% 2%);");
        assert_eq!(decls.len(), 1);
        assert_eq!(decls["ring"], "hsl(2 2% 2%)");
    }

    #[test]
    fn plain_properties_are_ignored() {
        let decls = parse_declarations("color: red; --font-sans: Inter, sans-serif;");
        assert_eq!(decls.len(), 1);
        assert_eq!(decls["font-sans"], "Inter, sans-serif");
    }

    #[test]
    fn block_stops_at_first_closing_brace() {
        let css = ":root { --a: 1; } .other { --b: 2; }";
        let decls = extract_block(css, ":root");
        assert!(decls.contains_key("a"));
        assert!(!decls.contains_key("b"));
    }

    #[test]
    fn selector_without_brace_is_skipped() {
        let css = "/* .dark overrides below */\n.dark{--ring: hsl(1 2% 3%);}";
        assert_eq!(extract_block(css, ".dark")["ring"], "hsl(1 2% 3%)");
        assert!(extract_block(":root {}", ":root").is_empty());
        assert!(extract_block(":root { --a: 1; }", "").is_empty());
    }

    #[test]
    fn selector_metacharacters_are_literal() {
        let css = "[data-theme=\"a+b\"] { --x: 1; } [data-theme=\"aab\"] { --y: 2; }";
        let decls = extract_block(css, "[data-theme=\"a+b\"]");
        assert_eq!(decls.len(), 1);
        assert_eq!(decls["x"], "1");
    }

    #[test]
    fn attribute_selector_is_escaped() {
        let css = "[data-theme=\"midnight\"] {\n  --color-primary: 200 50% 50%;\n}\n\n[data-theme=\"midnight\"].dark {\n  --color-primary: 200 40% 20%;\n}\n";
        let light = extract_block(css, "[data-theme=\"midnight\"]");
        assert_eq!(light["color-primary"], "200 50% 50%");
        let dark = extract_block(css, ".dark");
        assert_eq!(dark["color-primary"], "200 40% 20%");
    }
}
