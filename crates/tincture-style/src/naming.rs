//! Conversion between structured field names and CSS custom-property names.
//!
//! Structured fields use word-boundary capitalization (`mutedForeground`),
//! custom properties use the hyphenated form (`muted-foreground`). The two
//! functions here are inverses over the role vocabulary in [`crate::roles`].

/// Render a capitalized-boundary name in hyphenated form.
///
/// A hyphen is inserted before every ASCII uppercase letter, which is then
/// lowercased. A leading capital is lowercased without a leading hyphen.
///
/// ```
/// use tincture_style::naming::kebab_case;
///
/// assert_eq!(kebab_case("mutedForeground"), "muted-foreground");
/// assert_eq!(kebab_case("sidebarPrimaryForeground"), "sidebar-primary-foreground");
/// assert_eq!(kebab_case("chart1"), "chart1");
/// ```
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Render a hyphenated name in capitalized-boundary form.
///
/// Every hyphen is removed; the character after it is uppercased when it
/// is a lowercase ASCII letter.
///
/// ```
/// use tincture_style::naming::camel_case;
///
/// assert_eq!(camel_case("muted-foreground"), "mutedForeground");
/// assert_eq!(camel_case("primary"), "primary");
/// ```
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut boundary = false;
    for c in name.chars() {
        if c == '-' {
            boundary = true;
            continue;
        }
        if boundary && c.is_ascii_lowercase() {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        boundary = false;
    }
    out
}

/// Uppercase the first character of `name`.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Exported identifier for a generated preset, from its file stem.
pub fn export_identifier(file_stem: &str) -> String {
    camel_case(file_stem)
}

/// Human readable name for an exported identifier (`midnightBlue` becomes
/// `midnight Blue`).
pub fn display_name(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len() + 4);
    for c in identifier.chars() {
        if c.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles;

    #[test]
    fn kebab_inserts_hyphen_per_capital() {
        assert_eq!(kebab_case("primary"), "primary");
        assert_eq!(kebab_case("cardForeground"), "card-foreground");
        assert_eq!(kebab_case("sidebarAccentForeground"), "sidebar-accent-foreground");
    }

    #[test]
    fn kebab_leading_capital_is_not_hyphenated() {
        assert_eq!(kebab_case("Primary"), "primary");
        assert_eq!(kebab_case("MidnightBlue"), "midnight-blue");
    }

    #[test]
    fn camel_removes_hyphens() {
        assert_eq!(camel_case("card-foreground"), "cardForeground");
        assert_eq!(camel_case("midnight-blue"), "midnightBlue");
        assert_eq!(camel_case("theme-2"), "theme2");
    }

    #[test]
    fn casing_is_stable_over_vocabulary() {
        for role in roles::color_roles() {
            let kebab = kebab_case(&role);
            assert_eq!(kebab_case(&camel_case(&kebab)), kebab, "role {role}");
            assert_eq!(camel_case(&kebab), role, "role {role}");
        }
        for role in roles::BASE_COLOR_ROLES {
            assert_eq!(kebab_case(&camel_case(role)), *role);
        }
    }

    #[test]
    fn identifiers_and_display_names() {
        assert_eq!(export_identifier("midnight-blue"), "midnightBlue");
        assert_eq!(kebab_case(&export_identifier("midnight-blue")), "midnight-blue");
        assert_eq!(display_name("midnightBlue"), "midnight Blue");
        assert_eq!(capitalize("background"), "Background");
        assert_eq!(capitalize(""), "");
    }
}
