//! The fixed color-role vocabulary shared by the serializer and the parser.
//!
//! The parser's inclusion list and the keys the serializer emits are the
//! same vocabulary; keep the lists here in lockstep with
//! [`crate::parser::classify`].

use crate::naming::camel_case;

/// Base color roles, in hyphenated form.
pub const BASE_COLOR_ROLES: &[&str] = &[
    "background",
    "foreground",
    "card",
    "card-foreground",
    "popover",
    "popover-foreground",
    "primary",
    "primary-foreground",
    "secondary",
    "secondary-foreground",
    "muted",
    "muted-foreground",
    "accent",
    "accent-foreground",
    "destructive",
    "destructive-foreground",
    "border",
    "input",
    "ring",
];

/// Sidebar sub-roles, in hyphenated form. Stored as `sidebar<Sub>`.
pub const SIDEBAR_ROLES: &[&str] = &[
    "background",
    "foreground",
    "primary",
    "primary-foreground",
    "accent",
    "accent-foreground",
    "border",
    "ring",
];

/// Chart series roles.
pub const CHART_ROLES: &[&str] = &["chart1", "chart2", "chart3", "chart4", "chart5"];

/// Numeric shadow components read from `--shadow-<component>`.
pub const SHADOW_COMPONENTS: &[&str] = &["x", "y", "blur", "spread", "opacity"];

/// Prefix shared by sidebar roles.
pub const SIDEBAR_PREFIX: &str = "sidebar";

/// Returns true if `name` is one of the hyphenated base roles.
pub fn is_base_role(name: &str) -> bool {
    BASE_COLOR_ROLES.contains(&name)
}

/// Structured key for a sidebar sub-role (`primary-foreground` becomes
/// `sidebarPrimaryForeground`).
pub fn sidebar_key(sub_role: &str) -> String {
    camel_case(&format!("{SIDEBAR_PREFIX}-{sub_role}"))
}

/// The complete color vocabulary in capitalized-boundary form: base roles,
/// then sidebar roles, then chart roles.
pub fn color_roles() -> Vec<String> {
    BASE_COLOR_ROLES
        .iter()
        .map(|role| camel_case(role))
        .chain(SIDEBAR_ROLES.iter().map(|sub| sidebar_key(sub)))
        .chain(CHART_ROLES.iter().map(|chart| chart.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_size() {
        assert_eq!(BASE_COLOR_ROLES.len(), 19);
        assert_eq!(color_roles().len(), 32);
    }

    #[test]
    fn sidebar_keys() {
        assert_eq!(sidebar_key("background"), "sidebarBackground");
        assert_eq!(sidebar_key("accent-foreground"), "sidebarAccentForeground");
    }

    #[test]
    fn vocabulary_has_no_duplicates() {
        let roles = color_roles();
        let unique: std::collections::HashSet<_> = roles.iter().collect();
        assert_eq!(unique.len(), roles.len());
    }
}
