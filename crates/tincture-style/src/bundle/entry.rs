//! The generated entry stylesheet: an ordered list of `@import` directives.

use std::path::Path;

use crate::{Error, Result};

/// First line of the entry stylesheet.
pub const ENTRY_HEADER: &str = "/* AUTO-GENERATED */\n";

/// Base token files imported when present, in order.
pub const BASE_TOKEN_FILES: &[&str] = &["globals", "core", "ui", "layout", "blocks"];

/// Directory holding generated fragments, relative to the styles root.
pub const GENERATED_DIR: &str = ".generated";

/// Filename prefix of generated token families.
pub const FAMILY_PREFIX: &str = "family-";

/// Render the entry stylesheet for the styles root `styles_dir`.
///
/// Sections are emitted in a fixed order: core, families, base tokens,
/// themes, variants, UI. Each section but the last ends with a blank line.
pub fn render_entry(styles_dir: &Path) -> Result<String> {
    let mut lines: Vec<String> = vec![ENTRY_HEADER.to_string()];

    lines.push("/* 1. CORE */".into());
    lines.push(format!("@import \"./{GENERATED_DIR}/core.css\";\n"));

    lines.push("/* 2. FAMILIES */".into());
    let families = list_files(&styles_dir.join(GENERATED_DIR))?
        .into_iter()
        .filter(|name| name.starts_with(FAMILY_PREFIX));
    lines.extend(families.map(|name| import(&format!("{GENERATED_DIR}/{name}"))));
    lines.push(String::new());

    lines.push("/* 3. BASE TOKENS */".into());
    for token in BASE_TOKEN_FILES {
        let rel = format!("tokens/base/{token}.css");
        if styles_dir.join(&rel).exists() {
            lines.push(import(&rel));
        }
    }
    lines.push(String::new());

    lines.push("/* 4. THEMES */".into());
    for mode in ["light", "dark"] {
        let rel = format!("themes/{mode}/ui.css");
        if styles_dir.join(&rel).exists() {
            lines.push(import(&rel));
        }
    }
    lines.push(String::new());

    lines.push("/* 5. VARIANTS */".into());
    lines.extend(list_files(&styles_dir.join("variants"))?.iter().map(|f| import(&format!("variants/{f}"))));
    lines.push(String::new());

    lines.push("/* 6. UI */".into());
    lines.extend(list_files(&styles_dir.join("ui"))?.iter().map(|f| import(&format!("ui/{f}"))));

    Ok(lines.join("\n"))
}

fn import(rel: &str) -> String {
    format!("@import \"./{rel}\";")
}

/// Sorted names of the regular files in `dir`; empty if it does not exist.
fn list_files(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map_err(|e| Error::io(dir, e))?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    Ok(names)
}
