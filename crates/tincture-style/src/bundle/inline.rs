//! Recursive inlining of `@import` directives.

use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::{Error, Result};

static IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@import\s+["']([^"']+)["'];"#).expect("import pattern is valid")
});

/// Read `file` and replace every `@import` whose target exists with the
/// target's inlined contents, preceded by a `/* Bundled: <path> */` marker.
///
/// Targets resolve relative to the importing file. Imports that do not
/// resolve to a file are left untouched.
pub fn inline_imports(file: &Path) -> Result<String> {
    let mut stack = Vec::new();
    inline_file(&normalize(file), &mut stack)
}

fn inline_file(file: &Path, stack: &mut Vec<PathBuf>) -> Result<String> {
    if stack.iter().any(|open| open == file) {
        return Err(Error::import_cycle(file));
    }

    let content = std::fs::read_to_string(file).map_err(|e| Error::io(file, e))?;
    let dir = file.parent().unwrap_or_else(|| Path::new(""));

    stack.push(file.to_path_buf());
    let mut out = String::with_capacity(content.len());
    let mut last = 0;
    for caps in IMPORT.captures_iter(&content) {
        let (Some(directive), Some(target)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        out.push_str(&content[last..directive.start()]);
        last = directive.end();

        let resolved = normalize(&dir.join(target.as_str()));
        if resolved.is_file() {
            tracing::debug!(import = target.as_str(), "inlining");
            out.push_str(&format!("/* Bundled: {} */\n", target.as_str()));
            out.push_str(&inline_file(&resolved, stack)?);
        } else {
            tracing::debug!(import = target.as_str(), "unresolved import kept");
            out.push_str(directive.as_str());
        }
    }
    out.push_str(&content[last..]);
    stack.pop();

    Ok(out)
}

/// Lexically resolve `.` and `..` components.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn inlines_nested_imports() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("ui")).unwrap();
        fs::write(root.join("entry.css"), "@import \"./ui/button.css\";\nbody {}\n").unwrap();
        fs::write(root.join("ui/button.css"), "@import '../base.css';\n.button {}\n").unwrap();
        fs::write(root.join("base.css"), ":root { --x: 1; }\n").unwrap();

        let out = inline_imports(&root.join("entry.css")).unwrap();
        assert_eq!(
            out,
            "/* Bundled: ./ui/button.css */\n/* Bundled: ../base.css */\n:root { --x: 1; }\n\n.button {}\n\nbody {}\n"
        );
    }

    #[test]
    fn unresolved_imports_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let entry = dir.path().join("entry.css");
        fs::write(&entry, "@import \"./missing.css\";\n@import url(remote.css);\n").unwrap();

        let out = inline_imports(&entry).unwrap();
        assert_eq!(out, "@import \"./missing.css\";\n@import url(remote.css);\n");
    }

    #[test]
    fn cycles_are_errors() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.css"), "@import \"./b.css\";").unwrap();
        fs::write(dir.path().join("b.css"), "@import \"./a.css\";").unwrap();

        let err = inline_imports(&dir.path().join("a.css")).unwrap_err();
        assert!(matches!(err, Error::ImportCycle { .. }));
    }

    #[test]
    fn repeated_imports_are_not_cycles() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.css"), "@import \"./c.css\";\n@import \"./c.css\";\n").unwrap();
        fs::write(dir.path().join("c.css"), "c").unwrap();

        let out = inline_imports(&dir.path().join("a.css")).unwrap();
        assert_eq!(out.matches("/* Bundled: ./c.css */").count(), 2);
    }

    #[test]
    fn normalize_resolves_dots() {
        assert_eq!(normalize(Path::new("a/./b/../c.css")), PathBuf::from("a/c.css"));
        assert_eq!(normalize(Path::new("../../c.css")), PathBuf::from("../../c.css"));
    }
}
