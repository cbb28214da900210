//! Design-token theme converters for Tincture.
//!
//! This crate converts between structured theme definitions and CSS
//! custom-property stylesheets:
//!
//! - **Serializer**: [`ThemeDefinition`](theme::ThemeDefinition)s rendered as
//!   `[data-theme="<id>"]` blocks of `--color-*` properties
//! - **Parser**: `:root` / `.dark` blocks of a stylesheet read back into a
//!   structured, per-mode token record
//! - **Ingest**: a parsed stylesheet written out as a preset source file
//! - **Bundler**: generated fragments stitched into one stylesheet by
//!   inlining `@import` directives
//! - **Theme layer**: ingest stylesheets mapped onto the normalized
//!   `--theme-*` vocabulary
//!
//! # Example
//!
//! ```
//! use tincture_style::prelude::*;
//!
//! let theme = ThemeDefinition::new("midnight", "Midnight")
//!     .description("Deep blue night")
//!     .light(ThemeMode::new().color("primary", HslColor::new(200.0, 50.0, 50.0)));
//!
//! let css = serialize_themes(&[theme], &SerializeOptions::default());
//! assert!(css.contains("[data-theme=\"midnight\"] {\n  --color-primary: 200 50% 50%;"));
//!
//! let parsed = parse_css(":root { --primary: hsl(200 50% 50%); }")?;
//! assert_eq!(parsed.light.colors["primary"], HslColor::new(200.0, 50.0, 50.0));
//! # Ok::<(), tincture_style::Error>(())
//! ```

pub mod bundle;
pub mod color;
pub mod files;
pub mod ingest;
pub mod naming;
pub mod normalize;
pub mod parser;
pub mod presets;
pub mod roles;
pub mod serialize;
pub mod source;
pub mod theme;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::bundle::{BundleLayout, BundleReport, bundle, inline_imports, render_entry};
    pub use crate::color::{HslColor, parse_hsl};
    pub use crate::ingest::ingest_file;
    pub use crate::naming::{camel_case, kebab_case};
    pub use crate::parser::{BlockSelectors, ParsedMode, ParsedTheme, parse_css, parse_theme_css};
    pub use crate::presets::PresetCatalog;
    pub use crate::serialize::{SerializeOptions, serialize_themes};
    pub use crate::source::PresetSource;
    pub use crate::theme::{Shadow, Spacing, ThemeDefinition, ThemeMode, ThemeModes, Typography};
    pub use crate::{Error, Result};
}
