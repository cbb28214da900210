//! HSL color values and their CSS text forms.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Matches `hsl(<h> <s>% <l>%)` or the bare triple `<h> <s>% <l>%`, with an
/// optional trailing `!important`.
static HSL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:hsl\(\s*([\d.]+)\s+([\d.]+)%\s+([\d.]+)%\s*\)|([\d.]+)\s+([\d.]+)%\s+([\d.]+)%)\s*(?:!important)?\s*$",
    )
    .expect("HSL pattern is valid")
});

/// A color in hue / saturation / lightness form.
///
/// `h` is in degrees (0-360), `s` and `l` are percentages (0-100). The
/// upper bounds are conventional and not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HslColor {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation percentage.
    pub s: f64,
    /// Lightness percentage.
    pub l: f64,
}

impl HslColor {
    /// Create a color from its components.
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White.
    pub const WHITE: Self = Self::new(0.0, 0.0, 100.0);

    /// Render as the space-separated triple used in custom properties,
    /// e.g. `220 90% 56%`. Numbers keep their natural decimal form.
    pub fn to_css_triple(&self) -> String {
        format!("{} {}% {}%", self.h, self.s, self.l)
    }

    /// Render as a CSS `hsl()` function, e.g. `hsl(220 90% 56%)`.
    pub fn to_css_function(&self) -> String {
        format!("hsl({})", self.to_css_triple())
    }

    /// Returns true if all components are non-negative finite numbers.
    pub fn is_valid(&self) -> bool {
        [self.h, self.s, self.l]
            .iter()
            .all(|c| c.is_finite() && *c >= 0.0)
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_triple())
    }
}

/// Parse an HSL value.
///
/// Accepts `hsl(<h> <s>% <l>%)` and the bare triple `<h> <s>% <l>%`. Any
/// other text is an [`Error::InvalidHsl`].
pub fn parse_hsl(value: &str) -> Result<HslColor> {
    let caps = HSL_PATTERN
        .captures(value)
        .ok_or_else(|| Error::invalid_hsl(value.trim()))?;

    let component = |fn_group: usize| -> Result<f64> {
        caps.get(fn_group)
            .or_else(|| caps.get(fn_group + 3))
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .ok_or_else(|| Error::invalid_hsl(value.trim()))
    };

    Ok(HslColor {
        h: component(1)?,
        s: component(2)?,
        l: component(3)?,
    })
}

impl std::str::FromStr for HslColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_hsl(s)
    }
}
