// File: crates/barchart-core/src/types.rs
// Summary: Shared types and constants (default sizes, margins, font description).

use serde::Deserialize;

/// Default surface width in pixels.
pub const WIDTH: f64 = 600.0;
/// Default surface height in pixels.
pub const HEIGHT: f64 = 450.0;

/// Axis margins in pixels, symmetric per axis.
/// Contract: both fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    /// Left and right margin.
    pub horizontal: f64,
    /// Top and bottom margin.
    pub vertical: f64,
}

impl Margins {
    pub const fn new(horizontal: f64, vertical: f64) -> Self {
        Self { horizontal, vertical }
    }
    /// Total horizontal margin (left + right).
    pub fn hsum(&self) -> f64 { 2.0 * self.horizontal }
    /// Total vertical margin (top + bottom).
    pub fn vsum(&self) -> f64 { 2.0 * self.vertical }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSlant {
    #[default]
    Normal,
    Italic,
}

/// Font used for one text draw call.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: f64,
    pub weight: u16,
    pub slant: FontSlant,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self { family: family.into(), size, weight: 400, slant: FontSlant::Normal }
    }

    /// CSS-style shorthand, e.g. `normal 300 13.5px times`.
    pub fn css(&self) -> String {
        let slant = match self.slant {
            FontSlant::Normal => "normal",
            FontSlant::Italic => "italic",
        };
        format!("{slant} {} {}px {}", self.weight, self.size, self.family)
    }
}
