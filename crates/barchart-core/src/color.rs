// File: crates/barchart-core/src/color.rs
// Summary: RGBA colour value, hex parsing, and the colour providers used for bar fills.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ChartError;

/// Opacity applied to bar fills; the border stays opaque.
pub const BAR_FILL_OPACITY: f32 = 0.3;

/// 8-bit RGBA colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with opacity `alpha` in `[0, 1]`.
    pub fn with_opacity(self, alpha: f32) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }

    pub fn opaque(self) -> Self {
        Self { a: 255, ..self }
    }

    /// Parse `#rrggbb`, `#rrggbbaa` or the short `#rgb` form.
    pub fn from_hex(hex: &str) -> Result<Self, ChartError> {
        let bad = || ChartError::InvalidColor(hex.to_string());
        let h = hex.trim().trim_start_matches('#');
        if !h.is_ascii() {
            return Err(bad());
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| bad());
        match h.len() {
            3 => {
                let nibble = |i: usize| byte(&h[i..i + 1]).map(|v| v * 17);
                Ok(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 => Ok(Self::rgb(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..6])?)),
            8 => Ok(Self::rgba(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..6])?, byte(&h[6..8])?)),
            _ => Err(bad()),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Rgba {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Rgba {
    type Error = ChartError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

/// Source of bar colours. Colour carries no meaning; implementations may be random.
pub trait ColorProvider {
    /// Next opaque colour; the pipeline derives fill and border from it.
    fn next_color(&mut self) -> Rgba;
}

/// Non-reproducible colours from a small LCG.
#[derive(Clone, Debug)]
pub struct RandomColors {
    state: u64,
}

impl RandomColors {
    /// Seeded from the system clock.
    pub fn new() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::with_seed(nanos)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { state: seed }
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.state >> 32) as u32
    }
}

impl Default for RandomColors {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorProvider for RandomColors {
    fn next_color(&mut self) -> Rgba {
        let bits = self.next_u32();
        Rgba::rgb((bits >> 24) as u8, (bits >> 16) as u8, (bits >> 8) as u8)
    }
}

/// Cycles through a fixed palette. Deterministic; used by tests and snapshots.
#[derive(Clone, Debug)]
pub struct FixedColors {
    palette: Vec<Rgba>,
    next: usize,
}

impl FixedColors {
    /// An empty palette yields black.
    pub fn new(palette: Vec<Rgba>) -> Self {
        Self { palette, next: 0 }
    }
}

impl ColorProvider for FixedColors {
    fn next_color(&mut self) -> Rgba {
        if self.palette.is_empty() {
            return Rgba::rgb(0, 0, 0);
        }
        let c = self.palette[self.next % self.palette.len()];
        self.next = self.next.wrapping_add(1);
        c.opaque()
    }
}
