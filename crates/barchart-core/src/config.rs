// File: crates/barchart-core/src/config.rs
// Summary: Config resolver; merges surface geometry and optional style overrides into an immutable ChartConfig.

use serde::Deserialize;

use crate::color::Rgba;
use crate::error::{ChartError, ChartResult};
use crate::types::{FontSlant, FontSpec, Margins};

/// Percentage of each surface dimension reserved for the axis margin.
pub const DEFAULT_MARGIN_RATIO: f64 = 10.0;
/// Percentage of each surface dimension used as the label font size.
pub const DEFAULT_FONT_RATIO: f64 = 3.0;
/// Ratios at or above this percentage leave no drawable area.
pub const MAX_RATIO: f64 = 50.0;

/// Stroke and text styling shared by every draw stage.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub axis_color: Rgba,
    pub axis_width: f64,
    pub guideline_color: Rgba,
    pub guideline_width: f64,
    pub font_color: Rgba,
    pub font_family: String,
    pub font_weight: u16,
    pub font_slant: FontSlant,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            axis_color: Rgba::rgb(0xb1, 0xb1, 0xb1),
            axis_width: 0.75,
            guideline_color: Rgba::rgb(0xe5, 0xe5, 0xe5),
            guideline_width: 0.5,
            font_color: Rgba::rgb(0x66, 0x66, 0x66),
            font_family: "times".to_string(),
            font_weight: 300,
            font_slant: FontSlant::Normal,
        }
    }
}

/// Optional named overrides; every absent field falls back to its default.
///
/// Deserializes from camelCase JSON, e.g.
/// `{ "axisColor": "#333333", "marginRatio": 12 }`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ChartOverrides {
    pub axis_color: Option<Rgba>,
    pub axis_width: Option<f64>,
    pub guideline_color: Option<Rgba>,
    pub guideline_width: Option<f64>,
    pub font_color: Option<Rgba>,
    pub font_family: Option<String>,
    pub font_weight: Option<u16>,
    pub font_slant: Option<FontSlant>,
    pub margin_ratio: Option<f64>,
    pub font_ratio: Option<f64>,
}

/// Resolved, immutable chart configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    /// Margin as a percentage of each dimension; also the inset divisor for labels and bars.
    pub margin_ratio: f64,
    pub font_ratio: f64,
    pub margins: Margins,
    /// Font size of value-axis labels (scaled by height).
    pub vertical_font_size: f64,
    /// Font size of category labels (scaled by width).
    pub horizontal_font_size: f64,
    pub style: Style,
}

impl ChartConfig {
    /// Resolve the configuration for a `width` x `height` surface.
    ///
    /// A margin ratio of 50 or more passes here and is rejected by the layout engine,
    /// which is where the plot area actually collapses.
    pub fn resolve(width: f64, height: f64, overrides: &ChartOverrides) -> ChartResult<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidDimension { width, height });
        }

        let margin_ratio = overrides.margin_ratio.unwrap_or(DEFAULT_MARGIN_RATIO);
        if !margin_ratio.is_finite() || margin_ratio <= 0.0 {
            return Err(ChartError::InvalidRatio { name: "marginRatio", value: margin_ratio });
        }
        let font_ratio = overrides.font_ratio.unwrap_or(DEFAULT_FONT_RATIO);
        if !font_ratio.is_finite() || font_ratio <= 0.0 || font_ratio >= MAX_RATIO {
            return Err(ChartError::InvalidRatio { name: "fontRatio", value: font_ratio });
        }

        let defaults = Style::default();
        let style = Style {
            axis_color: overrides.axis_color.unwrap_or(defaults.axis_color),
            axis_width: stroke_width("axisWidth", overrides.axis_width, defaults.axis_width)?,
            guideline_color: overrides.guideline_color.unwrap_or(defaults.guideline_color),
            guideline_width: stroke_width(
                "guidelineWidth",
                overrides.guideline_width,
                defaults.guideline_width,
            )?,
            font_color: overrides.font_color.unwrap_or(defaults.font_color),
            font_family: match overrides.font_family.as_deref().map(str::trim) {
                Some("") => {
                    return Err(ChartError::InvalidStyle {
                        name: "fontFamily",
                        reason: "must not be empty".to_string(),
                    })
                }
                Some(family) => family.to_string(),
                None => defaults.font_family,
            },
            font_weight: match overrides.font_weight {
                Some(w) if !(1..=1000).contains(&w) => {
                    return Err(ChartError::InvalidStyle {
                        name: "fontWeight",
                        reason: format!("must be between 1 and 1000, got {w}"),
                    })
                }
                Some(w) => w,
                None => defaults.font_weight,
            },
            font_slant: overrides.font_slant.unwrap_or(defaults.font_slant),
        };

        Ok(Self {
            width,
            height,
            margin_ratio,
            font_ratio,
            margins: Margins::new(width * margin_ratio / 100.0, height * margin_ratio / 100.0),
            vertical_font_size: height * font_ratio / 100.0,
            horizontal_font_size: width * font_ratio / 100.0,
            style,
        })
    }

    /// Font for value-axis tick labels.
    pub fn value_label_font(&self) -> FontSpec {
        self.font(self.vertical_font_size)
    }

    /// Font for category labels.
    pub fn category_label_font(&self) -> FontSpec {
        self.font(self.horizontal_font_size)
    }

    fn font(&self, size: f64) -> FontSpec {
        FontSpec {
            family: self.style.font_family.clone(),
            size,
            weight: self.style.font_weight,
            slant: self.style.font_slant,
        }
    }
}

fn stroke_width(name: &'static str, value: Option<f64>, default: f64) -> ChartResult<f64> {
    match value {
        None => Ok(default),
        Some(w) if w.is_finite() && w >= 0.0 => Ok(w),
        Some(w) => Err(ChartError::InvalidStyle {
            name,
            reason: format!("stroke width must be a finite, non-negative number, got {w}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_margins_and_fonts() {
        let cfg = ChartConfig::resolve(600.0, 450.0, &ChartOverrides::default()).unwrap();
        assert_eq!(cfg.margins, Margins::new(60.0, 45.0));
        assert!((cfg.vertical_font_size - 13.5).abs() < 1e-12);
        assert!((cfg.horizontal_font_size - 18.0).abs() < 1e-12);
        assert_eq!(cfg.style, Style::default());
        assert_eq!(cfg.value_label_font().css(), "normal 300 13.5px times");
    }

    #[test]
    fn overrides_replace_only_named_fields() {
        let overrides = ChartOverrides {
            axis_color: Some(Rgba::rgb(0, 0, 0)),
            margin_ratio: Some(20.0),
            font_family: Some("Arial".into()),
            ..ChartOverrides::default()
        };
        let cfg = ChartConfig::resolve(100.0, 200.0, &overrides).unwrap();
        assert_eq!(cfg.style.axis_color, Rgba::rgb(0, 0, 0));
        assert_eq!(cfg.style.font_family, "Arial");
        assert_eq!(cfg.style.guideline_color, Style::default().guideline_color);
        assert_eq!(cfg.margins, Margins::new(20.0, 40.0));
    }

    #[test]
    fn rejects_bad_dimensions() {
        for (w, h) in [(0.0, 10.0), (10.0, 0.0), (-1.0, 10.0), (f64::NAN, 10.0)] {
            let err = ChartConfig::resolve(w, h, &ChartOverrides::default()).unwrap_err();
            assert!(matches!(err, ChartError::InvalidDimension { .. }), "{w}x{h}: {err}");
        }
    }

    #[test]
    fn rejects_bad_ratios_and_widths() {
        let bad_margin = ChartOverrides { margin_ratio: Some(0.0), ..Default::default() };
        assert!(matches!(
            ChartConfig::resolve(10.0, 10.0, &bad_margin),
            Err(ChartError::InvalidRatio { name: "marginRatio", .. })
        ));
        let bad_font = ChartOverrides { font_ratio: Some(50.0), ..Default::default() };
        assert!(matches!(
            ChartConfig::resolve(10.0, 10.0, &bad_font),
            Err(ChartError::InvalidRatio { name: "fontRatio", .. })
        ));
        let bad_width = ChartOverrides { axis_width: Some(-1.0), ..Default::default() };
        assert!(matches!(
            ChartConfig::resolve(10.0, 10.0, &bad_width),
            Err(ChartError::InvalidStyle { name: "axisWidth", .. })
        ));
        let blank_font = ChartOverrides { font_family: Some("  ".into()), ..Default::default() };
        assert!(matches!(
            ChartConfig::resolve(10.0, 10.0, &blank_font),
            Err(ChartError::InvalidStyle { name: "fontFamily", .. })
        ));
    }

    #[test]
    fn font_weight_and_slant_reach_label_fonts() {
        let o = ChartOverrides {
            font_weight: Some(700),
            font_slant: Some(FontSlant::Italic),
            ..Default::default()
        };
        let cfg = ChartConfig::resolve(600.0, 450.0, &o).unwrap();
        assert_eq!(cfg.value_label_font().css(), "italic 700 13.5px times");
        assert_eq!(cfg.category_label_font().slant, FontSlant::Italic);

        let heavy = ChartOverrides { font_weight: Some(1001), ..Default::default() };
        assert!(matches!(
            ChartConfig::resolve(10.0, 10.0, &heavy),
            Err(ChartError::InvalidStyle { name: "fontWeight", .. })
        ));
    }

    #[test]
    fn wide_margin_ratio_is_left_to_layout() {
        let o = ChartOverrides { margin_ratio: Some(50.0), ..Default::default() };
        assert!(ChartConfig::resolve(10.0, 10.0, &o).is_ok());
    }
}
