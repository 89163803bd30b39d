// File: crates/barchart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; positions labels by alignment and baseline.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::surface::{TextAlign, TextBaseline};
use crate::types::{FontSlant, FontSpec};

/// Tried after the requested family when it is not installed.
const FALLBACK_FAMILIES: [&str; 6] = ["Times New Roman", "Liberation Serif", "DejaVu Serif", "Arial", "DejaVu Sans", "serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(font: &FontSpec, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size((font.size as f32).max(1.0));
        ts.set_color(color);
        let slant = match font.slant {
            FontSlant::Normal => skia::font_style::Slant::Upright,
            FontSlant::Italic => skia::font_style::Slant::Italic,
        };
        ts.set_font_style(skia::FontStyle::new(
            skia::font_style::Weight::from(i32::from(font.weight)),
            skia::font_style::Width::NORMAL,
            slant,
        ));
        let mut families = vec![font.family.as_str()];
        families.extend(FALLBACK_FAMILIES);
        ts.set_font_families(families.as_slice());
        ts
    }

    pub fn layout(&self, text: &str, font: &FontSpec, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(font, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, font: &FontSpec) -> f32 {
        let p = self.layout(text, font, skia::Color::from_argb(0, 0, 0, 0));
        // width of the longest line
        p.longest_line()
    }

    /// Draw `text` anchored at `(x, y)` according to `align` and `baseline`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        align: TextAlign,
        baseline: TextBaseline,
        font: &FontSpec,
        color: skia::Color,
    ) {
        let p = self.layout(text, font, color);
        let w = p.longest_line();
        let left = match align {
            TextAlign::Start => x,
            TextAlign::Center => x - w * 0.5,
            TextAlign::End => x - w,
        };
        // Paragraph paints from its top-left corner
        let top = match baseline {
            TextBaseline::Top => y,
            TextBaseline::Alphabetic => y - p.alphabetic_baseline(),
        };
        p.paint(canvas, (left, top));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
