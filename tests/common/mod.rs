#![allow(dead_code)]

use std::collections::HashMap;
use text_render::layout::{LayoutContext, TextStyle};
use text_render::{
    DefaultClassifier, GlyphStyle, Metrics, NoHyphenation, Px, RenderImage, WidthCache,
};

pub const ADVANCE: u32 = 10;
pub const LINE_HEIGHT: u32 = 12;

/// Fixed advance metrics: every character is 10px wide unless overridden,
/// and lines rasterize as solid blocks of the glyph colour, grown on every
/// side by the stroke width
#[derive(Debug, Default)]
pub struct MonoMetrics {
    overrides: HashMap<char, u32>,
}

impl MonoMetrics {
    pub fn new() -> MonoMetrics {
        MonoMetrics::default()
    }

    pub fn with_advance(mut self, ch: char, advance: u32) -> MonoMetrics {
        self.overrides.insert(ch, advance);
        self
    }

    fn advance(&self, ch: char) -> u32 {
        self.overrides.get(&ch).copied().unwrap_or(ADVANCE)
    }
}

impl Metrics for MonoMetrics {
    type Font = ();

    fn measure(&self, _font: (), _size: u32, text: &str) -> Px {
        Px(text.chars().map(|ch| self.advance(ch)).sum())
    }

    fn rasterize(&self, font: (), size: u32, text: &str, style: &GlyphStyle) -> RenderImage {
        let stroke = style.stroke_width.times(2);
        RenderImage::empty(
            self.measure(font, size, text) + stroke,
            Px(LINE_HEIGHT) + stroke,
            style.colour,
        )
    }
}

pub fn style() -> TextStyle<()> {
    TextStyle::new((), 12)
}

/// Break `text` with mono metrics and no hyphenation, returning each line
/// as drawn
pub fn wrap(text: &str, max_width: u32) -> Result<Vec<String>, text_render::LayoutError> {
    let metrics = MonoMetrics::new();
    let cache = WidthCache::new();
    let classifier = DefaultClassifier::default();
    let context = LayoutContext::new(&metrics, &cache, &classifier, &NoHyphenation);
    let style = style().with_max_width(Px(max_width)).with_hyphenation(false);
    let lines = text_render::layout::break_lines(text, &style, &context)?;
    Ok(lines.iter().map(|l| l.text(text).into_owned()).collect())
}

pub fn lorem(words: usize) -> String {
    lipsum::lipsum_words(words)
}
