use crate::classify::{Classify, DefaultClassifier};
use crate::colour::{colours, Colour};
use crate::error::LayoutError;
use crate::hyphenate::{Dictionary, Hyphenator};
use crate::image::{Alignment, RenderImage};
use crate::layout::line::{Line, LineSplitter};
use crate::layout::word::WordSplitter;
use crate::metrics::{GlyphStyle, Measurer, Metrics, TextDecoration, WidthCache};
use crate::render::Render;
use crate::units::Px;
use std::borrow::Cow;
use std::ops::Range;

/// Everything about how a block of text is broken and drawn, apart from
/// the text itself
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle<F> {
    /// Font handle understood by the [Metrics] backend
    pub font: F,
    /// Font size in pixels, must be positive
    pub size: u32,
    /// Width budget for each line; `None` only breaks at hard line breaks
    pub max_width: Option<Px>,
    /// Horizontal placement of lines narrower than the block
    pub alignment: Alignment,
    /// Glyph colour; `None` picks black or white to contrast the background
    pub colour: Option<Colour>,
    /// Fills the block behind and around the lines
    pub background: Colour,
    /// Vertical gap between consecutive lines
    pub spacing: Px,
    /// Break words at the end of lines with a hyphen where the language allows
    pub hyphenation: bool,
    /// Language tag handed to the hyphenator, e.g. `en_US`
    pub language: String,
    pub decoration: TextDecoration,
    /// Thickness of decoration lines; `None` scales with the font size
    pub decoration_thickness: Option<Px>,
    /// Outline drawn around glyphs. Lines are broken so that the outlined
    /// text still fits `max_width`.
    pub stroke_width: Px,
    /// Outline colour; `None` uses the glyph colour
    pub stroke_colour: Option<Colour>,
}

impl<F> TextStyle<F> {
    pub fn new(font: F, size: u32) -> TextStyle<F> {
        TextStyle {
            font,
            size,
            max_width: None,
            alignment: Alignment::Start,
            colour: None,
            background: colours::TRANSPARENT,
            spacing: Px::ZERO,
            hyphenation: true,
            language: "en_US".to_string(),
            decoration: TextDecoration::NONE,
            decoration_thickness: None,
            stroke_width: Px::ZERO,
            stroke_colour: None,
        }
    }

    pub fn with_max_width(mut self, max_width: Px) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = Some(colour);
        self
    }

    pub fn with_background(mut self, background: Colour) -> Self {
        self.background = background;
        self
    }

    pub fn with_spacing(mut self, spacing: Px) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_hyphenation(mut self, hyphenation: bool) -> Self {
        self.hyphenation = hyphenation;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_decoration(mut self, decoration: TextDecoration) -> Self {
        self.decoration = decoration;
        self
    }

    pub fn with_decoration_thickness(mut self, thickness: Px) -> Self {
        self.decoration_thickness = Some(thickness);
        self
    }

    pub fn with_stroke(mut self, width: Px, colour: Option<Colour>) -> Self {
        self.stroke_width = width;
        self.stroke_colour = colour;
        self
    }

    /// Reject sizes and budgets that could never lay out any text
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.size == 0 {
            return Err(LayoutError::InvalidSize);
        }
        if self.max_width == Some(Px::ZERO) {
            return Err(LayoutError::InvalidMaxWidth);
        }
        Ok(())
    }

    /// How each line's glyphs are painted
    pub fn glyph_style(&self) -> GlyphStyle {
        let colour = self.colour.unwrap_or_else(|| self.background.contrasting());
        GlyphStyle {
            colour,
            decoration: self.decoration,
            decoration_thickness: self
                .decoration_thickness
                .unwrap_or(Px(u32::max(self.size / 10, 1))),
            stroke_width: self.stroke_width,
            stroke_colour: self.stroke_colour.unwrap_or(colour),
        }
    }
}

/// The collaborators a layout measures, classifies, and hyphenates with
pub struct LayoutContext<'a, M, C = DefaultClassifier, H = Dictionary>
where
    M: Metrics,
    C: Classify + ?Sized,
    H: Hyphenator + ?Sized,
{
    pub metrics: &'a M,
    pub cache: &'a WidthCache<M::Font>,
    pub classifier: &'a C,
    pub hyphenator: &'a H,
}

impl<'a, M, C, H> LayoutContext<'a, M, C, H>
where
    M: Metrics,
    C: Classify + ?Sized,
    H: Hyphenator + ?Sized,
{
    pub fn new(
        metrics: &'a M,
        cache: &'a WidthCache<M::Font>,
        classifier: &'a C,
        hyphenator: &'a H,
    ) -> Self {
        LayoutContext {
            metrics,
            cache,
            classifier,
            hyphenator,
        }
    }

    pub fn measurer(&self, font: M::Font, size: u32) -> Measurer<'a, M> {
        Measurer::new(self.metrics, self.cache, font, size)
    }
}

/// Byte ranges of the lines of `text` between hard line breaks: `\n`,
/// `\r\n`, `\r`, vertical tab, form feed, the file, group and record
/// separators (U+001C to U+001E), NEL (U+0085), U+2028 and U+2029. A
/// trailing break does not start another line, and empty text has no lines.
pub fn hard_lines(text: &str) -> Vec<Range<usize>> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, ch)) = chars.next() {
        match ch {
            '\n' | '\u{0B}' | '\u{0C}' | '\u{1C}' | '\u{1D}' | '\u{1E}' | '\u{85}' | '\u{2028}'
            | '\u{2029}' => {
                lines.push(start..i);
                start = i + ch.len_utf8();
            }
            '\r' => {
                lines.push(start..i);
                start = i + 1;
                if let Some(&(_, '\n')) = chars.peek() {
                    chars.next();
                    start += 1;
                }
            }
            _ => {}
        }
    }
    if start < text.len() {
        lines.push(start..text.len());
    }
    lines
}

/// Break `text` into lines: first at hard line breaks, then, if the style
/// has a width budget, wherever a line would grow wider than it. Line ranges
/// index into `text`. Blank physical lines are kept as empty lines.
pub fn break_lines<M, C, H>(
    text: &str,
    style: &TextStyle<M::Font>,
    context: &LayoutContext<M, C, H>,
) -> Result<Vec<Line>, LayoutError>
where
    M: Metrics,
    C: Classify + ?Sized,
    H: Hyphenator + ?Sized,
{
    style.validate()?;
    let measurer = context.measurer(style.font, style.size);

    let Some(max_width) = style.max_width else {
        return Ok(hard_lines(text)
            .into_iter()
            .map(|range| Line {
                width: measurer.width(&text[range.clone()]),
                range,
                hyphenated: false,
            })
            .collect());
    };

    // the outline adds its width on both sides of every line
    let budget = max_width.saturating_sub(style.stroke_width.times(2));
    let mut splitter = LineSplitter::new(measurer, context.classifier, budget);
    if style.hyphenation {
        splitter = splitter.with_hyphenation(WordSplitter::new(context.hyphenator, &style.language));
    }

    let mut lines = Vec::new();
    for range in hard_lines(text) {
        let split = splitter.split(&text[range.clone()])?;
        if split.is_empty() {
            lines.push(Line {
                range: range.start..range.start,
                hyphenated: false,
                width: Px::ZERO,
            });
        }
        lines.extend(split.into_iter().map(|line| line.shifted(range.start)));
    }
    Ok(lines)
}

/// A block of text broken into lines and rasterized line by line. Lines are
/// computed and drawn once, when the layout is created.
#[derive(Debug, Clone)]
pub struct TextLayout {
    text: String,
    lines: Vec<Line>,
    rendered: Vec<RenderImage>,
    alignment: Alignment,
    background: Colour,
    spacing: Px,
}

impl TextLayout {
    pub fn new<M, C, H>(
        text: &str,
        style: &TextStyle<M::Font>,
        context: &LayoutContext<M, C, H>,
    ) -> Result<TextLayout, LayoutError>
    where
        M: Metrics,
        C: Classify + ?Sized,
        H: Hyphenator + ?Sized,
    {
        let lines = break_lines(text, style, context)?;
        let glyphs = style.glyph_style();
        let rendered = lines
            .iter()
            .map(|line| {
                context
                    .metrics
                    .rasterize(style.font, style.size, &line.text(text), &glyphs)
            })
            .collect();
        log::debug!("laid out {} lines from {} bytes", lines.len(), text.len());

        Ok(TextLayout {
            text: text.to_string(),
            lines,
            rendered,
            alignment: style.alignment,
            background: style.background,
            spacing: style.spacing,
        })
    }

    /// The source text
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Each line's text as drawn, including inserted hyphens
    pub fn line_texts(&self) -> Vec<Cow<'_, str>> {
        self.lines.iter().map(|line| line.text(&self.text)).collect()
    }

    /// The rasterized lines, top to bottom
    pub fn line_images(&self) -> &[RenderImage] {
        &self.rendered
    }
}

impl Render for TextLayout {
    fn content_width(&self) -> Px {
        self.rendered
            .iter()
            .map(RenderImage::width)
            .max()
            .unwrap_or_default()
    }

    fn content_height(&self) -> Px {
        let gaps = self.spacing.times(self.rendered.len().saturating_sub(1));
        self.rendered.iter().map(RenderImage::height).sum::<Px>() + gaps
    }

    fn render(&self) -> RenderImage {
        RenderImage::concat_vertical(&self.rendered, self.alignment, self.background, self.spacing)
    }
}
