use crate::colour::Colour;
use crate::image::RenderImage;
use crate::units::Px;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::BitOr;

/// Lines drawn across rasterized text
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TextDecoration {
    pub underline: bool,
    pub overline: bool,
    pub line_through: bool,
}

impl TextDecoration {
    pub const NONE: TextDecoration = TextDecoration {
        underline: false,
        overline: false,
        line_through: false,
    };
    pub const UNDERLINE: TextDecoration = TextDecoration {
        underline: true,
        ..TextDecoration::NONE
    };
    pub const OVERLINE: TextDecoration = TextDecoration {
        overline: true,
        ..TextDecoration::NONE
    };
    pub const LINE_THROUGH: TextDecoration = TextDecoration {
        line_through: true,
        ..TextDecoration::NONE
    };

    pub fn is_none(&self) -> bool {
        *self == TextDecoration::NONE
    }
}

impl BitOr for TextDecoration {
    type Output = TextDecoration;

    fn bitor(self, rhs: TextDecoration) -> TextDecoration {
        TextDecoration {
            underline: self.underline || rhs.underline,
            overline: self.overline || rhs.overline,
            line_through: self.line_through || rhs.line_through,
        }
    }
}

/// How glyphs of a single line are painted
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlyphStyle {
    pub colour: Colour,
    pub decoration: TextDecoration,
    /// Thickness of decoration lines
    pub decoration_thickness: Px,
    /// Width of the outline drawn around each glyph, zero for none
    pub stroke_width: Px,
    pub stroke_colour: Colour,
}

/// A backend that can measure and draw single lines of text.
///
/// `Font` is whatever handle the backend uses to find concrete font data;
/// the layout engine only copies it around and uses it as a cache key.
///
/// `measure` must be deterministic for a given font and size, and
/// non-decreasing in prefix length: for any prefix `p` of `text`,
/// `measure(font, size, p) <= measure(font, size, text)`. Line splitting
/// relies on this to binary search for break points.
pub trait Metrics {
    type Font: Copy + Eq + Hash + Debug;

    /// Width of `text` drawn on one line
    fn measure(&self, font: Self::Font, size: u32, text: &str) -> Px;

    /// Draw `text` on one line into a transparent image. A stroke grows the
    /// image by twice its width in both directions.
    fn rasterize(&self, font: Self::Font, size: u32, text: &str, style: &GlyphStyle)
        -> RenderImage;
}

/// Memoized text widths, keyed by font, size, and text content.
///
/// Entries are written once and never invalidated, so the cache grows for as
/// long as it is kept alive; hold one for the life of the process to share
/// measurements between layouts. The map sits behind a lock so a cache can
/// be shared across threads. Measurements are taken outside the lock and
/// the first stored value for a key wins, which is harmless since equal keys
/// always measure equal.
pub struct WidthCache<F> {
    entries: Mutex<HashMap<(F, u32), HashMap<String, Px>>>,
}

impl<F> Default for WidthCache<F> {
    fn default() -> Self {
        WidthCache {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl<F> WidthCache<F>
where
    F: Copy + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, font: F, size: u32, text: &str) -> Option<Px> {
        self.entries
            .lock()
            .get(&(font, size))
            .and_then(|widths| widths.get(text))
            .copied()
    }

    /// Store a width unless one is already present, returning whichever
    /// width the cache holds afterwards
    pub fn insert(&self, font: F, size: u32, text: &str, width: Px) -> Px {
        let mut entries = self.entries.lock();
        let widths = entries.entry((font, size)).or_default();
        match widths.get(text) {
            Some(&stored) => stored,
            None => {
                widths.insert(text.to_string(), width);
                width
            }
        }
    }

    /// Look up a width, calling `measure` and storing its result on a miss
    pub fn get_or_measure<M>(&self, font: F, size: u32, text: &str, measure: M) -> Px
    where
        M: FnOnce() -> Px,
    {
        if let Some(width) = self.get(font, size, text) {
            return width;
        }
        log::trace!("width cache miss for {text:?} ({font:?} @ {size})");
        let width = measure();
        self.insert(font, size, text, width)
    }

    /// Number of cached widths across all fonts and sizes
    pub fn len(&self) -> usize {
        self.entries.lock().values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length in characters of the longest cached text
    pub fn longest_text(&self) -> usize {
        self.entries
            .lock()
            .values()
            .flat_map(HashMap::keys)
            .map(|text| text.chars().count())
            .max()
            .unwrap_or_default()
    }
}

/// Measures text in one font and size through a [WidthCache]
pub struct Measurer<'a, M: Metrics> {
    metrics: &'a M,
    cache: &'a WidthCache<M::Font>,
    font: M::Font,
    size: u32,
}

impl<'a, M: Metrics> Measurer<'a, M> {
    pub fn new(metrics: &'a M, cache: &'a WidthCache<M::Font>, font: M::Font, size: u32) -> Self {
        Measurer {
            metrics,
            cache,
            font,
            size,
        }
    }

    pub fn width(&self, text: &str) -> Px {
        if text.is_empty() {
            return Px::ZERO;
        }
        self.cache.get_or_measure(self.font, self.size, text, || {
            self.metrics.measure(self.font, self.size, text)
        })
    }

    pub fn font(&self) -> M::Font {
        self.font
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn metrics(&self) -> &'a M {
        self.metrics
    }
}
