use crate::colour::{colours, Colour};
use crate::error::LayoutError;
use crate::image::RenderImage;
use crate::metrics::{GlyphStyle, Metrics};
use crate::units::Px;
use id_arena::{Arena, Id};
use image::{Pixel, Rgba};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use std::path::Path;

/// A parsed TTF or OTF font. The font data is parsed twice: once for its
/// metrics (advances, ascent, descent) and once for glyph coverage when
/// drawing. Measurement only ever uses the metrics, so widths stay
/// consistent with the pen positions used when drawing.
///
/// Fonts are referred to throughout user applications by their [FontId]
/// within a [FontBook], and not by any typed references
pub struct Font {
    pub face: OwnedFace,
    raster: fontdue::Font,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, LayoutError> {
        let raster = fontdue::Font::from_bytes(bytes.as_slice(), fontdue::FontSettings::default())
            .map_err(|e| LayoutError::FontRaster(e.to_string()))?;
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face, raster })
    }

    /// Load a font from a file on disk
    pub fn load_from_disk<P: AsRef<Path>>(path: P) -> Result<Font, LayoutError> {
        let path = path.as_ref();
        log::debug!("loading font from {}", path.display());
        Font::load(std::fs::read(path)?)
    }

    /// Obtain the full name of the font, if it has one
    pub fn name(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Obtain the family name of the font, if it has one
    pub fn family(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    fn scaling(&self, size: u32) -> f32 {
        size as f32 / self.face.as_face_ref().units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: u32) -> f32 {
        self.scaling(size) * self.face.as_face_ref().ascender() as f32
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: u32) -> f32 {
        self.scaling(size) * self.face.as_face_ref().descender() as f32
    }

    /// Height of a single rendered line: from the top of the ascent to the
    /// bottom of the descent, without extra leading
    pub fn line_height(&self, size: u32) -> Px {
        Px::ceil(self.ascent(size) - self.descent(size))
    }

    /// The glyph drawn for `ch`, falling back to the replacement character
    /// and then to `?` when the font has no glyph for it
    pub fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        let face = self.face.as_face_ref();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
    }

    /// Horizontal advance of `ch` in pixels
    pub fn advance(&self, ch: char, size: u32) -> f32 {
        let units = self
            .glyph_id(ch)
            .and_then(|gid| self.face.as_face_ref().glyph_hor_advance(gid))
            .unwrap_or_default();
        self.scaling(size) * units as f32
    }

    /// Calculate the width of a given string of text given the font size,
    /// rounded up to whole pixels
    pub fn width_of_text(&self, text: &str, size: u32) -> Px {
        Px::ceil(text.chars().map(|ch| self.advance(ch, size)).sum())
    }

    /// Draw `text` on a single line into a transparent image as wide as the
    /// text measures and one line high, plus twice the stroke width in both
    /// directions when the glyphs are outlined
    pub fn rasterize(&self, text: &str, size: u32, style: &GlyphStyle) -> RenderImage {
        let stroke = style.stroke_width.0 as i64;
        let width = self.width_of_text(text, size) + style.stroke_width.times(2);
        let height = self.line_height(size) + style.stroke_width.times(2);
        let baseline = self.ascent(size).round() as i64 + stroke;
        let mut im = RenderImage::empty(width, height, colours::TRANSPARENT);

        let mut fill = Coverage::new(width, height);
        let mut outline = Coverage::new(width, height);
        let mut pen = 0.0f32;
        for ch in text.chars() {
            // the glyph measured by `advance`, fallbacks included
            let index = self.glyph_id(ch).map_or(0, |gid| gid.0);
            let (metrics, coverage) = self.raster.rasterize_indexed(index, size as f32);
            let left = stroke + pen.round() as i64 + metrics.xmin as i64;
            let top = baseline - (metrics.ymin as i64 + metrics.height as i64);
            for (i, &c) in coverage.iter().enumerate() {
                if c == 0 {
                    continue;
                }
                let x = left + (i % metrics.width) as i64;
                let y = top + (i / metrics.width) as i64;
                fill.add(x, y, c);
                if stroke > 0 {
                    for dy in -stroke..=stroke {
                        for dx in -stroke..=stroke {
                            if dx * dx + dy * dy <= stroke * stroke {
                                outline.add(x + dx, y + dy, c);
                            }
                        }
                    }
                }
            }
            pen += self.advance(ch, size);
        }
        outline.paint(&mut im, style.stroke_colour);
        fill.paint(&mut im, style.colour);

        if !style.decoration.is_none() {
            let thickness = style.decoration_thickness.0.max(1) as i64;
            let half = thickness / 2 + 1;
            let mut rows = Vec::with_capacity(3);
            if style.decoration.underline {
                rows.push(baseline + half);
            }
            if style.decoration.overline {
                rows.push(stroke + half);
            }
            if style.decoration.line_through {
                rows.push(height.0 as i64 / 2 + half);
            }
            for centre in rows {
                let first = centre - thickness / 2;
                for y in first..first + thickness {
                    for x in 0..width.0 as i64 {
                        blend(&mut im, x, y, style.colour, 255);
                    }
                }
            }
        }

        im
    }
}

/// Per-pixel glyph coverage, combined by taking the strongest value
struct Coverage {
    width: i64,
    height: i64,
    values: Vec<u8>,
}

impl Coverage {
    fn new(width: Px, height: Px) -> Coverage {
        Coverage {
            width: width.0 as i64,
            height: height.0 as i64,
            values: vec![0; width.0 as usize * height.0 as usize],
        }
    }

    fn add(&mut self, x: i64, y: i64, value: u8) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        let slot = &mut self.values[(y * self.width + x) as usize];
        *slot = (*slot).max(value);
    }

    fn paint(&self, im: &mut RenderImage, colour: Colour) {
        for (i, &value) in self.values.iter().enumerate() {
            if value > 0 {
                let i = i as i64;
                blend(im, i % self.width, i / self.width, colour, value);
            }
        }
    }
}

/// Paint `colour` over one pixel at the given coverage, ignoring pixels
/// outside the image
fn blend(im: &mut RenderImage, x: i64, y: i64, colour: Colour, coverage: u8) {
    if x < 0 || y < 0 || x >= im.buffer.width() as i64 || y >= im.buffer.height() as i64 {
        return;
    }
    let alpha = (colour.a as u32 * coverage as u32 / 255) as u8;
    im.buffer
        .get_pixel_mut(x as u32, y as u32)
        .blend(&Rgba([colour.r, colour.g, colour.b, alpha]));
}

/// Handle to a [Font] stored in a [FontBook]
pub type FontId = Id<Font>;

/// The fonts available for layout, measured and drawn through [Metrics].
/// Load fonts once and keep the book for as long as they are needed.
#[derive(Default)]
pub struct FontBook {
    pub fonts: Arena<Font>,
}

impl FontBook {
    pub fn add_font(&mut self, font: Font) -> FontId {
        self.fonts.alloc(font)
    }

    pub fn get(&self, id: FontId) -> Option<&Font> {
        self.fonts.get(id)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.len() == 0
    }
}

impl Metrics for FontBook {
    type Font = FontId;

    fn measure(&self, font: FontId, size: u32, text: &str) -> Px {
        match self.get(font) {
            Some(font) => font.width_of_text(text, size),
            None => {
                log::warn!("measuring with unknown font {font:?}");
                Px::ZERO
            }
        }
    }

    fn rasterize(&self, font: FontId, size: u32, text: &str, style: &GlyphStyle) -> RenderImage {
        match self.get(font) {
            Some(font) => font.rasterize(text, size, style),
            None => {
                log::warn!("rasterizing with unknown font {font:?}");
                RenderImage::empty(Px::ZERO, Px::ZERO, colours::TRANSPARENT)
            }
        }
    }
}
