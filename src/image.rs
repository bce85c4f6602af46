use crate::colour::Colour;
use crate::error::LayoutError;
use crate::units::Px;
use image::RgbaImage;
use std::path::Path;

/// Where children sit across the stacking axis when they are narrower
/// (or shorter) than the widest one
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Alignment {
    #[default]
    Start,
    Center,
    End,
}

impl Alignment {
    /// Offset of a child of size `child` inside a span of size `total`
    pub fn offset(&self, total: Px, child: Px) -> Px {
        let slack = total.saturating_sub(child);
        match self {
            Alignment::Start => Px::ZERO,
            Alignment::Center => Px(slack.0 / 2),
            Alignment::End => slack,
        }
    }
}

/// The axis images are stacked along
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// An RGBA raster, the output of rendering text or any other content
#[derive(Debug, Clone, PartialEq)]
pub struct RenderImage {
    pub buffer: RgbaImage,
}

impl RenderImage {
    /// An image filled with a single colour
    pub fn empty(width: Px, height: Px, colour: Colour) -> RenderImage {
        RenderImage {
            buffer: RgbaImage::from_pixel(width.0, height.0, colour.into()),
        }
    }

    pub fn from_buffer(buffer: RgbaImage) -> RenderImage {
        RenderImage { buffer }
    }

    pub fn width(&self) -> Px {
        Px(self.buffer.width())
    }

    pub fn height(&self) -> Px {
        Px(self.buffer.height())
    }

    /// Colour of a single pixel, or `None` outside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        self.buffer.get_pixel_checked(x, y).map(|p| (*p).into())
    }

    /// Alpha-composite `other` on top of this image with its top left corner
    /// at `(x, y)`. Parts falling outside this image are clipped.
    pub fn paste(&mut self, x: i64, y: i64, other: &RenderImage) -> &mut RenderImage {
        image::imageops::overlay(&mut self.buffer, &other.buffer, x, y);
        self
    }

    /// Stack images along `direction`, aligning them across the other axis,
    /// with `spacing` between neighbours and `colour` filling the gaps
    pub fn concat(
        images: &[RenderImage],
        direction: Direction,
        alignment: Alignment,
        colour: Colour,
        spacing: Px,
    ) -> RenderImage {
        match direction {
            Direction::Horizontal => Self::concat_horizontal(images, alignment, colour, spacing),
            Direction::Vertical => Self::concat_vertical(images, alignment, colour, spacing),
        }
    }

    pub fn concat_horizontal(
        images: &[RenderImage],
        alignment: Alignment,
        colour: Colour,
        spacing: Px,
    ) -> RenderImage {
        let gaps = spacing.times(images.len().saturating_sub(1));
        let width: Px = images.iter().map(RenderImage::width).sum::<Px>() + gaps;
        let height = images
            .iter()
            .map(RenderImage::height)
            .max()
            .unwrap_or_default();

        let mut im = RenderImage::empty(width, height, colour);
        let mut x = Px::ZERO;
        for child in images {
            let y = alignment.offset(height, child.height());
            im.paste(x.0 as i64, y.0 as i64, child);
            x += child.width() + spacing;
        }
        im
    }

    pub fn concat_vertical(
        images: &[RenderImage],
        alignment: Alignment,
        colour: Colour,
        spacing: Px,
    ) -> RenderImage {
        let gaps = spacing.times(images.len().saturating_sub(1));
        let width = images
            .iter()
            .map(RenderImage::width)
            .max()
            .unwrap_or_default();
        let height: Px = images.iter().map(RenderImage::height).sum::<Px>() + gaps;

        let mut im = RenderImage::empty(width, height, colour);
        let mut y = Px::ZERO;
        for child in images {
            let x = alignment.offset(width, child.width());
            im.paste(x.0 as i64, y.0 as i64, child);
            y += child.height() + spacing;
        }
        im
    }

    /// Write the image to disk, with the format picked from the file extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), LayoutError> {
        self.buffer.save(path)?;
        Ok(())
    }
}
