use crate::image::RenderImage;
use crate::units::Px;

/// Anything with a known content size that can be drawn to an image. Sizes
/// must be known before rendering so a surrounding layout can place content
/// without drawing it first.
pub trait Render {
    fn content_width(&self) -> Px;

    fn content_height(&self) -> Px;

    fn render(&self) -> RenderImage;
}

impl Render for RenderImage {
    fn content_width(&self) -> Px {
        self.width()
    }

    fn content_height(&self) -> Px {
        self.height()
    }

    fn render(&self) -> RenderImage {
        self.clone()
    }
}
