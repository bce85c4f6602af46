use crate::units::Px;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LayoutError {
    /// A single indivisible unit of text (one character) is wider than the
    /// width budget on its own, so no line can be produced for it
    #[error("{unit:?} does not fit within a maximum width of {max_width}")]
    Unsplittable { unit: String, max_width: Px },

    /// The maximum width was configured as zero
    #[error("maximum width must be positive")]
    InvalidMaxWidth,

    /// The font size was configured as zero
    #[error("font size must be positive")]
    InvalidSize,

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error("failed to load font for rasterization: {0}")]
    /// [fontdue] failed to load the font
    FontRaster(String),

    #[error(transparent)]
    /// [image] failed to encode or decode an image
    Image(#[from] image::ImageError),
}
