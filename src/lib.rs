mod classify;
pub use classify::*;

mod colour;
pub use colour::*;

mod font;
pub use font::*;

/// Hyphenation candidates for words at the end of a line
pub mod hyphenate;
pub use hyphenate::{Dictionary, Hyphenation, Hyphenator, NoHyphenation};

mod image;
pub use self::image::*;

/// Utility functions and structures to break text into lines and lay those lines out
pub mod layout;

mod metrics;
pub use metrics::*;

mod render;
pub use render::*;

mod search;
pub use search::*;

mod units;
pub use units::*;

mod error;
pub use error::*;
