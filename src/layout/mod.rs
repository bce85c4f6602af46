//! Line breaking and text layout.
//!
//! Text is first split at hard line breaks, then each physical line is
//! broken greedily into lines that fit a width budget:
//!
//! - [`LineSplitter`](crate::layout::LineSplitter) carves the longest fitting line off the front
//!   of the text, keeping words whole and closing punctuation attached
//! - [`WordSplitter`](crate::layout::WordSplitter) hyphenates a word that straddles the end of a
//!   line, choosing the longest hyphenated prefix that still fits
//! - [`TextLayout`](crate::layout::TextLayout) ties both together, rasterizes each line, and
//!   stacks the line images into one block
//!
//! # Example
//!
//! ```no_run
//! use text_render::{FontBook, Font, Px, Render, WidthCache, DefaultClassifier, Dictionary};
//! use text_render::layout::{LayoutContext, TextLayout, TextStyle};
//!
//! let mut book = FontBook::default();
//! let font = book.add_font(Font::load_from_disk("DejaVuSans.ttf").expect("can load font"));
//! let cache = WidthCache::new();
//! let classifier = DefaultClassifier::default();
//! let context = LayoutContext::new(&book, &cache, &classifier, &Dictionary);
//!
//! let style = TextStyle::new(font, 32).with_max_width(Px(300));
//! let layout = TextLayout::new("Hello, world! This line wraps.", &style, &context)
//!     .expect("text fits");
//! layout.render().save("hello.png").expect("can save image");
//! ```

mod line;
mod text;
mod word;

pub use line::*;
pub use text::*;
pub use word::*;
