use text_render::layout::{LayoutContext, TextLayout, TextStyle};
use text_render::{
    colours, Alignment, DefaultClassifier, Dictionary, Font, FontBook, Px, Render,
    WidthCache,
};

fn main() {
    env_logger::init();

    // usage: wrap <font.ttf> [max width] [out.png]
    let mut args = std::env::args().skip(1);
    let path = args.next().expect("usage: wrap <font.ttf> [max width] [out.png]");
    let max_width: u32 = args
        .next()
        .map(|w| w.parse().expect("max width is a number of pixels"))
        .unwrap_or(480);
    let out = args.next().unwrap_or_else(|| "wrap.png".to_string());

    let mut book = FontBook::default();
    let font = book.add_font(Font::load_from_disk(&path).expect("can load font"));

    let cache = WidthCache::new();
    let classifier = DefaultClassifier::default();
    let context = LayoutContext::new(&book, &cache, &classifier, &Dictionary);

    let style = TextStyle::new(font, 24)
        .with_max_width(Px(max_width))
        .with_alignment(Alignment::Center)
        .with_background(colours::ANTIQUE_WHITE)
        .with_spacing(Px(4));
    let layout = TextLayout::new(&lipsum::lipsum(120), &style, &context).expect("can lay out text");

    println!(
        "{} lines, {} x {}",
        layout.lines().len(),
        layout.content_width(),
        layout.content_height()
    );
    layout.render().save(&out).expect("can save image");
}
