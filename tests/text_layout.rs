mod common;

use common::{MonoMetrics, LINE_HEIGHT};
use text_render::layout::{LayoutContext, TextLayout};
use text_render::{
    colours, Alignment, DefaultClassifier, NoHyphenation, Px, Render, TextDecoration, WidthCache,
};

fn layout(text: &str, style: text_render::layout::TextStyle<()>) -> TextLayout {
    let metrics = MonoMetrics::new();
    let cache = WidthCache::new();
    let classifier = DefaultClassifier::default();
    let context = LayoutContext::new(&metrics, &cache, &classifier, &NoHyphenation);
    TextLayout::new(text, &style, &context).expect("text can be laid out")
}

#[test]
fn content_size_is_known_before_rendering() {
    let style = common::style().with_max_width(Px(100)).with_spacing(Px(4));
    let text = "the quick brown fox jumps over the lazy dog";
    let laid = layout(text, style);

    assert_eq!(
        laid.line_texts(),
        vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]
    );
    assert_eq!(laid.content_width(), Px(100));
    assert_eq!(laid.content_height(), Px(5 * LINE_HEIGHT + 4 * 4));

    let image = laid.render();
    assert_eq!(image.width(), laid.content_width());
    assert_eq!(image.height(), laid.content_height());
}

#[test]
fn single_line_without_budget() {
    let laid = layout("hello world", common::style());
    assert_eq!(laid.lines().len(), 1);
    assert_eq!(laid.content_width(), Px(110));
    assert_eq!(laid.content_height(), Px(LINE_HEIGHT));
    assert_eq!(laid.text(), "hello world");
}

#[test]
fn empty_text_renders_nothing() {
    let laid = layout("", common::style().with_max_width(Px(50)));
    assert!(laid.lines().is_empty());
    assert_eq!(laid.content_width(), Px::ZERO);
    assert_eq!(laid.content_height(), Px::ZERO);
}

#[test]
fn blank_lines_take_up_space() {
    let laid = layout("ab\n\ncd", common::style().with_max_width(Px(50)));
    assert_eq!(laid.line_texts(), vec!["ab", "", "cd"]);
    assert_eq!(laid.content_height(), Px(3 * LINE_HEIGHT));
}

#[test]
fn lines_are_aligned_within_the_widest() {
    let style = common::style()
        .with_colour(colours::BLACK)
        .with_background(colours::WHITE);

    let centred = layout("ab\nabcd", style.clone().with_alignment(Alignment::Center)).render();
    assert_eq!((centred.width(), centred.height()), (Px(40), Px(2 * LINE_HEIGHT)));
    assert_eq!(centred.pixel(9, 0), Some(colours::WHITE));
    assert_eq!(centred.pixel(10, 0), Some(colours::BLACK));
    assert_eq!(centred.pixel(29, 0), Some(colours::BLACK));
    assert_eq!(centred.pixel(30, 0), Some(colours::WHITE));

    let end = layout("ab\nabcd", style.clone().with_alignment(Alignment::End)).render();
    assert_eq!(end.pixel(19, 0), Some(colours::WHITE));
    assert_eq!(end.pixel(20, 0), Some(colours::BLACK));

    let start = layout("ab\nabcd", style.with_alignment(Alignment::Start)).render();
    assert_eq!(start.pixel(0, 0), Some(colours::BLACK));
    assert_eq!(start.pixel(20, 0), Some(colours::WHITE));
}

#[test]
fn spacing_is_filled_with_the_background() {
    let style = common::style()
        .with_max_width(Px(20))
        .with_spacing(Px(3))
        .with_colour(colours::BLACK)
        .with_background(colours::WHITE);
    let image = layout("ab cd", style).render();
    assert_eq!(image.height(), Px(2 * LINE_HEIGHT + 3));
    assert_eq!(image.pixel(0, LINE_HEIGHT - 1), Some(colours::BLACK));
    assert_eq!(image.pixel(0, LINE_HEIGHT), Some(colours::WHITE));
    assert_eq!(image.pixel(0, LINE_HEIGHT + 3), Some(colours::BLACK));
}

#[test]
fn glyph_colour_contrasts_with_the_background() {
    let dark = layout("a", common::style().with_background(colours::BLACK));
    assert_eq!(dark.line_images()[0].pixel(0, 0), Some(colours::WHITE));

    let light = layout("a", common::style().with_background(colours::ANTIQUE_WHITE));
    assert_eq!(light.line_images()[0].pixel(0, 0), Some(colours::BLACK));
}

#[test]
fn style_reaches_the_backend() {
    let style = common::style()
        .with_decoration(TextDecoration::UNDERLINE | TextDecoration::LINE_THROUGH)
        .with_decoration_thickness(Px(2));
    let glyphs = style.glyph_style();
    assert!(glyphs.decoration.underline);
    assert!(glyphs.decoration.line_through);
    assert!(!glyphs.decoration.overline);
    assert_eq!(glyphs.decoration_thickness, Px(2));
}

#[test]
fn invalid_style_fails_construction() {
    let metrics = MonoMetrics::new();
    let cache = WidthCache::new();
    let classifier = DefaultClassifier::default();
    let context = LayoutContext::new(&metrics, &cache, &classifier, &NoHyphenation);

    let style = common::style().with_max_width(Px(0));
    assert!(TextLayout::new("text", &style, &context).is_err());

    let style = common::style().with_max_width(Px(5));
    assert!(matches!(
        TextLayout::new("text", &style, &context),
        Err(text_render::LayoutError::Unsplittable { .. })
    ));
}

#[test]
fn outlined_text_stays_within_the_budget() {
    let style = common::style()
        .with_max_width(Px(100))
        .with_stroke(Px(5), Some(colours::BLUE));
    let laid = layout("the quick brown fox", style);

    assert_eq!(laid.line_texts(), vec!["the quick", "brown fox"]);
    for image in laid.line_images() {
        assert!(image.width() <= Px(100));
        assert_eq!(image.height(), Px(LINE_HEIGHT + 10));
    }
    assert_eq!(laid.content_width(), Px(100));
    assert_eq!(laid.content_height(), Px(2 * (LINE_HEIGHT + 10)));
}
