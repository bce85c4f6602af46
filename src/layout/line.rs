use crate::classify::{CharClass, Classify};
use crate::error::LayoutError;
use crate::hyphenate::Hyphenator;
use crate::layout::word::{hyphenated, WordSplitter};
use crate::metrics::{Measurer, Metrics};
use crate::search::rightmost_fit;
use crate::units::Px;
use std::borrow::Cow;
use std::ops::Range;

/// One output line: a range of the source text, optionally followed by an
/// inserted hyphen when a word was broken at the end of the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Byte range of the line's text within the source
    pub range: Range<usize>,
    /// Whether a hyphen follows the range
    pub hyphenated: bool,
    /// Measured width of the line as drawn, hyphen included
    pub width: Px,
}

impl Line {
    /// The line's text as it will be drawn
    pub fn text<'s>(&self, source: &'s str) -> Cow<'s, str> {
        let text = &source[self.range.clone()];
        if self.hyphenated {
            Cow::Owned(hyphenated(text))
        } else {
            Cow::Borrowed(text)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty() && !self.hyphenated
    }

    pub(crate) fn shifted(self, by: usize) -> Line {
        Line {
            range: self.range.start + by..self.range.end + by,
            ..self
        }
    }
}

/// Greedily breaks a single physical line (one without hard breaks) into
/// lines no wider than a budget.
///
/// Each step binary searches for the longest prefix of the remaining text
/// that fits, then moves the break back so words are not cut (or hyphenates
/// them when a [WordSplitter] is configured) and so closing punctuation does
/// not start the next line. When those adjustments would leave nothing on
/// the line, the break falls back to the longest fitting prefix, so every
/// step consumes text and the splitter always terminates.
pub struct LineSplitter<'a, M, C, H>
where
    M: Metrics,
    C: Classify + ?Sized,
    H: Hyphenator + ?Sized,
{
    measurer: Measurer<'a, M>,
    classifier: &'a C,
    words: Option<WordSplitter<'a, H>>,
    max_width: Px,
}

impl<'a, M, C, H> LineSplitter<'a, M, C, H>
where
    M: Metrics,
    C: Classify + ?Sized,
    H: Hyphenator + ?Sized,
{
    pub fn new(measurer: Measurer<'a, M>, classifier: &'a C, max_width: Px) -> Self {
        LineSplitter {
            measurer,
            classifier,
            words: None,
            max_width,
        }
    }

    /// Hyphenate words that straddle the end of a line instead of moving
    /// them to the next line whole
    pub fn with_hyphenation(mut self, words: WordSplitter<'a, H>) -> Self {
        self.words = Some(words);
        self
    }

    pub fn max_width(&self) -> Px {
        self.max_width
    }

    pub fn measurer(&self) -> &Measurer<'a, M> {
        &self.measurer
    }

    /// Break `text` into lines. Ranges of the returned lines index into
    /// `text`. Empty text yields no lines.
    ///
    /// Fails with [LayoutError::Unsplittable] when a single character is
    /// wider than the budget.
    pub fn split(&self, text: &str) -> Result<Vec<Line>, LayoutError> {
        let mut lines = Vec::new();
        let mut cursor = 0;

        while cursor < text.len() {
            let rest = &text[cursor..];
            let (chars, starts, view) = self.window(rest);
            let n = chars.len();
            // byte offset of the end of a prefix of `k` characters
            let end = |k: usize| starts.get(k).copied().unwrap_or(view);

            let mut bound = rightmost_fit(&starts, self.max_width, |&e| self.measurer.width(&rest[..e]));
            if self.measurer.width(&rest[..end(bound)]) > self.max_width {
                bound -= 1;
            }
            if bound == 0 {
                return Err(LayoutError::Unsplittable {
                    unit: chars[0].to_string(),
                    max_width: self.max_width,
                });
            }
            if end(bound) == rest.len() {
                lines.push(self.line(text, cursor..text.len(), false));
                break;
            }

            let fitting = bound;
            match self.classifier.classify(chars[bound]) {
                CharClass::Letter => {
                    let start = self.word_start(&chars, bound);
                    let longer = start < bound
                        || rest[end(bound)..]
                            .chars()
                            .nth(1)
                            .is_some_and(|c| self.classifier.is_letter(c));

                    if longer {
                        let cut = self.words.as_ref().and_then(|words| {
                            let from = end(start);
                            let tail = &rest[from..];
                            let letters = tail
                                .find(|c: char| !self.classifier.is_letter(c))
                                .unwrap_or(tail.len());
                            let word = &tail[..letters];
                            let before = self.measurer.width(&rest[..from]);
                            words.cut(&self.measurer, word, self.max_width.saturating_sub(before))
                        });
                        if let Some(cut) = cut {
                            // the rest of the word starts the next line as is
                            let stop = cursor + end(start) + cut;
                            lines.push(self.line(text, cursor..stop, true));
                            cursor = stop;
                            continue;
                        }
                        bound = start;
                    }
                }
                CharClass::Mark => {
                    if self.measurer.width(&rest[..end(bound + 1)]) <= self.max_width {
                        bound += 1;
                    } else {
                        // the word the mark closes moves down with it
                        bound = self.word_start(&chars, bound);
                    }
                }
                CharClass::Space | CharClass::Other => {}
            }

            if bound == 0 {
                bound = fitting;
            }

            let kept = rest[..end(bound)].trim_end_matches(|c: char| self.classifier.is_space(c));
            lines.push(self.line(text, cursor..cursor + kept.len(), false));

            cursor += end(bound);
            let next = &text[cursor..];
            cursor += next.len() - next.trim_start_matches(|c: char| self.classifier.is_space(c)).len();
        }

        Ok(lines)
    }

    /// The leading characters of `rest` the next line is searched in, with
    /// their byte offsets and the byte length they span.
    ///
    /// Prefixes of 1, 2, 4, 8... characters are measured until one is wider
    /// than the budget or covers all of `rest`, so the search and the cache
    /// only ever see about one line of text however long `rest` is.
    fn window(&self, rest: &str) -> (Vec<char>, Vec<usize>, usize) {
        let mut size = 1;
        loop {
            let mut chars = Vec::with_capacity(size);
            let mut starts = Vec::with_capacity(size);
            let mut view = rest.len();
            for (i, ch) in rest.char_indices() {
                if chars.len() == size {
                    view = i;
                    break;
                }
                chars.push(ch);
                starts.push(i);
            }
            if view == rest.len() || self.measurer.width(&rest[..view]) > self.max_width {
                return (chars, starts, view);
            }
            size *= 2;
        }
    }

    /// Index of the first letter of the run of letters ending just before `at`
    fn word_start(&self, chars: &[char], at: usize) -> usize {
        let mut start = at;
        while start > 0 && self.classifier.is_letter(chars[start - 1]) {
            start -= 1;
        }
        start
    }

    fn line(&self, text: &str, range: Range<usize>, hyphenated: bool) -> Line {
        let mut line = Line {
            range,
            hyphenated,
            width: Px::ZERO,
        };
        let drawn = line.text(text);
        line.width = self.measurer.width(&drawn);
        log::debug!("line {:?} is {}", drawn, line.width);
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::DefaultClassifier;
    use crate::hyphenate::{Hyphenation, NoHyphenation};
    use crate::image::RenderImage;
    use crate::metrics::{GlyphStyle, WidthCache};

    /// Every character is 10px wide
    struct Mono;

    impl Metrics for Mono {
        type Font = ();

        fn measure(&self, _font: (), _size: u32, text: &str) -> Px {
            Px(text.chars().count() as u32 * 10)
        }

        fn rasterize(&self, _font: (), _size: u32, _text: &str, _style: &GlyphStyle) -> RenderImage {
            RenderImage::empty(Px(0), Px(0), crate::colours::TRANSPARENT)
        }
    }

    fn split(text: &str, max_width: u32) -> Result<Vec<String>, LayoutError> {
        let cache = WidthCache::new();
        let classifier = DefaultClassifier::default();
        let splitter: LineSplitter<_, _, NoHyphenation> =
            LineSplitter::new(Measurer::new(&Mono, &cache, (), 12), &classifier, Px(max_width));
        let lines = splitter.split(text)?;
        Ok(lines.iter().map(|l| l.text(text).into_owned()).collect())
    }

    fn split_hyphenated<H: Hyphenator>(text: &str, max_width: u32, hyphenator: &H) -> Vec<String> {
        let cache = WidthCache::new();
        let classifier = DefaultClassifier::default();
        let splitter = LineSplitter::new(Measurer::new(&Mono, &cache, (), 12), &classifier, Px(max_width))
            .with_hyphenation(WordSplitter::new(hyphenator, "en"));
        let lines = splitter.split(text).expect("text can be split");
        lines.iter().map(|l| l.text(text).into_owned()).collect()
    }

    #[test]
    fn breaks_at_spaces() {
        assert_eq!(split("hello world", 50).unwrap(), vec!["hello", "world"]);
    }

    #[test]
    fn words_wider_than_the_budget_are_cut() {
        assert_eq!(
            split("hello world", 45).unwrap(),
            vec!["hell", "o", "worl", "d"]
        );
    }

    #[test]
    fn whole_text_fits() {
        assert_eq!(split("hello world", 110).unwrap(), vec!["hello world"]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(split("", 10).unwrap().is_empty());
    }

    #[test]
    fn moves_words_down_whole() {
        assert_eq!(
            split("the quick brown fox", 120).unwrap(),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn breaks_words_longer_than_a_line() {
        assert_eq!(split("aaaaaaa", 30).unwrap(), vec!["aaa", "aaa", "a"]);
    }

    #[test]
    fn narrower_than_a_glyph_fails() {
        let err = split(&"a".repeat(100), 5).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::Unsplittable { ref unit, max_width: Px(5) } if unit == "a"
        ));
    }

    #[test]
    fn keeps_marks_on_the_line() {
        // "hi," is exactly 30px; the comma must not start the next line
        let lines = split("hi, you!", 30).unwrap();
        assert_eq!(lines, vec!["hi,", "you!"]);
        assert!(lines.iter().all(|l| !l.starts_with(',')));
    }

    #[test]
    fn mark_that_does_not_fit_takes_its_word_down() {
        assert_eq!(split("ab cd, ef", 50).unwrap(), vec!["ab", "cd,", "ef"]);
    }

    #[test]
    fn falls_back_when_a_mark_has_nowhere_to_go() {
        // "abcd" followed by a mark can neither fit nor move down whole
        assert_eq!(split("abcd!", 40).unwrap(), vec!["abcd", "!"]);
    }

    #[test]
    fn ranges_skip_spaces_at_breaks() {
        let cache = WidthCache::new();
        let classifier = DefaultClassifier::default();
        let splitter: LineSplitter<_, _, NoHyphenation> =
            LineSplitter::new(Measurer::new(&Mono, &cache, (), 12), &classifier, Px(50));
        let lines = splitter.split("hello   world").unwrap();
        assert_eq!(lines[0].range, 0..5);
        assert_eq!(lines[1].range, 8..13);
        assert_eq!(lines[0].width, Px(50));
    }

    #[test]
    fn hyphenates_with_longest_fitting_cut() {
        let hyphenator = |_: &str, word: &str| {
            if word == "beautiful" {
                vec![
                    Hyphenation::new("beau-", "tiful"),
                    Hyphenation::new("beauti-", "ful"),
                ]
            } else {
                Vec::new()
            }
        };
        assert_eq!(
            split_hyphenated("beautiful", 50, &hyphenator),
            vec!["beau-", "tiful"]
        );
        assert_eq!(
            split_hyphenated("a beautiful day", 90, &hyphenator),
            vec!["a beauti-", "ful day"]
        );
    }

    #[test]
    fn moves_word_down_when_no_cut_fits() {
        let hyphenator = |_: &str, _: &str| vec![Hyphenation::new("beauti-", "ful")];
        assert_eq!(
            split_hyphenated("so beautiful", 60, &hyphenator),
            vec!["so", "beauti", "ful"]
        );
    }

    #[test]
    fn unknown_language_does_not_hyphenate() {
        assert_eq!(
            split_hyphenated("so beautiful", 60, &NoHyphenation),
            vec!["so", "beauti", "ful"]
        );
    }
}
