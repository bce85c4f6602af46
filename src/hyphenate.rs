//! Hyphenation providers.
//!
//! A [Hyphenator] lists the places a word may legally be broken for a given
//! language. The layout engine picks among those candidates; providers only
//! have to know the language rules. Providers never fail: a language they do
//! not know simply has no candidates, and the word is moved to the next line
//! whole instead of being hyphenated.

use hypher::Lang;

/// The character inserted at the end of a line when a word is broken
pub const HYPHEN: char = '-';

/// One legal way to break a word: `prefix` stays on the current line and is
/// followed by a hyphen, `suffix` starts the next line.
///
/// `prefix` may be given with or without its trailing [HYPHEN]; it is
/// normalized away when the candidate is matched against its word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hyphenation {
    pub prefix: String,
    pub suffix: String,
}

impl Hyphenation {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Hyphenation {
        Hyphenation {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Break `word` before its `index`th character
    pub fn at(word: &str, index: usize) -> Option<Hyphenation> {
        let (byte, _) = word.char_indices().nth(index)?;
        if byte == 0 {
            return None;
        }
        Some(Hyphenation::new(&word[..byte], &word[byte..]))
    }

    /// The prefix without any trailing hyphen
    pub fn bare_prefix(&self) -> &str {
        self.prefix.strip_suffix(HYPHEN).unwrap_or(&self.prefix)
    }

    /// Byte offset of the break within `word`, if this candidate splits
    /// `word` into two non-empty parts without changing its letters
    pub fn cut_in(&self, word: &str) -> Option<usize> {
        let prefix = self.bare_prefix();
        let splits_word = !prefix.is_empty()
            && !self.suffix.is_empty()
            && prefix.len() + self.suffix.len() == word.len()
            && word.starts_with(prefix)
            && word.ends_with(self.suffix.as_str());
        splits_word.then_some(prefix.len())
    }
}

/// A source of hyphenation candidates, keyed by language tag (e.g. `en_US`)
pub trait Hyphenator {
    /// All legal breaks of `word` in `language`, in any order. Unknown
    /// languages return no candidates.
    fn candidates(&self, language: &str, word: &str) -> Vec<Hyphenation>;
}

impl<F> Hyphenator for F
where
    F: Fn(&str, &str) -> Vec<Hyphenation>,
{
    fn candidates(&self, language: &str, word: &str) -> Vec<Hyphenation> {
        self(language, word)
    }
}

/// Never hyphenates
#[derive(Debug, Default, Copy, Clone)]
pub struct NoHyphenation;

impl Hyphenator for NoHyphenation {
    fn candidates(&self, _language: &str, _word: &str) -> Vec<Hyphenation> {
        Vec::new()
    }
}

/// Dictionary hyphenation backed by the TeX patterns bundled in [hypher].
///
/// The language is taken from the primary subtag of the tag (`en_US` and
/// `en-GB` both use the English patterns). Tags `hypher` has no patterns for
/// yield no candidates.
#[derive(Debug, Default, Copy, Clone)]
pub struct Dictionary;

impl Dictionary {
    /// The pattern language for a tag such as `en_US`, if there is one
    pub fn lang(tag: &str) -> Option<Lang> {
        let primary = tag.trim().split(['_', '-']).next()?.to_ascii_lowercase();
        let code: [u8; 2] = primary.as_bytes().try_into().ok()?;
        Lang::from_iso(code)
    }
}

impl Hyphenator for Dictionary {
    fn candidates(&self, language: &str, word: &str) -> Vec<Hyphenation> {
        let Some(lang) = Dictionary::lang(language) else {
            log::debug!("no hyphenation dictionary for language {language:?}");
            return Vec::new();
        };

        // patterns are lowercase; offsets only carry over if lowercasing
        // kept every byte where it was
        let lower = word.to_lowercase();
        let source = if lower.len() == word.len() { lower.as_str() } else { word };

        let mut cuts = Vec::new();
        let mut offset = 0;
        for syllable in hypher::hyphenate(source, lang) {
            offset += syllable.len();
            if offset < word.len() && word.is_char_boundary(offset) {
                cuts.push(Hyphenation::new(&word[..offset], &word[offset..]));
            }
        }
        cuts
    }
}
