use crate::hyphenate::{Hyphenator, HYPHEN};
use crate::metrics::{Measurer, Metrics};
use crate::search::rightmost_fit;
use crate::units::Px;

/// Picks the hyphenation point of a word that keeps as much of it as
/// possible on the current line.
pub struct WordSplitter<'a, H: Hyphenator + ?Sized> {
    hyphenator: &'a H,
    language: &'a str,
}

impl<'a, H: Hyphenator + ?Sized> WordSplitter<'a, H> {
    pub fn new(hyphenator: &'a H, language: &'a str) -> Self {
        WordSplitter {
            hyphenator,
            language,
        }
    }

    pub fn language(&self) -> &str {
        self.language
    }

    /// Byte offset within `word` of the longest legal break whose prefix,
    /// with a hyphen appended, measures within `budget`. `None` means the
    /// word should not be hyphenated, either because no break fits or
    /// because the language offers none.
    pub fn cut<M: Metrics>(&self, measurer: &Measurer<M>, word: &str, budget: Px) -> Option<usize> {
        let mut cuts: Vec<usize> = self
            .hyphenator
            .candidates(self.language, word)
            .iter()
            .filter_map(|candidate| {
                let cut = candidate.cut_in(word);
                if cut.is_none() {
                    log::warn!(
                        "ignoring hyphenation {:?}|{:?} that does not spell {word:?}",
                        candidate.prefix,
                        candidate.suffix
                    );
                }
                cut
            })
            .collect();
        cuts.sort_unstable();
        cuts.dedup();

        let fit = rightmost_fit(&cuts, budget, |&cut| measurer.width(&hyphenated(&word[..cut])));
        let cut = fit.checked_sub(1).map(|i| cuts[i]);
        log::debug!(
            "hyphenating {word:?} within {budget}: {}",
            match cut {
                Some(cut) => hyphenated(&word[..cut]),
                None => "no cut".to_string(),
            }
        );
        cut
    }

    /// Split `word` into a hyphenated prefix and the remaining suffix, or
    /// `("", word)` when it should not be hyphenated
    pub fn split<M: Metrics>(&self, measurer: &Measurer<M>, word: &str, budget: Px) -> (String, String) {
        match self.cut(measurer, word, budget) {
            Some(cut) => (hyphenated(&word[..cut]), word[cut..].to_string()),
            None => (String::new(), word.to_string()),
        }
    }
}

/// `prefix` with a hyphen appended
pub fn hyphenated(prefix: &str) -> String {
    let mut text = String::with_capacity(prefix.len() + HYPHEN.len_utf8());
    text.push_str(prefix);
    text.push(HYPHEN);
    text
}
