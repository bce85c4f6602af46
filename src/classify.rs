/// The role a character plays when deciding where a line may break
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Part of a word; words are kept whole or hyphenated, never cut blindly
    Letter,
    /// Punctuation that must not start a line, e.g. a comma or closing quote
    Mark,
    /// Breakable whitespace, trimmed from both sides of a break
    Space,
    /// Anything else; breaks around it are left as they fall
    Other,
}

/// Classifies characters for the line splitter. Implemented for
/// [DefaultClassifier] and for any `Fn(char) -> CharClass`, so scripts with
/// other word and punctuation rules can supply their own.
pub trait Classify {
    fn classify(&self, ch: char) -> CharClass;

    fn is_letter(&self, ch: char) -> bool {
        self.classify(ch) == CharClass::Letter
    }

    fn is_space(&self, ch: char) -> bool {
        self.classify(ch) == CharClass::Space
    }
}

impl<F> Classify for F
where
    F: Fn(char) -> CharClass,
{
    fn classify(&self, ch: char) -> CharClass {
        self(ch)
    }
}

/// Closing punctuation, in both Latin and CJK forms, that reads badly at the
/// start of a line
pub const DEFAULT_MARKS: &str = "；：。，！？、.,!?”》;:";

/// Which characters count as letters for [DefaultClassifier]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LetterRule {
    /// Only `a-z` and `A-Z`
    #[default]
    Ascii,
    /// Anything [char::is_alphanumeric] accepts
    Unicode,
}

/// A classifier built from a set of marks and a rule for letters. Whitespace
/// is always [CharClass::Space].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultClassifier {
    pub marks: String,
    pub letters: LetterRule,
}

impl Default for DefaultClassifier {
    fn default() -> Self {
        DefaultClassifier {
            marks: DEFAULT_MARKS.to_string(),
            letters: LetterRule::Ascii,
        }
    }
}

impl DefaultClassifier {
    /// Classify all alphanumeric characters of any script as letters
    pub fn unicode() -> Self {
        DefaultClassifier {
            letters: LetterRule::Unicode,
            ..Default::default()
        }
    }

    pub fn with_marks(mut self, marks: impl Into<String>) -> Self {
        self.marks = marks.into();
        self
    }
}

impl Classify for DefaultClassifier {
    fn classify(&self, ch: char) -> CharClass {
        let letter = match self.letters {
            LetterRule::Ascii => ch.is_ascii_alphabetic(),
            LetterRule::Unicode => ch.is_alphanumeric(),
        };
        if letter {
            CharClass::Letter
        } else if self.marks.contains(ch) {
            CharClass::Mark
        } else if ch.is_whitespace() {
            CharClass::Space
        } else {
            CharClass::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules() {
        let c = DefaultClassifier::default();
        assert_eq!(c.classify('a'), CharClass::Letter);
        assert_eq!(c.classify('Z'), CharClass::Letter);
        assert_eq!(c.classify(','), CharClass::Mark);
        assert_eq!(c.classify('。'), CharClass::Mark);
        assert_eq!(c.classify(' '), CharClass::Space);
        assert_eq!(c.classify('\t'), CharClass::Space);
        assert_eq!(c.classify('-'), CharClass::Other);
        assert_eq!(c.classify('é'), CharClass::Other);
        assert_eq!(c.classify('7'), CharClass::Other);
    }

    #[test]
    fn unicode_letters() {
        let c = DefaultClassifier::unicode();
        assert_eq!(c.classify('é'), CharClass::Letter);
        assert_eq!(c.classify('字'), CharClass::Letter);
        assert_eq!(c.classify('，'), CharClass::Mark);
    }

    #[test]
    fn closures_classify() {
        let only_spaces = |ch: char| {
            if ch == ' ' {
                CharClass::Space
            } else {
                CharClass::Other
            }
        };
        assert!(only_spaces.is_space(' '));
        assert!(!only_spaces.is_letter('a'));
    }
}
