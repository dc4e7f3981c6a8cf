//! Character classification for backward deletion.
//!
//! Two independent predicates decide where a word or a sentence ends when
//! scanning backward from the cursor. Both are pure functions of a single
//! character: there is no lookahead and no positional state, so a run of text
//! can be classified one `char` at a time in any order.
//!
//! The rule set is ASCII-oriented with the typographic and full-width
//! punctuation a CJK keyboard commonly commits (`，`, `。`, `「」`, ...).

use crate::resolver::DeletionGranularity;

/// Punctuation outside ASCII that separates words.
///
/// `’` (U+2019) is deliberately absent: it is the typographic apostrophe and
/// is governed by [`SegmentClassifier::apostrophe_joins_words`].
const WIDE_WORD_DELIMITERS: &[char] = &[
    // Full-width / CJK punctuation
    '，', '。', '、', '；', '：', '？', '！', '．', '｡', '～',
    '（', '）', '［', '］', '｛', '｝', '【', '】', '「', '」', '『', '』',
    '《', '》', '〈', '〉', '〔', '〕', '＂', '＇',
    // Typographic punctuation
    '“', '”', '‘', '‚', '„', '«', '»', '‹', '›',
    '…', '—', '–', '‐', '·', '•', '¡', '¿', '§', '¶',
    '‼', '⁇', '⁈', '⁉',
];

/// Characters that terminate a sentence regardless of policy.
const SENTENCE_TERMINATORS: &[char] = &[
    '.', '!', '?', '…', '‼', '⁇', '⁈', '⁉', '。', '！', '？', '．', '｡',
];

/// Line and paragraph breaks, treated as sentence ends when
/// [`SegmentClassifier::newline_ends_sentence`] is set.
const LINE_BREAKS: &[char] = &['\n', '\r', '\u{2028}', '\u{2029}'];

const APOSTROPHES: &[char] = &['\'', '\u{2019}'];

/// Word delimiter test using the default policy.
pub fn is_word_delimiter(c: char) -> bool {
    SegmentClassifier::default().is_word_delimiter(c)
}

/// Sentence delimiter test using the default policy.
pub fn is_sentence_delimiter(c: char) -> bool {
    SegmentClassifier::default().is_sentence_delimiter(c)
}

/// Delimiter predicates parameterized by a small, immutable policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentClassifier {
    /// Treat `'` and `’` as part of a word ("don't" deletes as one word).
    pub apostrophe_joins_words: bool,
    /// Treat line and paragraph breaks as sentence ends.
    pub newline_ends_sentence: bool,
}

impl SegmentClassifier {
    /// Create a classifier with the default policy.
    pub fn new() -> Self {
        Self {
            apostrophe_joins_words: true,
            newline_ends_sentence: true,
        }
    }

    /// Whitespace and word-separating punctuation.
    ///
    /// Letters, digits, `_` and (by default) apostrophes are word content.
    /// Any character not listed as punctuation, including emoji and CJK
    /// ideographs, is word content as well.
    pub fn is_word_delimiter(&self, c: char) -> bool {
        if c.is_whitespace() {
            return true;
        }
        if APOSTROPHES.contains(&c) {
            return !self.apostrophe_joins_words;
        }
        if c.is_ascii_punctuation() {
            return c != '_';
        }
        WIDE_WORD_DELIMITERS.contains(&c)
    }

    /// Sentence-terminating punctuation and, by default, line breaks.
    pub fn is_sentence_delimiter(&self, c: char) -> bool {
        if SENTENCE_TERMINATORS.contains(&c) {
            return true;
        }
        self.newline_ends_sentence && LINE_BREAKS.contains(&c)
    }

    /// Dispatch on granularity.
    ///
    /// `Character` deletion applies no classifier, so nothing is a delimiter.
    pub fn is_delimiter(&self, granularity: DeletionGranularity, c: char) -> bool {
        match granularity {
            DeletionGranularity::Character => false,
            DeletionGranularity::Word => self.is_word_delimiter(c),
            DeletionGranularity::Sentence => self.is_sentence_delimiter(c),
        }
    }
}

impl Default for SegmentClassifier {
    fn default() -> Self {
        Self::new()
    }
}
