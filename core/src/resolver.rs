//! Backward segment resolution.
//!
//! Given the text immediately before the cursor and a deletion granularity,
//! the resolver computes the exact trailing span that one delete request
//! removes. The span is always a suffix of the context text, starts on a
//! grapheme cluster boundary and is measured in user-perceived characters
//! (extended grapheme clusters), never bytes or code points, so callers can
//! translate it into repeated single-character deletions against the host.

use crate::classifier::SegmentClassifier;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unicode_segmentation::UnicodeSegmentation;

/// Unit of text removed by one logical delete action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeletionGranularity {
    /// A single character (plain backspace)
    #[default]
    Character,
    /// The word behind the cursor, plus any delimiters right before the cursor
    Word,
    /// The sentence behind the cursor, plus any terminators right before the cursor
    Sentence,
}

impl DeletionGranularity {
    /// All granularities, in increasing size.
    pub const ALL: [DeletionGranularity; 3] = [Self::Character, Self::Word, Self::Sentence];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Word => "word",
            Self::Sentence => "sentence",
        }
    }
}

impl fmt::Display for DeletionGranularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known granularity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseGranularityError {
    input: String,
}

impl ParseGranularityError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseGranularityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown deletion granularity '{}' (expected character, word or sentence)",
            self.input
        )
    }
}

impl std::error::Error for ParseGranularityError {}

impl FromStr for DeletionGranularity {
    type Err = ParseGranularityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "char" | "character" => Ok(Self::Character),
            "word" => Ok(Self::Word),
            "sentence" => Ok(Self::Sentence),
            _ => Err(ParseGranularityError {
                input: s.to_string(),
            }),
        }
    }
}

/// Trailing substring of the context text that one delete request removes.
///
/// Borrows from the context it was resolved against. Zero-length spans are
/// valid and mean "nothing to delete".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletionSpan<'a> {
    context: &'a str,
    start: usize, // Byte offset into `context`, on a grapheme boundary
}

impl<'a> DeletionSpan<'a> {
    /// A span that deletes nothing.
    pub fn empty() -> Self {
        Self {
            context: "",
            start: 0,
        }
    }

    fn suffix_of(context: &'a str, start: usize) -> Self {
        debug_assert!(context.is_char_boundary(start));
        Self { context, start }
    }

    /// The text to delete.
    pub fn as_str(&self) -> &'a str {
        &self.context[self.start..]
    }

    /// Number of user-perceived characters to delete.
    ///
    /// `"e\u{301}"`, `"👍🏽"` and `"🇺🇸"` each count as one.
    pub fn char_count(&self) -> usize {
        self.as_str().graphemes(true).count()
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.context.len()
    }

    /// Byte offset in the context text where the span starts.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The context text left in place after the deletion.
    pub fn remainder(&self) -> &'a str {
        &self.context[..self.start]
    }
}

impl fmt::Display for DeletionSpan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve a deletion span with the default classifier.
///
/// `None` context (the host has nothing before the cursor) yields an empty span.
pub fn resolve_deletion_span(
    context: Option<&str>,
    granularity: DeletionGranularity,
) -> DeletionSpan<'_> {
    Resolver::default().resolve(context, granularity)
}

/// Backward segment resolver.
///
/// Stateless apart from its classifier policy; a single resolver may be
/// shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolver {
    classifier: SegmentClassifier,
}

impl Resolver {
    pub fn new(classifier: SegmentClassifier) -> Self {
        Self { classifier }
    }

    /// Compute the span removed by one delete request of `granularity`.
    pub fn resolve<'a>(
        &self,
        context: Option<&'a str>,
        granularity: DeletionGranularity,
    ) -> DeletionSpan<'a> {
        let Some(text) = context else {
            return DeletionSpan::empty();
        };

        let span = match granularity {
            DeletionGranularity::Character => last_char(text),
            segment => trailing_segment(text, |c| self.classifier.is_delimiter(segment, c)),
        };

        tracing::trace!(
            granularity = %granularity,
            context_chars = text.graphemes(true).count(),
            span_chars = span.char_count(),
            "resolved deletion span"
        );
        span
    }
}

fn last_char(text: &str) -> DeletionSpan<'_> {
    let start = text
        .grapheme_indices(true)
        .next_back()
        .map(|(idx, _)| idx)
        .unwrap_or(0);
    DeletionSpan::suffix_of(text, start)
}

/// Trailing-segment scan shared by word and sentence deletion.
///
/// Works on grapheme clusters, each classified by its base (first)
/// character, so a combining mark or emoji modifier never splits from what it
/// attaches to.
///
/// 1. The whitespace run right before the cursor always belongs to the span.
/// 2. Leading whitespace of the text is never part of the scan.
/// 3. Scanning backward, delimiters are swept up until the first
///    non-delimiter is seen; after that the scan consumes content and stops,
///    without consuming it, at the next delimiter.
///
/// A body made only of delimiters is consumed entirely.
fn trailing_segment<F>(text: &str, is_delimiter: F) -> DeletionSpan<'_>
where
    F: Fn(char) -> bool,
{
    let body_start = text
        .grapheme_indices(true)
        .find(|(_, cluster)| !is_blank(cluster))
        .map_or(text.len(), |(idx, _)| idx);

    let mut clusters = text.grapheme_indices(true).rev().peekable();
    let mut start = text.len();
    while let Some((idx, _)) = clusters.next_if(|(_, cluster)| is_blank(cluster)) {
        start = idx;
    }

    let mut found_non_delimiter = false;
    for (idx, cluster) in clusters {
        if idx < body_start {
            break;
        }
        let delimiter = cluster.chars().next().is_some_and(&is_delimiter);
        if delimiter && found_non_delimiter {
            break;
        }
        start = idx;
        if !delimiter {
            found_non_delimiter = true;
        }
    }

    DeletionSpan::suffix_of(text, start)
}

fn is_blank(cluster: &str) -> bool {
    cluster.chars().next().is_some_and(char::is_whitespace)
}
