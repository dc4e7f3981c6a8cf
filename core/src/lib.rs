//! keyboard-core
//!
//! Backward deletion segmentation shared by keyboard front-ends.
//!
//! Given the text before the cursor and a deletion granularity, this crate
//! computes exactly which trailing span a character, word or sentence delete
//! removes, and replays that span against a host text surface as single
//! backward deletions.
//!
//! Public API:
//! - `SegmentClassifier` - Word and sentence delimiter predicates
//! - `Resolver` / `resolve_deletion_span` - Trailing span computation
//! - `DeletionSpan` - Borrowed suffix of the context text to delete
//! - `TextDocument` - Two-operation host capability
//! - `InputBuffer` - In-memory host for tests and tools
//! - `Config` - Classifier policy and defaults, loadable from TOML
use anyhow::Context;
use serde::{Deserialize, Serialize};

pub mod classifier;
pub use classifier::{is_sentence_delimiter, is_word_delimiter, SegmentClassifier};

pub mod resolver;
pub use resolver::{
    resolve_deletion_span, DeletionGranularity, DeletionSpan, ParseGranularityError, Resolver,
};

pub mod document;
pub use document::{delete_backward_count, delete_by_granularity, delete_span, TextDocument};

pub mod input_buffer;
pub use input_buffer::InputBuffer;

/// Deletion behaviour configuration.
///
/// Missing fields fall back to their defaults, so a partial TOML file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Treat `'` and `’` as part of a word ("don't" deletes as one word)
    pub apostrophe_joins_words: bool,

    /// Treat line and paragraph breaks as sentence ends
    pub newline_ends_sentence: bool,

    /// Granularity used when a caller does not pick one
    pub default_granularity: DeletionGranularity,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            apostrophe_joins_words: true,
            newline_ends_sentence: true,
            default_granularity: DeletionGranularity::Character,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let content = self.to_toml_string().context("serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("write config {}", path.display()))?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Build the classifier described by this config.
    pub fn classifier(&self) -> SegmentClassifier {
        SegmentClassifier {
            apostrophe_joins_words: self.apostrophe_joins_words,
            newline_ends_sentence: self.newline_ends_sentence,
        }
    }

    /// Build a resolver using this config's classifier.
    pub fn resolver(&self) -> Resolver {
        Resolver::new(self.classifier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_default_classifier() {
        assert_eq!(Config::default().classifier(), SegmentClassifier::default());
    }

    #[test]
    fn test_partial_toml() {
        let cfg = Config::from_toml_str("apostrophe_joins_words = false\n").unwrap();
        assert!(!cfg.apostrophe_joins_words);
        assert!(cfg.newline_ends_sentence);
        assert_eq!(cfg.default_granularity, DeletionGranularity::Character);
    }

    #[test]
    fn test_granularity_in_toml() {
        let cfg = Config::from_toml_str("default_granularity = \"sentence\"\n").unwrap();
        assert_eq!(cfg.default_granularity, DeletionGranularity::Sentence);
        assert!(Config::from_toml_str("default_granularity = \"page\"\n").is_err());
    }

    #[test]
    fn test_toml_string_round_trip() {
        let cfg = Config {
            apostrophe_joins_words: false,
            newline_ends_sentence: false,
            default_granularity: DeletionGranularity::Word,
        };
        let text = cfg.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), cfg);
    }

    #[test]
    fn test_resolver_uses_policy() {
        let cfg = Config {
            apostrophe_joins_words: false,
            ..Config::default()
        };
        let span = cfg
            .resolver()
            .resolve(Some("we're"), DeletionGranularity::Word);
        assert_eq!(span.as_str(), "re");
    }
}
