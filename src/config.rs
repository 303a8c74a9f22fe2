//! Configuration for phrase comparison.
//!
//! Both phrases of a comparison must be analyzed with the same dictionary and
//! stop words, so they travel together in a [`MatchConfig`].
//!
//! # Examples
//!
//! ```
//! use lexis::config::MatchConfig;
//!
//! // Built-in dictionary, no stop words
//! let config = MatchConfig::default();
//! assert!(config.dictionary.contains("пер."));
//! assert!(config.stop_words.is_empty());
//!
//! // Add stop words for a single run
//! let config = MatchConfig::default().with_extra_stop_words(vec!["д."]);
//! assert!(config.stop_words.is_stop_word("д."));
//! ```

use crate::analysis::dictionary::AbbreviationDictionary;
use crate::analysis::stop::StopWords;

/// Dictionary and stop words shared by both sides of a comparison.
#[derive(Clone, Debug)]
pub struct MatchConfig {
    /// Abbreviation dictionary used for expansion.
    pub dictionary: AbbreviationDictionary,
    /// Words removed after expansion.
    pub stop_words: StopWords,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            dictionary: AbbreviationDictionary::builtin().clone(),
            stop_words: StopWords::new(),
        }
    }
}

impl MatchConfig {
    /// Create a configuration from explicit parts.
    pub fn new(dictionary: AbbreviationDictionary, stop_words: StopWords) -> Self {
        Self {
            dictionary,
            stop_words,
        }
    }

    /// Replace the dictionary.
    pub fn with_dictionary(mut self, dictionary: AbbreviationDictionary) -> Self {
        self.dictionary = dictionary;
        self
    }

    /// Replace the stop word set.
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    /// Add stop words on top of the current set.
    pub fn with_extra_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = self.stop_words.extended(words);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_builtin_dictionary() {
        let config = MatchConfig::default();

        assert_eq!(&config.dictionary, AbbreviationDictionary::builtin());
        assert!(config.stop_words.is_empty());
    }

    #[test]
    fn test_builder_methods() {
        let dictionary = AbbreviationDictionary::from_pairs(vec![("ул.", "улица")]).unwrap();
        let config = MatchConfig::default()
            .with_dictionary(dictionary)
            .with_stop_words(StopWords::from_words(vec!["и"]))
            .with_extra_stop_words(vec!["в"]);

        assert!(config.dictionary.contains("ул."));
        assert!(!config.dictionary.contains("пер."));
        assert_eq!(config.stop_words.len(), 2);
    }
}
