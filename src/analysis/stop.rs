//! Stop word set applied after dictionary expansion.
//!
//! Removal is by value: every occurrence of a stop word disappears from the
//! expanded sequence, whether it came from the phrase or from the dictionary.
//! The default set is empty.
//!
//! # Examples
//!
//! ```
//! use lexis::analysis::stop::StopWords;
//!
//! let stop_words = StopWords::from_words(vec!["д."]);
//! let words = vec!["Малый".to_string(), "д.".to_string(), "д.".to_string()];
//!
//! assert_eq!(stop_words.remove_from(words), vec!["Малый"]);
//! ```

use std::sync::Arc;

use ahash::AHashSet;

/// An immutable set of words to discard during analysis.
#[derive(Clone, Debug, Default)]
pub struct StopWords {
    words: Arc<AHashSet<String>>,
}

impl StopWords {
    /// Create an empty stop word set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stop word set from a list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopWords {
            words: Arc::new(words.into_iter().map(Into::into).collect()),
        }
    }

    /// Return a new set containing these words plus `extra`.
    pub fn extended<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words = (*self.words).clone();
        words.extend(extra.into_iter().map(Into::into));
        StopWords {
            words: Arc::new(words),
        }
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Drop every stop word occurrence from `words`, keeping the rest in order.
    pub fn remove_from(&self, mut words: Vec<String>) -> Vec<String> {
        if !self.words.is_empty() {
            words.retain(|word| !self.is_stop_word(word));
        }
        words
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
