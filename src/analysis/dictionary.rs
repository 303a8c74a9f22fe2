//! Abbreviation dictionary used for lexeme expansion.
//!
//! Maps an abbreviation (matched against a whole word, exactly) to the ordered
//! list of forms it expands to. The dictionary never replaces a word: the
//! original stays in place and its expansions follow it.
//!
//! # Examples
//!
//! ```
//! use lexis::analysis::dictionary::AbbreviationDictionary;
//!
//! let dictionary = AbbreviationDictionary::builtin();
//! assert_eq!(dictionary.expand("пер."), vec!["пер.", "переулок", "пер-ок"]);
//! assert_eq!(dictionary.expand("Малый"), vec!["Малый"]);
//! ```

use std::sync::LazyLock;

use ahash::AHashMap;

use crate::error::{LexisError, Result};

/// Entries of the built-in street-type abbreviation dictionary.
const BUILTIN_ENTRIES: &[(&str, &[&str])] = &[
    ("пер.", &["переулок", "пер-ок"]),
    ("пр.", &["проезд", "пр-д"]),
];

static BUILTIN_DICTIONARY: LazyLock<AbbreviationDictionary> = LazyLock::new(|| {
    let entries = BUILTIN_ENTRIES
        .iter()
        .map(|(key, forms)| {
            let forms = forms.iter().map(|&s| s.to_string()).collect();
            (key.to_string(), forms)
        })
        .collect();
    AbbreviationDictionary { entries }
});

/// Immutable mapping from an abbreviation to its expansion forms.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AbbreviationDictionary {
    entries: AHashMap<String, Vec<String>>,
}

impl AbbreviationDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed dictionary shipped with the crate.
    pub fn builtin() -> &'static AbbreviationDictionary {
        &BUILTIN_DICTIONARY
    }

    /// Build a dictionary from `(abbreviation, expansion)` pairs.
    ///
    /// Pairs sharing an abbreviation accumulate in the order given. Empty
    /// abbreviations or expansions are rejected.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries: AHashMap<String, Vec<String>> = AHashMap::new();

        for (key, expansion) in pairs {
            let key = key.into();
            let expansion = expansion.into();
            if key.is_empty() {
                return Err(LexisError::invalid_argument(
                    "dictionary abbreviation must not be empty",
                ));
            }
            if expansion.is_empty() {
                return Err(LexisError::invalid_argument(format!(
                    "expansion for '{key}' must not be empty"
                )));
            }
            entries.entry(key).or_default().push(expansion);
        }

        Ok(AbbreviationDictionary { entries })
    }

    /// Expansion forms for `word`, or an empty slice when it is not an abbreviation.
    pub fn lookup(&self, word: &str) -> &[String] {
        self.entries.get(word).map(Vec::as_slice).unwrap_or_default()
    }

    /// The word itself followed by its expansion forms.
    pub fn expand(&self, word: &str) -> Vec<String> {
        let forms = self.lookup(word);
        let mut result = Vec::with_capacity(1 + forms.len());
        result.push(word.to_string());
        result.extend(forms.iter().cloned());
        result
    }

    /// Check whether `word` has an entry.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Number of abbreviations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
