//! Immutable list of valid words for one dictionary.

use ahash::AHashSet;

/// The flat set of valid words for a dictionary, in load order.
///
/// Words are trimmed and lowercased on construction. Empty entries and
/// repeated words are dropped, keeping the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Build a word list from any sequence of words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = AHashSet::new();
        let mut list = Vec::new();

        for word in words {
            let normalized = word.as_ref().trim().to_lowercase();
            if normalized.is_empty() {
                continue;
            }
            if seen.insert(normalized.clone()) {
                list.push(normalized);
            }
        }

        WordList { words: list }
    }

    /// Number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate the words in load order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        WordList::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_list_normalizes_and_dedups() {
        let list = WordList::new(["Cat", " act ", "", "cat", "TAC"]);

        assert_eq!(list.len(), 3);
        assert_eq!(list.as_slice(), &["cat", "act", "tac"]);
    }

    #[test]
    fn test_word_list_from_iterator() {
        let list: WordList = vec!["one".to_string(), "two".to_string()]
            .into_iter()
            .collect();

        assert!(!list.is_empty());
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["one", "two"]);
    }
}
