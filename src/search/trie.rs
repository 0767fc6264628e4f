//! Prefix tree over the words of a dictionary.

use std::collections::BTreeMap;

use crate::dictionary::WordList;
use crate::error::Result;

/// A single node of the trie.
///
/// Children are ordered by character so that a depth-first walk visits
/// words in lexicographic order.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    /// Whether the path to this node spells a complete word.
    pub fn is_word(&self) -> bool {
        self.terminal
    }

    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(&c, node)| (c, node))
    }
}

/// Prefix tree built from exactly one [`WordList`].
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

/// The search index used for permutation queries.
pub type SearchIndex = Trie;

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word. Returns `false` if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }

        if node.terminal {
            return false;
        }
        node.terminal = true;
        self.len += 1;
        true
    }

    /// Exact-word lookup.
    pub fn contains(&self, word: &str) -> bool {
        self.node(word).is_some_and(TrieNode::is_word)
    }

    /// Node reached by following `prefix` from the root.
    pub fn node(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, c| node.child(c))
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<'a> FromIterator<&'a str> for Trie {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut trie = Trie::new();
        for word in iter {
            trie.insert(word);
        }
        trie
    }
}

/// Builds a [`SearchIndex`] from a word list.
pub trait IndexBuilder: Send + Sync {
    fn build_search_index(&self, words: &WordList) -> Result<SearchIndex>;
}

/// Default builder: inserts every word into a [`Trie`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TrieBuilder;

impl IndexBuilder for TrieBuilder {
    fn build_search_index(&self, words: &WordList) -> Result<SearchIndex> {
        Ok(words.iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut trie = Trie::new();

        assert!(trie.insert("cat"));
        assert!(trie.insert("cats"));
        assert!(!trie.insert("cat"));
        assert!(!trie.insert(""));

        assert_eq!(trie.len(), 2);
        assert!(trie.contains("cat"));
        assert!(trie.contains("cats"));
        assert!(!trie.contains("ca"));
        assert!(!trie.contains("dog"));
    }

    #[test]
    fn test_children_are_ordered() {
        let trie: Trie = ["tac", "act", "cat"].into_iter().collect();
        let first: Vec<char> = trie.root().children().map(|(c, _)| c).collect();

        assert_eq!(first, vec!['a', 'c', 't']);
    }

    #[test]
    fn test_builder_uses_word_list() {
        let words = WordList::new(["act", "cat", "Cat"]);
        let trie = TrieBuilder.build_search_index(&words).unwrap();

        assert_eq!(trie.len(), 2);
        assert!(trie.node("ca").is_some());
    }
}
