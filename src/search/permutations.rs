//! Letter-permutation search over a [`Trie`].
//!
//! Given a rack of letter tiles, finds the dictionary words that can be
//! spelled with them. A tile equal to the query's wildcard is a blank and
//! stands for any letter.

use ahash::AHashMap;

use crate::search::trie::{Trie, TrieNode};

/// Parameters of a permutation search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationQuery {
    /// The tiles, wildcard characters included.
    pub letters: String,
    /// Maximum number of words returned.
    pub limit: usize,
    /// Every returned word starts with this prefix.
    pub prefix: String,
    /// Tile that acts as a blank.
    pub wildcard: char,
    /// Only words using every tile qualify.
    pub use_all_letters: bool,
}

impl PermutationQuery {
    pub fn new<S: Into<String>>(letters: S) -> Self {
        PermutationQuery {
            letters: letters.into(),
            limit: 20,
            prefix: String::new(),
            wildcard: '?',
            use_all_letters: true,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_wildcard(mut self, wildcard: char) -> Self {
        self.wildcard = wildcard;
        self
    }

    pub fn with_use_all_letters(mut self, use_all_letters: bool) -> Self {
        self.use_all_letters = use_all_letters;
        self
    }
}

/// Find words in `trie` spelled by the query's tiles.
///
/// Results are distinct and in lexicographic order; the prefix and
/// full-length filters apply independently of each other.
pub fn find_permutations(trie: &Trie, query: &PermutationQuery) -> Vec<String> {
    if query.limit == 0 {
        return Vec::new();
    }

    let mut rack = Rack::new(query);
    rack.walk(trie.root(), 0);
    rack.found
}

struct Rack<'q> {
    query: &'q PermutationQuery,
    tiles: AHashMap<char, usize>,
    blanks: usize,
    remaining: usize,
    prefix: Vec<char>,
    spelled: String,
    found: Vec<String>,
}

impl<'q> Rack<'q> {
    fn new(query: &'q PermutationQuery) -> Self {
        let mut tiles = AHashMap::new();
        let mut blanks = 0;

        for c in query.letters.chars() {
            if c == query.wildcard {
                blanks += 1;
            } else {
                for lower in c.to_lowercase() {
                    *tiles.entry(lower).or_insert(0) += 1;
                }
            }
        }
        let remaining = blanks + tiles.values().sum::<usize>();

        Rack {
            query,
            tiles,
            blanks,
            remaining,
            prefix: query.prefix.to_lowercase().chars().collect(),
            spelled: String::new(),
            found: Vec::new(),
        }
    }

    fn is_full(&self) -> bool {
        self.found.len() >= self.query.limit
    }

    fn walk(&mut self, node: &TrieNode, depth: usize) {
        if depth > 0
            && depth >= self.prefix.len()
            && node.is_word()
            && (!self.query.use_all_letters || self.remaining == 0)
        {
            self.found.push(self.spelled.clone());
            if self.is_full() {
                return;
            }
        }

        if self.remaining == 0 {
            return;
        }

        for (c, child) in node.children() {
            if let Some(&required) = self.prefix.get(depth)
                && c != required
            {
                continue;
            }

            // Real tiles before blanks, so each word is reached once.
            let used_tile = match self.tiles.get_mut(&c) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    true
                }
                _ if self.blanks > 0 => {
                    self.blanks -= 1;
                    false
                }
                _ => continue,
            };

            self.remaining -= 1;
            self.spelled.push(c);
            self.walk(child, depth + 1);
            self.spelled.pop();
            self.remaining += 1;

            if used_tile {
                *self.tiles.entry(c).or_insert(0) += 1;
            } else {
                self.blanks += 1;
            }

            if self.is_full() {
                return;
            }
        }
    }
}
