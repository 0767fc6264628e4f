//! Word search over a dictionary: the trie index, letter-permutation search
//! and regular-expression matching.

pub mod pattern;
pub mod permutations;
pub mod trie;

pub use pattern::{compile_pattern, find_regex};
pub use permutations::{PermutationQuery, find_permutations};
pub use trie::{IndexBuilder, SearchIndex, Trie, TrieBuilder, TrieNode};
