//! Regular-expression search over a word list.

use regex::{Regex, RegexBuilder};

use crate::dictionary::WordList;
use crate::error::Result;

/// Upper bound on the compiled size of a caller-supplied pattern.
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Compile a caller-supplied pattern so that it must match a whole word.
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    let anchored = format!("^(?:{pattern})$");
    let regex = RegexBuilder::new(&anchored)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()?;
    Ok(regex)
}

/// Words matching `regex`, in word-list order, at most `limit` of them.
pub fn find_regex(regex: &Regex, words: &WordList, limit: usize) -> Vec<String> {
    words
        .iter()
        .filter(|word| regex.is_match(word))
        .take(limit)
        .map(str::to_string)
        .collect()
}
