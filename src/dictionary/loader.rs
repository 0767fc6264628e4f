//! Loading a [`WordList`] from a [`DictionarySource`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::dictionary::registry::DictionarySource;
use crate::dictionary::word_list::WordList;
use crate::error::Result;

/// Produces the word list for a registered dictionary.
///
/// Implementations must be deterministic: loading the same source twice
/// yields equal word lists.
pub trait DictionaryLoader: Send + Sync {
    fn load_word_list(&self, source: &DictionarySource) -> Result<WordList>;
}

/// Reads dictionaries from plain text files, one word per line.
///
/// Blank lines and lines starting with `#` are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileDictionaryLoader;

impl FileDictionaryLoader {
    fn load_file(path: &Path) -> Result<WordList> {
        let reader = BufReader::new(File::open(path)?);
        let mut words = Vec::new();

        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            words.push(word.to_string());
        }

        Ok(WordList::new(words))
    }
}

impl DictionaryLoader for FileDictionaryLoader {
    fn load_word_list(&self, source: &DictionarySource) -> Result<WordList> {
        match source {
            DictionarySource::File(path) => Self::load_file(path),
            DictionarySource::Words(words) => Ok(WordList::new(words)),
        }
    }
}
