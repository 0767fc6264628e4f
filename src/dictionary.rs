//! Dictionaries: the registry of known word corpora, the word list type and
//! the loader that reads a corpus from its source.

pub mod loader;
pub mod registry;
pub mod word_list;

pub use loader::{DictionaryLoader, FileDictionaryLoader};
pub use registry::{DictionaryId, DictionaryRegistry, DictionarySource};
pub use word_list::WordList;
