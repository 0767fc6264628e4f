//! Fixed mapping from dictionary identifier to the source it is loaded from.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Result, WordhoardError};

/// Identifier selecting which word corpus to search.
pub type DictionaryId = String;

/// File extension of dictionary files discovered by [`DictionaryRegistry::from_dir`].
pub const DICTIONARY_EXTENSION: &str = "dic";

/// Where a dictionary's words come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// A text file with one word per line.
    File(PathBuf),
    /// Words held in memory.
    Words(Vec<String>),
}

/// The set of dictionaries a running instance can serve.
///
/// The registry is populated once at startup and never changes afterwards.
/// Identifiers are kept sorted so listings are stable.
#[derive(Debug, Clone, Default)]
pub struct DictionaryRegistry {
    entries: BTreeMap<DictionaryId, DictionarySource>,
}

impl DictionaryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration.
    pub fn with_entry<S: Into<String>>(mut self, id: S, source: DictionarySource) -> Self {
        self.insert(id, source);
        self
    }

    /// Register a dictionary, replacing any previous source for the same id.
    pub fn insert<S: Into<String>>(&mut self, id: S, source: DictionarySource) {
        self.entries.insert(id.into(), source);
    }

    /// Register every `*.dic` file in `dir`, keyed by file stem.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let mut registry = DictionaryRegistry::new();

        for entry in fs::read_dir(dir.as_ref())? {
            let path = entry?.path();
            if !path.is_file()
                || path.extension().and_then(|ext| ext.to_str()) != Some(DICTIONARY_EXTENSION)
            {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                debug!("Registering dictionary {stem} from {}", path.display());
                registry.insert(stem, DictionarySource::File(path.clone()));
            }
        }

        Ok(registry)
    }

    /// Look up the source of a dictionary.
    pub fn resolve(&self, id: &str) -> Result<&DictionarySource> {
        self.entries
            .get(id)
            .ok_or_else(|| WordhoardError::unknown_dictionary(id))
    }

    /// All registered identifiers, sorted ascending.
    pub fn ids(&self) -> Vec<DictionaryId> {
        self.entries.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DictionaryId, &DictionarySource)> {
        self.entries.iter()
    }
}
