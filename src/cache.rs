//! Lazily built, memoized word lists and search indexes.
//!
//! [`ResourceCache`] holds one entry per registered dictionary. Each entry has
//! two independently lazy slots: the word list and the search index built
//! from it. A slot is filled at most once for the life of the cache; every
//! later read returns the same `Arc`.
//!
//! Builds are single-flight per slot. Concurrent first requests for the same
//! dictionary block on the slot's build lock while one of them builds, then
//! all observe the completed outcome, success or failure. A failed build
//! leaves the slot empty so the next request retries it.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Instant;

use ahash::AHashMap;
use log::{debug, info, warn};
use parking_lot::{Mutex, RwLock};
use rayon::prelude::*;

use crate::dictionary::{
    DictionaryId, DictionaryLoader, DictionaryRegistry, DictionarySource, FileDictionaryLoader,
    WordList,
};
use crate::error::{Result, WordhoardError};
use crate::search::{IndexBuilder, SearchIndex, TrieBuilder};

/// A value that is built at most once, on first successful request.
///
/// Callers that queue behind a build attempt share its outcome: a success
/// fills the slot, a failure is handed to every caller that was already
/// waiting. Callers arriving after a failed attempt start a new one.
struct BuildOnce<T> {
    value: RwLock<Option<Arc<T>>>,
    /// Failure of the most recent attempt, guarded by the build lock.
    last_failure: Mutex<Option<Arc<WordhoardError>>>,
    /// Number of finished attempts; only bumped while holding `last_failure`.
    attempts: AtomicU64,
}

impl<T> BuildOnce<T> {
    fn new() -> Self {
        BuildOnce {
            value: RwLock::new(None),
            last_failure: Mutex::new(None),
            attempts: AtomicU64::new(0),
        }
    }

    fn get(&self) -> Option<Arc<T>> {
        self.value.read().clone()
    }

    fn get_or_try_build<F>(&self, build: F) -> Result<Arc<T>>
    where
        F: FnOnce() -> Result<T>,
    {
        if let Some(value) = self.get() {
            return Ok(value);
        }

        let arrived_after = self.attempts.load(Ordering::Acquire);
        let mut last_failure = self.last_failure.lock();

        // Another caller may have finished while we waited.
        if let Some(value) = self.get() {
            return Ok(value);
        }
        if self.attempts.load(Ordering::Acquire) != arrived_after
            && let Some(failure) = last_failure.as_ref()
        {
            return Err(WordhoardError::Shared(Arc::clone(failure)));
        }

        let outcome = build();
        self.attempts.fetch_add(1, Ordering::Release);
        match outcome {
            Ok(value) => {
                let value = Arc::new(value);
                *self.value.write() = Some(Arc::clone(&value));
                *last_failure = None;
                Ok(value)
            }
            Err(err) => {
                let failure = Arc::new(err);
                *last_failure = Some(Arc::clone(&failure));
                Err(WordhoardError::Shared(failure))
            }
        }
    }
}

struct CacheEntry {
    word_list: BuildOnce<WordList>,
    index: BuildOnce<SearchIndex>,
}

/// Counters describing what the cache has built so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub dictionaries: usize,
    pub word_lists_built: usize,
    pub indexes_built: usize,
}

/// Memoized per-dictionary word lists and search indexes.
pub struct ResourceCache {
    registry: DictionaryRegistry,
    entries: AHashMap<DictionaryId, CacheEntry>,
    loader: Box<dyn DictionaryLoader>,
    builder: Box<dyn IndexBuilder>,
    word_lists_built: AtomicUsize,
    indexes_built: AtomicUsize,
}

impl ResourceCache {
    /// Create a cache over `registry` using the given collaborators.
    pub fn new<L, B>(registry: DictionaryRegistry, loader: L, builder: B) -> Self
    where
        L: DictionaryLoader + 'static,
        B: IndexBuilder + 'static,
    {
        let entries = registry
            .iter()
            .map(|(id, _)| {
                let entry = CacheEntry {
                    word_list: BuildOnce::new(),
                    index: BuildOnce::new(),
                };
                (id.clone(), entry)
            })
            .collect();

        ResourceCache {
            registry,
            entries,
            loader: Box::new(loader),
            builder: Box::new(builder),
            word_lists_built: AtomicUsize::new(0),
            indexes_built: AtomicUsize::new(0),
        }
    }

    /// Cache that reads dictionary files and builds tries.
    pub fn with_defaults(registry: DictionaryRegistry) -> Self {
        Self::new(registry, FileDictionaryLoader, TrieBuilder)
    }

    pub fn registry(&self) -> &DictionaryRegistry {
        &self.registry
    }

    /// Sorted identifiers of every known dictionary.
    pub fn dictionary_ids(&self) -> Vec<DictionaryId> {
        self.registry.ids()
    }

    fn entry(&self, id: &str) -> Result<(&DictionarySource, &CacheEntry)> {
        let source = self.registry.resolve(id)?;
        // Entries mirror the registry, which never changes after construction.
        self.entries
            .get(id)
            .map(|entry| (source, entry))
            .ok_or_else(|| WordhoardError::internal(format!("no cache entry for {id}")))
    }

    /// The word list for `id`, loading it on first use.
    pub fn get_word_list(&self, id: &str) -> Result<Arc<WordList>> {
        let (source, entry) = self.entry(id)?;

        entry.word_list.get_or_try_build(|| {
            info!("Loading word list for {id}");
            let started = Instant::now();

            let words = self.loader.load_word_list(source).map_err(|err| {
                warn!("Loading word list for {id} failed: {err}");
                WordhoardError::build(format!("failed to load dictionary {id}: {err}"))
            })?;

            self.word_lists_built.fetch_add(1, Ordering::Relaxed);
            info!(
                "Loaded {} words for {id} in {:?}",
                words.len(),
                started.elapsed()
            );
            Ok(words)
        })
    }

    /// The search index for `id`, built from the cached word list on first use.
    pub fn get_search_index(&self, id: &str) -> Result<Arc<SearchIndex>> {
        let (_, entry) = self.entry(id)?;

        entry.index.get_or_try_build(|| {
            let words = self.get_word_list(id)?;

            info!("Building search index for {id}");
            let started = Instant::now();

            let index = self.builder.build_search_index(&words).map_err(|err| {
                warn!("Building search index for {id} failed: {err}");
                WordhoardError::build(format!("failed to build index for {id}: {err}"))
            })?;

            self.indexes_built.fetch_add(1, Ordering::Relaxed);
            info!("Built search index for {id} in {:?}", started.elapsed());
            Ok(index)
        })
    }

    /// Build the search index of every registered dictionary.
    ///
    /// Dictionaries are built in parallel. Every id is attempted even if some
    /// fail; the first failure is returned. Already built entries are reused,
    /// so repeated or overlapping calls never rebuild anything.
    pub fn warm_all(&self) -> Result<()> {
        let ids = self.registry.ids();
        debug!("Warming {} dictionaries", ids.len());

        let failures: Vec<WordhoardError> = ids
            .par_iter()
            .filter_map(|id| self.get_search_index(id).err())
            .collect();

        match failures.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub fn is_word_list_built(&self, id: &str) -> bool {
        self.entries
            .get(id)
            .is_some_and(|entry| entry.word_list.get().is_some())
    }

    pub fn is_index_built(&self, id: &str) -> bool {
        self.entries
            .get(id)
            .is_some_and(|entry| entry.index.get().is_some())
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            dictionaries: self.entries.len(),
            word_lists_built: self.word_lists_built.load(Ordering::Relaxed),
            indexes_built: self.indexes_built.load(Ordering::Relaxed),
        }
    }
}
