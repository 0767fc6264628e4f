//! # Wordhoard
//!
//! A small word-search service answering letter-permutation and regular
//! expression queries against one or more dictionaries.
//!
//! ## Features
//!
//! - Word lists and trie indexes built lazily, at most once per dictionary
//! - Single-flight builds that are safe under concurrent requests
//! - Typed request validation with clamped limits
//! - JSON responses over HTTP, with opt-in diagnostic error bodies

pub mod cache;
pub mod cli;
pub mod dictionary;
pub mod error;
pub mod search;
pub mod service;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
