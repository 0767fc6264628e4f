//! Parsing untrusted request input into a typed [`Request`].
//!
//! All validation happens here, before the resource cache is touched: a
//! request that parses is guaranteed to name a registered dictionary and to
//! carry well-formed parameters.

use std::collections::HashMap;
use std::num::IntErrorKind;

use percent_encoding::percent_decode_str;
use regex::Regex;
use url::form_urlencoded;

use crate::dictionary::{DictionaryId, DictionaryRegistry};
use crate::error::{Result, WordhoardError};
use crate::search::{PermutationQuery, compile_pattern};
use crate::service::ServiceConfig;

pub const PERMUTATIONS_PATH: &str = "/permutations";
pub const REGEX_PATH: &str = "/regex";
pub const INIT_PATH: &str = "/init";
pub const DICTS_PATH: &str = "/dicts";

/// Decoded query-string parameters.
///
/// The first occurrence of a key wins and empty values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: HashMap<String, String>,
}

impl Params {
    /// Decode an `application/x-www-form-urlencoded` query string.
    pub fn from_query(query: Option<&str>) -> Self {
        let mut values = HashMap::new();

        if let Some(query) = query {
            for (key, value) in form_urlencoded::parse(query.as_bytes()) {
                if value.is_empty() {
                    continue;
                }
                values
                    .entry(key.into_owned())
                    .or_insert_with(|| value.into_owned());
            }
        }

        Params { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn required(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| WordhoardError::bad_request(format!("missing parameter: {key}")))
    }

    fn limit(&self, config: &ServiceConfig) -> Result<usize> {
        let Some(raw) = self.get("limit") else {
            return Ok(config.default_limit.min(config.max_limit));
        };

        match raw.parse::<usize>() {
            Ok(limit) => Ok(limit.min(config.max_limit)),
            Err(err) if *err.kind() == IntErrorKind::PosOverflow => Ok(config.max_limit),
            Err(_) => Err(WordhoardError::bad_request(format!(
                "limit must be a non-negative integer, got {raw:?}"
            ))),
        }
    }

    fn wildcard(&self) -> Result<char> {
        let Some(raw) = self.get("wildcard") else {
            return Ok('?');
        };

        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(WordhoardError::bad_request(format!(
                "wildcard must be a single character, got {raw:?}"
            ))),
        }
    }

    fn flag(&self, key: &str, default: bool) -> Result<bool> {
        match self.get(key) {
            None => Ok(default),
            Some("true") => Ok(true),
            Some("false") => Ok(false),
            Some(raw) => Err(WordhoardError::bad_request(format!(
                "{key} must be true or false, got {raw:?}"
            ))),
        }
    }
}

/// A validated request, one variant per operation.
#[derive(Debug, Clone)]
pub enum Request {
    Permutations {
        dict: DictionaryId,
        query: PermutationQuery,
    },
    Regex {
        dict: DictionaryId,
        pattern: Regex,
        limit: usize,
    },
    Init,
    Dicts,
}

impl Request {
    /// Parse and validate a request for `path` with the given parameters.
    pub fn parse(
        path: &str,
        params: &Params,
        config: &ServiceConfig,
        registry: &DictionaryRegistry,
    ) -> Result<Request> {
        match normalize_path(path) {
            PERMUTATIONS_PATH => {
                let letters = params.required("word")?;
                let dict = params.required("dict")?;
                let query = PermutationQuery::new(letters)
                    .with_limit(params.limit(config)?)
                    .with_prefix(params.get("prefix").unwrap_or_default())
                    .with_wildcard(params.wildcard()?)
                    .with_use_all_letters(params.flag("use_all_letters", true)?);

                Ok(Request::Permutations {
                    dict: known_dictionary(dict, registry)?,
                    query,
                })
            }
            REGEX_PATH => {
                let pattern = params.required("word")?;
                let dict = params.required("dict")?;
                let limit = params.limit(config)?;
                let pattern = compile_pattern(&decode_pattern(pattern)?)?;

                Ok(Request::Regex {
                    dict: known_dictionary(dict, registry)?,
                    pattern,
                    limit,
                })
            }
            INIT_PATH => Ok(Request::Init),
            DICTS_PATH => Ok(Request::Dicts),
            _ => Err(WordhoardError::not_found(path)),
        }
    }

    /// Name of the operation, for logging.
    pub fn operation(&self) -> &'static str {
        match self {
            Request::Permutations { .. } => PERMUTATIONS_PATH,
            Request::Regex { .. } => REGEX_PATH,
            Request::Init => INIT_PATH,
            Request::Dicts => DICTS_PATH,
        }
    }
}

fn normalize_path(path: &str) -> &str {
    path.trim_end_matches('/')
}

/// Regex patterns are percent-decoded once more after form decoding, so
/// clients may send `%2E` for a literal dot in the pattern text.
fn decode_pattern(raw: &str) -> Result<String> {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|pattern| pattern.into_owned())
        .map_err(|err| WordhoardError::bad_request(format!("pattern is not valid UTF-8: {err}")))
}

fn known_dictionary(id: &str, registry: &DictionaryRegistry) -> Result<DictionaryId> {
    registry.resolve(id).map(|_| id.to_string())
}
