//! Routing validated requests to the resource cache and search functions.

use std::sync::Arc;

use log::{debug, error};

use crate::cache::ResourceCache;
use crate::error::{ErrorKind, Result};
use crate::search::{find_permutations, find_regex};
use crate::service::request::{Params, Request};
use crate::service::response::{EncodedResponse, Reply, ResponseEncoder};
use crate::service::{INIT_DONE, ServiceConfig};

/// Turns a request path and query string into a [`Reply`].
pub struct Dispatcher {
    cache: Arc<ResourceCache>,
    config: ServiceConfig,
    encoder: ResponseEncoder,
}

impl Dispatcher {
    pub fn new(cache: Arc<ResourceCache>, config: ServiceConfig) -> Self {
        Dispatcher {
            cache,
            config,
            encoder: ResponseEncoder::new(config.debug),
        }
    }

    pub fn cache(&self) -> &Arc<ResourceCache> {
        &self.cache
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn encoder(&self) -> &ResponseEncoder {
        &self.encoder
    }

    /// Validate a raw request without executing it.
    pub fn parse(&self, path: &str, query: Option<&str>) -> Result<Request> {
        let params = Params::from_query(query);
        Request::parse(path, &params, &self.config, self.cache.registry())
    }

    /// Run a validated request.
    pub fn execute(&self, request: Request) -> Result<Reply> {
        match request {
            Request::Permutations { dict, query } => {
                let index = self.cache.get_search_index(&dict)?;
                Ok(Reply::Words(find_permutations(&index, &query)))
            }
            Request::Regex {
                dict,
                pattern,
                limit,
            } => {
                let words = self.cache.get_word_list(&dict)?;
                Ok(Reply::Words(find_regex(&pattern, &words, limit)))
            }
            Request::Init => {
                self.cache.warm_all()?;
                Ok(Reply::Status(INIT_DONE.to_string()))
            }
            Request::Dicts => Ok(Reply::Dictionaries(self.cache.dictionary_ids())),
        }
    }

    /// Parse and execute a request.
    pub fn dispatch(&self, path: &str, query: Option<&str>) -> Result<Reply> {
        let outcome = self.parse(path, query).and_then(|request| {
            debug!("Dispatching {} request", request.operation());
            self.execute(request)
        });

        if let Err(err) = &outcome {
            match err.kind() {
                ErrorKind::Internal => error!("Request {path} failed: {err}"),
                _ => debug!("Request {path} rejected: {err}"),
            }
        }
        outcome
    }

    /// Dispatch and encode in one step.
    pub fn handle(&self, path: &str, query: Option<&str>) -> EncodedResponse {
        self.encoder.encode(self.dispatch(path, query))
    }
}
