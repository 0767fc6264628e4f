//! The query service: request parsing and validation, dispatch to the
//! resource cache and search functions, response encoding, and the HTTP
//! transport that ties them together.

pub mod dispatcher;
pub mod request;
pub mod response;
pub mod server;

pub use dispatcher::Dispatcher;
pub use request::{Params, Request};
pub use response::{EncodedResponse, Reply, ResponseEncoder};

/// Largest `limit` a search request may ask for; larger values are clamped.
pub const MAX_LIMIT: usize = 100;

/// `limit` used when a search request does not give one.
pub const DEFAULT_LIMIT: usize = 20;

/// Token returned once `init` has warmed every dictionary.
pub const INIT_DONE: &str = "Done";

/// Settings of a running service instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Include the cause of a failure in error responses.
    pub debug: bool,
    pub max_limit: usize,
    pub default_limit: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            debug: false,
            max_limit: MAX_LIMIT,
            default_limit: DEFAULT_LIMIT,
        }
    }
}

impl ServiceConfig {
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
