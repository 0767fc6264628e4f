//! Command line interface of the Wordhoard server.

pub mod args;

pub use args::*;
