//! Command handlers for the CLI

mod suggest;

pub use suggest::run_suggest;
