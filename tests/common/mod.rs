//! Common test utilities and fixtures for bem-suggest integration tests
//!
//! This module provides:
//! - `Fixture` for writing a source file into a temporary directory
//! - `analyze_at` for running the pipeline at a `|` cursor marker
//! - helpers for running the CLI binary


pub use fixture::*;
