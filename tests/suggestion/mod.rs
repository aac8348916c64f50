//! Suggestion Pipeline Tests
//!
//! End-to-end behavior of the analysis core:
//! - stylesheet import resolution
//! - cursor location and insertion mode
//! - block inference from ancestors and fallbacks
//! - completion with a user-supplied identifier
