//! Edge Cases and Error Handling Tests
//!
//! Tests for unusual inputs, error conditions, and boundary cases:
//! - Syntax errors (fatal, no edit)
//! - Offsets at span boundaries, past the end, or inside multi-byte text
//! - Cursor outside all markup
//! - Missing import with nobody to ask

pub mod error_handling_tests;
