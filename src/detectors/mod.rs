//! Syntax-tree detectors for JSX/TSX documents
//!
//! Each detector answers one question about a parsed document:
//! - `imports`: which identifier is bound to the stylesheet module
//! - `jsx`: which element encloses an offset, and what encloses that element
//! - `class_expr`: which block a className expression refers to
//! - `blocks`: the nearest block name along the element's ancestor chain
//!
//! Detectors are pure functions over a [`ParsedSource`](crate::parser::ParsedSource).

pub mod blocks;
pub mod class_expr;
pub mod common;
pub mod imports;
pub mod jsx;
