//! Common utilities for Quokka.
//!
//! This crate provides shared infrastructure used alongside the selector
//! builder:
//! - **Geometry** - a rectangle value type with area computation
//! - **JSON** - generic encode/decode wrappers over `serde_json`

pub mod geometry;
pub mod json;

pub use geometry::Rect;
pub use json::{JsonError, from_json, to_json};
