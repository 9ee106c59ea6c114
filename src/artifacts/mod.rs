//! Diff data structures and algorithms
//!
//! - `core`: shared output plumbing (pager adapter)
//! - `diff`: line comparison, hunk building and rendering

pub mod core;
pub mod diff;
