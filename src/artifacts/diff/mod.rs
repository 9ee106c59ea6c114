//! Line diffing for dry-run previews
//!
//! The pipeline runs one way, fresh for every call:
//!
//! - `line_sequence`: splits a buffer into lines
//! - `similarity`: LCS length table and its backtrace into an edit script
//! - `lookahead`: bounded-window heuristic producing an edit script
//! - `edit`: the edit script vocabulary (`Equal`, `Delete`, `Insert`)
//! - `hunk`: groups an edit script into hunks with context
//! - `renderer`: plain and console unified-diff output
//! - `file_diff`: options and the per-file result tying it together

pub mod edit;
pub mod file_diff;
pub mod hunk;
pub mod line_sequence;
pub mod lookahead;
pub mod renderer;
pub mod similarity;
