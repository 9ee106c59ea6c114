//! Line-based diff engine for dry-run previews
//!
//! Compares an original and a modified text buffer and renders the
//! difference as a unified diff, either as a plain string or line by line
//! onto a styled console sink.
//!
//! ```
//! let diff = linediff::diff_texts("A\nB\nC", "A\nB\nX\nC", "src/lib.rs");
//! assert_eq!(diff.hunks().len(), 1);
//! assert!(diff.to_unified_string().contains("+X"));
//! ```

pub mod artifacts;
pub mod commands;

pub use artifacts::diff::file_diff::{DiffOptions, DiffStats, DiffStrategy, FileDiff, diff_texts};
pub use artifacts::diff::hunk::{CONTEXT_LINES, Hunk, RenderedLine};
pub use artifacts::diff::lookahead::LOOKAHEAD_WINDOW;
pub use artifacts::diff::renderer::RenderStyle;
