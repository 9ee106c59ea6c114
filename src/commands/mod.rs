//! Command implementations
//!
//! - `preview`: renders the dry-run diff of one file onto an output sink

pub mod preview;
