//! CLI command handlers, one per file.

mod resolve;

pub use resolve::run_resolve;
