//! Loading, exporting, configuration and command-line plumbing

/// Command-line parsing and batch file processing
pub mod cli;
/// Defaults, validation bounds and tuning constants
pub mod configuration;
/// Error types
pub mod error;
/// Image decoding and PNG export
pub mod image;
/// Log output routed through the progress display
pub mod logger;
/// Batch progress display
pub mod progress;
