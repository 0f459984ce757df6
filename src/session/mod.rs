//! Frame driver and its configuration.

/// Per-tick orchestration, capture and export.
pub mod driver;
/// Driver options.
pub mod opts;
