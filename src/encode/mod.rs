//! Export sinks.
//!
//! Sinks consume exported frames in order; see `FrameDriver::export_cycle`.

/// Animated GIF output via the `image` crate.
pub mod gif;
/// Frame sink trait and the in-memory sink.
pub mod sink;
