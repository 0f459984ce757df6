//! Time-to-value functions driving the flip, wave, and rotation animations.

/// Easing curves.
pub mod ease;
/// Animation modes and their natural cycle lengths.
pub mod mode;
/// Flip-angle and wave-offset scheduling.
pub mod schedule;
