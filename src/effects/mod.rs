//! Whole-frame pixel filters and the blur and blend helpers behind them.

/// Separable Gaussian blur on premultiplied RGBA8.
pub mod blur;
/// Screen and additive blends on premultiplied RGBA8.
pub mod composite;
/// Filter modes, monochrome, invert, and dispatch.
pub mod filter;
/// Edge-lit neon pipeline.
pub mod neon;
