//! Recording painter and the CPU rasterizer that turns its display lists into pixels.

/// Frame buffer type shared by rasterizer, filters, and sinks.
pub mod backend;
/// `vello_cpu` rasterizer for display lists.
pub mod cpu;
/// Scoped 2D drawing surface recording a display list.
pub mod painter;
