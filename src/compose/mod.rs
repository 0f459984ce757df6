//! Shape composition: geometry, the front, back and zone-map faces, and pose transforms.

/// Front, back and zone-map faces.
pub mod face;
/// Wedge angles, clip pies, and canvas placement.
pub mod geometry;
/// Rotation, flip and wave poses.
pub mod transform;
