//! Topping catalog: decoration kinds, the fixed slot table, and styled draw procedures.

/// Slot table and the per-selection distribution rule.
pub mod placement;
pub(crate) mod primitives;
/// Immutable decoration catalog.
pub mod registry;
