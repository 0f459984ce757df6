//! User-facing state: selections, saved creations, and the storage seam.

/// Saved-creation records and their validation.
pub mod creation;
/// Selection sets and topology.
pub mod selection;
/// Full UI-facing scene state.
pub mod state;
/// Creation storage trait and in-memory store.
pub mod store;

pub use state::Scene;
