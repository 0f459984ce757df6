use smallvec::SmallVec;

use crate::compose::geometry::LEFT_WEDGES;
use crate::decor::registry::{Decoration, DecorationId};

/// Maximum number of decorations in one selection set.
pub const MAX_SELECTION: usize = 4;

/// Ordered set of chosen decorations, capped at [`MAX_SELECTION`].
///
/// Order is selection order; it decides which slot list each point decoration receives.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
    items: SmallVec<[DecorationId; MAX_SELECTION]>,
}

impl SelectionSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set by adding `ids` in order; duplicates and overflow are dropped.
    pub fn from_ids(ids: impl IntoIterator<Item = DecorationId>) -> Self {
        let mut set = Self::new();
        for id in ids {
            set.add(id);
        }
        set
    }

    /// Add `id`. Returns `false` (and changes nothing) if it is already present or the set is
    /// full.
    pub fn add(&mut self, id: DecorationId) -> bool {
        if self.contains(id) {
            return false;
        }
        if self.items.len() >= MAX_SELECTION {
            tracing::debug!(?id, "selection full, ignoring add");
            return false;
        }
        self.items.push(id);
        true
    }

    /// Remove `id`. Returns whether it was present.
    pub fn remove(&mut self, id: DecorationId) -> bool {
        match self.items.iter().position(|&x| x == id) {
            Some(i) => {
                self.items.remove(i);
                true
            }
            None => false,
        }
    }

    /// Remove `id` if present, otherwise try to add it. Returns whether `id` is now selected.
    pub fn toggle(&mut self, id: DecorationId) -> bool {
        if self.remove(id) {
            return false;
        }
        self.add(id)
    }

    /// Whether `id` is selected.
    pub fn contains(&self, id: DecorationId) -> bool {
        self.items.contains(&id)
    }

    /// Number of selected decorations.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Selected ids in selection order.
    pub fn as_slice(&self) -> &[DecorationId] {
        &self.items
    }

    /// Selected point decorations, in selection order.
    pub fn point_decorations(&self) -> impl Iterator<Item = &'static Decoration> + '_ {
        self.items
            .iter()
            .map(|id| id.decoration())
            .filter(|d| d.is_point())
    }

    /// Selected zone decorations, in selection order.
    pub fn zone_decorations(&self) -> impl Iterator<Item = &'static Decoration> + '_ {
        self.items
            .iter()
            .map(|id| id.decoration())
            .filter(|d| !d.is_point())
    }
}

/// Whether the shape uses one selection or two half selections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    /// One set applied to all wedges.
    #[default]
    Whole,
    /// Left set on wedges 2..=5, right set on the rest.
    Half,
}

/// Which selection set a toggle applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SelectionTarget {
    /// The whole-topology set.
    Whole,
    /// The left-half set.
    Left,
    /// The right-half set.
    Right,
}

/// Topology plus all three selection sets. Inactive sets are kept when the topology changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Active topology.
    pub topology: Topology,
    /// Set used in whole topology.
    pub whole: SelectionSet,
    /// Left-half set used in half topology.
    pub left: SelectionSet,
    /// Right-half set used in half topology.
    pub right: SelectionSet,
}

impl SelectionState {
    /// Toggle `id` in the targeted set. Returns whether `id` is now selected there.
    pub fn toggle(&mut self, target: SelectionTarget, id: DecorationId) -> bool {
        self.set_mut(target).toggle(id)
    }

    /// Borrow the targeted set.
    pub fn set(&self, target: SelectionTarget) -> &SelectionSet {
        match target {
            SelectionTarget::Whole => &self.whole,
            SelectionTarget::Left => &self.left,
            SelectionTarget::Right => &self.right,
        }
    }

    /// Mutably borrow the targeted set.
    pub fn set_mut(&mut self, target: SelectionTarget) -> &mut SelectionSet {
        match target {
            SelectionTarget::Whole => &mut self.whole,
            SelectionTarget::Left => &mut self.left,
            SelectionTarget::Right => &mut self.right,
        }
    }

    /// Set that decorates wedge `k` under the active topology.
    pub fn set_for_wedge(&self, k: usize) -> &SelectionSet {
        match self.topology {
            Topology::Whole => &self.whole,
            Topology::Half if LEFT_WEDGES.contains(&k) => &self.left,
            Topology::Half => &self.right,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/selection.rs"]
mod tests;
