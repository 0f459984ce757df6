use crate::animation::mode::AnimationMode;
use crate::effects::filter::FilterMode;
use crate::foundation::error::PizzaResult;
use crate::scene::creation::{CreationDraft, SavedCreation};
use crate::scene::selection::{SelectionSet, SelectionState};

/// Everything the user controls: selections, topology, animation and filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scene {
    /// Topology and selection sets.
    pub selection: SelectionState,
    /// Active animation.
    pub animation: AnimationMode,
    /// Active filter.
    pub filter: FilterMode,
}

impl Scene {
    /// Snapshot this scene as a draft named `name`.
    pub fn to_draft(&self, name: impl Into<String>) -> CreationDraft {
        CreationDraft {
            name: name.into(),
            topology: self.selection.topology,
            toppings: self.selection.whole.as_slice().to_vec(),
            left_toppings: self.selection.left.as_slice().to_vec(),
            right_toppings: self.selection.right.as_slice().to_vec(),
            animation: self.animation.to_option(),
            filter: self.filter.to_option(),
        }
    }

    /// Rebuild a scene from a validated draft.
    pub fn from_draft(draft: &CreationDraft) -> PizzaResult<Self> {
        draft.validate()?;
        Ok(Self {
            selection: SelectionState {
                topology: draft.topology,
                whole: SelectionSet::from_ids(draft.toppings.iter().copied()),
                left: SelectionSet::from_ids(draft.left_toppings.iter().copied()),
                right: SelectionSet::from_ids(draft.right_toppings.iter().copied()),
            },
            animation: AnimationMode::from_option(draft.animation),
            filter: FilterMode::from_option(draft.filter),
        })
    }

    /// Rebuild a scene from a stored creation.
    pub fn from_creation(creation: &SavedCreation) -> PizzaResult<Self> {
        Self::from_draft(&creation.draft)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/state.rs"]
mod tests;
