use std::collections::HashSet;

use crate::animation::mode::AnimationMode;
use crate::decor::registry::DecorationId;
use crate::effects::filter::FilterMode;
use crate::foundation::error::{PizzaError, PizzaResult};
use crate::scene::selection::{MAX_SELECTION, Topology};

/// Longest allowed creation name, in characters, after trimming.
pub const MAX_NAME_CHARS: usize = 50;

/// Identifier assigned by a [`CreationStore`](crate::scene::store::CreationStore).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct CreationId(pub u64);

/// Opaque identity of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    /// Wrap a user identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// A creation as submitted for saving, before the store assigns an id and timestamp.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationDraft {
    /// Display name.
    pub name: String,
    /// Whole or half topology.
    #[serde(default)]
    pub topology: Topology,
    /// Whole-topology selection.
    #[serde(default)]
    pub toppings: Vec<DecorationId>,
    /// Left-half selection.
    #[serde(default)]
    pub left_toppings: Vec<DecorationId>,
    /// Right-half selection.
    #[serde(default)]
    pub right_toppings: Vec<DecorationId>,
    /// Active animation, if any.
    #[serde(default)]
    pub animation: Option<AnimationMode>,
    /// Active filter, if any.
    #[serde(default)]
    pub filter: Option<FilterMode>,
}

fn check_set(field: &str, ids: &[DecorationId]) -> PizzaResult<()> {
    if ids.len() > MAX_SELECTION {
        return Err(PizzaError::validation(format!(
            "{field} has {} entries, at most {MAX_SELECTION} allowed",
            ids.len()
        )));
    }
    let mut seen = HashSet::with_capacity(ids.len());
    if let Some(dup) = ids.iter().find(|id| !seen.insert(**id)) {
        return Err(PizzaError::validation(format!(
            "{field} lists {dup:?} more than once"
        )));
    }
    Ok(())
}

impl CreationDraft {
    /// Check the record before it is stored or loaded.
    pub fn validate(&self) -> PizzaResult<()> {
        let name_len = self.name.trim().chars().count();
        if name_len == 0 {
            return Err(PizzaError::validation("name must not be empty"));
        }
        if name_len > MAX_NAME_CHARS {
            return Err(PizzaError::validation(format!(
                "name is {name_len} characters, at most {MAX_NAME_CHARS} allowed"
            )));
        }
        check_set("toppings", &self.toppings)?;
        check_set("leftToppings", &self.left_toppings)?;
        check_set("rightToppings", &self.right_toppings)?;
        Ok(())
    }
}

/// A stored creation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedCreation {
    /// Store-assigned id.
    pub id: CreationId,
    /// Saved content.
    #[serde(flatten)]
    pub draft: CreationDraft,
    /// Unix time in milliseconds when the creation was stored.
    pub created_at: u64,
}

impl SavedCreation {
    /// Parse and validate a creation from JSON.
    pub fn from_json(text: &str) -> PizzaResult<Self> {
        let creation: Self = serde_json::from_str(text)
            .map_err(|e| PizzaError::serde(format!("parse creation: {e}")))?;
        creation.draft.validate()?;
        Ok(creation)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> PizzaResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PizzaError::serde(format!("serialize creation: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/creation.rs"]
mod tests;
