use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::foundation::error::{PizzaError, PizzaResult};
use crate::scene::creation::{CreationDraft, CreationId, SavedCreation, UserId};

/// Persistence and ownership boundary for saved creations.
///
/// Failures are reported as [`PizzaError::Store`] or [`PizzaError::Validation`]; callers keep
/// their render state regardless.
pub trait CreationStore {
    /// Creations owned by `user`, newest first.
    fn list(&self, user: &UserId) -> PizzaResult<Vec<SavedCreation>>;
    /// Validate and store `draft` for `user`.
    fn create(&mut self, user: &UserId, draft: CreationDraft) -> PizzaResult<SavedCreation>;
    /// Delete creation `id`, which must belong to `user`.
    fn delete(&mut self, user: &UserId, id: CreationId) -> PizzaResult<()>;
}

/// Source of creation timestamps, in unix milliseconds.
pub type Clock = Box<dyn Fn() -> u64 + Send + Sync>;

fn system_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

struct Row {
    owner: UserId,
    creation: SavedCreation,
}

/// Process-local [`CreationStore`].
pub struct InMemoryCreationStore {
    rows: BTreeMap<CreationId, Row>,
    next_id: u64,
    clock: Clock,
}

impl std::fmt::Debug for InMemoryCreationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryCreationStore")
            .field("rows", &self.rows.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl Default for InMemoryCreationStore {
    fn default() -> Self {
        Self::with_clock(Box::new(system_millis))
    }
}

impl InMemoryCreationStore {
    /// Empty store stamped by the system clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store stamped by `clock`.
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
            clock,
        }
    }

    fn check_user(user: &UserId) -> PizzaResult<()> {
        if user.0.trim().is_empty() {
            return Err(PizzaError::store("not signed in"));
        }
        Ok(())
    }
}

impl CreationStore for InMemoryCreationStore {
    #[tracing::instrument(level = "debug", skip(self, user), fields(user = %user.0))]
    fn list(&self, user: &UserId) -> PizzaResult<Vec<SavedCreation>> {
        Self::check_user(user)?;
        let mut out: Vec<SavedCreation> = self
            .rows
            .values()
            .filter(|row| &row.owner == user)
            .map(|row| row.creation.clone())
            .collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(out)
    }

    #[tracing::instrument(level = "debug", skip(self, user, draft), fields(user = %user.0))]
    fn create(&mut self, user: &UserId, mut draft: CreationDraft) -> PizzaResult<SavedCreation> {
        Self::check_user(user)?;
        draft.validate()?;
        draft.name = draft.name.trim().to_owned();

        let id = CreationId(self.next_id);
        self.next_id += 1;
        let creation = SavedCreation {
            id,
            draft,
            created_at: (self.clock)(),
        };
        self.rows.insert(
            id,
            Row {
                owner: user.clone(),
                creation: creation.clone(),
            },
        );
        tracing::debug!(id = id.0, "creation stored");
        Ok(creation)
    }

    #[tracing::instrument(level = "debug", skip(self, user), fields(user = %user.0))]
    fn delete(&mut self, user: &UserId, id: CreationId) -> PizzaResult<()> {
        Self::check_user(user)?;
        match self.rows.get(&id) {
            None => Err(PizzaError::store(format!("creation {} not found", id.0))),
            Some(row) if &row.owner != user => Err(PizzaError::store(format!(
                "creation {} belongs to another user",
                id.0
            ))),
            Some(_) => {
                self.rows.remove(&id);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/store.rs"]
mod tests;
