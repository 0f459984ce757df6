/// Convenience result type used across pizzaiolo.
pub type PizzaResult<T> = Result<T, PizzaError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum PizzaError {
    /// Invalid user-provided data (saved creations, options, canvas sizes).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing or filtering a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors raised by frame sinks while encoding exported frames.
    #[error("encode error: {0}")]
    Encode(String),

    /// Persistence or authorization failures reported by a creation store.
    #[error("store error: {0}")]
    Store(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PizzaError {
    /// Build a [`PizzaError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PizzaError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`PizzaError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`PizzaError::Store`] value.
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// Build a [`PizzaError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
