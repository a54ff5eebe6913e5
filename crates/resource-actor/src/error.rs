//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself, as opposed to the per-entity error
//! enums. Entity failures travel inside [`FrameworkError::EntityError`].

/// Errors that can occur within the resource actor framework.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// The actor's request channel is closed (the actor task has stopped).
    #[error("Actor closed")]
    ActorClosed,
    /// The actor dropped the response channel without answering.
    #[error("Actor dropped response channel")]
    ActorDropped,
    /// No entity is stored under the requested id.
    #[error("Item not found: {0}")]
    NotFound(String),
    /// A lifecycle hook or action handler returned the entity's own error.
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Whether this error is a store miss rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FrameworkError::NotFound(_))
    }
}
