//! Error types reported by the dispatcher.
//!
//! None of these cross the dispatch boundary as `Err`. They are delivered to
//! the `on_error` subscriber so the engine's event loop never unwinds.

/// Failures surfaced through the dispatcher's error callback
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// The host has no speech recognition capability
    #[error("Speech recognition not supported")]
    UnsupportedEngine,

    /// Opaque error code reported by the recognition engine
    #[error("{0}")]
    Engine(String),
}

impl DispatchError {
    /// Wrap an engine-reported code verbatim
    pub fn engine(code: impl Into<String>) -> Self {
        Self::Engine(code.into())
    }
}
