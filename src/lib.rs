//! BLADE - voice command dispatcher
//!
//! BLADE listens to a continuous stream of speech-to-text transcripts and maps
//! recognized utterances to registered commands.
//!
//! ## Pipeline
//!
//! 1. A recognition engine emits transcript and lifecycle events
//! 2. Transcripts are normalized (lower-cased, trimmed)
//! 3. The wake-word gate drops anything not addressed to BLADE (e.g. "blade time")
//! 4. The resolver matches the rest against registered commands, falling back to
//!    lead verbs like `search` that take parameters

pub mod config;
pub mod domain;
pub mod error;
pub mod voice;

pub use domain::*;
pub use error::DispatchError;
