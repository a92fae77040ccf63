//! Voice command dispatch
//!
//! This module turns a stream of speech-to-text transcripts into command
//! executions:
//! 1. Recognition engines deliver lifecycle and transcript events
//! 2. Transcripts are normalized and passed through the wake-word gate
//! 3. Gated text is resolved against the command registry (exact name first,
//!    then lead verbs with parameters) and the match runs
//!
//! Architecture:
//! - VoiceDispatcher: owns the session, relays events to subscribers
//! - WakeWordGate: decides whether a transcript is a command candidate
//! - CommandResolver: exact and verb-prefix matching
//! - CommandRegistry: ordered, case-insensitive command store
//! - RecognitionEngine: seam to the speech-to-text engine

pub mod actions;
pub mod builtins;
mod dispatcher;
pub mod engine;
mod gate;
mod normalize;
mod resolver;
pub mod search;
mod types;


// Re-export from actions
pub use actions::{Command, CommandAction, CommandRegistry, Invocation};

// Re-export from builtins
pub use builtins::{BUILTIN_COMMANDS, register_builtin_commands};

// Re-export from dispatcher
pub use dispatcher::VoiceDispatcher;

// Re-export from engine
pub use engine::{
    Alternative, EngineEvent, EngineHandle, LineEngine, LineSource, QueuedEngine,
    RecognitionEngine, RecognitionResult,
};

// Re-export from gate
pub use gate::{GateResult, WakeWordGate};

// Re-export from normalize
pub use normalize::normalize;

// Re-export from resolver
pub use resolver::{CommandResolver, Resolution, ResolutionOutcome, Verb};

// Re-export from search
pub use search::{RecordingOpener, SearchQuery, SystemBrowser, UrlOpener};

// Re-export from types
pub use types::{DispatcherCallbacks, SessionState, VoiceState};
