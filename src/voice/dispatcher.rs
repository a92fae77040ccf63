//! Voice dispatcher: recognition lifecycle plus the transcript pipeline.
//!
//! Every transcript event goes normalize -> wake-word gate -> resolver. All
//! failures are reported through the subscriber callbacks; nothing here
//! returns an error or panics into the engine's event loop.

use std::rc::Rc;

use tracing::{debug, info, warn};

use super::actions::{Command, CommandRegistry, Invocation};
use super::engine::{EngineEvent, RecognitionEngine, join_transcript};
use super::gate::{GateResult, WakeWordGate};
use super::normalize::normalize;
use super::resolver::{CommandResolver, ResolutionOutcome};
use super::search::UrlOpener;
use super::types::{DispatcherCallbacks, SessionState, VoiceState};
use crate::config::{Config, SearchSettings, VoiceSettings};
use crate::domain::HistorySink;
use crate::error::DispatchError;

/// Voice command dispatcher
pub struct VoiceDispatcher {
    /// `None` when the host has no recognition capability. Decided once at
    /// construction.
    engine: Option<Box<dyn RecognitionEngine>>,
    registry: CommandRegistry,
    gate: WakeWordGate,
    resolver: CommandResolver,
    callbacks: DispatcherCallbacks,
    state: VoiceState,
    last_transcript: Option<String>,
}

impl VoiceDispatcher {
    /// Create a dispatcher around `engine` (or none, on an unsupported host)
    pub fn new(
        engine: Option<Box<dyn RecognitionEngine>>,
        voice: &VoiceSettings,
        resolver: CommandResolver,
    ) -> Self {
        Self {
            engine,
            registry: CommandRegistry::new(),
            gate: WakeWordGate::new(&voice.wake_word, voice.wake_word_enabled),
            resolver,
            callbacks: DispatcherCallbacks::default(),
            state: VoiceState::Idle,
            last_transcript: None,
        }
    }

    /// Create a dispatcher from the loaded configuration
    pub fn from_config(
        config: &Config,
        engine: Option<Box<dyn RecognitionEngine>>,
        opener: Rc<dyn UrlOpener>,
    ) -> Self {
        let resolver = CommandResolver::new(config.search.clone(), opener);
        Self::new(engine, &config.voice, resolver)
    }

    /// Create a dispatcher with default settings
    pub fn with_defaults(
        engine: Option<Box<dyn RecognitionEngine>>,
        opener: Rc<dyn UrlOpener>,
    ) -> Self {
        let resolver = CommandResolver::new(SearchSettings::default(), opener);
        Self::new(engine, &VoiceSettings::default(), resolver)
    }

    /// Whether a recognition engine was available at construction
    pub fn is_supported(&self) -> bool {
        self.engine.is_some()
    }

    pub fn state(&self) -> VoiceState {
        self.state
    }

    pub fn is_listening(&self) -> bool {
        self.state.is_listening()
    }

    pub fn session(&self) -> SessionState {
        SessionState {
            state: self.state,
            wake_word_enabled: self.gate.is_enabled(),
        }
    }

    /// Replace the subscriber set
    pub fn set_callbacks(&mut self, callbacks: DispatcherCallbacks) {
        self.callbacks = callbacks;
    }

    /// Where verb side effects (searches) are reported
    pub fn set_history(&mut self, sink: Option<HistorySink>) {
        self.resolver.set_history(sink);
    }

    pub fn set_wake_word_enabled(&mut self, enabled: bool) {
        info!("Wake word {}", if enabled { "enabled" } else { "disabled" });
        self.gate.set_enabled(enabled);
    }

    pub fn wake_word_enabled(&self) -> bool {
        self.gate.is_enabled()
    }

    pub fn wake_word(&self) -> &str {
        self.gate.wake_word()
    }

    /// Register a command, replacing any existing one with the same name
    pub fn register_command(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        action: impl Fn(&Invocation<'_>) + 'static,
    ) {
        self.registry.register(name, description, action);
    }

    /// Registered commands in registration order
    pub fn commands(&self) -> &[Command] {
        self.registry.list()
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Run a command by exact (case-insensitive) name.
    /// Returns true if it existed and ran.
    pub fn execute_command(&self, name: &str) -> bool {
        self.registry.execute(name, None)
    }

    /// Most recent raw transcript seen
    pub fn last_transcript(&self) -> Option<&str> {
        self.last_transcript.as_deref()
    }

    /// Ask the engine to start listening
    pub fn start(&mut self) {
        let Some(engine) = self.engine.as_mut() else {
            warn!("Cannot start: speech recognition not supported");
            self.callbacks.error(&DispatchError::UnsupportedEngine);
            return;
        };

        if self.state.is_listening() {
            debug!("Already listening");
            return;
        }

        info!("Starting recognition");
        self.state = VoiceState::Listening;
        engine.start();
    }

    /// Ask the engine to stop. The state changes when the engine reports `End`.
    pub fn stop(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            info!("Stopping recognition");
            engine.stop();
        }
    }

    /// Stop when listening, start otherwise
    pub fn toggle(&mut self) {
        if self.state.is_listening() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Drain and handle pending engine events. Returns how many were handled.
    pub fn pump(&mut self) -> usize {
        let events = match self.engine.as_mut() {
            Some(engine) => engine.poll_events(),
            None => return 0,
        };

        let count = events.len();
        for event in events {
            self.handle_event(event);
        }
        count
    }

    /// Handle one engine event
    pub fn handle_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::Start => {
                debug!("Engine started");
                self.callbacks.start();
            }
            EngineEvent::Result(results) => {
                let transcript = join_transcript(&results);
                self.callbacks.result(&transcript);
                self.process_transcript(&transcript);
                self.last_transcript = Some(transcript);
            }
            EngineEvent::End => {
                info!("Recognition ended");
                self.state = VoiceState::Idle;
                self.callbacks.end();
            }
            EngineEvent::Error(code) => {
                warn!("Recognition error: {}", code);
                self.callbacks.error(&DispatchError::engine(code));
            }
        }
    }

    /// Run one raw transcript through normalize -> gate -> resolve.
    ///
    /// Returns `None` when the gate suppressed it.
    pub fn process_transcript(&self, raw: &str) -> Option<ResolutionOutcome> {
        let normalized = normalize(raw);

        let text = match self.gate.gate(&normalized) {
            GateResult::Pass(text) => text,
            GateResult::Suppressed => {
                debug!("Suppressed (no wake word): '{}'", normalized);
                return None;
            }
        };

        Some(self.resolver.resolve(&text, &self.registry))
    }
}

impl std::fmt::Debug for VoiceDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoiceDispatcher")
            .field("supported", &self.is_supported())
            .field("state", &self.state)
            .field("gate", &self.gate)
            .field("commands", &self.registry.len())
            .field("callbacks", &self.callbacks)
            .finish()
    }
}
