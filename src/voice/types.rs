//! Dispatcher state and subscriber types.

use crate::error::DispatchError;

/// Recognition session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoiceState {
    /// Not listening
    #[default]
    Idle,
    /// Recognition requested and not yet ended by the engine
    Listening,
}

impl VoiceState {
    /// Returns true if listening for commands
    pub fn is_listening(&self) -> bool {
        matches!(self, VoiceState::Listening)
    }
}

impl std::fmt::Display for VoiceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VoiceState::Idle => write!(f, "Idle"),
            VoiceState::Listening => write!(f, "Listening"),
        }
    }
}

/// Transient session state owned by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    pub state: VoiceState,
    pub wake_word_enabled: bool,
}

impl SessionState {
    pub fn is_listening(&self) -> bool {
        self.state.is_listening()
    }
}

type Handler = Box<dyn FnMut()>;
type TextHandler = Box<dyn FnMut(&str)>;
type ErrorHandler = Box<dyn FnMut(&DispatchError)>;

/// Subscriber set for dispatcher lifecycle events.
///
/// Every slot is optional; an empty slot means the event is dropped.
#[derive(Default)]
pub struct DispatcherCallbacks {
    on_start: Option<Handler>,
    on_result: Option<TextHandler>,
    on_end: Option<Handler>,
    on_error: Option<ErrorHandler>,
}

impl DispatcherCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when the engine reports that recognition started
    pub fn on_start(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_start = Some(Box::new(handler));
        self
    }

    /// Called with every raw transcript, interim ones included
    pub fn on_result(mut self, handler: impl FnMut(&str) + 'static) -> Self {
        self.on_result = Some(Box::new(handler));
        self
    }

    /// Called when recognition ends, whatever the reason
    pub fn on_end(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_end = Some(Box::new(handler));
        self
    }

    /// Called for engine errors and for starting on an unsupported host
    pub fn on_error(mut self, handler: impl FnMut(&DispatchError) + 'static) -> Self {
        self.on_error = Some(Box::new(handler));
        self
    }

    pub(crate) fn start(&mut self) {
        if let Some(handler) = self.on_start.as_mut() {
            handler();
        }
    }

    pub(crate) fn result(&mut self, transcript: &str) {
        if let Some(handler) = self.on_result.as_mut() {
            handler(transcript);
        }
    }

    pub(crate) fn end(&mut self) {
        if let Some(handler) = self.on_end.as_mut() {
            handler();
        }
    }

    pub(crate) fn error(&mut self, error: &DispatchError) {
        if let Some(handler) = self.on_error.as_mut() {
            handler(error);
        }
    }
}

impl std::fmt::Debug for DispatcherCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatcherCallbacks")
            .field("on_start", &self.on_start.is_some())
            .field("on_result", &self.on_result.is_some())
            .field("on_end", &self.on_end.is_some())
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}
