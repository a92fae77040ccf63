//! Wake-word gate.
//!
//! Decides whether a normalized transcript is looked at for commands at all.
//! With wake-word mode on, only transcripts that begin with the wake word pass,
//! and the wake word itself is stripped before resolution.

use super::normalize::{normalize, strip_word_prefix};

/// Outcome of gating one normalized transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateResult {
    /// Not eligible for resolution
    Suppressed,
    /// Eligible; carries the text to resolve
    Pass(String),
}

impl GateResult {
    /// The text to resolve, if the transcript passed
    pub fn remainder(&self) -> Option<&str> {
        match self {
            GateResult::Pass(rest) => Some(rest),
            GateResult::Suppressed => None,
        }
    }
}

/// Wake-word gate state
#[derive(Debug, Clone)]
pub struct WakeWordGate {
    wake_word: String,
    enabled: bool,
}

impl WakeWordGate {
    /// Create a gate. The wake word is normalized once here.
    pub fn new(wake_word: &str, enabled: bool) -> Self {
        Self {
            wake_word: normalize(wake_word),
            enabled,
        }
    }

    pub fn wake_word(&self) -> &str {
        &self.wake_word
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Gate a transcript that has already been through [`normalize`].
    ///
    /// An empty wake word gates nothing, as if the mode were off.
    pub fn gate(&self, normalized: &str) -> GateResult {
        if !self.enabled || self.wake_word.is_empty() {
            return GateResult::Pass(normalized.to_string());
        }

        match strip_word_prefix(normalized, &self.wake_word) {
            Some(rest) if !rest.is_empty() => GateResult::Pass(rest.to_string()),
            _ => GateResult::Suppressed,
        }
    }
}
