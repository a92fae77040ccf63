//! Wake-word settings

use serde::{Deserialize, Serialize};

/// Wake-word settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// Word that must prefix an utterance before it is treated as a command.
    /// Compared case-insensitively after trimming.
    #[serde(default = "default_wake_word")]
    pub wake_word: String,

    /// Require the wake word (when false, every utterance is a command candidate)
    #[serde(default = "default_wake_word_enabled")]
    pub wake_word_enabled: bool,
}

fn default_wake_word() -> String {
    "blade".to_string()
}

fn default_wake_word_enabled() -> bool {
    true
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            wake_word: default_wake_word(),
            wake_word_enabled: default_wake_word_enabled(),
        }
    }
}
