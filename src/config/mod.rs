//! Configuration loading and management

mod io;
mod settings;

pub use io::write_config;
pub use settings::{BrowserSettings, RecognizerSettings, SearchSettings, VoiceSettings};

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Wake-word settings
    #[serde(default)]
    pub voice: VoiceSettings,

    /// External speech recognizer
    #[serde(default)]
    pub recognizer: RecognizerSettings,

    /// Search verb URL templates
    #[serde(default)]
    pub search: SearchSettings,

    /// URL opener
    #[serde(default)]
    pub browser: BrowserSettings,
}
