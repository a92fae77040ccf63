//! Browser settings

use serde::{Deserialize, Serialize};

/// How URLs are opened
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrowserSettings {
    /// Program that receives the URL as its only argument.
    /// Empty uses the platform default (`open`, `xdg-open`, `cmd /C start`).
    #[serde(default)]
    pub command: String,
}

impl BrowserSettings {
    pub fn command(&self) -> Option<String> {
        let command = self.command.trim();
        (!command.is_empty()).then(|| command.to_string())
    }
}
