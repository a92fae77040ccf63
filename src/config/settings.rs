//! Settings configuration types

mod browser;
mod recognizer;
mod search;
mod voice;

pub use browser::BrowserSettings;
pub use recognizer::RecognizerSettings;
pub use search::SearchSettings;
pub use voice::VoiceSettings;
