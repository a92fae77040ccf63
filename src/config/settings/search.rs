//! Search verb settings

use serde::{Deserialize, Serialize};

/// URL templates used by the `search` verb.
///
/// `{query}` is replaced by the percent-encoded query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_web_url")]
    pub web_url: String,

    #[serde(default = "default_image_url")]
    pub image_url: String,

    /// Leading phrase that turns a search into an image search
    #[serde(default = "default_image_phrase")]
    pub image_phrase: String,
}

fn default_web_url() -> String {
    "https://www.google.com/search?q={query}".to_string()
}

fn default_image_url() -> String {
    "https://www.google.com/search?q={query}&tbm=isch".to_string()
}

fn default_image_phrase() -> String {
    "images of ".to_string()
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            web_url: default_web_url(),
            image_url: default_image_url(),
            image_phrase: default_image_phrase(),
        }
    }
}
