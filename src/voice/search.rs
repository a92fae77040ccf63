//! Search queries and the "open URL" side effect.
//!
//! The resolver only builds the URL; opening it is delegated to a
//! [`UrlOpener`] so hosts (and tests) decide what "open" means.

use std::cell::RefCell;
use std::thread::JoinHandle;

use tracing::{debug, warn};

use crate::config::SearchSettings;

/// Placeholder replaced by the percent-encoded query in URL templates
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// A search request extracted from the parameters of the `search` verb
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Generic web search
    Web(String),
    /// Image search ("search images of ...")
    Images(String),
}

impl SearchQuery {
    /// Classify `params`: a leading image phrase selects an image search.
    ///
    /// `params` is normalized text, so the phrase is lower-cased to match.
    /// It is not trimmed: its trailing space is part of the phrase.
    pub fn parse(params: &str, image_phrase: &str) -> Self {
        let image_phrase = image_phrase.to_lowercase();
        if !image_phrase.is_empty() {
            if let Some(rest) = params.strip_prefix(image_phrase.as_str()) {
                return SearchQuery::Images(rest.trim().to_string());
            }
        }
        SearchQuery::Web(params.trim().to_string())
    }

    /// The raw (unencoded) query text
    pub fn query(&self) -> &str {
        match self {
            SearchQuery::Web(q) | SearchQuery::Images(q) => q,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query().is_empty()
    }

    /// Build the URL for this query from the configured templates
    pub fn url(&self, settings: &SearchSettings) -> String {
        let template = match self {
            SearchQuery::Web(_) => &settings.web_url,
            SearchQuery::Images(_) => &settings.image_url,
        };
        search_url(template, self.query())
    }

    /// History line describing the search
    pub fn describe(&self) -> String {
        match self {
            SearchQuery::Web(q) => format!("Searching for: {q}"),
            SearchQuery::Images(q) => format!("Searching images of: {q}"),
        }
    }
}

/// Substitute the percent-encoded `query` into `template`
pub fn search_url(template: &str, query: &str) -> String {
    template.replace(QUERY_PLACEHOLDER, &urlencoding::encode(query))
}

/// Something that can open a URL (a browser, usually)
pub trait UrlOpener {
    fn open_url(&self, url: &str);
}

/// Opens URLs with the platform's default handler or a configured command
#[derive(Debug, Clone, Default)]
pub struct SystemBrowser {
    command: Option<String>,
}

impl SystemBrowser {
    /// Use `command` instead of the platform default when non-empty
    pub fn new(command: Option<String>) -> Self {
        Self {
            command: command.filter(|c| !c.trim().is_empty()),
        }
    }
}

impl UrlOpener for SystemBrowser {
    fn open_url(&self, url: &str) {
        debug!("Opening URL: {}", url);

        let command = match &self.command {
            Some(command) => {
                let mut cmd = std::process::Command::new(command);
                cmd.arg(url);
                cmd
            }
            None => platform_open_command(url),
        };

        if let Err(e) = spawn_reaped(command) {
            warn!("Failed to open URL {}: {}", url, e);
        }
    }
}

/// Spawn `command` and reap it on a detached thread
fn spawn_reaped(mut command: std::process::Command) -> std::io::Result<JoinHandle<()>> {
    let mut child = command.spawn()?;
    Ok(std::thread::spawn(move || {
        let _ = child.wait();
    }))
}

#[cfg(target_os = "macos")]
fn platform_open_command(url: &str) -> std::process::Command {
    let mut cmd = std::process::Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(target_os = "windows")]
fn platform_open_command(url: &str) -> std::process::Command {
    let mut cmd = std::process::Command::new("cmd");
    cmd.args(["/C", "start", "", url]);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_open_command(url: &str) -> std::process::Command {
    let mut cmd = std::process::Command::new("xdg-open");
    cmd.arg(url);
    cmd
}

/// Records opened URLs instead of opening them
#[derive(Debug, Default)]
pub struct RecordingOpener {
    opened: RefCell<Vec<String>>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs opened so far, oldest first
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl UrlOpener for RecordingOpener {
    fn open_url(&self, url: &str) {
        self.opened.borrow_mut().push(url.to_string());
    }
}
