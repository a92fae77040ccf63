//! CLI command implementations

pub mod commands;
pub mod exec;
pub mod init;
pub mod listen;
pub mod say;

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Result;

use blade::config::Config;
use blade::voice::{
    RecognitionEngine, SystemBrowser, UrlOpener, VoiceDispatcher, register_builtin_commands,
};
use blade::{HistoryEntry, HistorySink};

/// Load the config at `path`, or the global one (created on first use)
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(&path),
        None => Config::load(),
    }
}

/// History sink that prints each entry to stdout
pub fn stdout_history() -> HistorySink {
    Rc::new(|entry: HistoryEntry| println!("{}", entry))
}

/// Build a dispatcher with the built-in commands and history going to `history`
pub fn build_dispatcher(
    config: &Config,
    engine: Option<Box<dyn RecognitionEngine>>,
    history: HistorySink,
) -> VoiceDispatcher {
    let opener: Rc<dyn UrlOpener> = Rc::new(SystemBrowser::new(config.browser.command()));
    let mut dispatcher = VoiceDispatcher::from_config(config, engine, Rc::clone(&opener));
    dispatcher.set_history(Some(Rc::clone(&history)));
    register_builtin_commands(&mut dispatcher, history, opener, &config.search);
    dispatcher
}
