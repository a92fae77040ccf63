//! Shared test utilities for dispatcher integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use tempfile::TempDir;

use blade::config::Config;
use blade::voice::{
    EngineHandle, QueuedEngine, RecordingOpener, VoiceDispatcher, register_builtin_commands,
};
use blade::{HistoryEntry, HistorySink};

/// Collected history entries
pub type History = Rc<RefCell<Vec<HistoryEntry>>>;

/// A dispatcher wired to a queued engine, a recording browser and an
/// in-memory history
pub struct Harness {
    pub dispatcher: VoiceDispatcher,
    pub engine: EngineHandle,
    pub opener: Rc<RecordingOpener>,
    pub history: History,
}

impl Harness {
    pub fn new(config: &Config) -> Self {
        let (engine, handle) = QueuedEngine::new();
        let opener = Rc::new(RecordingOpener::new());
        let history: History = Rc::new(RefCell::new(Vec::new()));

        let entries = Rc::clone(&history);
        let sink: HistorySink =
            Rc::new(move |entry: HistoryEntry| entries.borrow_mut().push(entry));

        let mut dispatcher =
            VoiceDispatcher::from_config(config, Some(Box::new(engine)), opener.clone());
        dispatcher.set_history(Some(Rc::clone(&sink)));
        register_builtin_commands(&mut dispatcher, sink, opener.clone(), &config.search);

        Self {
            dispatcher,
            engine: handle,
            opener,
            history,
        }
    }

    /// Feed one final transcript and pump the dispatcher
    pub fn say(&mut self, transcript: &str) {
        self.engine.push_transcript(transcript);
        self.dispatcher.pump();
    }

    /// History messages in order
    pub fn messages(&self) -> Vec<String> {
        self.history
            .borrow()
            .iter()
            .map(|e| e.message.clone())
            .collect()
    }
}

/// Creates a temporary directory holding `config.toml` with `content`
pub fn write_temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}
