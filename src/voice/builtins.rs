//! Built-in command set.
//!
//! Each command reports its outcome as a history entry. The `search web`
//! command is the only one that uses its parameters.

use std::rc::Rc;

use chrono::Local;

use super::dispatcher::VoiceDispatcher;
use super::search::{SearchQuery, UrlOpener};
use crate::config::SearchSettings;
use crate::domain::{HistoryEntry, HistorySink};

/// Names of the built-in commands, in registration order
pub const BUILTIN_COMMANDS: [&str; 7] = [
    "time",
    "date",
    "weather",
    "open notes",
    "search web",
    "toggle",
    "help",
];

/// Register the built-in commands on `dispatcher`
pub fn register_builtin_commands(
    dispatcher: &mut VoiceDispatcher,
    history: HistorySink,
    opener: Rc<dyn UrlOpener>,
    search: &SearchSettings,
) {
    let sink = Rc::clone(&history);
    dispatcher.register_command("time", "Shows current time", move |_| {
        let time = Local::now().format("%H:%M:%S");
        sink(HistoryEntry::command(format!("Current time is {time}")));
    });

    let sink = Rc::clone(&history);
    dispatcher.register_command("date", "Shows today's date", move |_| {
        let date = Local::now().format("%A, %B %-d, %Y");
        sink(HistoryEntry::command(format!("Today's date is {date}")));
    });

    // Needs a weather provider before it can do more than this
    let sink = Rc::clone(&history);
    dispatcher.register_command("weather", "Checks local weather", move |_| {
        sink(HistoryEntry::command(
            "Weather feature requires API configuration",
        ));
    });

    let sink = Rc::clone(&history);
    dispatcher.register_command("open notes", "Opens the notes application", move |_| {
        sink(HistoryEntry::command("Opening notes application"));
    });

    let sink = Rc::clone(&history);
    let search = search.clone();
    dispatcher.register_command("search web", "Starts a web search", move |inv| {
        match inv.params() {
            Some(query) => {
                let query = SearchQuery::Web(query.trim().to_string());
                opener.open_url(&query.url(&search));
                sink(HistoryEntry::command(query.describe()));
            }
            None => sink(HistoryEntry::command("No search query provided")),
        }
    });

    let sink = Rc::clone(&history);
    dispatcher.register_command("toggle", "Switches between modes", move |_| {
        sink(HistoryEntry::command("Toggling mode"));
    });

    let sink = history;
    dispatcher.register_command("help", "Shows all available commands", move |inv| {
        sink(HistoryEntry::command(format!(
            "Available commands:\n{}",
            inv.registry.describe()
        )));
    });
}
