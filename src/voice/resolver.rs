//! Command resolution.
//!
//! Gated text is resolved in two phases, first success wins:
//!
//! 1. Exact match: the whole text equals a registered command name.
//! 2. Verb prefix: the text starts with one of a fixed list of lead verbs and
//!    the rest of the text becomes the verb's parameters.
//!
//! Exact matches always win, so a command named like a verb phrase (e.g.
//! "search web") shadows the `search` verb for that exact utterance.

use std::rc::Rc;

use tracing::debug;

use super::actions::CommandRegistry;
use super::normalize::strip_word_prefix;
use super::search::{SearchQuery, UrlOpener};
use crate::config::SearchSettings;
use crate::domain::{HistoryEntry, HistorySink};

/// Lead verbs recognized by the fallback phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Search,
    Open,
    Show,
    Time,
    Date,
    Weather,
    Help,
}

impl Verb {
    /// Verbs in match priority order.
    ///
    /// Only the first verb the text starts with is tried; resolution stops
    /// there even if that verb has no effect. Add new verbs at the position
    /// where they should win.
    pub const PRIORITY: [Verb; 7] = [
        Verb::Search,
        Verb::Open,
        Verb::Show,
        Verb::Time,
        Verb::Date,
        Verb::Weather,
        Verb::Help,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Search => "search",
            Verb::Open => "open",
            Verb::Show => "show",
            Verb::Time => "time",
            Verb::Date => "date",
            Verb::Weather => "weather",
            Verb::Help => "help",
        }
    }

    /// Verbs that run the registry command of the same name, ignoring parameters
    pub fn delegates_to_command(self) -> bool {
        matches!(self, Verb::Time | Verb::Date | Verb::Weather | Verb::Help)
    }

    /// Find the first verb `text` starts with, returning it with the trimmed rest
    pub fn match_prefix(text: &str) -> Option<(Verb, &str)> {
        Self::PRIORITY
            .iter()
            .find_map(|verb| strip_word_prefix(text, verb.as_str()).map(|rest| (*verb, rest)))
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a successful resolution matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A registered command matched the whole text
    Command { name: String },
    /// A lead verb matched; `params` is the rest of the text
    Verb { verb: Verb, params: String },
}

/// Result of resolving one gated transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    Executed(Resolution),
    /// Nothing matched. Expected for ordinary speech; not an error.
    NoMatch,
}

impl ResolutionOutcome {
    pub fn is_executed(&self) -> bool {
        matches!(self, ResolutionOutcome::Executed(_))
    }
}

/// Resolves gated text against a registry and runs the match
pub struct CommandResolver {
    search: SearchSettings,
    opener: Rc<dyn UrlOpener>,
    history: Option<HistorySink>,
}

impl CommandResolver {
    pub fn new(search: SearchSettings, opener: Rc<dyn UrlOpener>) -> Self {
        Self {
            search,
            opener,
            history: None,
        }
    }

    /// Report verb side effects (searches) to `sink`
    pub fn with_history(mut self, sink: HistorySink) -> Self {
        self.history = Some(sink);
        self
    }

    pub fn set_history(&mut self, sink: Option<HistorySink>) {
        self.history = sink;
    }

    /// Resolve `text` (normalized, wake word already stripped) and run the match
    pub fn resolve(&self, text: &str, registry: &CommandRegistry) -> ResolutionOutcome {
        if let Some(command) = registry.iter().find(|c| c.key() == text) {
            debug!("Exact match: '{}'", command.name());
            command.invoke(registry, None);
            return ResolutionOutcome::Executed(Resolution::Command {
                name: command.name().to_string(),
            });
        }

        let Some((verb, params)) = Verb::match_prefix(text) else {
            debug!("No command matched '{}'", text);
            return ResolutionOutcome::NoMatch;
        };

        debug!("Verb match: '{}' params='{}'", verb, params);
        self.dispatch_verb(verb, params, registry);

        ResolutionOutcome::Executed(Resolution::Verb {
            verb,
            params: params.to_string(),
        })
    }

    fn dispatch_verb(&self, verb: Verb, params: &str, registry: &CommandRegistry) {
        match verb {
            Verb::Search => self.search(params),
            v if v.delegates_to_command() => {
                if let Some(command) = registry.lookup(v.as_str()) {
                    command.invoke(registry, None);
                } else {
                    debug!("Verb '{}' has no registered command", v);
                }
            }
            // open/show: reserved
            _ => {}
        }
    }

    fn search(&self, params: &str) {
        let query = SearchQuery::parse(params, &self.search.image_phrase);
        // An empty query still opens the (blank) search page
        self.opener.open_url(&query.url(&self.search));

        if query.is_empty() {
            self.emit(HistoryEntry::command("No search query provided"));
        } else {
            self.emit(HistoryEntry::command(query.describe()));
        }
    }

    fn emit(&self, entry: HistoryEntry) {
        if let Some(sink) = &self.history {
            sink(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::voice::search::RecordingOpener;

    struct Fixture {
        registry: CommandRegistry,
        resolver: CommandResolver,
        opener: Rc<RecordingOpener>,
        ran: Rc<RefCell<Vec<String>>>,
        history: Rc<RefCell<Vec<HistoryEntry>>>,
    }

    fn fixture(names: &[&str]) -> Fixture {
        let ran = Rc::new(RefCell::new(Vec::new()));
        let mut registry = CommandRegistry::new();
        for name in names {
            let ran = Rc::clone(&ran);
            let tag = name.to_string();
            registry.register(*name, "test command", move |inv| {
                let entry = match inv.params {
                    Some(p) => format!("{tag}({p})"),
                    None => tag.clone(),
                };
                ran.borrow_mut().push(entry);
            });
        }

        let opener = Rc::new(RecordingOpener::new());
        let history = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&history);
        let resolver = CommandResolver::new(SearchSettings::default(), opener.clone())
            .with_history(Rc::new(move |entry: HistoryEntry| sink.borrow_mut().push(entry)));

        Fixture {
            registry,
            resolver,
            opener,
            ran,
            history,
        }
    }

    #[test]
    fn test_exact_match_wins_over_verb() {
        let f = fixture(&["search web"]);
        let outcome = f.resolver.resolve("search web", &f.registry);

        assert_eq!(
            outcome,
            ResolutionOutcome::Executed(Resolution::Command {
                name: "search web".to_string()
            })
        );
        assert_eq!(*f.ran.borrow(), vec!["search web".to_string()]);
        assert!(f.opener.opened().is_empty());
    }

    #[test]
    fn test_search_images_extracts_query() {
        let f = fixture(&[]);
        let outcome = f.resolver.resolve("search images of cats", &f.registry);

        assert_eq!(
            outcome,
            ResolutionOutcome::Executed(Resolution::Verb {
                verb: Verb::Search,
                params: "images of cats".to_string()
            })
        );
        assert_eq!(
            f.opener.opened(),
            vec!["https://www.google.com/search?q=cats&tbm=isch".to_string()]
        );
        assert_eq!(f.history.borrow()[0].message, "Searching images of: cats");
    }

    #[test]
    fn test_search_web_extracts_query() {
        let f = fixture(&[]);
        f.resolver.resolve("search cats", &f.registry);
        assert_eq!(
            f.opener.opened(),
            vec!["https://www.google.com/search?q=cats".to_string()]
        );
        assert_eq!(f.history.borrow()[0].message, "Searching for: cats");
    }

    #[test]
    fn test_bare_search_opens_blank_search_page() {
        let f = fixture(&[]);
        let outcome = f.resolver.resolve("search", &f.registry);
        assert!(outcome.is_executed());
        assert_eq!(
            f.opener.opened(),
            vec!["https://www.google.com/search?q=".to_string()]
        );
        assert_eq!(f.history.borrow()[0].message, "No search query provided");
    }

    #[test]
    fn test_delegating_verb_ignores_params() {
        let f = fixture(&["time", "help"]);
        let outcome = f.resolver.resolve("time please", &f.registry);

        assert_eq!(
            outcome,
            ResolutionOutcome::Executed(Resolution::Verb {
                verb: Verb::Time,
                params: "please".to_string()
            })
        );
        assert_eq!(*f.ran.borrow(), vec!["time".to_string()]);
    }

    #[test]
    fn test_delegating_verb_without_command_is_silent() {
        let f = fixture(&["time"]);
        let outcome = f.resolver.resolve("weather tomorrow", &f.registry);
        assert!(outcome.is_executed());
        assert!(f.ran.borrow().is_empty());
    }

    #[test]
    fn test_first_matching_verb_stops_resolution() {
        // "show" matches before "time"; show is reserved so nothing runs,
        // and the later verb is never tried.
        let f = fixture(&["time"]);
        let outcome = f.resolver.resolve("show time", &f.registry);
        assert_eq!(
            outcome,
            ResolutionOutcome::Executed(Resolution::Verb {
                verb: Verb::Show,
                params: "time".to_string()
            })
        );
        assert!(f.ran.borrow().is_empty());
    }

    #[test]
    fn test_unknown_text_is_no_match() {
        let f = fixture(&["time", "date", "help"]);
        assert_eq!(
            f.resolver.resolve("xyzzy", &f.registry),
            ResolutionOutcome::NoMatch
        );
        assert_eq!(
            f.resolver.resolve("timetable", &f.registry),
            ResolutionOutcome::NoMatch
        );
        assert!(f.ran.borrow().is_empty());
        assert!(f.history.borrow().is_empty());
        assert!(f.opener.opened().is_empty());
    }

    #[test]
    fn test_verb_priority_order() {
        assert_eq!(Verb::match_prefix("open notes"), Some((Verb::Open, "notes")));
        assert_eq!(Verb::match_prefix("help"), Some((Verb::Help, "")));
        assert_eq!(Verb::match_prefix("notes"), None);
        let names: Vec<&str> = Verb::PRIORITY.iter().map(|v| v.as_str()).collect();
        assert_eq!(
            names,
            vec!["search", "open", "show", "time", "date", "weather", "help"]
        );
    }
}
