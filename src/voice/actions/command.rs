//! Command and Invocation types
//!
//! A command is a spoken name bound to an opaque action. The action receives
//! an [`Invocation`] carrying the optional parameter string and a read-only
//! view of the registry it was dispatched from.

use super::registry::CommandRegistry;

/// Callable bound to a command name
pub type CommandAction = Box<dyn Fn(&Invocation<'_>)>;

/// Context handed to a command action when it runs
#[derive(Clone, Copy)]
pub struct Invocation<'a> {
    /// Parameter text extracted from the utterance, if any
    pub params: Option<&'a str>,
    /// The registry the command was resolved from
    pub registry: &'a CommandRegistry,
}

impl<'a> Invocation<'a> {
    /// Parameters with empty strings treated as absent
    pub fn params(&self) -> Option<&'a str> {
        self.params.filter(|p| !p.trim().is_empty())
    }
}

/// A registered voice command
pub struct Command {
    /// Lower-cased lookup key
    key: String,
    /// Display name as registered
    name: String,
    description: String,
    action: CommandAction,
}

impl Command {
    /// Create a new command
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        action: impl Fn(&Invocation<'_>) + 'static,
    ) -> Self {
        let name = name.into();
        Self {
            key: name.to_lowercase(),
            name,
            description: description.into(),
            action: Box::new(action),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The case-insensitive key this command is registered under
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Check if `name` refers to this command (case-insensitive)
    pub fn matches(&self, name: &str) -> bool {
        self.key == name.to_lowercase()
    }

    /// Run the action
    pub fn invoke(&self, registry: &CommandRegistry, params: Option<&str>) {
        (self.action)(&Invocation { params, registry });
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.name, self.description)
    }
}
