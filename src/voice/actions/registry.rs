//! CommandRegistry - ordered registry of voice commands
//!
//! Commands are kept in registration order (the help listing relies on it)
//! and are unique by lower-cased name. Registering a name that already exists
//! replaces that entry in place, so its position in the listing is unchanged.

use tracing::debug;

use super::command::{Command, Invocation};

/// Registry of voice commands
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command, replacing any existing one with the same name
    pub fn register(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        action: impl Fn(&Invocation<'_>) + 'static,
    ) {
        self.insert(Command::new(name, description, action));
    }

    /// Add a prebuilt command, replacing any existing one with the same key
    pub fn insert(&mut self, command: Command) {
        match self.commands.iter_mut().find(|c| c.key() == command.key()) {
            Some(existing) => {
                debug!("Replacing voice command '{}'", existing.name());
                *existing = command;
            }
            None => {
                debug!("Registered voice command '{}'", command.name());
                self.commands.push(command);
            }
        }
    }

    /// Case-insensitive exact lookup
    pub fn lookup(&self, name: &str) -> Option<&Command> {
        let key = name.to_lowercase();
        self.commands.iter().find(|c| c.key() == key)
    }

    /// Run the command registered under `name`.
    ///
    /// Returns true if the command existed and ran.
    pub fn execute(&self, name: &str, params: Option<&str>) -> bool {
        match self.lookup(name) {
            Some(command) => {
                command.invoke(self, params);
                true
            }
            None => false,
        }
    }

    /// All commands in registration order
    pub fn list(&self) -> &[Command] {
        &self.commands
    }

    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Render the registry as `name - description` lines
    pub fn describe(&self) -> String {
        self.commands
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
