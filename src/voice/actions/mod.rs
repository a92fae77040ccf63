//! Voice commands - mapping spoken names to actions
//!
//! This module defines the command type and the registry the resolver
//! matches transcripts against.
//!
//! Example registrations:
//! - "time" -> reports the current time
//! - "open notes" -> opens the notes application
//! - "search web" -> starts a web search with the spoken query

mod command;
mod registry;

pub use command::{Command, CommandAction, Invocation};
pub use registry::CommandRegistry;

#[cfg(test)]
mod tests;
