//! Commands command implementation

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Result;

use blade::HistoryEntry;

use super::{build_dispatcher, load_config};

/// List the built-in commands in registration order
pub fn commands_command(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path)?;
    let dispatcher = build_dispatcher(&config, None, Rc::new(|_: HistoryEntry| {}));

    println!("Commands ({}):\n", dispatcher.commands().len());
    for command in dispatcher.commands() {
        println!("  {:<12} {}", command.name(), command.description());
    }

    if config.voice.wake_word_enabled {
        println!("\nPrefix with \"{}\" when speaking.", dispatcher.wake_word());
    }

    Ok(())
}
