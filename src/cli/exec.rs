//! Exec command implementation

use std::path::PathBuf;

use anyhow::{Result, bail};

use super::{build_dispatcher, load_config, stdout_history};

/// Run one command by exact (case-insensitive) name
pub fn exec_command(config_path: Option<PathBuf>, name: &str) -> Result<()> {
    let config = load_config(config_path)?;
    let dispatcher = build_dispatcher(&config, None, stdout_history());

    if !dispatcher.execute_command(name) {
        bail!(
            "Unknown command: {}\nRun `blade commands` to list available commands.",
            name
        );
    }

    Ok(())
}
