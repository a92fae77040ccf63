//! Init command implementation

use anyhow::{Result, bail};
use std::path::PathBuf;

use blade::config::{Config, write_config};

/// Default configuration content for blade init
pub const DEFAULT_CONFIG: &str = r#"# BLADE Configuration
# ===================
#
# Speak "<wake word> <command>" to run a command, e.g. "blade time" or
# "blade search rust tutorials". Run `blade commands` for the full list.

# ============================================================================
# VOICE - Wake-word gate
# ============================================================================
#
# Available options:
#   wake_word         - Word that must start every command (default: "blade")
#   wake_word_enabled - Require the wake word (default: true)

[voice]
wake_word = "blade"
wake_word_enabled = true

# ============================================================================
# RECOGNIZER - Speech-to-text program
# ============================================================================
#
# Any program that prints one transcript per line on stdout.
# Leave `command` empty to type transcripts on stdin instead.

[recognizer]
command = ""
args = []

# ============================================================================
# SEARCH - URL templates for the "search" verb
# ============================================================================
#
# {query} is replaced with the percent-encoded search text.
# Queries starting with `image_phrase` use `image_url`.

[search]
web_url = "https://www.google.com/search?q={query}"
image_url = "https://www.google.com/search?q={query}&tbm=isch"
image_phrase = "images of "

# ============================================================================
# BROWSER - How URLs are opened
# ============================================================================
#
# Empty uses the platform default (open / xdg-open / start).

[browser]
command = ""
"#;

/// Initialize a new BLADE configuration
/// By default creates the global config at ~/.blade/config.toml
/// Use --config to specify a custom path
pub fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    write_config(&config_path, DEFAULT_CONFIG)?;
    println!("Created: {}", config_path.display());

    Ok(())
}
