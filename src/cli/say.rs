//! Say command implementation

use std::path::PathBuf;

use anyhow::Result;

use blade::voice::{Resolution, ResolutionOutcome};

use super::{build_dispatcher, load_config, stdout_history};

/// Run a transcript through normalize, wake-word gate and resolver
pub fn say_command(config_path: Option<PathBuf>, transcript: &str) -> Result<()> {
    let config = load_config(config_path)?;
    let dispatcher = build_dispatcher(&config, None, stdout_history());

    match dispatcher.process_transcript(transcript) {
        None => eprintln!(
            "Ignored: transcript does not start with the wake word \"{}\"",
            dispatcher.wake_word()
        ),
        Some(ResolutionOutcome::NoMatch) => eprintln!("No matching command"),
        Some(ResolutionOutcome::Executed(Resolution::Command { name })) => {
            tracing::debug!("Ran command '{}'", name);
        }
        Some(ResolutionOutcome::Executed(Resolution::Verb { verb, params })) => {
            tracing::debug!("Ran verb '{}' with '{}'", verb, params);
        }
    }

    Ok(())
}
