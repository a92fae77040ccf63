//! Listen command implementation

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info};

use blade::HistoryEntry;
use blade::voice::{DispatcherCallbacks, LineEngine, LineSource, RecognitionEngine};

use super::{build_dispatcher, load_config, stdout_history};

const PUMP_INTERVAL: Duration = Duration::from_millis(50);

/// Listen for commands until the engine ends. Ctrl-C requests a stop.
pub async fn listen_command(
    config_path: Option<PathBuf>,
    no_wake_word: bool,
    wake_word: Option<String>,
) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(wake_word) = wake_word {
        config.voice.wake_word = wake_word;
    }
    if no_wake_word {
        config.voice.wake_word_enabled = false;
    }

    let source = match config.recognizer.program() {
        Some(program) => LineSource::Process {
            program: program.to_string(),
            args: config.recognizer.args.clone(),
        },
        None => LineSource::Stdin,
    };
    let engine = LineEngine::detect(source).map(|e| Box::new(e) as Box<dyn RecognitionEngine>);

    let history = stdout_history();
    let mut dispatcher = build_dispatcher(&config, engine, history.clone());

    let (on_start, on_end, on_error) = (history.clone(), history.clone(), history);
    dispatcher.set_callbacks(
        DispatcherCallbacks::new()
            .on_start(move || on_start(HistoryEntry::system("Listening started")))
            .on_result(|transcript| debug!("Heard: '{}'", transcript))
            .on_end(move || on_end(HistoryEntry::system("Listening stopped")))
            .on_error(move |e| on_error(HistoryEntry::error(format!("Error: {}", e)))),
    );

    if dispatcher.wake_word_enabled() {
        println!("Say \"{} <command>\" (Ctrl-C to stop)", dispatcher.wake_word());
    } else {
        println!("Listening for commands (Ctrl-C to stop)");
    }

    dispatcher.start();
    if !dispatcher.is_listening() {
        // Unsupported host; the error was already reported
        return Ok(());
    }

    let mut interval = tokio::time::interval(PUMP_INTERVAL);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut stop_requested = false;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                dispatcher.pump();
                if !dispatcher.is_listening() {
                    break;
                }
            }
            result = &mut ctrl_c, if !stop_requested => {
                result?;
                info!("Interrupted");
                stop_requested = true;
                dispatcher.stop();
            }
        }
    }

    Ok(())
}
