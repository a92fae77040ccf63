use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "blade")]
#[command(about = "Blade - wake-word voice command dispatcher")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.blade/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Listen for voice commands until the recognizer ends or Ctrl-C
    Listen {
        /// Treat every utterance as a command candidate
        #[arg(long)]
        no_wake_word: bool,

        /// Override the configured wake word
        #[arg(long)]
        wake_word: Option<String>,
    },

    /// List the built-in commands
    Commands,

    /// Run one command by name
    Exec {
        /// Command name, e.g. "time" or "open notes"
        name: String,
    },

    /// Dispatch a single transcript as if it had been spoken
    Say {
        /// Transcript text, e.g. "blade search rust"
        transcript: String,
    },

    /// Initialize a new ~/.blade/config.toml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so history output on stdout stays clean
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Some(Commands::Listen {
            no_wake_word,
            wake_word,
        }) => {
            cli::listen::listen_command(cli.config, no_wake_word, wake_word).await?;
        }
        Some(Commands::Commands) => {
            cli::commands::commands_command(cli.config)?;
        }
        Some(Commands::Exec { name }) => {
            cli::exec::exec_command(cli.config, &name)?;
        }
        Some(Commands::Say { transcript }) => {
            cli::say::say_command(cli.config, &transcript)?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(cli.config, force)?;
        }
        None => {
            // Default: listen with the configured settings
            cli::listen::listen_command(cli.config, false, None).await?;
        }
    }

    Ok(())
}
