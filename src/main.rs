use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;

use llm_playground::app::App;
use llm_playground::config::{self, Config};
use llm_playground::logging;

/// How long to wait for input before checking the chat worker again
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Send a prompt to a chat-completion endpoint and read the reply
#[derive(Parser, Debug)]
#[command(name = "llm-playground")]
#[command(version, about, long_about = None)]
struct Args {
    /// Chat endpoint URL (overrides the config file)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Path to config.toml (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write diagnostic logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    /// Apply command-line overrides on top of the file configuration
    fn apply(self, mut config: Config) -> Config {
        if let Some(endpoint) = self.endpoint {
            config.chat.endpoint = endpoint;
        }
        if let Some(log_file) = self.log_file {
            config.log.file = Some(log_file);
        }
        config
    }
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    let config = config::load_config(args.config.as_deref())?;
    let config = args.apply(config);

    logging::init(config.log.file.as_deref())?;
    log::info!("Starting llm-playground against {}", config.chat.endpoint);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = run(terminal, &config);

    // Restore terminal
    let _ = execute!(std::io::stdout(), DisableBracketedPaste);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, config: &Config) -> Result<()> {
    execute!(std::io::stdout(), EnableBracketedPaste)?;
    let mut app = App::new(config);

    loop {
        // Apply any settled chat requests before drawing
        app.poll_chat();

        terminal.draw(|frame| app.render(frame))?;

        app.handle_events(POLL_INTERVAL)?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
