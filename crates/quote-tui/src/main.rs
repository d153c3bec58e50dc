use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use quote_core::{
    gemini::GeminiClient, generator::QuoteGenerator, quote::QuoteStore, settings::Settings,
};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io::{stdout, Stdout};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
mod ui;
use ui::app::App;

#[tokio::main]
async fn main() -> Result<()> {
    let (settings, settings_error) = match Settings::new() {
        Ok(s) => (s, None),
        Err(e) => {
            eprintln!("Warning: Failed to load settings: {}. Using defaults.", e);
            (Settings::default(), Some(e))
        }
    };
    init_logging(&settings)?;
    if let Some(e) = settings_error {
        warn!(error = %e, "settings fell back to defaults");
    }

    let store = QuoteStore::from_settings(&settings)?;
    let client = GeminiClient::new(&settings)?;
    let generator = QuoteGenerator::new(Arc::new(client));
    info!(quotes = store.len(), model = %settings.model, "starting quote widget");

    let mut terminal = init_terminal()?;
    let mut app = App::new(settings, store, generator);

    let result = app.run(&mut terminal).await;

    restore_terminal(&mut terminal)?;
    info!("quote widget stopped");

    result
}

/// The alternate screen owns stdout, so logs go to a file.
fn init_logging(settings: &Settings) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&settings.log_file)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
