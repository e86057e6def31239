mod app;
mod codegen;
mod config;
mod theme;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::{App, Section};
use config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "fyf")]
#[command(version = "0.1.0")]
#[command(about = "A terminal-friendly frontend for the Find your File storage service")]
struct Args {
    /// Regenerate the API client from the backend schema and exit
    #[arg(short, long)]
    generate: bool,

    /// OpenAPI document URL (overrides the config file)
    #[arg(long)]
    input: Option<String>,

    /// Directory the generated client is written to (overrides the config file)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Base URL for the generated client (overrides BASE_URL)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Handle CLI-only commands
    if args.generate {
        return generate_client(args).await;
    }

    // Run TUI
    run_tui().await
}

/// One-shot client generation step; runs outside the TUI entirely.
async fn generate_client(args: Args) -> Result<()> {
    let config = AppConfig::load().unwrap_or_default();
    let generation = codegen::GenerationConfig::resolve(
        &config.generator,
        args.input,
        args.output,
        args.base_url,
    );

    codegen::run(&generation).await?;
    println!("client generated into {}", generation.output.display());
    Ok(())
}

async fn run_tui() -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new();

    // Main loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(event::KeyModifiers::CONTROL) => {
                            return Ok(())
                        }
                        KeyCode::Char('q') if app.section == Section::Sidebar => return Ok(()),
                        KeyCode::Esc
                            if app.section == Section::Search && app.search_query.is_empty() =>
                        {
                            return Ok(())
                        }
                        _ => app.handle_key(key),
                    }
                }
            }
        }
    }
}
