use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::stdout;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wordjump::app::App;
use wordjump::config::Config;
use wordjump::{input, ui};

#[derive(Parser, Debug)]
#[command(name = "wordjump")]
#[command(author, version, about = "Jump between occurrences of the word under the cursor", long_about = None)]
struct Args {
    /// File to open
    path: Option<PathBuf>,

    /// Read configuration from this file instead of the user config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show the Up/Down status bar indicators on start
    #[arg(long)]
    show_indicators: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if args.show_indicators {
        config.indicators.show_on_start = true;
    }

    setup_logging(&config)?;

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(args.path, config);
    let result = run_app(&mut terminal, &mut app);
    app.shutdown();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "wordjump exited with an error");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

/// Log to a daily file; the terminal belongs to the UI.
fn setup_logging(config: &Config) -> Result<()> {
    let log_dir = Config::log_dir()?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "wordjump.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_env("WORDJUMP_LOG")
        .or_else(|_| EnvFilter::try_new(&config.log.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(guard);

    tracing::info!(log_dir = %log_dir.display(), "wordjump started");
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        app.update_editor_visible_height(app.editor_area.height as usize);

        if let Some(input::Action::Quit) = input::handle_event(app)? {
            break;
        }
    }
    Ok(())
}
