//! wordslot - lay your rack on the slots, make a word, bank the points

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use wordslot::app::App;
use wordslot::config::{Cli, GameConfig};
use wordslot::game::{DictionaryLoader, GameSession};
use wordslot::tui::{self, Tui};

/// How long to wait for a key before polling background work again
const TICK_RATE: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.log_path() {
        init_logging(&path)?;
    }

    let config = GameConfig::default();
    let session = match cli.seed {
        Some(seed) => GameSession::seeded(config, seed),
        None => GameSession::new(config),
    };

    let source = cli.dictionary_source();
    tracing::info!(?source, "loading dictionary");
    let loader = DictionaryLoader::spawn(source);

    let mut app = App::new(session, Some(loader));
    let mut terminal = Tui::enter().context("failed to set up terminal")?;

    let result = run(&mut terminal, &mut app);
    terminal.exit()?;
    result
}

fn run(terminal: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        app.tick();
        terminal.draw(|frame| tui::render(frame, app))?;

        if !event::poll(TICK_RATE)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        // Only handle key press events (not release)
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Esc => {
                if !app.on_escape_held() {
                    app.quit();
                }
            }
            KeyCode::Char('q') => app.quit(),
            KeyCode::Left => app.on_left(),
            KeyCode::Right => app.on_right(),
            KeyCode::Up => app.on_up(),
            KeyCode::Down => app.on_down(),
            KeyCode::Char(' ') => app.on_space(),
            KeyCode::Enter => app.on_submit(),
            KeyCode::Char('d') => app.on_deal(),
            KeyCode::Char('r') => app.on_reset(),
            _ => {}
        }
    }
    Ok(())
}

/// Send tracing output to a file; the terminal belongs to the game.
fn init_logging(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .compact()
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
