use anyhow::{Context, Result};
use drop_console::{LogHub, SharedConsole, TextSurface};
use drop_console_config::{ConsoleConfig, TriggerConfig};
use log::LevelFilter;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::time::Duration;

mod app;
mod heartbeat;
mod logger;
mod views;

use app::App;
use heartbeat::Heartbeat;

fn main() -> Result<()> {
    // Parse first, report once the logger is installed
    let loaded = ConsoleConfig::try_load();
    let (config, load_error) = match loaded {
        Ok(config) => (config.unwrap_or_default(), None),
        Err(e) => (ConsoleConfig::default(), Some(e)),
    };
    let console_level = config.try_level_filter();

    let hub = LogHub::new();
    let log_file = logger::init(hub.clone(), console_level.unwrap_or(LevelFilter::Info))?;

    log::info!("Starting drop-console-tui");
    if let Some(e) = load_error {
        log::warn!("Failed to parse config file, using defaults: {:#}", e);
    }
    if console_level.is_none() {
        log::warn!("Unknown log level {:?}, using info", config.log_level);
    }

    let console = SharedConsole::new(config.build_console(TextSurface::new())?);
    let active = console.activate(&hub);
    let trigger_hint = match config.trigger {
        TriggerConfig::Key { key } => format!("press {key} to toggle"),
        TriggerConfig::Orientation { show_angle } => {
            format!("tilt below -{show_angle:.0}° to show")
        }
    };
    let mut app = App::new(active, trigger_hint, log_file.display().to_string());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let heartbeat = Heartbeat::start(Duration::from_secs(3));

    let result = run_app(&mut terminal, &mut app);

    drop(heartbeat);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Unsubscribe before the terminal surface goes away
    drop(app);

    if let Err(err) = &result {
        eprintln!("Error: {:#}", err);
    }

    log::info!("Exiting drop-console-tui");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal
            .draw(|f| views::render(app, f))
            .context("Failed to draw frame")?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Terminals without keyboard enhancement only report presses,
                // so a press counts as the completed key stroke
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        app.tick();
    }

    Ok(())
}
