//! Application state and input handling

use drop_console::{ActiveConsole, TextSurface, TriggerInput};
use ratatui::crossterm::event::KeyCode;

/// Pitch change per arrow key press, in degrees
const PITCH_STEP: f32 = 5.0;
const PITCH_LIMIT: f32 = 90.0;

pub struct App {
    pub running: bool,
    pub console: ActiveConsole<TextSurface>,
    /// Simulated view pitch fed to the orientation trigger every tick
    pub pitch_degrees: f32,
    /// Short description of the active trigger, shown in the help view
    pub trigger_hint: String,
    /// Where the file logger writes
    pub log_file: String,
}

impl App {
    pub fn new(console: ActiveConsole<TextSurface>, trigger_hint: String, log_file: String) -> Self {
        Self {
            running: true,
            console,
            pitch_degrees: 0.0,
            trigger_hint,
            log_file,
        }
    }

    /// Handle one completed key stroke
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => {
                log::info!("Quit requested");
                self.running = false;
            }
            KeyCode::Up => self.tilt(PITCH_STEP),
            KeyCode::Down => self.tilt(-PITCH_STEP),
            KeyCode::Char('i') => log::info!("Info statement"),
            KeyCode::Char('w') => log::warn!("Warning statement"),
            KeyCode::Char('e') => log::error!("Error statement"),
            KeyCode::Char('a') => drop_console::assertion!("Assertion failed: left == right"),
            KeyCode::Char('x') => drop_console::exception!("Unhandled exception in frame"),
            _ => {}
        }

        if let KeyCode::Char(key) = code {
            self.console.lock().handle_input(&TriggerInput::KeyReleased(key));
        }
    }

    /// Sample continuous inputs once per frame
    pub fn tick(&mut self) {
        let pitch_degrees = self.pitch_degrees;
        self.console
            .lock()
            .handle_input(&TriggerInput::Tick { pitch_degrees });
    }

    fn tilt(&mut self, delta: f32) {
        self.pitch_degrees = (self.pitch_degrees + delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        log::debug!("Pitch now {:.0}°", self.pitch_degrees);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drop_console::{
        ConsoleSettings, LogConsole, LogHub, OrientationThresholdPolicy, SharedConsole,
    };

    fn app_with(console: LogConsole<TextSurface>) -> (App, LogHub) {
        let hub = LogHub::new();
        let active = SharedConsole::new(console).activate(&hub);
        (App::new(active, "test".to_string(), "test.log".to_string()), hub)
    }

    #[test]
    fn test_backtick_toggles_console() {
        let console =
            LogConsole::with_key_toggle(ConsoleSettings::default(), TextSurface::new()).unwrap();
        let (mut app, _hub) = app_with(console);

        app.handle_key(KeyCode::Char('`'));
        assert!(app.console.lock().is_visible());
        app.handle_key(KeyCode::Char('`'));
        assert!(!app.console.lock().is_visible());
    }

    #[test]
    fn test_quit() {
        let console =
            LogConsole::with_key_toggle(ConsoleSettings::default(), TextSurface::new()).unwrap();
        let (mut app, _hub) = app_with(console);

        app.handle_key(KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn test_tilting_down_shows_console() {
        let policy = OrientationThresholdPolicy::new(30.0).unwrap();
        let console =
            LogConsole::new(ConsoleSettings::default(), TextSurface::new(), Box::new(policy))
                .unwrap();
        let (mut app, _hub) = app_with(console);

        for _ in 0..7 {
            app.handle_key(KeyCode::Down);
        }
        app.tick();
        assert_eq!(app.pitch_degrees, -35.0);
        assert!(app.console.lock().is_visible());

        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Up);
        app.tick();
        assert!(!app.console.lock().is_visible());
    }

    #[test]
    fn test_pitch_is_clamped() {
        let console =
            LogConsole::with_key_toggle(ConsoleSettings::default(), TextSurface::new()).unwrap();
        let (mut app, _hub) = app_with(console);

        for _ in 0..40 {
            app.handle_key(KeyCode::Up);
        }
        assert_eq!(app.pitch_degrees, 90.0);
    }
}
