//! The log console: transcript, rendering and visibility

use chrono::Local;

use crate::colour::SeverityPalette;
use crate::error::ConsoleError;
use crate::markup::{self, MarkupPolicy};
use crate::severity::Severity;
use crate::surface::DisplaySurface;
use crate::transcript::{LogEntry, Transcript};
use crate::trigger::{KeyTogglePolicy, TriggerInput, VisibilityCommand, VisibilityTrigger};

/// Default number of retained log lines
pub const DEFAULT_MAX_LINES: usize = 12;

/// Static configuration of a console
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleSettings {
    pub max_lines: usize,
    pub palette: SeverityPalette,
    pub markup: MarkupPolicy,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            palette: SeverityPalette::default(),
            markup: MarkupPolicy::default(),
        }
    }
}

/// Visibility of the console's display surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Keeps the most recent log statements and mirrors them onto a surface.
///
/// The console starts hidden with an empty transcript. Every received log
/// statement re-renders the whole transcript into the surface.
pub struct LogConsole<S: DisplaySurface> {
    transcript: Transcript,
    palette: SeverityPalette,
    markup: MarkupPolicy,
    visibility: Visibility,
    rendered: String,
    surface: S,
    trigger: Box<dyn VisibilityTrigger>,
}

impl<S: DisplaySurface> LogConsole<S> {
    /// Create a console driven by the given trigger policy.
    ///
    /// The surface is not touched until the first log statement or
    /// visibility change.
    pub fn new(
        settings: ConsoleSettings,
        surface: S,
        trigger: Box<dyn VisibilityTrigger>,
    ) -> Result<Self, ConsoleError> {
        Ok(Self {
            transcript: Transcript::new(settings.max_lines)?,
            palette: settings.palette,
            markup: settings.markup,
            visibility: Visibility::Hidden,
            rendered: String::new(),
            surface,
            trigger,
        })
    }

    /// Create a console toggled by the backtick key
    pub fn with_key_toggle(settings: ConsoleSettings, surface: S) -> Result<Self, ConsoleError> {
        Self::new(settings, surface, Box::new(KeyTogglePolicy::default()))
    }

    pub fn on_log_received(&mut self, message: &str, severity: Severity) {
        self.on_log_record(message, severity, None);
    }

    /// Record a statement that carries its log target
    pub fn on_log_record(&mut self, message: &str, severity: Severity, target: Option<&str>) {
        let body = self.markup.apply(message);
        let rendered_text = match self.palette.colour_for(severity) {
            Some(colour) => markup::wrap(colour, &body),
            None => body.into_owned(),
        };

        self.transcript.push(LogEntry {
            text: message.to_string(),
            severity,
            rendered_text,
            target: target.map(str::to_string),
            received_at: Local::now(),
        });

        self.rendered = self.transcript.render();
        self.surface.set_text(&self.rendered);
    }

    pub fn show(&mut self) {
        if self.visibility == Visibility::Hidden {
            self.visibility = Visibility::Visible;
            self.surface.set_active(true);
        }
    }

    pub fn hide(&mut self) {
        if self.visibility == Visibility::Visible {
            self.visibility = Visibility::Hidden;
            self.surface.set_active(false);
        }
    }

    pub fn toggle(&mut self) {
        match self.visibility {
            Visibility::Hidden => self.show(),
            Visibility::Visible => self.hide(),
        }
    }

    pub fn apply(&mut self, command: VisibilityCommand) {
        match command {
            VisibilityCommand::Show => self.show(),
            VisibilityCommand::Hide => self.hide(),
            VisibilityCommand::Toggle => self.toggle(),
        }
    }

    /// Run host input through the trigger policy and apply its verdict
    pub fn handle_input(&mut self, input: &TriggerInput) -> Option<VisibilityCommand> {
        let command = self.trigger.evaluate(input)?;
        self.apply(command);
        Some(command)
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The text most recently written to the surface
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    pub fn max_lines(&self) -> usize {
        self.transcript.max_lines()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

impl<S: DisplaySurface + std::fmt::Debug> std::fmt::Debug for LogConsole<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogConsole")
            .field("visibility", &self.visibility)
            .field("lines", &self.transcript.len())
            .field("max_lines", &self.transcript.max_lines())
            .field("markup", &self.markup)
            .field("surface", &self.surface)
            .finish()
    }
}
