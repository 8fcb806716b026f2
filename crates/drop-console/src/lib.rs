//! # drop-console
//!
//! A bounded, severity-coloured log console.
//!
//! The console keeps the last `max_lines` log statements, renders them as a
//! single string with inline colour markup and writes that string into a
//! [`DisplaySurface`]. Its visibility is driven by a pluggable
//! [`VisibilityTrigger`], either a key toggle or a pitch threshold.
//!
//! ## Usage
//!
//! ```rust
//! use drop_console::{ConsoleSettings, LogConsole, LogEvent, LogHub, Severity, SharedConsole, TextSurface};
//!
//! let hub = LogHub::new();
//! let console = SharedConsole::new(
//!     LogConsole::with_key_toggle(ConsoleSettings::default(), TextSurface::new())?,
//! );
//!
//! let active = console.activate(&hub);
//! hub.publish(&LogEvent::new("loaded", Severity::Info));
//! assert_eq!(active.lock().rendered(), "loaded");
//! # Ok::<(), drop_console::ConsoleError>(())
//! ```

pub mod colour;
pub mod console;
pub mod error;
pub mod logger;
pub mod markup;
pub mod severity;
pub mod shared;
pub mod source;
pub mod surface;
pub mod transcript;
pub mod trigger;

#[doc(hidden)]
pub use log as __log;

pub use colour::{Colour, SeverityPalette};
pub use console::{ConsoleSettings, DEFAULT_MAX_LINES, LogConsole, Visibility};
pub use error::ConsoleError;
pub use logger::HubLogger;
pub use markup::MarkupPolicy;
pub use severity::Severity;
pub use shared::{ActiveConsole, ConsoleGuard, SharedConsole};
pub use source::{LogEvent, LogHub, LogSink, LogSource, Subscription};
pub use surface::{DisplaySurface, TextSurface};
pub use transcript::{LogEntry, Transcript};
pub use trigger::{
    KeyTogglePolicy, OrientationThresholdPolicy, TriggerInput, VisibilityCommand,
    VisibilityTrigger,
};
