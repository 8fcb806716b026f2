//! Bridge from the `log` facade into a [`LogHub`]

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use simplelog::{Config, SharedLogger};

use crate::severity::Severity;
use crate::source::{LogEvent, LogHub};

/// Records logged to this target are classified as assertions
pub const ASSERTION_TARGET: &str = "drop_console::assertion";
/// Records logged to this target are classified as exceptions
pub const EXCEPTION_TARGET: &str = "drop_console::exception";

/// Log a failed assertion, shown with the assertion colour
#[macro_export]
macro_rules! assertion {
    ($($arg:tt)+) => {
        $crate::__log::error!(target: $crate::logger::ASSERTION_TARGET, $($arg)+)
    };
}

/// Log an exception (an error that escaped its handler), shown with the exception colour
#[macro_export]
macro_rules! exception {
    ($($arg:tt)+) => {
        $crate::__log::error!(target: $crate::logger::EXCEPTION_TARGET, $($arg)+)
    };
}

/// Classify a `log` record
pub fn severity_of(record: &Record<'_>) -> Severity {
    match record.target() {
        ASSERTION_TARGET => Severity::Assertion,
        EXCEPTION_TARGET => Severity::Exception,
        _ => Severity::from(record.level()),
    }
}

/// `log` backend publishing every enabled record to a hub
pub struct HubLogger {
    hub: LogHub,
    level: LevelFilter,
}

impl HubLogger {
    pub fn new(hub: LogHub, level: LevelFilter) -> Box<Self> {
        Box::new(Self { hub, level })
    }

    /// Install as the only global logger
    pub fn init(hub: LogHub, level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_max_level(level);
        log::set_boxed_logger(Self::new(hub, level))
    }
}

impl Log for HubLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = record.args().to_string();
        let event = LogEvent::new(&message, severity_of(record)).with_target(record.target());
        self.hub.publish(&event);
    }

    fn flush(&self) {}
}

impl SharedLogger for HubLogger {
    fn level(&self) -> LevelFilter {
        self.level
    }

    fn config(&self) -> Option<&Config> {
        None
    }

    fn as_log(self: Box<Self>) -> Box<dyn Log> {
        Box::new(*self)
    }
}
