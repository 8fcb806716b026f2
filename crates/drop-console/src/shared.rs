//! Thread-safe console handle and its active lifetime

use std::cell::RefCell;
use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::console::LogConsole;
use crate::source::{LogEvent, LogSink, LogSource, Subscription};
use crate::surface::DisplaySurface;

thread_local! {
    /// Addresses of the consoles locked by the current thread
    static HELD: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
}

/// A console behind a single exclusive-access boundary.
///
/// Log delivery, visibility changes and reads all go through the same mutex,
/// so ordering and the capacity bound hold no matter which thread logs.
pub struct SharedConsole<S: DisplaySurface> {
    inner: Arc<Mutex<LogConsole<S>>>,
}

impl<S: DisplaySurface> Clone for SharedConsole<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: DisplaySurface> SharedConsole<S> {
    pub fn new(console: LogConsole<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(console)),
        }
    }

    fn addr(&self) -> usize {
        Arc::as_ptr(&self.inner) as usize
    }

    fn held_by_current_thread(&self) -> bool {
        let addr = self.addr();
        HELD.with(|held| held.borrow().contains(&addr))
    }

    /// Lock the console.
    ///
    /// Statements logged on this thread while the guard is alive are not
    /// delivered to this console.
    pub fn lock(&self) -> ConsoleGuard<'_, S> {
        let guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let addr = self.addr();
        HELD.with(|held| held.borrow_mut().push(addr));
        ConsoleGuard { guard, addr }
    }

    /// Subscribe to `source` for as long as the returned handle lives
    pub fn activate(&self, source: &impl LogSource) -> ActiveConsole<S>
    where
        S: 'static,
    {
        let subscription = source.subscribe(Arc::new(self.clone()));
        ActiveConsole {
            console: self.clone(),
            subscription,
        }
    }
}

impl<S: DisplaySurface> LogSink for SharedConsole<S> {
    fn on_log(&self, event: &LogEvent<'_>) {
        if self.held_by_current_thread() {
            return;
        }
        self.lock()
            .on_log_record(event.message, event.severity, event.target);
    }
}

/// Exclusive access to a locked console
pub struct ConsoleGuard<'a, S: DisplaySurface> {
    guard: MutexGuard<'a, LogConsole<S>>,
    addr: usize,
}

impl<S: DisplaySurface> Deref for ConsoleGuard<'_, S> {
    type Target = LogConsole<S>;

    fn deref(&self) -> &Self::Target {
        &self.guard
    }
}

impl<S: DisplaySurface> DerefMut for ConsoleGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.guard
    }
}

impl<S: DisplaySurface> Drop for ConsoleGuard<'_, S> {
    fn drop(&mut self) {
        HELD.with(|held| {
            let mut held = held.borrow_mut();
            if let Some(pos) = held.iter().rposition(|addr| *addr == self.addr) {
                held.remove(pos);
            }
        });
    }
}

/// A console subscribed to a log source.
///
/// The subscription is released when this handle is dropped or
/// [`deactivate`](Self::deactivate)d, including during unwinding.
pub struct ActiveConsole<S: DisplaySurface> {
    console: SharedConsole<S>,
    subscription: Subscription,
}

impl<S: DisplaySurface> ActiveConsole<S> {
    pub fn console(&self) -> &SharedConsole<S> {
        &self.console
    }

    pub fn lock(&self) -> ConsoleGuard<'_, S> {
        self.console.lock()
    }

    /// Unsubscribe and hand back the console
    pub fn deactivate(mut self) -> SharedConsole<S> {
        self.subscription.cancel();
        self.console.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ConsoleSettings;
    use crate::severity::Severity;
    use crate::source::LogHub;
    use crate::surface::TextSurface;
    use pretty_assertions::assert_eq;

    fn shared() -> SharedConsole<TextSurface> {
        let console =
            LogConsole::with_key_toggle(ConsoleSettings::default(), TextSurface::new()).unwrap();
        SharedConsole::new(console)
    }

    #[test]
    fn test_receives_only_while_active() {
        let hub = LogHub::new();
        let console = shared();

        hub.publish(&LogEvent::new("too early", Severity::Info));
        let active = console.activate(&hub);
        hub.publish(&LogEvent::new("hello", Severity::Info));
        let console = active.deactivate();
        hub.publish(&LogEvent::new("too late", Severity::Info));

        assert_eq!(console.lock().rendered(), "hello");
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn test_drop_releases_subscription() {
        let hub = LogHub::new();
        let console = shared();
        {
            let _active = console.activate(&hub);
            assert_eq!(hub.subscriber_count(), 1);
        }
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn test_panic_releases_subscription() {
        let hub = LogHub::new();
        let console = shared();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _active = console.activate(&hub);
            panic!("host crashed");
        }));

        assert!(result.is_err());
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn test_log_while_locked_is_skipped() {
        let hub = LogHub::new();
        let console = shared();
        let active = console.activate(&hub);

        {
            let mut guard = active.lock();
            guard.show();
            hub.publish(&LogEvent::new("inside", Severity::Info));
        }
        hub.publish(&LogEvent::new("outside", Severity::Info));

        let guard = active.lock();
        assert!(guard.is_visible());
        assert_eq!(guard.rendered(), "outside");
    }

    #[test]
    fn test_concurrent_publishers_keep_capacity() {
        let hub = LogHub::new();
        let console = shared();
        let _active = console.activate(&hub);

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let hub = hub.clone();
                std::thread::spawn(move || {
                    for i in 0..25 {
                        hub.publish(&LogEvent::new(&format!("{t}:{i}"), Severity::Warning));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let guard = console.lock();
        assert_eq!(guard.transcript().len(), guard.max_lines());
        assert_eq!(guard.surface().text_updates, 100);
    }
}
