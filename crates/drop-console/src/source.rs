//! Inbound log source and scoped subscriptions

use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, Weak};

use crate::severity::Severity;

/// One log statement as delivered to a sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEvent<'a> {
    pub message: &'a str,
    pub severity: Severity,
    pub target: Option<&'a str>,
}

impl<'a> LogEvent<'a> {
    pub fn new(message: &'a str, severity: Severity) -> Self {
        Self {
            message,
            severity,
            target: None,
        }
    }

    pub fn with_target(mut self, target: &'a str) -> Self {
        self.target = Some(target);
        self
    }
}

/// Receiver of log events
pub trait LogSink: Send + Sync {
    fn on_log(&self, event: &LogEvent<'_>);
}

/// Something a sink can subscribe to for log events.
///
/// Events are delivered in publication order. Once the returned
/// [`Subscription`] is cancelled or dropped no further event reaches the sink.
pub trait LogSource {
    fn subscribe(&self, sink: Arc<dyn LogSink>) -> Subscription;
}

/// Scoped registration of a sink; released on drop
#[must_use = "dropping a subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Release the registration now; later calls and the drop are no-ops
    pub fn cancel(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

thread_local! {
    /// Addresses of the hubs currently delivering on this thread
    static DISPATCHING: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
}

/// Marks a hub as delivering; cleared even if a sink panics
struct DispatchGuard {
    hub: usize,
}

impl DispatchGuard {
    fn enter(hub: usize) -> Option<Self> {
        DISPATCHING.with(|active| {
            let mut active = active.borrow_mut();
            if active.contains(&hub) {
                None
            } else {
                active.push(hub);
                Some(DispatchGuard { hub })
            }
        })
    }
}

impl Drop for DispatchGuard {
    fn drop(&mut self) {
        DISPATCHING.with(|active| {
            let mut active = active.borrow_mut();
            if let Some(pos) = active.iter().rposition(|hub| *hub == self.hub) {
                active.remove(pos);
            }
        });
    }
}

type SinkList = RwLock<Vec<(u64, Arc<dyn LogSink>)>>;

#[derive(Default)]
struct HubInner {
    sinks: SinkList,
    next_id: AtomicU64,
}

/// In-process broadcast log source.
///
/// Delivery runs under a read lock and unsubscribing takes the write lock,
/// so a cancelled subscription never sees a late event. Statements published
/// into the same hub by a sink while it is handling an event on the same
/// thread are dropped; publishing into another hub goes through.
/// Cancelling a subscription from inside a sink callback deadlocks.
#[derive(Clone, Default)]
pub struct LogHub {
    inner: Arc<HubInner>,
}

impl LogHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver an event to every subscriber.
    ///
    /// Returns `false` when the event was dropped as a re-entrant publish.
    pub fn publish(&self, event: &LogEvent<'_>) -> bool {
        let hub = Arc::as_ptr(&self.inner) as usize;
        let Some(_guard) = DispatchGuard::enter(hub) else {
            return false;
        };

        let sinks = self
            .inner
            .sinks
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        for (_, sink) in sinks.iter() {
            sink.on_log(event);
        }
        true
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner
            .sinks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl LogSource for LogHub {
    fn subscribe(&self, sink: Arc<dyn LogSink>) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .sinks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, sink));

        let hub: Weak<HubInner> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(hub) = hub.upgrade() {
                hub.sinks
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .retain(|(sink_id, _)| *sink_id != id);
            }
        })
    }
}

impl std::fmt::Debug for LogHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogHub")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
