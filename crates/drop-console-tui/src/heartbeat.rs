//! Background thread logging periodic status lines
//!
//! Exercises delivery into the console from a thread other than the UI loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

pub struct Heartbeat {
    active: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Heartbeat {
    /// Start logging a heartbeat every `interval`
    pub fn start(interval: Duration) -> Self {
        let active = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&active);

        let handle = thread::spawn(move || {
            let poll_interval = Duration::from_millis(50);
            let mut beats: u64 = 0;
            let mut last = Instant::now();

            while flag.load(Ordering::Relaxed) {
                if last.elapsed() >= interval {
                    beats += 1;
                    last = Instant::now();
                    match beats % 5 {
                        0 => log::warn!("Heartbeat {beats}: frame budget exceeded"),
                        _ => log::info!("Heartbeat {beats}"),
                    }
                }
                thread::sleep(poll_interval);
            }
        });

        Self {
            active,
            handle: Some(handle),
        }
    }

    /// Signal the thread and wait for it
    pub fn stop(&mut self) {
        self.active.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Heartbeat {
    fn drop(&mut self) {
        self.stop();
    }
}
