//! Bounded FIFO transcript of rendered log entries

use std::collections::VecDeque;

use chrono::{DateTime, Local};

use crate::error::ConsoleError;
use crate::severity::Severity;

/// A single captured log statement
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Raw message content
    pub text: String,
    pub severity: Severity,
    /// `text` wrapped in the colour markup for `severity`, or verbatim for info
    pub rendered_text: String,
    /// Log target the statement originated from, when known
    pub target: Option<String>,
    pub received_at: DateTime<Local>,
}

/// Ordered entries, oldest first, never longer than `max_lines`
#[derive(Debug, Clone)]
pub struct Transcript {
    entries: VecDeque<LogEntry>,
    max_lines: usize,
}

impl Transcript {
    pub fn new(max_lines: usize) -> Result<Self, ConsoleError> {
        if max_lines == 0 {
            return Err(ConsoleError::InvalidMaxLines(max_lines));
        }

        Ok(Self {
            entries: VecDeque::with_capacity(max_lines.min(1024) + 1),
            max_lines,
        })
    }

    /// Append an entry, evicting from the front until the capacity holds.
    ///
    /// Returns the number of evicted entries.
    pub fn push(&mut self, entry: LogEntry) -> usize {
        self.entries.push_back(entry);

        let mut evicted = 0;
        while self.entries.len() > self.max_lines {
            self.entries.pop_front();
            evicted += 1;
        }
        evicted
    }

    /// Join every rendered entry with a line break, without a trailing one
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&entry.rendered_text);
        }
        out
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LogEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }
}
