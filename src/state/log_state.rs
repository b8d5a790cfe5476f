//! LogState - Diagnostic Log with Ring Buffer
//!
//! The in-app diagnostic sink. Service failures end up here as warning
//! entries rather than surfacing as error UI.

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

impl LogLevel {
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
        }
    }

    pub fn color(&self) -> gpui::Rgba {
        match self {
            LogLevel::Info => gpui::rgba(0x34d399ff),
            LogLevel::Warn => gpui::rgba(0xf59e0bff),
            LogLevel::Error => gpui::rgba(0xef4444ff),
            LogLevel::Debug => gpui::rgba(0x64748bff),
        }
    }
}

/// A single log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

/// Ring-buffered diagnostic log
#[derive(Debug)]
pub struct LogState {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl LogState {
    /// Create a new log state with the specified capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a new entry, evicting the oldest when at capacity
    pub fn push(&mut self, level: LogLevel, message: impl Into<String>, timestamp: DateTime<Local>) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            level,
            message: message.into(),
            timestamp,
        });
    }

    /// Push an entry with the current timestamp
    pub fn push_now(&mut self, level: LogLevel, message: impl Into<String>) {
        self.push(level, message, Local::now());
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &VecDeque<LogEntry> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries at a given level
    pub fn count_level(&self, level: LogLevel) -> usize {
        self.entries.iter().filter(|e| e.level == level).count()
    }

    /// Clear all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for LogState {
    fn default() -> Self {
        Self::new(500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_count() {
        let mut logs = LogState::new(10);
        logs.push_now(LogLevel::Info, "started");
        logs.push_now(LogLevel::Warn, "backend unavailable");
        assert_eq!(logs.len(), 2);
        assert_eq!(logs.count_level(LogLevel::Warn), 1);
        assert_eq!(logs.count_level(LogLevel::Error), 0);
    }

    #[test]
    fn test_ring_buffer_eviction() {
        let mut logs = LogState::new(2);
        logs.push_now(LogLevel::Info, "one");
        logs.push_now(LogLevel::Info, "two");
        logs.push_now(LogLevel::Info, "three");
        assert_eq!(logs.len(), 2);
        let messages: Vec<_> = logs.entries().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }
}
