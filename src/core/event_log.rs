//! Bounded log of game happenings shown in the info panel.

use crate::core::constants::EVENT_LOG_CAPACITY;
use crate::runner::RunnerEvent;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub message: String,
    /// Highlighted entries (deaths, records) render in a warmer color.
    pub is_highlight: bool,
}

#[derive(Debug, Clone)]
pub struct EventLog {
    entries: VecDeque<LogEntry>,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLog {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(EVENT_LOG_CAPACITY),
        }
    }

    pub fn add_entry(&mut self, message: String, is_highlight: bool) {
        // Keep only the newest entries
        if self.entries.len() >= EVENT_LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            message,
            is_highlight,
        });
    }

    /// Record every event that has a log line.
    pub fn record(&mut self, events: &[RunnerEvent]) {
        for event in events {
            if let Some((message, is_highlight)) = describe(event) {
                self.add_entry(message, is_highlight);
            }
        }
    }

    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Log line for an event, or `None` for events too frequent to log.
pub fn describe(event: &RunnerEvent) -> Option<(String, bool)> {
    match event {
        RunnerEvent::Started { attempt } => Some((format!("Run #{} started", attempt), false)),
        RunnerEvent::Jumped => None,
        RunnerEvent::Spawned { .. } => None,
        RunnerEvent::Died {
            score,
            new_high_score,
            ..
        } => {
            if *new_high_score {
                Some((format!("Out at {}. New high score!", score), true))
            } else {
                Some((format!("Out at {}.", score), true))
            }
        }
        RunnerEvent::RetryReady => Some(("Retry ready".to_string(), false)),
    }
}
