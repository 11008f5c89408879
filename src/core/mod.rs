//! Shared constants, tuning configuration, and the event log.

pub mod config;
pub mod constants;
pub mod event_log;

pub use config::{Revision, RunnerConfig};
pub use event_log::{EventLog, LogEntry};
