// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event capture.
//!
//! Failures that the page deliberately does not surface (relay rejections,
//! missing asset files, unreadable settings) are recorded here in a bounded
//! in-memory buffer and mirrored to stderr. Nothing in this module is
//! rendered by the UI.

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Maximum number of retained diagnostic events.
const LOG_CAPACITY: usize = 256;

/// Events worth keeping around when something degrades silently.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticEvent {
    /// The email relay rejected or never received a submission.
    RelayFailure { detail: String },

    /// A deferred asset could not be read or decoded.
    AssetLoadFailure { path: String, detail: String },

    /// The settings file existed but could not be used as-is.
    ConfigWarning { detail: String },
}

impl DiagnosticEvent {
    fn describe(&self) -> String {
        match self {
            DiagnosticEvent::RelayFailure { detail } => format!("relay failure: {detail}"),
            DiagnosticEvent::AssetLoadFailure { path, detail } => {
                format!("asset load failure ({path}): {detail}")
            }
            DiagnosticEvent::ConfigWarning { detail } => format!("config warning: {detail}"),
        }
    }
}

/// A recorded event with its capture time.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub at: DateTime<Local>,
    pub event: DiagnosticEvent,
}

/// A memory-bounded event log. When full, pushing a new entry evicts the
/// oldest one. Entries are stored in chronological order (oldest first).
#[derive(Debug, Default)]
pub struct DiagnosticsLog {
    entries: VecDeque<LogEntry>,
}

impl DiagnosticsLog {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(LOG_CAPACITY),
        }
    }

    /// Records an event and mirrors it to stderr.
    pub fn record(&mut self, event: DiagnosticEvent) {
        eprintln!("{}", event.describe());
        if self.entries.len() == LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            at: Local::now(),
            event,
        });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }
}
