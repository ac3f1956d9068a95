//! Diagnostics reporting for the tab state model.
//!
//! Value types never log on their own. Operations that can observe an anomaly
//! take a `DiagnosticsSink`; the plain forms of those operations report to
//! `LogSink`, which forwards to the `log` facade.

use std::fmt;
use std::sync::Mutex;

/// A non-fatal condition observed while reading or updating the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Title resolution found no active tab among the open tabs of an unsaved window.
    NoActiveTab {
        window_id: String,
        fallback_title: String,
    },
    /// A tab sequence was required but none was supplied.
    MissingTabItems { window_id: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NoActiveTab {
                window_id,
                fallback_title,
            } => write!(
                f,
                "No active tab found in window {}, using title '{}'",
                window_id, fallback_title
            ),
            Diagnostic::MissingTabItems { window_id } => {
                write!(f, "Missing tab items for window {}", window_id)
            }
        }
    }
}

/// Receives diagnostics emitted by model operations.
pub trait DiagnosticsSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

/// Forwards every diagnostic to `log::warn!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticsSink for LogSink {
    fn report(&self, diagnostic: Diagnostic) {
        log::warn!("{}", diagnostic);
    }
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn report(&self, _diagnostic: Diagnostic) {}
}

/// Keeps diagnostics in memory so callers can inspect or surface them.
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything reported so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Removes and returns everything reported so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(
            &mut *self
                .entries
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner()),
        )
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticsSink for RecordingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(diagnostic);
    }
}
