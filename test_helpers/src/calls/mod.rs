//! Recorder for callback invocations.
//!
//! Flag and command callbacks are plain closures; [`CallLog`] hands out
//! closures that append a label to a shared log so tests can assert on the
//! order and number of invocations after a parse.
//!
//! # Examples
//!
//! ```
//! use test_helpers::calls::CallLog;
//!
//! let log = CallLog::new();
//! let mut on_help = log.recorder("help");
//! on_help();
//! log.record("done");
//! assert_eq!(log.events(), ["help", "done"]);
//! ```

use std::sync::Arc;

use anyhow::{Result, ensure};
use parking_lot::Mutex;

/// Shared, clonable log of recorded events.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    events: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `event` to the log.
    pub fn record(&self, event: impl Into<String>) {
        self.events.lock().push(event.into());
    }

    /// Returns a closure that records `event` every time it runs.
    #[must_use]
    pub fn recorder(&self, event: &str) -> impl FnMut() + 'static {
        let log = self.clone();
        let label = event.to_owned();
        move || log.record(label.clone())
    }

    /// Returns a snapshot of every recorded event, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<String> {
        self.events.lock().clone()
    }

    /// Counts how often `event` was recorded.
    #[must_use]
    pub fn count(&self, event: &str) -> usize {
        self.events.lock().iter().filter(|seen| *seen == event).count()
    }

    /// Checks that the log holds exactly `expected`, in order.
    ///
    /// # Errors
    ///
    /// Returns an error describing both sequences when they differ.
    pub fn ensure_events(&self, expected: &[&str]) -> Result<()> {
        let actual = self.events();
        ensure!(
            actual == expected,
            "expected events {expected:?}, got {actual:?}"
        );
        Ok(())
    }
}
