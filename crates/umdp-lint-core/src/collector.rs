//! Thread-safe accumulator of diagnostic messages.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

/// Shared store of contextual diagnostic messages.
///
/// Maps a diagnostic key (e.g. `"lowercase keyword: do"`, `"GO TO 200"`)
/// to the last value recorded for it. Re-recording a key overwrites
/// silently — the store describes the kinds of problems seen, not a full
/// occurrence log; failure counts are returned by the rules themselves.
///
/// All operations run inside one mutex held only for the duration of a
/// single read or write, so concurrent rule invocations on different
/// files cannot tear an entry. The store is shared for the lifetime of a
/// [`Checker`](crate::Checker) instance and must be [`reset`](Self::reset)
/// by the caller between files; it is not scoped per file.
#[derive(Debug, Default)]
pub struct Collector {
    entries: Mutex<BTreeMap<String, String>>,
}

impl Collector {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all recorded diagnostics.
    pub fn reset(&self) {
        self.lock().clear();
    }

    /// Records a diagnostic key with an empty value.
    pub fn record(&self, key: impl Into<String>) {
        self.record_with(key, "");
    }

    /// Upserts one diagnostic entry. Last write wins.
    pub fn record_with(&self, key: impl Into<String>, value: impl Into<String>) {
        self.lock().insert(key.into(), value.into());
    }

    /// Returns true when no diagnostics are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Returns a stable copy of the current diagnostics.
    ///
    /// Never hands out a live reference, so readers cannot race with
    /// concurrent writers.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.lock().clone()
    }

    // A poisoned mutex means another thread panicked mid-operation; the
    // map itself cannot be left torn by any operation here, so recover
    // the guard rather than propagate the panic.
    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
