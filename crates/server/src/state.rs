//! Application state shared across handlers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::store::FixtureStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The fixture store sits behind a mutex:
/// request handling is effectively sequential (one UI action triggers one
/// intercepted request at a time), so the lock is uncontended; it exists to
/// satisfy `Sync`, not to coordinate anything. No lock is held across an
/// `.await`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Mutex<FixtureStore>,
}

impl AppState {
    /// Create application state around a fixture store.
    #[must_use]
    pub fn new(store: FixtureStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store: Mutex::new(store),
            }),
        }
    }

    /// Lock and access the fixture store.
    ///
    /// A poisoned lock is recovered rather than propagated - fixture state
    /// after a panicking test is garbage either way.
    #[must_use]
    pub fn store(&self) -> MutexGuard<'_, FixtureStore> {
        self.inner
            .store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
