// In-flight query tracking with scoped release
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts queries currently fetching or reducing data.
#[derive(Debug, Clone, Default)]
pub struct LoadingState {
    in_flight: Arc<AtomicUsize>,
}

impl LoadingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a query as started. The returned guard marks it finished on drop,
    /// including when the query fails or its future is cancelled.
    pub fn begin(&self) -> LoadingGuard {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        LoadingGuard {
            in_flight: self.in_flight.clone(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight() > 0
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}

#[must_use = "dropping the guard immediately ends the loading scope"]
#[derive(Debug)]
pub struct LoadingGuard {
    in_flight: Arc<AtomicUsize>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}
