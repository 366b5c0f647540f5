//! Single-flight guard for refresh cycles

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Admits at most one refresh cycle at a time.
#[derive(Debug, Clone, Default)]
pub struct RefreshGate {
    in_flight: Arc<AtomicBool>,
}

impl RefreshGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the gate. Returns `None` while another cycle holds it.
    pub fn try_begin(&self) -> Option<CycleGuard> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| CycleGuard {
                in_flight: Arc::clone(&self.in_flight),
            })
    }

    #[cfg(test)]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Held for the duration of one cycle; releases the gate when dropped.
#[derive(Debug)]
pub struct CycleGuard {
    in_flight: Arc<AtomicBool>,
}

impl Drop for CycleGuard {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
    }
}
