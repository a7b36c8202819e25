// SPDX-License-Identifier: MPL-2.0
//! Lock-free position/duration readout shared between the decoder thread
//! and the UI thread.
//!
//! The decoder writes after every presented frame and seek; the UI reads
//! whenever it needs `current_time()` or `duration()` (skip buttons, time
//! labels, bookmarks). Values are stored as `f64` bit patterns.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct ClockInner {
    position_bits: AtomicU64,
    duration_bits: AtomicU64,
    ready: AtomicBool,
}

/// Cheaply clonable handle to the shared clock.
#[derive(Debug, Clone, Default)]
pub struct TransportClock {
    inner: Arc<ClockInner>,
}

impl TransportClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes the media duration and marks the clock ready.
    pub fn mark_ready(&self, duration_secs: f64) {
        let duration = sanitize(duration_secs);
        self.inner
            .duration_bits
            .store(duration.to_bits(), Ordering::Relaxed);
        self.inner.ready.store(true, Ordering::Release);
    }

    pub fn set_position(&self, position_secs: f64) {
        self.inner
            .position_bits
            .store(sanitize(position_secs).to_bits(), Ordering::Relaxed);
    }

    /// Returns to the not-ready state, e.g. when the decoder stops.
    pub fn reset(&self) {
        self.inner.ready.store(false, Ordering::Release);
        self.inner.position_bits.store(0, Ordering::Relaxed);
        self.inner.duration_bits.store(0, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.inner.ready.load(Ordering::Acquire)
    }

    /// Current position in seconds, `None` until ready.
    #[must_use]
    pub fn current_time(&self) -> Option<f64> {
        self.is_ready()
            .then(|| f64::from_bits(self.inner.position_bits.load(Ordering::Relaxed)))
    }

    /// Media duration in seconds, `None` until ready.
    #[must_use]
    pub fn duration(&self) -> Option<f64> {
        self.is_ready()
            .then(|| f64::from_bits(self.inner.duration_bits.load(Ordering::Relaxed)))
    }
}

fn sanitize(secs: f64) -> f64 {
    if secs.is_finite() {
        secs.max(0.0)
    } else {
        0.0
    }
}
