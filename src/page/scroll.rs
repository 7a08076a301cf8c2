//! Scroll tracking.
//!
//! Scroll events are fanned out on a broadcast channel. A mounted page holds
//! one receiver; dropping it deregisters the listener.

use tokio::sync::broadcast::{self, error::TryRecvError};

/// Viewport and document geometry at the moment of a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Current vertical scroll offset.
    pub scroll_y: f64,
    /// Full scrollable height of the document.
    pub document_height: f64,
    /// Height of the visible viewport.
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_y: f64, document_height: f64, viewport_height: f64) -> Self {
        Self {
            scroll_y,
            document_height,
            viewport_height,
        }
    }

    /// Percentage of the scrollable range already scrolled, in `[0, 100]`.
    ///
    /// A document no taller than the viewport has no scrollable range and
    /// reports 0. Non-finite inputs also report 0.
    pub fn progress_percent(&self) -> f64 {
        let range = self.document_height - self.viewport_height;
        if range.is_nan() || range <= 0.0 || !self.scroll_y.is_finite() {
            return 0.0;
        }
        let percent = self.scroll_y / range * 100.0;
        if percent.is_finite() {
            percent.clamp(0.0, 100.0)
        } else {
            0.0
        }
    }
}

/// Source of scroll events for mounted pages.
#[derive(Debug, Clone)]
pub struct ScrollEvents {
    tx: broadcast::Sender<ScrollMetrics>,
}

impl ScrollEvents {
    /// Create a new event source buffering up to `capacity` events per listener.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Register a listener.
    pub fn subscribe(&self) -> ScrollListener {
        ScrollListener {
            rx: self.tx.subscribe(),
        }
    }

    /// Deliver one scroll event to every registered listener.
    pub fn emit(&self, metrics: ScrollMetrics) {
        // No listeners is fine: nothing is mounted.
        let _ = self.tx.send(metrics);
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for ScrollEvents {
    fn default() -> Self {
        Self::new(64)
    }
}

/// A registered scroll listener. Deregisters on drop.
#[derive(Debug)]
pub struct ScrollListener {
    rx: broadcast::Receiver<ScrollMetrics>,
}

impl ScrollListener {
    /// Take every pending event, returning the most recent one.
    ///
    /// If the listener fell behind, skipped events are dropped; each event
    /// fully determines the progress so only the latest matters.
    pub fn latest(&mut self) -> Option<ScrollMetrics> {
        let mut latest = None;
        loop {
            match self.rx.try_recv() {
                Ok(metrics) => latest = Some(metrics),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::trace!(skipped, "Scroll listener lagged");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return latest,
            }
        }
    }
}
