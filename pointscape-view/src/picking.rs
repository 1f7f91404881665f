//! Marker picking
//!
//! The geometric ray/point proximity test belongs to the renderer; this
//! component maps the renderer's intersection results to marker indices.
//! Hover checks are rate-limited since they fire on every pointer move over
//! clouds of hundreds of thousands of points.

use pointscape_core::MarkerIndex;
use std::time::{Duration, Instant};

/// Default minimum interval between hover checks
const DEFAULT_HOVER_INTERVAL: Duration = Duration::from_millis(100);

/// Resolves renderer intersection results against a scene's marker set.
#[derive(Debug, Clone)]
pub struct MarkerPicker {
    markers: MarkerIndex,
    hover_interval: Duration,
    last_hover_check: Option<Instant>,
}

impl MarkerPicker {
    /// Create a picker over the given marker set
    pub fn new(markers: MarkerIndex) -> Self {
        Self::with_hover_interval(markers, DEFAULT_HOVER_INTERVAL)
    }

    /// Create a picker with a custom hover-check interval
    pub fn with_hover_interval(markers: MarkerIndex, hover_interval: Duration) -> Self {
        Self {
            markers,
            hover_interval,
            last_hover_check: None,
        }
    }

    /// The marker set this picker resolves against
    pub fn markers(&self) -> &MarkerIndex {
        &self.markers
    }

    /// Resolve a click: the first intersection candidate that is a marker.
    ///
    /// `candidates` are buffer indices ordered by the renderer
    /// (nearest first). Returns `None` when nothing under the cursor is a
    /// marker, and always `None` for an empty marker set.
    pub fn select(&self, candidates: &[usize]) -> Option<usize> {
        if self.markers.is_empty() {
            return None;
        }
        candidates.iter().copied().find(|&i| self.markers.contains(i))
    }

    /// Resolve a hover, rate-limited.
    ///
    /// Returns `None` when the check is throttled (the caller keeps its
    /// previous hover state), `Some(result)` when evaluated. Throttling is a
    /// performance policy; a throttled call never mutates hover semantics.
    pub fn hover(&mut self, candidates: &[usize], now: Instant) -> Option<Option<usize>> {
        if let Some(last) = self.last_hover_check {
            if now.duration_since(last) < self.hover_interval {
                return None;
            }
        }
        self.last_hover_check = Some(now);
        Some(self.select(candidates))
    }
}
