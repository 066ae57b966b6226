//! Scroll position and viewport/document measurements

/// Readers for the live scroll position and extents of the host document
///
/// All values are in CSS pixels. None of them are cached; every call reads
/// the current layout.
pub trait ScrollMetrics {
    /// Current vertical scroll offset from the top of the document
    ///
    /// May be negative on platforms with rubber-band overscroll.
    fn scroll_offset(&self) -> f64;

    /// Height of the visible viewport
    fn viewport_extent(&self) -> f64;

    /// Total scrollable height of the document
    fn document_extent(&self) -> f64;

    /// Read all three values at once
    fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            offset: self.scroll_offset(),
            viewport_extent: self.viewport_extent(),
            document_extent: self.document_extent(),
        }
    }
}

/// Scroll metrics captured at one instant
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MetricsSnapshot {
    /// Vertical scroll offset
    pub offset: f64,
    /// Visible viewport height
    pub viewport_extent: f64,
    /// Total document height
    pub document_extent: f64,
}

impl MetricsSnapshot {
    /// Create a snapshot
    pub fn new(offset: f64, viewport_extent: f64, document_extent: f64) -> Self {
        Self {
            offset,
            viewport_extent,
            document_extent,
        }
    }

    /// Distance left to scroll before reaching the bottom
    pub fn remaining(&self) -> f64 {
        self.document_extent - (self.viewport_extent + self.offset)
    }
}

/// Document height as the largest of several candidate measurements
///
/// Layout engines disagree on which of `scrollHeight`, `offsetHeight` and
/// `clientHeight` (on body vs. root element) reflects the real height, so
/// the maximum is taken. Non-finite candidates are skipped; returns 0 when
/// none are usable.
pub fn document_extent_of<I>(candidates: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    candidates
        .into_iter()
        .filter(|value| value.is_finite())
        .fold(0.0, f64::max)
}
