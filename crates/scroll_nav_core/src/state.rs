//! Scroll state machine
//!
//! Maps consecutive scroll offsets to one of three visual states.
//!
//! Rules are checked in priority order and the first match wins:
//!
//! 1. At or above the top (`offset <= 0`): [`ScrollState::Initial`]
//! 2. At the document bottom with `show_at_bottom`: [`ScrollState::Fixed`]
//! 3. Past `start_offset` and moved at least `tolerance`: down hides, up fixes
//! 4. Otherwise no transition; whatever is applied stays applied

use scroll_nav_platform::MetricsSnapshot;

use crate::config::{ClassNames, ScrollNavConfig};

/// Slack for the bottom-of-document check
///
/// Viewport and document heights come from different measurement paths and
/// can disagree by a sub-pixel amount.
pub const BOTTOM_EPSILON: f64 = 1.0;

/// Visual state of the tracked element
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollState {
    /// In natural document flow
    #[default]
    Initial,
    /// Pinned to the top of the viewport and visible
    Fixed,
    /// Translated out of view
    Hidden,
}

impl ScrollState {
    /// Derive the state from class membership
    ///
    /// The hidden class wins when both modifier classes are present, since
    /// [`hide`](crate::ScrollNav::hide) leaves the fixed class in place.
    pub fn from_classes(has_fixed: bool, has_hidden: bool) -> Self {
        match (has_fixed, has_hidden) {
            (_, true) => ScrollState::Hidden,
            (true, false) => ScrollState::Fixed,
            (false, false) => ScrollState::Initial,
        }
    }

    /// The modifier class this state adds, if any
    pub fn class_name(self, names: &ClassNames) -> Option<&str> {
        match self {
            ScrollState::Initial => None,
            ScrollState::Fixed => Some(&names.fixed),
            ScrollState::Hidden => Some(&names.hidden),
        }
    }

    /// Lowercase name, as exposed to scripts
    pub fn as_str(self) -> &'static str {
        match self {
            ScrollState::Initial => "initial",
            ScrollState::Fixed => "fixed",
            ScrollState::Hidden => "hidden",
        }
    }
}

impl std::fmt::Display for ScrollState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs to one evaluation
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    /// Offset recorded at the previous evaluation
    pub previous_offset: f64,
    /// Offset now
    pub current_offset: f64,
    /// Visible viewport height
    pub viewport_extent: f64,
    /// Total document height
    pub document_extent: f64,
}

impl ScrollSample {
    /// Pair a previous offset with fresh metrics
    pub fn new(previous_offset: f64, metrics: MetricsSnapshot) -> Self {
        Self {
            previous_offset,
            current_offset: metrics.offset,
            viewport_extent: metrics.viewport_extent,
            document_extent: metrics.document_extent,
        }
    }

    /// Whether the viewport reaches the end of the document
    pub fn at_bottom(&self) -> bool {
        self.viewport_extent + self.current_offset >= self.document_extent - BOTTOM_EPSILON
    }

    /// Absolute movement since the previous evaluation
    pub fn delta(&self) -> f64 {
        (self.current_offset - self.previous_offset).abs()
    }
}

/// Decide the state for one sample
///
/// Returns `None` when no rule fires; the caller keeps its current state.
pub fn evaluate(sample: &ScrollSample, config: &ScrollNavConfig) -> Option<ScrollState> {
    let current = sample.current_offset;

    if current <= 0.0 {
        return Some(ScrollState::Initial);
    }

    if config.show_at_bottom && sample.at_bottom() {
        return Some(ScrollState::Fixed);
    }

    // delta == 0 never passes, even with zero tolerance
    let moved = sample.delta();
    if current > config.start_offset && moved > 0.0 && moved >= config.tolerance {
        return if current > sample.previous_offset {
            Some(ScrollState::Hidden)
        } else {
            Some(ScrollState::Fixed)
        };
    }

    None
}

/// Carries the previous offset between evaluations
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollTracker {
    last_offset: f64,
}

impl ScrollTracker {
    /// Seed the tracker with the offset at construction time
    pub fn new(seed: f64) -> Self {
        Self { last_offset: seed }
    }

    /// Offset recorded at the most recent evaluation
    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    /// Evaluate fresh metrics, then record their offset as the previous one
    pub fn update(
        &mut self,
        metrics: MetricsSnapshot,
        config: &ScrollNavConfig,
    ) -> Option<ScrollState> {
        let sample = ScrollSample::new(self.last_offset, metrics);
        let next = evaluate(&sample, config);
        self.last_offset = metrics.offset;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScrollNavOptions;

    fn config(start_offset: f64, tolerance: f64, show_at_bottom: bool) -> ScrollNavConfig {
        ScrollNavOptions::new()
            .start_offset(start_offset)
            .tolerance(tolerance)
            .show_at_bottom(show_at_bottom)
            .resolve(0.0)
            .unwrap()
    }

    fn sample(previous: f64, current: f64) -> ScrollSample {
        ScrollSample {
            previous_offset: previous,
            current_offset: current,
            viewport_extent: 800.0,
            document_extent: 10_000.0,
        }
    }

    #[test]
    fn test_top_resets_regardless_of_history() {
        let cfg = config(50.0, 8.0, true);
        for (previous, current) in [(0.0, 0.0), (400.0, 0.0), (30.0, -12.5), (0.0, -200.0)] {
            assert_eq!(
                evaluate(&sample(previous, current), &cfg),
                Some(ScrollState::Initial)
            );
        }
    }

    #[test]
    fn test_top_beats_bottom() {
        // A document shorter than the viewport is at the bottom while at the top
        let cfg = config(0.0, 0.0, true);
        let short = ScrollSample {
            previous_offset: 10.0,
            current_offset: 0.0,
            viewport_extent: 800.0,
            document_extent: 400.0,
        };
        assert_eq!(evaluate(&short, &cfg), Some(ScrollState::Initial));
    }

    #[test]
    fn test_bottom_forces_fixed() {
        let cfg = config(5_000.0, 8.0, true);
        // Moving down, below start offset, sub-tolerance: all ignored at the bottom
        let bottom = ScrollSample {
            previous_offset: 1_197.0,
            current_offset: 1_199.5,
            viewport_extent: 800.0,
            document_extent: 2_000.0,
        };
        assert!(bottom.at_bottom());
        assert_eq!(evaluate(&bottom, &cfg), Some(ScrollState::Fixed));
    }

    #[test]
    fn test_bottom_epsilon_boundary() {
        let cfg = config(0.0, 8.0, true);
        let near = ScrollSample {
            previous_offset: 1_199.0,
            current_offset: 1_199.0,
            viewport_extent: 800.0,
            document_extent: 2_000.0,
        };
        assert_eq!(evaluate(&near, &cfg), Some(ScrollState::Fixed));

        let short_of = ScrollSample {
            current_offset: 1_198.9,
            ..near
        };
        assert!(!short_of.at_bottom());
        assert_eq!(evaluate(&short_of, &cfg), None);
    }

    #[test]
    fn test_bottom_ignored_when_disabled() {
        let cfg = config(50.0, 8.0, false);
        let bottom = ScrollSample {
            previous_offset: 1_200.0,
            current_offset: 1_200.0,
            viewport_extent: 800.0,
            document_extent: 2_000.0,
        };
        assert_eq!(evaluate(&bottom, &cfg), None);
    }

    #[test]
    fn test_below_start_offset_is_inert() {
        let cfg = config(50.0, 8.0, true);
        assert_eq!(evaluate(&sample(0.0, 50.0), &cfg), None);
        assert_eq!(evaluate(&sample(49.0, 20.0), &cfg), None);
    }

    #[test]
    fn test_sub_tolerance_is_ignored() {
        let cfg = config(50.0, 8.0, true);
        assert_eq!(evaluate(&sample(100.0, 107.9), &cfg), None);
        assert_eq!(evaluate(&sample(100.0, 92.5), &cfg), None);
    }

    #[test]
    fn test_direction_past_start_offset() {
        let cfg = config(50.0, 8.0, true);
        assert_eq!(evaluate(&sample(0.0, 100.0), &cfg), Some(ScrollState::Hidden));
        assert_eq!(evaluate(&sample(100.0, 120.0), &cfg), Some(ScrollState::Hidden));
        assert_eq!(evaluate(&sample(200.0, 180.0), &cfg), Some(ScrollState::Fixed));
    }

    #[test]
    fn test_zero_tolerance_any_movement_counts() {
        let cfg = config(0.0, 0.0, false);
        assert_eq!(evaluate(&sample(10.0, 10.5), &cfg), Some(ScrollState::Hidden));
        assert_eq!(evaluate(&sample(10.5, 10.0), &cfg), Some(ScrollState::Fixed));
        assert_eq!(evaluate(&sample(10.0, 10.0), &cfg), None);
    }

    #[test]
    fn test_tolerance_boundary_is_inclusive() {
        let cfg = config(20.0, 15.0, true);
        assert_eq!(evaluate(&sample(50.0, 65.0), &cfg), Some(ScrollState::Hidden));
        assert_eq!(evaluate(&sample(50.0, 64.0), &cfg), None);
    }

    #[test]
    fn test_tracker_records_offset_after_evaluation() {
        let cfg = config(50.0, 8.0, true);
        let mut tracker = ScrollTracker::new(0.0);

        let metrics = |offset| MetricsSnapshot::new(offset, 800.0, 10_000.0);

        assert_eq!(tracker.update(metrics(100.0), &cfg), Some(ScrollState::Hidden));
        assert_eq!(tracker.last_offset(), 100.0);

        // Sub-tolerance moves still advance the recorded offset
        assert_eq!(tracker.update(metrics(104.0), &cfg), None);
        assert_eq!(tracker.last_offset(), 104.0);

        assert_eq!(tracker.update(metrics(96.0), &cfg), Some(ScrollState::Fixed));
    }

    #[test]
    fn test_state_from_classes() {
        assert_eq!(ScrollState::from_classes(false, false), ScrollState::Initial);
        assert_eq!(ScrollState::from_classes(true, false), ScrollState::Fixed);
        assert_eq!(ScrollState::from_classes(false, true), ScrollState::Hidden);
        assert_eq!(ScrollState::from_classes(true, true), ScrollState::Hidden);
    }

    #[test]
    fn test_state_class_names() {
        let names = ClassNames::default();
        assert_eq!(ScrollState::Initial.class_name(&names), None);
        assert_eq!(ScrollState::Fixed.class_name(&names), Some("scroll-nav--fixed"));
        assert_eq!(ScrollState::Hidden.class_name(&names), Some("scroll-nav--hidden"));
        assert_eq!(ScrollState::Hidden.to_string(), "hidden");
    }
}
