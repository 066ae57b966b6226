//! Platform trait and capability probing

use crate::element::TrackedElement;
use crate::error::PlatformError;
use crate::event::ScrollEventSource;
use crate::frame::FrameScheduler;
use crate::metrics::ScrollMetrics;

/// Platform abstraction trait
///
/// Implemented by each backend (browser, headless) to provide every
/// collaborator the scroll controller consumes: scroll metrics, the scroll
/// event source and the refresh-aligned frame scheduler.
pub trait Platform: ScrollMetrics + ScrollEventSource + FrameScheduler + 'static {
    /// The element type this platform tracks
    type Element: TrackedElement + 'static;

    /// Get the platform name
    ///
    /// Returns a string like "web" or "headless".
    fn name(&self) -> &'static str;

    /// Whether a document/window equivalent exists
    fn has_document(&self) -> bool;

    /// Probe the APIs the controller relies on
    ///
    /// Probing may touch host objects that throw; such failures are
    /// reported as [`PlatformError::Probe`].
    fn probe(&self) -> Result<Capabilities, PlatformError>;
}

/// APIs detected by [`Platform::probe`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// A "run once before next repaint" primitive is available
    pub frame_scheduling: bool,
    /// Elements expose class membership APIs
    pub class_list: bool,
}

impl Capabilities {
    /// Every capability present
    pub const fn all() -> Self {
        Self {
            frame_scheduling: true,
            class_list: true,
        }
    }

    /// Whether everything the controller needs is present
    pub fn is_complete(&self) -> bool {
        self.frame_scheduling && self.class_list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities_default_is_incomplete() {
        assert!(!Capabilities::default().is_complete());
        assert!(Capabilities::all().is_complete());
    }

    #[test]
    fn test_capabilities_need_both() {
        let caps = Capabilities {
            frame_scheduling: true,
            class_list: false,
        };
        assert!(!caps.is_complete());
    }
}
