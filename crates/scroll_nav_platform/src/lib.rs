//! scroll-nav Platform Abstraction Layer
//!
//! This crate provides the platform-agnostic traits a scroll-driven
//! navigation controller needs from its host environment.
//!
//! # Architecture
//!
//! - [`Platform`] - The top-level platform abstraction and capability probe
//! - [`ScrollMetrics`] - Scroll offset, viewport and document extents
//! - [`ScrollEventSource`] - Scroll event subscription
//! - [`FrameScheduler`] - Refresh-aligned one-shot scheduling
//! - [`TrackedElement`] - Class membership of the tracked element
//!
//! # Platform Implementations
//!
//! - `scroll_nav_web` - Browsers via `web-sys`
//! - `scroll_nav_core::headless` - In-memory platform for tests
//!
//! # Example
//!
//! ```ignore
//! use scroll_nav_platform::prelude::*;
//!
//! fn at_bottom<P: Platform>(platform: &P) -> bool {
//!     platform.snapshot().remaining() <= 1.0
//! }
//! ```

mod element;
mod error;
mod event;
mod frame;
mod metrics;
mod platform;

// Re-export all public types
pub use element::TrackedElement;
pub use error::{PlatformError, Result};
pub use event::{same_handler, ListenerOptions, ScrollEventSource, ScrollHandler};
pub use frame::{FrameCallback, FrameHandle, FrameScheduler};
pub use metrics::{document_extent_of, MetricsSnapshot, ScrollMetrics};
pub use platform::{Capabilities, Platform};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::element::TrackedElement;
    pub use crate::error::{PlatformError, Result};
    pub use crate::event::{ListenerOptions, ScrollEventSource, ScrollHandler};
    pub use crate::frame::{FrameCallback, FrameHandle, FrameScheduler};
    pub use crate::metrics::{MetricsSnapshot, ScrollMetrics};
    pub use crate::platform::{Capabilities, Platform};
}
