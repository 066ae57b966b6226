//! scroll-nav Core
//!
//! A header/navigation controller that behaves like mobile browser chrome:
//! scroll down past a threshold and it slides away, scroll up and it comes
//! back pinned to the top, reach the bottom of the document and it shows
//! again.
//!
//! # Features
//!
//! - **State machine**: pure decision logic over consecutive scroll offsets
//!   with a start-offset threshold, jitter tolerance and bottom override
//! - **Frame throttle**: at most one evaluation per display refresh, reading
//!   the scroll position when the frame runs
//! - **Lifecycle**: idempotent `init`/`destroy` with manual `reset`/`fix`/`hide`
//!   overrides
//! - **Platform-agnostic**: everything the controller reads or mutates goes
//!   through `scroll_nav_platform` traits
//!
//! # Example
//!
//! ```ignore
//! use scroll_nav_core::prelude::*;
//!
//! let nav = ScrollNav::new(platform, Some(header), ScrollNavOptions::new().tolerance(12.0))?;
//! nav.on_change(|state| tracing::info!("header is now {}", state));
//! ```

pub mod config;
pub mod controller;
pub mod error;
#[cfg(any(test, feature = "headless"))]
pub mod headless;
pub mod state;
pub mod throttle;


pub use config::{ClassNameOptions, ClassNames, ScrollNavConfig, ScrollNavOptions};
pub use controller::{Lifecycle, ScrollNav, StateObserver};
pub use error::{Result, ScrollNavError};
pub use state::{evaluate, ScrollSample, ScrollState, ScrollTracker, BOTTOM_EPSILON};
pub use throttle::FrameThrottle;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{ClassNames, ScrollNavConfig, ScrollNavOptions};
    pub use crate::controller::{Lifecycle, ScrollNav};
    pub use crate::error::{Result, ScrollNavError};
    pub use crate::state::ScrollState;
    pub use scroll_nav_platform::prelude::*;
}
