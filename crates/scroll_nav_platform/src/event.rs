//! Scroll event subscription

use std::fmt;
use std::rc::Rc;

use crate::error::PlatformError;

/// Callable invoked for every scroll event
///
/// Handlers are compared by pointer identity. A subscriber must keep the
/// handler it subscribed with and pass that same value to
/// [`ScrollEventSource::unsubscribe`], otherwise nothing is removed.
pub type ScrollHandler = Rc<dyn Fn()>;

/// Returns true if both handlers are the same subscription identity
pub fn same_handler(a: &ScrollHandler, b: &ScrollHandler) -> bool {
    // Compare data pointers only; vtable pointers may differ across codegen units.
    Rc::as_ptr(a) as *const () == Rc::as_ptr(b) as *const ()
}

/// Options used when registering a listener
///
/// Removal only matches when the same options are passed back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ListenerOptions {
    /// Listener promises never to block the scroll (read-only intent)
    pub passive: bool,
    /// Listener runs during the capture phase
    pub capture: bool,
}

impl ListenerOptions {
    /// Passive, bubbling-phase listener
    pub const fn passive() -> Self {
        Self {
            passive: true,
            capture: false,
        }
    }

    /// Set the capture flag
    pub const fn capture(mut self, capture: bool) -> Self {
        self.capture = capture;
        self
    }
}

impl fmt::Display for ListenerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{passive: {}, capture: {}}}", self.passive, self.capture)
    }
}

/// Source of scroll events owned by the host document
pub trait ScrollEventSource {
    /// Register `handler` for scroll events
    fn subscribe(&self, handler: &ScrollHandler, options: ListenerOptions)
        -> Result<(), PlatformError>;

    /// Remove a handler previously registered with the same options
    ///
    /// Removing a handler that is not registered is a no-op.
    fn unsubscribe(&self, handler: &ScrollHandler, options: ListenerOptions);
}
