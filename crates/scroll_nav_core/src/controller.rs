//! Lifecycle controller
//!
//! [`ScrollNav`] owns one scroll subscription, routes scroll events through
//! the [`FrameThrottle`] into the state machine, and reflects the result on
//! the tracked element's classes.
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized ──init()──▶ Active ──destroy()──▶ Destroyed
//! ```
//!
//! Construction calls `init()`, so a controller is live as soon as
//! [`ScrollNav::new`] returns. `init()` on an active controller and
//! `destroy()` on an inactive one do nothing. There is no way back from
//! `Destroyed`; construct a new controller to resume tracking.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use scroll_nav_platform::{ListenerOptions, Platform, ScrollHandler, TrackedElement};

use crate::config::{ScrollNavConfig, ScrollNavOptions};
use crate::error::{Result, ScrollNavError};
use crate::state::{ScrollState, ScrollTracker};
use crate::throttle::FrameThrottle;

/// Options for the scroll subscription, reused verbatim for removal
const SCROLL_LISTENER: ListenerOptions = ListenerOptions::passive();

/// Callback type for state changes
pub type StateObserver = Rc<dyn Fn(ScrollState)>;

/// Controller lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    /// Constructed, not yet subscribed
    #[default]
    Uninitialized,
    /// Subscribed to scroll events
    Active,
    /// Unsubscribed for good
    Destroyed,
}

// ============================================================================
// Controller
// ============================================================================

/// Scroll-driven header controller for one element
///
/// Dropping the controller has the same effect as [`destroy`](Self::destroy).
pub struct ScrollNav<P: Platform> {
    inner: Rc<Inner<P>>,
}

struct Inner<P: Platform> {
    platform: Rc<P>,
    element: P::Element,
    config: ScrollNavConfig,
    tracker: Cell<ScrollTracker>,
    lifecycle: Cell<Lifecycle>,
    throttle: FrameThrottle,
    /// Created once so subscribe and unsubscribe see the same identity
    handler: ScrollHandler,
    observer: RefCell<Option<StateObserver>>,
}

impl<P: Platform> ScrollNav<P> {
    /// Start tracking `element`
    ///
    /// Checks, in order: that the platform has a document, that an element
    /// was given, that the platform passes [`is_supported`](Self::is_supported),
    /// and that the options are valid. On success the base class is applied,
    /// the current scroll offset is recorded and the controller is active.
    pub fn new(
        platform: Rc<P>,
        element: Option<P::Element>,
        options: ScrollNavOptions,
    ) -> Result<Self> {
        if !platform.has_document() {
            return Err(ScrollNavError::Environment);
        }
        let element = element.ok_or(ScrollNavError::MissingElement)?;
        if !Self::is_supported(&platform) {
            return Err(ScrollNavError::Unsupported {
                platform: platform.name(),
            });
        }

        let config = options.resolve(element.rendered_height())?;
        element.add_classes(&[config.class_names.base.as_str()]);
        let seed = platform.scroll_offset();

        let inner = Rc::new_cyclic(|weak: &Weak<Inner<P>>| {
            let weak = weak.clone();
            let handler: ScrollHandler = Rc::new(move || {
                if let Some(inner) = weak.upgrade() {
                    Inner::on_scroll(&inner);
                }
            });

            Inner {
                platform,
                element,
                config,
                tracker: Cell::new(ScrollTracker::new(seed)),
                lifecycle: Cell::new(Lifecycle::Uninitialized),
                throttle: FrameThrottle::new(),
                handler,
                observer: RefCell::new(None),
            }
        });

        if let Err(err) = inner.activate() {
            inner
                .element
                .remove_classes(&[inner.config.class_names.base.as_str()]);
            return Err(err);
        }

        tracing::debug!(
            "ScrollNav: tracking on {} (start_offset={}, tolerance={}, show_at_bottom={})",
            inner.platform.name(),
            inner.config.start_offset,
            inner.config.tolerance,
            inner.config.show_at_bottom
        );

        Ok(Self { inner })
    }

    /// Whether `platform` has everything a controller needs
    ///
    /// Never fails: a probe error counts as unsupported.
    pub fn is_supported(platform: &P) -> bool {
        match platform.probe() {
            Ok(capabilities) => capabilities.is_complete(),
            Err(err) => {
                tracing::warn!("ScrollNav: capability probe failed: {}", err);
                false
            }
        }
    }

    /// Subscribe to scroll events; no-op unless uninitialized
    pub fn init(&self) {
        if let Err(err) = self.inner.activate() {
            tracing::warn!("ScrollNav: init failed: {}", err);
        }
    }

    /// Stop tracking and return the element to its initial state
    ///
    /// No-op unless active.
    pub fn destroy(&self) {
        self.inner.deactivate();
    }

    /// Remove the fixed and hidden classes; the base class stays
    pub fn reset(&self) {
        self.inner.reset();
    }

    /// Pin the element: add the fixed class, remove the hidden class
    ///
    /// The next scroll evaluation may override this.
    pub fn fix(&self) {
        self.inner.fix();
    }

    /// Hide the element: add the hidden class
    ///
    /// Unlike [`fix`](Self::fix), the fixed class is left in place:
    /// stylesheets key the slide-out transition on both classes being present.
    pub fn hide(&self) {
        self.inner.hide();
    }

    /// Register a callback for state changes caused by scrolling
    ///
    /// Manual [`fix`](Self::fix)/[`hide`](Self::hide)/[`reset`](Self::reset)
    /// calls do not notify. Replaces any previous callback.
    pub fn on_change<F>(&self, callback: F)
    where
        F: Fn(ScrollState) + 'static,
    {
        *self.inner.observer.borrow_mut() = Some(Rc::new(callback));
    }

    /// Current visual state, derived from the element's classes
    pub fn state(&self) -> ScrollState {
        self.inner.state()
    }

    /// Current lifecycle stage
    pub fn lifecycle(&self) -> Lifecycle {
        self.inner.lifecycle.get()
    }

    /// Whether the controller holds a live scroll subscription
    pub fn is_active(&self) -> bool {
        self.lifecycle() == Lifecycle::Active
    }

    /// Offset recorded at the most recent evaluation
    pub fn last_offset(&self) -> f64 {
        self.inner.tracker.get().last_offset()
    }

    /// Whether an evaluation is scheduled for the next frame
    pub fn has_pending_frame(&self) -> bool {
        self.inner.throttle.is_pending()
    }

    /// The resolved configuration
    pub fn config(&self) -> &ScrollNavConfig {
        &self.inner.config
    }

    /// The tracked element
    pub fn element(&self) -> &P::Element {
        &self.inner.element
    }
}

impl<P: Platform> Drop for ScrollNav<P> {
    fn drop(&mut self) {
        self.inner.deactivate();
    }
}

impl<P: Platform> std::fmt::Debug for ScrollNav<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollNav")
            .field("platform", &self.inner.platform.name())
            .field("config", &self.inner.config)
            .field("lifecycle", &self.lifecycle())
            .field("state", &self.state())
            .field("last_offset", &self.last_offset())
            .finish()
    }
}

// ============================================================================
// Inner State
// ============================================================================

impl<P: Platform> Inner<P> {
    fn activate(&self) -> Result<()> {
        match self.lifecycle.get() {
            Lifecycle::Active => {
                tracing::trace!("ScrollNav: init ignored, already active");
                Ok(())
            }
            Lifecycle::Destroyed => {
                tracing::debug!("ScrollNav: init ignored after destroy");
                Ok(())
            }
            Lifecycle::Uninitialized => {
                self.platform.subscribe(&self.handler, SCROLL_LISTENER)?;
                self.lifecycle.set(Lifecycle::Active);
                Ok(())
            }
        }
    }

    fn deactivate(&self) {
        if self.lifecycle.get() != Lifecycle::Active {
            return;
        }

        self.lifecycle.set(Lifecycle::Destroyed);
        self.platform.unsubscribe(&self.handler, SCROLL_LISTENER);
        self.throttle.cancel(&*self.platform);
        self.reset();
        tracing::debug!("ScrollNav: destroyed");
    }

    fn on_scroll(this: &Rc<Self>) {
        if this.throttle.is_pending() {
            return;
        }

        let weak = Rc::downgrade(this);
        this.throttle.notify(
            &*this.platform,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.run_frame();
                }
            }),
        );
    }

    fn run_frame(&self) {
        self.throttle.begin_frame();
        if self.lifecycle.get() != Lifecycle::Active {
            return;
        }

        let metrics = self.platform.snapshot();
        let mut tracker = self.tracker.get();
        let next = tracker.update(metrics, &self.config);
        self.tracker.set(tracker);

        tracing::trace!(
            "ScrollNav: offset={} viewport={} document={} -> {:?}",
            metrics.offset,
            metrics.viewport_extent,
            metrics.document_extent,
            next
        );

        if let Some(next) = next {
            self.apply(next);
        }
    }

    fn apply(&self, next: ScrollState) {
        let before = self.state();
        match next {
            ScrollState::Initial => self.reset(),
            ScrollState::Fixed => self.fix(),
            ScrollState::Hidden => self.hide(),
        }

        let after = self.state();
        if after != before {
            tracing::debug!("ScrollNav: {} -> {}", before, after);
            // Clone out so the callback may replace itself
            let observer = self.observer.borrow().clone();
            if let Some(observer) = observer {
                observer(after);
            }
        }
    }

    fn reset(&self) {
        let names = &self.config.class_names;
        self.element
            .remove_classes(&[names.fixed.as_str(), names.hidden.as_str()]);
    }

    fn fix(&self) {
        let names = &self.config.class_names;
        self.element.add_classes(&[names.fixed.as_str()]);
        self.element.remove_classes(&[names.hidden.as_str()]);
    }

    fn hide(&self) {
        let names = &self.config.class_names;
        self.element.add_classes(&[names.hidden.as_str()]);
    }

    fn state(&self) -> ScrollState {
        let names = &self.config.class_names;
        ScrollState::from_classes(
            self.element.has_class(&names.fixed),
            self.element.has_class(&names.hidden),
        )
    }
}
