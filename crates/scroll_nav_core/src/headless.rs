//! Headless platform
//!
//! An in-memory [`Platform`] for driving a controller without a browser.
//! Scroll events are dispatched by hand and frames only run when
//! [`HeadlessPlatform::run_frame`] is called, so tests can control exactly
//! what happens between two display refreshes.
//!
//! # Example
//!
//! ```ignore
//! use scroll_nav_core::headless::{HeadlessElement, HeadlessPlatform};
//!
//! let platform = Rc::new(HeadlessPlatform::new(800.0, 5_000.0));
//! let element = HeadlessElement::new(60.0);
//! let nav = ScrollNav::new(platform.clone(), Some(element.clone()), Default::default())?;
//!
//! platform.scroll_to(300.0);
//! platform.run_frame();
//! assert!(element.has_class("scroll-nav--hidden"));
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use scroll_nav_platform::{
    same_handler, Capabilities, FrameCallback, FrameHandle, FrameScheduler, ListenerOptions,
    Platform, PlatformError, ScrollEventSource, ScrollHandler, ScrollMetrics, TrackedElement,
};

/// In-memory platform with manually driven scroll events and frames
pub struct HeadlessPlatform {
    offset: Cell<f64>,
    viewport_extent: Cell<f64>,
    document_extent: Cell<f64>,
    has_document: Cell<bool>,
    capabilities: Cell<Capabilities>,
    probe_error: RefCell<Option<String>>,
    listeners: RefCell<Vec<(ScrollHandler, ListenerOptions)>>,
    subscribe_calls: Cell<usize>,
    unsubscribe_calls: Cell<usize>,
    frames: RefCell<Vec<(FrameHandle, FrameCallback)>>,
    next_frame: Cell<u64>,
    frames_requested: Cell<usize>,
    frames_cancelled: Cell<usize>,
}

impl HeadlessPlatform {
    /// Create a platform scrolled to the top
    pub fn new(viewport_extent: f64, document_extent: f64) -> Self {
        Self {
            offset: Cell::new(0.0),
            viewport_extent: Cell::new(viewport_extent),
            document_extent: Cell::new(document_extent),
            has_document: Cell::new(true),
            capabilities: Cell::new(Capabilities::all()),
            probe_error: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
            subscribe_calls: Cell::new(0),
            unsubscribe_calls: Cell::new(0),
            frames: RefCell::new(Vec::new()),
            next_frame: Cell::new(1),
            frames_requested: Cell::new(0),
            frames_cancelled: Cell::new(0),
        }
    }

    /// Simulate running outside a browser
    pub fn without_document(self) -> Self {
        self.has_document.set(false);
        self
    }

    /// Override the capabilities reported by the probe
    pub fn with_capabilities(self, capabilities: Capabilities) -> Self {
        self.capabilities.set(capabilities);
        self
    }

    /// Make the probe fail
    pub fn with_failing_probe(self, message: impl Into<String>) -> Self {
        *self.probe_error.borrow_mut() = Some(message.into());
        self
    }

    /// Move the scroll position without dispatching an event
    pub fn set_scroll_offset(&self, offset: f64) {
        self.offset.set(offset);
    }

    /// Change the document height
    pub fn set_document_extent(&self, extent: f64) {
        self.document_extent.set(extent);
    }

    /// Change the viewport height
    pub fn set_viewport_extent(&self, extent: f64) {
        self.viewport_extent.set(extent);
    }

    /// Offset at which the viewport touches the document bottom
    pub fn bottom_offset(&self) -> f64 {
        self.document_extent.get() - self.viewport_extent.get()
    }

    /// Move the scroll position and dispatch a scroll event
    pub fn scroll_to(&self, offset: f64) {
        self.set_scroll_offset(offset);
        self.dispatch_scroll();
    }

    /// Scroll to `offset` and run the frame it schedules
    pub fn scroll_and_flush(&self, offset: f64) {
        self.scroll_to(offset);
        self.run_frame();
    }

    /// Invoke every registered scroll handler
    pub fn dispatch_scroll(&self) {
        // Handlers may subscribe or unsubscribe while running
        let handlers: Vec<ScrollHandler> = self
            .listeners
            .borrow()
            .iter()
            .map(|(handler, _)| handler.clone())
            .collect();
        for handler in handlers {
            handler();
        }
    }

    /// Run every frame scheduled so far; returns how many ran
    ///
    /// Frames requested while running wait for the next call.
    pub fn run_frame(&self) -> usize {
        let frames = std::mem::take(&mut *self.frames.borrow_mut());
        let count = frames.len();
        for (_, callback) in frames {
            callback();
        }
        count
    }

    /// Number of frames waiting to run
    pub fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    /// Number of registered scroll listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Options of every registered scroll listener
    pub fn listener_options(&self) -> Vec<ListenerOptions> {
        self.listeners.borrow().iter().map(|(_, o)| *o).collect()
    }

    /// Total calls to `subscribe`
    pub fn subscribe_calls(&self) -> usize {
        self.subscribe_calls.get()
    }

    /// Total calls to `unsubscribe`
    pub fn unsubscribe_calls(&self) -> usize {
        self.unsubscribe_calls.get()
    }

    /// Total calls to `request_frame`
    pub fn frames_requested(&self) -> usize {
        self.frames_requested.get()
    }

    /// Total calls to `cancel_frame`
    pub fn frames_cancelled(&self) -> usize {
        self.frames_cancelled.get()
    }
}

impl Default for HeadlessPlatform {
    fn default() -> Self {
        Self::new(800.0, 4_000.0)
    }
}

impl ScrollMetrics for HeadlessPlatform {
    fn scroll_offset(&self) -> f64 {
        self.offset.get()
    }

    fn viewport_extent(&self) -> f64 {
        self.viewport_extent.get()
    }

    fn document_extent(&self) -> f64 {
        self.document_extent.get()
    }
}

impl ScrollEventSource for HeadlessPlatform {
    fn subscribe(
        &self,
        handler: &ScrollHandler,
        options: ListenerOptions,
    ) -> Result<(), PlatformError> {
        self.subscribe_calls.set(self.subscribe_calls.get() + 1);
        let mut listeners = self.listeners.borrow_mut();
        // Like addEventListener, registering the same pair twice is a no-op
        let exists = listeners
            .iter()
            .any(|(h, o)| same_handler(h, handler) && o.capture == options.capture);
        if !exists {
            listeners.push((handler.clone(), options));
        }
        Ok(())
    }

    fn unsubscribe(&self, handler: &ScrollHandler, options: ListenerOptions) {
        self.unsubscribe_calls.set(self.unsubscribe_calls.get() + 1);
        self.listeners
            .borrow_mut()
            .retain(|(h, o)| !(same_handler(h, handler) && o.capture == options.capture));
    }
}

impl FrameScheduler for HeadlessPlatform {
    fn request_frame(&self, callback: FrameCallback) -> FrameHandle {
        let handle = FrameHandle::from_raw(self.next_frame.get());
        self.next_frame.set(self.next_frame.get() + 1);
        self.frames_requested.set(self.frames_requested.get() + 1);
        self.frames.borrow_mut().push((handle, callback));
        handle
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        self.frames_cancelled.set(self.frames_cancelled.get() + 1);
        self.frames.borrow_mut().retain(|(h, _)| *h != handle);
    }
}

impl Platform for HeadlessPlatform {
    type Element = HeadlessElement;

    fn name(&self) -> &'static str {
        "headless"
    }

    fn has_document(&self) -> bool {
        self.has_document.get()
    }

    fn probe(&self) -> Result<Capabilities, PlatformError> {
        match self.probe_error.borrow().as_ref() {
            Some(message) => Err(PlatformError::Probe(message.clone())),
            None => Ok(self.capabilities.get()),
        }
    }
}

/// In-memory element; clones share the same class list
#[derive(Clone, Debug, Default)]
pub struct HeadlessElement {
    classes: Rc<RefCell<Vec<String>>>,
    height: Rc<Cell<f64>>,
}

impl HeadlessElement {
    /// Create an element with no classes
    pub fn new(height: f64) -> Self {
        Self {
            classes: Rc::new(RefCell::new(Vec::new())),
            height: Rc::new(Cell::new(height)),
        }
    }

    /// Change the rendered height
    pub fn set_height(&self, height: f64) {
        self.height.set(height);
    }

    /// Current classes in insertion order
    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().clone()
    }
}

impl TrackedElement for HeadlessElement {
    fn add_classes(&self, classes: &[&str]) {
        let mut list = self.classes.borrow_mut();
        for class in classes {
            if !list.iter().any(|c| c == class) {
                list.push((*class).to_string());
            }
        }
    }

    fn remove_classes(&self, classes: &[&str]) {
        self.classes
            .borrow_mut()
            .retain(|c| !classes.contains(&c.as_str()));
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().iter().any(|c| c == class)
    }

    fn rendered_height(&self) -> f64 {
        self.height.get()
    }
}
