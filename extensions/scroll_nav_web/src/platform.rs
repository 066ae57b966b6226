//! Browser implementation of the platform traits

use std::cell::RefCell;

use js_sys::{Function, Reflect};
use scroll_nav_platform::{
    document_extent_of, same_handler, Capabilities, FrameCallback, FrameHandle, FrameScheduler,
    ListenerOptions, Platform, PlatformError, ScrollEventSource, ScrollHandler, ScrollMetrics,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, EventListenerOptions, HtmlElement, Window};

use crate::element::WebElement;

/// A registered scroll listener and the JS function handed to the browser
struct Listener {
    handler: ScrollHandler,
    capture: bool,
    closure: Closure<dyn FnMut()>,
}

/// Browser platform backed by the global `window` and `document`
pub struct WebPlatform {
    window: Window,
    document: Document,
    listeners: RefCell<Vec<Listener>>,
}

impl WebPlatform {
    /// Wrap the global window, or `None` outside a browser
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self {
            window,
            document,
            listeners: RefCell::new(Vec::new()),
        })
    }

    /// The wrapped window
    pub fn window(&self) -> &Window {
        &self.window
    }

    fn root_element(&self) -> Option<web_sys::Element> {
        self.document.document_element()
    }
}

/// Best-effort message for a thrown JS value
pub(crate) fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

impl ScrollMetrics for WebPlatform {
    fn scroll_offset(&self) -> f64 {
        match self.window.page_y_offset() {
            Ok(offset) => offset,
            Err(_) => self
                .root_element()
                .map(|root| root.scroll_top() as f64)
                .unwrap_or(0.0),
        }
    }

    fn viewport_extent(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .or_else(|| self.root_element().map(|root| root.client_height() as f64))
            .unwrap_or(0.0)
    }

    fn document_extent(&self) -> f64 {
        let mut candidates = Vec::with_capacity(6);
        if let Some(body) = self.document.body() {
            candidates.push(body.scroll_height() as f64);
            candidates.push(body.offset_height() as f64);
            candidates.push(body.client_height() as f64);
        }
        if let Some(root) = self.root_element() {
            candidates.push(root.scroll_height() as f64);
            candidates.push(root.client_height() as f64);
            if let Some(root) = root.dyn_ref::<HtmlElement>() {
                candidates.push(root.offset_height() as f64);
            }
        }
        document_extent_of(candidates)
    }
}

impl ScrollEventSource for WebPlatform {
    fn subscribe(
        &self,
        handler: &ScrollHandler,
        options: ListenerOptions,
    ) -> Result<(), PlatformError> {
        let mut listeners = self.listeners.borrow_mut();
        if listeners
            .iter()
            .any(|l| same_handler(&l.handler, handler) && l.capture == options.capture)
        {
            return Ok(());
        }

        let callback = handler.clone();
        let closure = Closure::<dyn FnMut()>::new(move || callback());

        let js_options = AddEventListenerOptions::new();
        js_options.set_passive(options.passive);
        js_options.set_capture(options.capture);

        self.window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                closure.as_ref().unchecked_ref(),
                &js_options,
            )
            .map_err(|err| PlatformError::Listener(js_message(&err)))?;

        listeners.push(Listener {
            handler: handler.clone(),
            capture: options.capture,
            closure,
        });
        Ok(())
    }

    fn unsubscribe(&self, handler: &ScrollHandler, options: ListenerOptions) {
        let listener = {
            let mut listeners = self.listeners.borrow_mut();
            let Some(index) = listeners
                .iter()
                .position(|l| same_handler(&l.handler, handler) && l.capture == options.capture)
            else {
                return;
            };
            listeners.remove(index)
        };

        let js_options = EventListenerOptions::new();
        js_options.set_capture(listener.capture);

        if let Err(err) = self
            .window
            .remove_event_listener_with_callback_and_event_listener_options(
                "scroll",
                listener.closure.as_ref().unchecked_ref(),
                &js_options,
            )
        {
            tracing::warn!("WebPlatform: removing scroll listener failed: {}", js_message(&err));
        }
    }
}

impl FrameScheduler for WebPlatform {
    fn request_frame(&self, callback: FrameCallback) -> FrameHandle {
        // Frees itself once invoked; a cancelled frame's closure is left to the GC
        let function: Function = Closure::once_into_js(move || callback()).unchecked_into();

        match self.window.request_animation_frame(&function) {
            Ok(id) => FrameHandle::from_raw(id as u32 as u64),
            Err(err) => {
                tracing::warn!(
                    "WebPlatform: requestAnimationFrame failed, running frame now: {}",
                    js_message(&err)
                );
                if let Err(err) = function.call0(&JsValue::NULL) {
                    tracing::warn!("WebPlatform: frame callback threw: {}", js_message(&err));
                }
                FrameHandle::from_raw(0)
            }
        }
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        if let Err(err) = self.window.cancel_animation_frame(handle.to_raw() as u32 as i32) {
            tracing::warn!("WebPlatform: cancelAnimationFrame failed: {}", js_message(&err));
        }
    }
}

impl Platform for WebPlatform {
    type Element = WebElement;

    fn name(&self) -> &'static str {
        "web"
    }

    fn has_document(&self) -> bool {
        // `current()` only succeeds with a document
        true
    }

    fn probe(&self) -> Result<Capabilities, PlatformError> {
        let probe_err = |err: JsValue| PlatformError::Probe(js_message(&err));

        let frame_scheduling =
            Reflect::has(&self.window, &JsValue::from_str("requestAnimationFrame"))
                .map_err(probe_err)?;
        let class_list = match self.root_element() {
            Some(root) => Reflect::has(&root, &JsValue::from_str("classList")).map_err(probe_err)?,
            None => false,
        };

        Ok(Capabilities {
            frame_scheduling,
            class_list,
        })
    }
}
