//! scroll-nav Web Platform
//!
//! Browser backend for scroll-nav using `web-sys`.
//!
//! This crate implements the `scroll_nav_platform` traits on top of the
//! global `window`/`document` and exports a `ScrollNav` class to
//! JavaScript through `wasm-bindgen`.
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use scroll_nav_core::prelude::*;
//! use scroll_nav_web::{WebElement, WebPlatform};
//!
//! let platform = WebPlatform::current().ok_or(ScrollNavError::Environment)?;
//! let header = platform.window().document().and_then(|d| d.query_selector("header").ok().flatten());
//! let nav = ScrollNav::new(
//!     Rc::new(platform),
//!     header.and_then(|h| h.dyn_into().ok()).map(WebElement::new),
//!     ScrollNavOptions::new(),
//! )?;
//! ```

pub mod bindings;
pub mod element;
pub mod platform;

pub use bindings::JsScrollNav;
pub use element::WebElement;
pub use platform::WebPlatform;
