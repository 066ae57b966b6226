//! JavaScript bindings
//!
//! ```js
//! import { ScrollNav } from "scroll-nav";
//!
//! if (ScrollNav.isSupported()) {
//!   const nav = new ScrollNav(document.querySelector("header"), {
//!     tolerance: 12,
//!     classNames: { fixed: "header--pinned" },
//!   });
//!   nav.onChange((state) => console.log(state));
//! }
//! ```

use std::rc::Rc;

use js_sys::Function;
use scroll_nav_core::{ScrollNav, ScrollNavError, ScrollNavOptions};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::element::WebElement;
use crate::platform::{js_message, WebPlatform};

/// Scroll-driven header controller exposed to JavaScript as `ScrollNav`
#[wasm_bindgen(js_name = ScrollNav)]
pub struct JsScrollNav {
    nav: ScrollNav<WebPlatform>,
}

#[wasm_bindgen(js_class = ScrollNav)]
impl JsScrollNav {
    /// `new ScrollNav(element, options?)`; throws if the controller cannot start
    #[wasm_bindgen(constructor)]
    pub fn new(element: Option<HtmlElement>, options: JsValue) -> Result<JsScrollNav, JsError> {
        #[cfg(target_arch = "wasm32")]
        console_error_panic_hook::set_once();

        let platform = WebPlatform::current()
            .ok_or(ScrollNavError::Environment)
            .map_err(to_js_error)?;
        let element = element.ok_or(ScrollNavError::MissingElement).map_err(to_js_error)?;
        if !ScrollNav::is_supported(&platform) {
            return Err(to_js_error(ScrollNavError::Unsupported {
                platform: "web",
            }));
        }

        let options = options_from_js(&options).map_err(to_js_error)?;
        let nav = ScrollNav::new(Rc::new(platform), Some(WebElement::new(element)), options)
            .map_err(to_js_error)?;

        Ok(Self { nav })
    }

    /// Whether this browser exposes `requestAnimationFrame` and `classList`
    #[wasm_bindgen(js_name = isSupported)]
    pub fn is_supported() -> bool {
        WebPlatform::current()
            .map(|platform| ScrollNav::is_supported(&platform))
            .unwrap_or(false)
    }

    pub fn init(&self) {
        self.nav.init();
    }

    pub fn destroy(&self) {
        self.nav.destroy();
    }

    pub fn reset(&self) {
        self.nav.reset();
    }

    pub fn fix(&self) {
        self.nav.fix();
    }

    pub fn hide(&self) {
        self.nav.hide();
    }

    /// `"initial"`, `"fixed"` or `"hidden"`
    pub fn state(&self) -> String {
        self.nav.state().as_str().to_string()
    }

    #[wasm_bindgen(getter, js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.nav.is_active()
    }

    /// Call `callback(state)` whenever scrolling changes the state
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&self, callback: Function) {
        self.nav.on_change(move |state| {
            if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_str(state.as_str())) {
                tracing::warn!("ScrollNav: onChange callback threw: {}", js_message(&err));
            }
        });
    }
}

fn to_js_error(err: ScrollNavError) -> JsError {
    JsError::new(&err.to_string())
}

/// `undefined`/`null` mean defaults; anything else goes through `JSON.stringify`
fn options_from_js(value: &JsValue) -> Result<ScrollNavOptions, ScrollNavError> {
    if value.is_undefined() || value.is_null() {
        return Ok(ScrollNavOptions::default());
    }
    let json = js_sys::JSON::stringify(value)
        .map_err(|err| ScrollNavError::Parse(js_message(&err)))?;
    options_from_json(json.as_string())
}

fn options_from_json(json: Option<String>) -> Result<ScrollNavOptions, ScrollNavError> {
    match json {
        Some(json) => ScrollNavOptions::from_json(&json),
        None => Ok(ScrollNavOptions::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_json_means_defaults() {
        assert_eq!(options_from_json(None).unwrap(), ScrollNavOptions::default());
    }

    #[test]
    fn test_json_from_script_object() {
        let options = options_from_json(Some(
            r#"{"tolerance":12,"classNames":{"fixed":"header--pinned"}}"#.to_string(),
        ))
        .unwrap();

        assert_eq!(options.tolerance, Some(12.0));
        assert_eq!(options.class_names.fixed.as_deref(), Some("header--pinned"));
        assert_eq!(options.start_offset, None);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let options = options_from_json(Some(r#"{"offset":10,"tolerance":3}"#.to_string())).unwrap();
        assert_eq!(options.tolerance, Some(3.0));
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = options_from_json(Some(r#"{"showAtBottom":"yes"}"#.to_string()));
        assert!(matches!(err, Err(ScrollNavError::Parse(_))));
    }
}
