//! Tracked element backed by an `HtmlElement`

use scroll_nav_platform::TrackedElement;
use web_sys::HtmlElement;

use crate::platform::js_message;

/// An `HtmlElement` whose `classList` reflects the scroll state
#[derive(Clone, Debug)]
pub struct WebElement {
    element: HtmlElement,
}

impl WebElement {
    /// Wrap an element
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    /// The wrapped element
    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl TrackedElement for WebElement {
    fn add_classes(&self, classes: &[&str]) {
        let list = self.element.class_list();
        for class in classes {
            if let Err(err) = list.add_1(class) {
                tracing::warn!("WebElement: classList.add({}) failed: {}", class, js_message(&err));
            }
        }
    }

    fn remove_classes(&self, classes: &[&str]) {
        let list = self.element.class_list();
        for class in classes {
            if let Err(err) = list.remove_1(class) {
                tracing::warn!(
                    "WebElement: classList.remove({}) failed: {}",
                    class,
                    js_message(&err)
                );
            }
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.element.class_list().contains(class)
    }

    fn rendered_height(&self) -> f64 {
        self.element.offset_height() as f64
    }
}
