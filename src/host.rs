//! Browser capabilities consumed by the blank handler, the toast and the style
//! injector. [`WebHost`] is the real thing; tests drive the same code paths
//! through an in-memory host with a virtual clock.

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window, window};

pub trait Host: Clone + 'static {
    /// Handle to an element created through [`Host::mount_overlay`].
    type Node: Clone + 'static;

    /// `location.search`, including the leading `?` when non-empty.
    fn search(&self) -> Result<String, JsValue>;
    fn pathname(&self) -> Result<String, JsValue>;
    /// Wall clock, integer milliseconds since the epoch.
    fn now_ms(&self) -> u64;
    /// Assign `location.href`; the page reloads.
    fn navigate(&self, href: &str) -> Result<(), JsValue>;

    /// Create a `div` with `class` and `text` and append it to the body.
    fn mount_overlay(&self, class: &str, text: &str) -> Result<Self::Node, JsValue>;
    fn add_class(&self, node: &Self::Node, class: &str) -> Result<(), JsValue>;
    fn remove_class(&self, node: &Self::Node, class: &str) -> Result<(), JsValue>;
    /// Remove a mounted overlay from the body.
    fn unmount(&self, node: &Self::Node) -> Result<(), JsValue>;

    /// Append a `<style>` block with `css` to the document head.
    fn append_style(&self, css: &str) -> Result<(), JsValue>;

    /// Run `task` once after `delay_ms` on the event loop.
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// [`Host`] over the live `window` / `document`.
#[derive(Clone)]
pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    pub fn new() -> Result<Self, JsValue> {
        let window = window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        Ok(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Host for WebHost {
    type Node = Element;

    fn search(&self) -> Result<String, JsValue> {
        self.window.location().search()
    }

    fn pathname(&self) -> Result<String, JsValue> {
        self.window.location().pathname()
    }

    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn navigate(&self, href: &str) -> Result<(), JsValue> {
        self.window.location().set_href(href)
    }

    fn mount_overlay(&self, class: &str, text: &str) -> Result<Element, JsValue> {
        let body = self
            .document
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?;
        let div = self.document.create_element("div")?;
        div.set_class_name(class);
        div.set_text_content(Some(text));
        body.append_child(&div)?;
        Ok(div)
    }

    fn add_class(&self, node: &Element, class: &str) -> Result<(), JsValue> {
        node.class_list().add_1(class)
    }

    fn remove_class(&self, node: &Element, class: &str) -> Result<(), JsValue> {
        node.class_list().remove_1(class)
    }

    fn unmount(&self, node: &Element) -> Result<(), JsValue> {
        let body = self
            .document
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?;
        body.remove_child(node)?;
        Ok(())
    }

    fn append_style(&self, css: &str) -> Result<(), JsValue> {
        let head = self
            .document
            .head()
            .ok_or_else(|| JsValue::from_str("no head"))?;
        let style = self.document.create_element("style")?;
        style.set_text_content(Some(css));
        head.append_child(&style)?;
        Ok(())
    }

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}
