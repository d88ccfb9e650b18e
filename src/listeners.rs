//! Delegated click listeners. Binders hand back the `EventListener` guard; the
//! page-level entrypoints `forget` it so the listener lives as long as the page.

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event};

use crate::blank::handle_blank_space_click;
use crate::config;
use crate::dispatch::{self, ClickAction};
use crate::host::WebHost;

/// Whether parsing finished, i.e. `DOMContentLoaded` already fired.
pub fn dom_parsed(doc: &Document) -> bool {
    doc.ready_state() != "loading"
}

/// Bind the document listener once the DOM is parsed. If parsing already
/// finished (the module was instantiated late), bind right away.
pub fn bind_when_ready(host: &WebHost) {
    if dom_parsed(host.document()) {
        log::debug!("document already parsed, configuring click listeners");
        bind_document_clicks(host).forget();
        return;
    }

    let ready_host = host.clone();
    EventListener::once(host.document(), "DOMContentLoaded", move |_evt| {
        log::debug!("DOM loaded, configuring click listeners");
        bind_document_clicks(&ready_host).forget();
    })
    .forget();
}

/// Document-root listener: logs word clicks, places the selection on blank clicks.
pub fn bind_document_clicks(host: &WebHost) -> EventListener {
    let click_host = host.clone();
    EventListener::new(host.document(), "click", move |evt| {
        let Some(el) = event_element(evt) else {
            return;
        };
        let cfg = config::current();
        match dispatch::classify(el, &cfg) {
            ClickAction::Word(word) => log::info!("word clicked: {word}"),
            ClickAction::Blank(index) => place(&click_host, &index, &cfg),
            ClickAction::Ignore => {}
        }
    })
}

/// Body listener: the blank walk only. Not bound automatically.
pub fn bind_body_clicks(host: &WebHost) -> Result<EventListener, JsValue> {
    let body = host
        .document()
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;
    let click_host = host.clone();
    Ok(EventListener::new(&body, "click", move |evt| {
        let cfg = config::current();
        if let Some(index) = event_element(evt).and_then(|el| dispatch::blank_index(el, &cfg)) {
            place(&click_host, &index, &cfg);
        }
    }))
}

fn event_element(evt: &Event) -> Option<Element> {
    evt.target()?.dyn_into::<Element>().ok()
}

fn place(host: &WebHost, index: &str, cfg: &config::InteractionConfig) {
    if let Err(err) = handle_blank_space_click(host, index, cfg) {
        log::error!("blank {index} click failed: {err:?}");
    }
}
