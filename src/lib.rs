//! Word Blanks interaction crate.
//!
//! Browser glue for the fill-in-the-blanks game page: a delegated click listener
//! recognises word buttons and blank targets, and a blank click reloads the page
//! with `selected_word`, `blank_index` and a cache-busting `_` parameter for the
//! game server to act on. When no word is selected a toast asks for one.
//!
//! The start function wires the document listener on `DOMContentLoaded`.
//! `setup_click_handlers` and `add_custom_styles` are exported for the page to
//! call when it wants them; neither runs by default.

use wasm_bindgen::prelude::*;

pub mod blank;
pub mod config;
pub mod dispatch;
pub mod host;
pub mod listeners;
pub mod query;
pub mod styles;
pub mod toast;

pub use config::InteractionConfig;
pub use host::{Host, WebHost};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // A second init (module instantiated twice) just keeps the first logger.
    let _ = console_log::init_with_level(log::Level::Debug);

    let loaded_at: String = js_sys::Date::new_0().to_iso_string().into();
    log::info!("game interaction module loaded at {loaded_at}");

    listeners::bind_when_ready(&WebHost::new()?);
    Ok(())
}

// -----------------------------------------------------------------------------
// JS entrypoints
// -----------------------------------------------------------------------------

// JS names follow the page script these replace (`handleBlankSpaceClick`, ...).

/// Bind the blank listener on `document.body` as well.
#[wasm_bindgen(js_name = setupClickHandlers)]
pub fn setup_click_handlers() -> Result<(), JsValue> {
    listeners::bind_body_clicks(&WebHost::new()?)?.forget();
    Ok(())
}

#[wasm_bindgen(js_name = handleBlankSpaceClick)]
pub fn handle_blank_space_click(blank_index: &str) -> Result<(), JsValue> {
    blank::handle_blank_space_click(&WebHost::new()?, blank_index, &config::current())
}

#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str) -> Result<(), JsValue> {
    toast::show_toast(&WebHost::new()?, message, &config::current())
}

#[wasm_bindgen(js_name = addCustomStyles)]
pub fn add_custom_styles() -> Result<(), JsValue> {
    styles::add_custom_styles(&WebHost::new()?)
}

/// Replace the active configuration from a JSON object; absent fields keep
/// their defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn configure(json: &str) -> Result<(), JsValue> {
    let cfg = InteractionConfig::from_json(json)
        .map_err(|err| JsValue::from_str(&format!("invalid configuration: {err}")))?;
    config::replace(cfg);
    Ok(())
}
