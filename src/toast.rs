//! Transient overlay message.
//!
//! Lifecycle per call, measured from the call: mounted at 0, `show` class added
//! after the show delay, `show` removed after the visible duration, node removed
//! one fade duration later. Calls never share nodes or timers.

use wasm_bindgen::JsValue;

use crate::config::InteractionConfig;
use crate::host::Host;

pub fn show_toast<H: Host>(host: &H, message: &str, cfg: &InteractionConfig) -> Result<(), JsValue> {
    let toast = host.mount_overlay(&cfg.toast_class, message)?;

    let host_in = host.clone();
    let shown = toast.clone();
    let visible = cfg.toast_visible_class.clone();
    host.schedule(
        cfg.toast_show_delay_ms,
        Box::new(move || {
            if let Err(err) = host_in.add_class(&shown, &visible) {
                log::warn!("toast fade-in failed: {err:?}");
            }
        }),
    );

    let host_out = host.clone();
    let visible = cfg.toast_visible_class.clone();
    let fade_ms = cfg.toast_fade_ms;
    host.schedule(
        cfg.toast_visible_ms,
        Box::new(move || {
            if let Err(err) = host_out.remove_class(&toast, &visible) {
                log::warn!("toast fade-out failed: {err:?}");
            }
            let host_rm = host_out.clone();
            host_out.schedule(
                fade_ms,
                Box::new(move || {
                    if let Err(err) = host_rm.unmount(&toast) {
                        log::warn!("toast removal failed: {err:?}");
                    }
                }),
            );
        }),
    );
    Ok(())
}
