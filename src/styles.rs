//! Stylesheet for the toast overlay and the temporary "filled" highlight.

use wasm_bindgen::JsValue;

use crate::host::Host;

pub const CUSTOM_STYLES: &str = r#"
.game-toast {
    position: fixed;
    bottom: 20px;
    left: 50%;
    transform: translateX(-50%);
    background-color: rgba(0, 0, 0, 0.8);
    color: white;
    padding: 10px 20px;
    border-radius: 4px;
    z-index: 9999;
    opacity: 0;
    transition: opacity 0.3s;
}

.game-toast.show {
    opacity: 1;
}

.filled-temp {
    background-color: #e9f7fd;
    border: 2px solid #90caf9;
}
"#;

/// Append [`CUSTOM_STYLES`] to the head. Every call adds another block.
pub fn add_custom_styles<H: Host>(host: &H) -> Result<(), JsValue> {
    host.append_style(CUSTOM_STYLES)
}
