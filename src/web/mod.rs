// web/ - Browser adapters (wasm32 only)
//
// Thin bindings from the page to the core: logging setup, navigation, and
// the contact form. Scene drawing stays with the host's 3D library.

pub mod contact;

use wasm_bindgen::JsValue;

/// Route `log` records to the browser console and panics to `console.error`.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        // Already installed by an earlier call; just adjust the filter
        log::set_max_level(level.to_level_filter());
    }
}

/// Full-page navigation to `url`.
pub fn navigate(url: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    window.location().set_href(url)
}
