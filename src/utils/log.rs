//! Console diagnostics.
//!
//! Timestamped, category-prefixed lines so console output from the two
//! product sections stays attributable.

use wasm_bindgen::JsValue;

fn timestamp() -> String {
    js_sys::Date::new_0()
        .to_iso_string()
        .as_string()
        .unwrap_or_default()
}

fn line(category: &str, message: &str) -> JsValue {
    JsValue::from_str(&format!("[{}] [{}] {}", timestamp(), category, message))
}

pub fn info(category: &str, message: &str) {
    web_sys::console::log_1(&line(category, message));
}

pub fn warn(category: &str, message: &str) {
    web_sys::console::warn_1(&line(category, message));
}

pub fn error(category: &str, message: &str) {
    web_sys::console::error_1(&line(category, message));
}
