//! Centralized storage module for localStorage operations.

pub mod posts;

// Storage keys
pub const STORAGE_POSTS: &str = "bwhub.posts";

/// Current date rendered for display, using the browser clock.
pub fn today() -> String {
    js_sys::Date::new_0()
        .to_locale_date_string("en-US", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}
