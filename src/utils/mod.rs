// Browser bindings
// web-sys implementations of the copy action's host traits

pub mod clipboard;
pub mod dom;
pub mod timers;

pub use clipboard::WebClipboard;
pub use dom::WebDocument;
pub use timers::GlooScheduler;

use wasm_bindgen::{JsCast, JsValue};

/// Best-effort readable message for a rejected promise or thrown value
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return format!("{}: {}", String::from(err.name()), String::from(err.message()));
    }
    format!("{:?}", value)
}
