//! Clipboard utilities for copying text
//!
//! Wraps the Web Clipboard API (`navigator.clipboard.writeText`).

use async_trait::async_trait;
use wasm_bindgen::JsValue;

use super::js_error_message;
use crate::services::{ClipboardHost, CopyError};

/// Copy text to the system clipboard
///
/// Fails with `HostUnavailable` when the page has no clipboard API
/// (insecure context, old browser) instead of throwing.
///
/// # Arguments
/// * `text` - The text to copy to the clipboard
pub async fn copy_to_clipboard(text: &str) -> Result<(), CopyError> {
    let window = web_sys::window().ok_or_else(|| CopyError::HostUnavailable("No window".to_string()))?;
    let navigator = window.navigator();

    let has_clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map(|value| !value.is_undefined() && !value.is_null())
        .unwrap_or(false);
    if !has_clipboard {
        return Err(CopyError::HostUnavailable("Clipboard API not available".to_string()));
    }

    let clipboard = navigator.clipboard();
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| CopyError::ClipboardWrite { message: js_error_message(&e) })
}

/// Browser clipboard host
#[derive(Clone, Copy, Debug, Default)]
pub struct WebClipboard;

#[async_trait(?Send)]
impl ClipboardHost for WebClipboard {
    async fn write_text(&self, text: &str) -> Result<(), CopyError> {
        copy_to_clipboard(text).await
    }
}
