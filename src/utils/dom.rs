//! Document lookup and text extraction through web-sys

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::js_error_message;
use crate::services::{CopyError, DocumentHost, TextSourceElement};

fn document() -> Result<web_sys::Document, CopyError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| CopyError::HostUnavailable("No document".to_string()))
}

fn invalid_selector(selector: &str, err: wasm_bindgen::JsValue) -> CopyError {
    CopyError::InvalidSelector {
        selector: selector.to_string(),
        message: js_error_message(&err),
    }
}

/// The page's `window.document`
#[derive(Clone, Copy, Debug, Default)]
pub struct WebDocument;

impl DocumentHost for WebDocument {
    type Element = Element;

    fn query_first(&self, selector: &str) -> Result<Option<Element>, CopyError> {
        document()?
            .query_selector(selector)
            .map_err(|e| invalid_selector(selector, e))
    }

    fn query_all(&self, selector: &str) -> Result<Vec<Element>, CopyError> {
        let nodes = document()?
            .query_selector_all(selector)
            .map_err(|e| invalid_selector(selector, e))?;

        Ok((0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }
}

impl TextSourceElement for Element {
    // innerText only exists on HTML elements; SVG and MathML nodes fall back to textContent
    fn rendered_text(&self) -> Option<String> {
        self.dyn_ref::<HtmlElement>().map(|el| el.inner_text())
    }

    fn raw_text(&self) -> Option<String> {
        self.text_content()
    }
}
