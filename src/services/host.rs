//! Host seams for the copy action
//!
//! The action never talks to the browser directly. Browser implementations
//! live in `crate::utils`; tests use the in-memory fakes in `testing`.

use async_trait::async_trait;
use std::time::Duration;

use super::errors::CopyError;

/// An element text can be extracted from
pub trait TextSourceElement {
    /// Text as rendered (`innerText`), `None` when the element has no rendering
    fn rendered_text(&self) -> Option<String>;

    /// Raw text content (`textContent`)
    fn raw_text(&self) -> Option<String>;
}

/// Element lookup against the current document
pub trait DocumentHost {
    type Element: TextSourceElement;

    /// First element matching `selector` in document order
    fn query_first(&self, selector: &str) -> Result<Option<Self::Element>, CopyError>;

    /// Every element matching `selector` in document order
    fn query_all(&self, selector: &str) -> Result<Vec<Self::Element>, CopyError>;
}

/// Asynchronous clipboard write
#[async_trait(?Send)]
pub trait ClipboardHost {
    async fn write_text(&self, text: &str) -> Result<(), CopyError>;
}

/// A UI control whose label shows copy feedback
pub trait LabelTarget: Clone + 'static {
    fn label(&self) -> String;

    fn set_label(&self, label: &str);

    /// False once the control left the document (or its owner was dropped)
    fn is_attached(&self) -> bool;

    /// Identity check, two handles to the same control compare equal
    fn same_target(&self, other: &Self) -> bool;
}

/// Handle to a delayed callback
pub trait ScheduledTask {
    /// Prevent the callback from running; no-op if it already ran
    fn cancel(self);
}

/// Delayed callback scheduling on the UI event loop
pub trait Scheduler: 'static {
    type Handle: ScheduledTask + 'static;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}
