// Copy action core
// Host-independent logic; browser bindings live in crate::utils

pub mod copy_text;
pub mod errors;
pub mod feedback;
pub mod host;

#[cfg(test)]
pub mod testing;

pub use copy_text::{
    CopyOptions, CopyResult, CopyTextAction, FeedbackOutcome, SelectorMatch, TextSource,
};
pub use errors::CopyError;
pub use feedback::{LabelFeedback, DEFAULT_FEEDBACK_DELAY, DEFAULT_FEEDBACK_TEXT};
pub use host::{ClipboardHost, DocumentHost, LabelTarget, ScheduledTask, Scheduler, TextSourceElement};
