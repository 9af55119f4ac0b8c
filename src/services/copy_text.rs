//! Copy the text of a document element to the clipboard
//!
//! Resolves a selector, snapshots the element's text, writes it to the
//! clipboard and, when a trigger is passed in, flips its label to the
//! feedback text until the restore timer fires.

use serde::{Deserialize, Serialize};

use super::errors::CopyError;
use super::feedback::LabelFeedback;
use super::host::{ClipboardHost, DocumentHost, LabelTarget, Scheduler, TextSourceElement};

/// Which text representation of the element gets copied
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSource {
    /// Rendered text, falling back to raw text when it is missing or empty
    #[default]
    RenderedThenRaw,
    RenderedOnly,
    RawOnly,
}

impl TextSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextSource::RenderedThenRaw => "rendered_then_raw",
            TextSource::RenderedOnly => "rendered_only",
            TextSource::RawOnly => "raw_only",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "rendered_only" => TextSource::RenderedOnly,
            "raw_only" => TextSource::RawOnly,
            _ => TextSource::RenderedThenRaw,
        }
    }
}

/// How a selector that matches several elements is treated
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectorMatch {
    /// First match in document order wins
    #[default]
    First,
    /// Exactly one match required
    Unique,
}

impl SelectorMatch {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectorMatch::First => "first",
            SelectorMatch::Unique => "unique",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "unique" => SelectorMatch::Unique,
            _ => SelectorMatch::First,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CopyOptions {
    pub text_source: TextSource,
    pub selector_match: SelectorMatch,
}

/// Whether the trigger showed feedback after a successful write
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackOutcome {
    Shown,
    /// Called without a trigger, clipboard was still written
    NoTrigger,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyReport {
    /// Exact text written to the clipboard
    pub text: String,
    pub feedback: FeedbackOutcome,
}

pub type CopyResult = Result<CopyReport, CopyError>;

/// Pick the text to copy from an element
pub fn extract_text<E: TextSourceElement>(element: &E, source: TextSource) -> String {
    match source {
        TextSource::RenderedThenRaw => element
            .rendered_text()
            .filter(|text| !text.is_empty())
            .or_else(|| element.raw_text())
            .unwrap_or_default(),
        TextSource::RenderedOnly => element.rendered_text().unwrap_or_default(),
        TextSource::RawOnly => element.raw_text().unwrap_or_default(),
    }
}

pub struct CopyTextAction<D, C, T, S>
where
    T: LabelTarget,
    S: Scheduler,
{
    document: D,
    clipboard: C,
    feedback: LabelFeedback<T, S>,
    options: CopyOptions,
}

impl<D, C, T, S> Clone for CopyTextAction<D, C, T, S>
where
    D: Clone,
    C: Clone,
    T: LabelTarget,
    S: Scheduler,
{
    fn clone(&self) -> Self {
        Self {
            document: self.document.clone(),
            clipboard: self.clipboard.clone(),
            feedback: self.feedback.clone(),
            options: self.options,
        }
    }
}

impl<D, C, T, S> CopyTextAction<D, C, T, S>
where
    D: DocumentHost,
    C: ClipboardHost,
    T: LabelTarget,
    S: Scheduler,
{
    pub fn new(document: D, clipboard: C, feedback: LabelFeedback<T, S>, options: CopyOptions) -> Self {
        Self { document, clipboard, feedback, options }
    }

    pub fn set_options(&mut self, options: CopyOptions) {
        self.options = options;
    }

    pub fn feedback(&self) -> &LabelFeedback<T, S> {
        &self.feedback
    }

    /// Copy the text of the element matching `selector`.
    ///
    /// Nothing is written when the selector does not resolve. The trigger label
    /// only changes after the clipboard accepted the write.
    pub async fn copy_text(&self, selector: &str, trigger: Option<&T>) -> CopyResult {
        let text = self.resolve_text(selector)?;

        log::debug!("Writing {} chars from '{}' to clipboard", text.chars().count(), selector);
        self.clipboard.write_text(&text).await?;

        let feedback = match trigger {
            Some(trigger) => {
                self.feedback.show(trigger);
                FeedbackOutcome::Shown
            }
            None => FeedbackOutcome::NoTrigger,
        };

        Ok(CopyReport { text, feedback })
    }

    fn resolve_text(&self, selector: &str) -> Result<String, CopyError> {
        let not_found = || CopyError::ElementNotFound { selector: selector.to_string() };

        let element = match self.options.selector_match {
            SelectorMatch::First => self.document.query_first(selector)?.ok_or_else(not_found)?,
            SelectorMatch::Unique => {
                let mut matches = self.document.query_all(selector)?;
                match matches.len() {
                    0 => return Err(not_found()),
                    1 => matches.swap_remove(0),
                    n => {
                        return Err(CopyError::AmbiguousSelector {
                            selector: selector.to_string(),
                            matches: n,
                        })
                    }
                }
            }
        };

        Ok(extract_text(&element, self.options.text_source))
    }
}
