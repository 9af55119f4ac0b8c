//! In-memory hosts for tests: a manual clock, a fake document, a fake
//! clipboard and fake trigger labels.

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

use super::errors::CopyError;
use super::host::{
    ClipboardHost, DocumentHost, LabelTarget, ScheduledTask, Scheduler, TextSourceElement,
};

// =============================================================================
// Clock
// =============================================================================

struct ScheduledEntry {
    id: u64,
    due: Duration,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    tasks: Vec<ScheduledEntry>,
}

/// Simulated clock, tasks only run inside `advance`
#[derive(Clone, Default)]
pub struct ManualClock {
    state: Rc<RefCell<ClockState>>,
}

impl ManualClock {
    pub fn now_ms(&self) -> u128 {
        self.state.borrow().now.as_millis()
    }

    pub fn pending(&self) -> usize {
        self.state.borrow().tasks.len()
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Move time forward, running due tasks in (due time, schedule order)
    pub fn advance(&self, by: Duration) {
        let target = self.state.borrow().now + by;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let idx = state
                    .tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, entry)| entry.due <= target)
                    .min_by_key(|(_, entry)| (entry.due, entry.id))
                    .map(|(idx, _)| idx);
                match idx {
                    Some(idx) => {
                        let entry = state.tasks.remove(idx);
                        state.now = entry.due;
                        Some(entry.task)
                    }
                    None => {
                        state.now = target;
                        None
                    }
                }
            };

            match next {
                Some(task) => task(),
                None => break,
            }
        }
    }
}

pub struct ManualTask {
    id: u64,
    clock: Weak<RefCell<ClockState>>,
}

impl ScheduledTask for ManualTask {
    fn cancel(self) {
        if let Some(state) = self.clock.upgrade() {
            state.borrow_mut().tasks.retain(|entry| entry.id != self.id);
        }
    }
}

impl Scheduler for ManualClock {
    type Handle = ManualTask;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> ManualTask {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let due = state.now + delay;
        state.tasks.push(ScheduledEntry { id, due, task });
        ManualTask { id, clock: Rc::downgrade(&self.state) }
    }
}

// =============================================================================
// Trigger label
// =============================================================================

struct LabelState {
    text: String,
    attached: bool,
}

#[derive(Clone)]
pub struct FakeLabel {
    state: Rc<RefCell<LabelState>>,
}

impl FakeLabel {
    pub fn new(text: &str) -> Self {
        Self {
            state: Rc::new(RefCell::new(LabelState { text: text.to_string(), attached: true })),
        }
    }

    pub fn text(&self) -> String {
        self.state.borrow().text.clone()
    }

    pub fn detach(&self) {
        self.state.borrow_mut().attached = false;
    }
}

impl LabelTarget for FakeLabel {
    fn label(&self) -> String {
        self.text()
    }

    fn set_label(&self, label: &str) {
        self.state.borrow_mut().text = label.to_string();
    }

    fn is_attached(&self) -> bool {
        self.state.borrow().attached
    }

    fn same_target(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

// =============================================================================
// Document
// =============================================================================

#[derive(Clone, Debug, Default)]
pub struct FakeElement {
    pub rendered: Option<String>,
    pub raw: Option<String>,
}

impl FakeElement {
    /// Element whose rendered and raw text agree
    pub fn text(text: &str) -> Self {
        Self { rendered: Some(text.to_string()), raw: Some(text.to_string()) }
    }
}

impl TextSourceElement for FakeElement {
    fn rendered_text(&self) -> Option<String> {
        self.rendered.clone()
    }

    fn raw_text(&self) -> Option<String> {
        self.raw.clone()
    }
}

/// Selector lookup by exact string; the empty selector is a syntax error
#[derive(Clone, Default)]
pub struct FakeDocument {
    elements: HashMap<String, Vec<FakeElement>>,
}

impl FakeDocument {
    pub fn with(mut self, selector: &str, element: FakeElement) -> Self {
        self.elements.entry(selector.to_string()).or_default().push(element);
        self
    }

    fn check(selector: &str) -> Result<(), CopyError> {
        if selector.trim().is_empty() {
            return Err(CopyError::InvalidSelector {
                selector: selector.to_string(),
                message: "'' is not a valid selector".to_string(),
            });
        }
        Ok(())
    }
}

impl DocumentHost for FakeDocument {
    type Element = FakeElement;

    fn query_first(&self, selector: &str) -> Result<Option<FakeElement>, CopyError> {
        Self::check(selector)?;
        Ok(self.elements.get(selector).and_then(|els| els.first().cloned()))
    }

    fn query_all(&self, selector: &str) -> Result<Vec<FakeElement>, CopyError> {
        Self::check(selector)?;
        Ok(self.elements.get(selector).cloned().unwrap_or_default())
    }
}

// =============================================================================
// Clipboard
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum ClipboardMode {
    Accept,
    Reject(String),
    /// Write never completes
    Hang,
}

struct ClipboardState {
    mode: ClipboardMode,
    contents: Option<String>,
    attempts: usize,
}

#[derive(Clone)]
pub struct FakeClipboard {
    state: Rc<RefCell<ClipboardState>>,
}

impl FakeClipboard {
    pub fn new(mode: ClipboardMode) -> Self {
        Self {
            state: Rc::new(RefCell::new(ClipboardState { mode, contents: None, attempts: 0 })),
        }
    }

    pub fn accepting() -> Self {
        Self::new(ClipboardMode::Accept)
    }

    pub fn contents(&self) -> Option<String> {
        self.state.borrow().contents.clone()
    }

    pub fn attempts(&self) -> usize {
        self.state.borrow().attempts
    }
}

#[async_trait(?Send)]
impl ClipboardHost for FakeClipboard {
    async fn write_text(&self, text: &str) -> Result<(), CopyError> {
        let mode = {
            let mut state = self.state.borrow_mut();
            state.attempts += 1;
            state.mode.clone()
        };

        match mode {
            ClipboardMode::Accept => {
                self.state.borrow_mut().contents = Some(text.to_string());
                Ok(())
            }
            ClipboardMode::Reject(message) => Err(CopyError::ClipboardWrite { message }),
            ClipboardMode::Hang => {
                futures::future::pending::<()>().await;
                Ok(())
            }
        }
    }
}
