//! Transient "Copied!" feedback on trigger labels
//!
//! Each trigger has at most one pending restoration. Showing feedback again on
//! a trigger that is still confirming cancels the old timer and keeps the
//! label captured the first time, so the trigger always returns to its real
//! label.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use super::host::{LabelTarget, ScheduledTask, Scheduler};

pub const DEFAULT_FEEDBACK_TEXT: &str = "Copied!";
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(1200);

struct PendingRestore<T, H> {
    id: u64,
    target: T,
    original: String,
    handle: Option<H>,
}

struct FeedbackInner<T: LabelTarget, S: Scheduler> {
    scheduler: S,
    text: RefCell<String>,
    delay: Cell<Duration>,
    next_id: Cell<u64>,
    pending: RefCell<Vec<PendingRestore<T, S::Handle>>>,
}

impl<T: LabelTarget, S: Scheduler> FeedbackInner<T, S> {
    fn take_pending(&self, predicate: impl Fn(&PendingRestore<T, S::Handle>) -> bool) -> Option<PendingRestore<T, S::Handle>> {
        let mut pending = self.pending.borrow_mut();
        let idx = pending.iter().position(predicate)?;
        Some(pending.swap_remove(idx))
    }

    fn restore(&self, id: u64) {
        // Entry is gone if it was cancelled or superseded
        let Some(entry) = self.take_pending(|p| p.id == id) else {
            return;
        };

        if entry.target.is_attached() {
            entry.target.set_label(&entry.original);
            log::debug!("Restored trigger label to '{}'", entry.original);
        } else {
            log::debug!("Trigger detached before restore, leaving label alone");
        }
    }
}

/// Feedback controller shared by every copy on the same set of triggers
pub struct LabelFeedback<T: LabelTarget, S: Scheduler> {
    inner: Rc<FeedbackInner<T, S>>,
}

impl<T: LabelTarget, S: Scheduler> Clone for LabelFeedback<T, S> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<T: LabelTarget, S: Scheduler> LabelFeedback<T, S> {
    pub fn new(scheduler: S, text: impl Into<String>, delay: Duration) -> Self {
        Self {
            inner: Rc::new(FeedbackInner {
                scheduler,
                text: RefCell::new(text.into()),
                delay: Cell::new(delay),
                next_id: Cell::new(0),
                pending: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Feedback with the default "Copied!" text and 1200ms delay
    #[cfg(test)]
    pub fn with_defaults(scheduler: S) -> Self {
        Self::new(scheduler, DEFAULT_FEEDBACK_TEXT, DEFAULT_FEEDBACK_DELAY)
    }

    /// Change text and delay for subsequent `show` calls
    pub fn configure(&self, text: &str, delay: Duration) {
        if *self.inner.text.borrow() != text {
            *self.inner.text.borrow_mut() = text.to_string();
        }
        self.inner.delay.set(delay);
    }

    pub fn text(&self) -> String {
        self.inner.text.borrow().clone()
    }

    #[cfg(test)]
    pub fn delay(&self) -> Duration {
        self.inner.delay.get()
    }

    /// Replace the trigger label with the feedback text and schedule restoration
    pub fn show(&self, target: &T) {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);

        let original = match self.inner.take_pending(|p| p.target.same_target(target)) {
            Some(previous) => {
                if let Some(handle) = previous.handle {
                    handle.cancel();
                }
                log::debug!("Feedback already showing, restarting restore timer");
                previous.original
            }
            None => target.label(),
        };

        let text = self.text();
        target.set_label(&text);

        let weak: Weak<FeedbackInner<T, S>> = Rc::downgrade(&self.inner);
        let handle = self.inner.scheduler.schedule(
            self.inner.delay.get(),
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.restore(id);
                }
            }),
        );

        self.inner.pending.borrow_mut().push(PendingRestore {
            id,
            target: target.clone(),
            original,
            handle: Some(handle),
        });
    }

    /// Cancel the pending restoration of `target` and restore its label now.
    /// Returns false when nothing was pending.
    pub fn cancel(&self, target: &T) -> bool {
        let Some(entry) = self.inner.take_pending(|p| p.target.same_target(target)) else {
            return false;
        };

        if let Some(handle) = entry.handle {
            handle.cancel();
        }
        if entry.target.is_attached() {
            entry.target.set_label(&entry.original);
        }
        true
    }

    /// Cancel restorations whose trigger left the document
    pub fn prune_detached(&self) -> usize {
        let detached: Vec<_> = {
            let mut pending = self.inner.pending.borrow_mut();
            let (gone, kept): (Vec<_>, Vec<_>) =
                pending.drain(..).partition(|p| !p.target.is_attached());
            *pending = kept;
            gone
        };

        let count = detached.len();
        for entry in detached {
            if let Some(handle) = entry.handle {
                handle.cancel();
            }
        }
        if count > 0 {
            log::debug!("Cancelled {} restore timer(s) for detached triggers", count);
        }
        count
    }

    /// Cancel every pending restoration without touching labels
    pub fn cancel_all(&self) {
        let pending: Vec<_> = self.inner.pending.borrow_mut().drain(..).collect();
        for entry in pending {
            if let Some(handle) = entry.handle {
                handle.cancel();
            }
        }
    }

    #[cfg(test)]
    pub fn is_pending(&self, target: &T) -> bool {
        self.inner
            .pending
            .borrow()
            .iter()
            .any(|p| p.target.same_target(target))
    }

    #[cfg(test)]
    pub fn pending_count(&self) -> usize {
        self.inner.pending.borrow().len()
    }
}
