//! use_copy_text hook - copy element text with label feedback
//!
//! Owns one `CopyTextAction` per component so overlapping copies on the
//! same button share a feedback controller. Settings are re-read from
//! `COPY_SETTINGS` on every copy, pending restore timers are cancelled
//! when the component unmounts.

use dioxus::prelude::*;

use crate::services::{
    CopyResult, CopyTextAction, FeedbackOutcome, LabelFeedback, LabelTarget, Scheduler,
};
use crate::stores::copy_settings::COPY_SETTINGS;
use crate::utils::{GlooScheduler, WebClipboard, WebDocument};

/// Trigger label backed by a signal
///
/// Detached once the owning component is dropped.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalLabel(pub Signal<String>);

impl LabelTarget for SignalLabel {
    fn label(&self) -> String {
        self.0.try_peek().map(|label| label.clone()).unwrap_or_default()
    }

    fn set_label(&self, label: &str) {
        let mut signal = self.0;
        if let Ok(mut current) = signal.try_write() {
            *current = label.to_string();
        };
    }

    fn is_attached(&self) -> bool {
        self.0.try_peek().is_ok()
    }

    fn same_target(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub type WebCopyAction = CopyTextAction<WebDocument, WebClipboard, SignalLabel, GlooScheduler>;

/// State of the last copy
#[derive(Clone, Debug, PartialEq)]
pub enum CopyState {
    Idle,
    /// Clipboard write in flight
    Copying,
    Copied { feedback_shown: bool },
    Failed(String),
}

impl CopyState {
    pub fn from_result(result: &CopyResult) -> Self {
        match result {
            Ok(report) => CopyState::Copied {
                feedback_shown: report.feedback == FeedbackOutcome::Shown,
            },
            Err(e) => CopyState::Failed(e.user_message().to_string()),
        }
    }

    pub fn is_copying(&self) -> bool {
        matches!(self, CopyState::Copying)
    }

    /// Error text to show next to the trigger, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            CopyState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// One copy invocation
#[derive(Clone)]
pub struct CopyRequest {
    pub selector: String,
    /// Control whose label shows feedback; `None` copies silently
    pub trigger: Option<SignalLabel>,
    pub on_done: Option<EventHandler<CopyResult>>,
}

impl CopyRequest {
    pub fn new(selector: impl Into<String>) -> Self {
        Self { selector: selector.into(), trigger: None, on_done: None }
    }

    pub fn with_trigger(mut self, trigger: SignalLabel) -> Self {
        self.trigger = Some(trigger);
        self
    }

    pub fn on_done(mut self, handler: Option<EventHandler<CopyResult>>) -> Self {
        self.on_done = handler;
        self
    }
}

/// Return type for the use_copy_text hook
#[derive(Clone, Copy)]
pub struct UseCopyText {
    /// State of the most recent copy
    pub state: Signal<CopyState>,
    /// Fire-and-forget copy; the outcome lands in `state` and `on_done`
    pub copy: EventHandler<CopyRequest>,
    /// Drop pending feedback on a trigger and put its original label back
    pub reset: EventHandler<SignalLabel>,
}

/// Cancel every pending label restore when the calling component unmounts
pub fn use_feedback_cleanup<T, S>(feedback: LabelFeedback<T, S>)
where
    T: LabelTarget,
    S: Scheduler,
{
    use_drop(move || {
        log::debug!("Component dropped, cancelling pending label restores");
        feedback.cancel_all();
    });
}

/// Hook for copying element text to the clipboard
///
/// # Example
/// ```rust
/// let copier = use_copy_text();
/// let label = use_signal(|| "Copy".to_string());
///
/// button {
///     onclick: move |_| copier.copy.call(
///         CopyRequest::new("#snippet").with_trigger(SignalLabel(label))
///     ),
///     "{label}"
/// }
/// ```
pub fn use_copy_text() -> UseCopyText {
    let mut state = use_signal(|| CopyState::Idle);

    let action = use_hook(|| {
        let settings = COPY_SETTINGS.peek().clone();
        let feedback = LabelFeedback::new(
            GlooScheduler,
            settings.feedback_text.clone(),
            settings.feedback_delay(),
        );
        WebCopyAction::new(WebDocument, WebClipboard, feedback, settings.copy_options())
    });

    use_feedback_cleanup(action.feedback().clone());

    let reset = use_callback({
        let action = action.clone();
        move |trigger: SignalLabel| {
            action.feedback().cancel(&trigger);
        }
    });

    let copy = use_callback(move |request: CopyRequest| {
        let settings = COPY_SETTINGS.peek().clone();
        let mut action = action.clone();
        action.set_options(settings.copy_options());
        action
            .feedback()
            .configure(&settings.feedback_text, settings.feedback_delay());
        action.feedback().prune_detached();

        state.set(CopyState::Copying);

        spawn(async move {
            let result = action
                .copy_text(&request.selector, request.trigger.as_ref())
                .await;

            match &result {
                Ok(report) => {
                    log::info!("Copied {} chars from '{}'", report.text.chars().count(), request.selector);
                }
                Err(e) if e.is_not_found() => {
                    log::debug!("{}", e);
                }
                Err(e) => {
                    log::warn!("Copy from '{}' failed: {}", request.selector, e);
                }
            }

            state.set(CopyState::from_result(&result));
            if let Some(on_done) = request.on_done {
                on_done.call(result);
            }
        });
    });

    UseCopyText { state, copy, reset }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::copy_text::CopyReport;
    use crate::services::testing::ManualClock;
    use crate::services::CopyError;
    use dioxus::dioxus_core::NoOpMutations;
    use std::cell::{Cell, RefCell};

    type TestFeedback = LabelFeedback<SignalLabel, ManualClock>;

    thread_local! {
        static FEEDBACK: RefCell<Option<TestFeedback>> = RefCell::new(None);
        static LABELS: RefCell<Vec<SignalLabel>> = RefCell::new(Vec::new());
        static SHOW_BUTTON: Cell<bool> = Cell::new(true);
    }

    #[component]
    fn FeedbackButton() -> Element {
        let label = use_signal(|| "Copy".to_string());
        let other = use_signal(|| "Copy link".to_string());
        let feedback = use_hook(|| FEEDBACK.with(|f| f.borrow().clone()).unwrap());
        use_feedback_cleanup(feedback.clone());

        use_hook(|| {
            let target = SignalLabel(label);
            feedback.show(&target);
            LABELS.with(|labels| labels.borrow_mut().extend([target, SignalLabel(other)]));
        });

        rsx! {
            button { "{label}" }
        }
    }

    #[component]
    fn Page() -> Element {
        rsx! {
            if SHOW_BUTTON.with(|show| show.get()) {
                FeedbackButton {}
            }
        }
    }

    #[test]
    fn test_state_from_result() {
        let result: CopyResult = Ok(CopyReport {
            text: "hello".to_string(),
            feedback: FeedbackOutcome::Shown,
        });
        assert_eq!(CopyState::from_result(&result), CopyState::Copied { feedback_shown: true });

        let result: CopyResult = Ok(CopyReport {
            text: "hello".to_string(),
            feedback: FeedbackOutcome::NoTrigger,
        });
        assert_eq!(CopyState::from_result(&result), CopyState::Copied { feedback_shown: false });

        let result: CopyResult = Err(CopyError::ClipboardWrite { message: "denied".to_string() });
        let state = CopyState::from_result(&result);
        assert_eq!(state.error(), Some("Copy failed"));
        assert!(!state.is_copying());
    }

    #[test]
    fn test_request_builder() {
        let request = CopyRequest::new("#snippet");
        assert_eq!(request.selector, "#snippet");
        assert!(request.trigger.is_none());
        assert!(request.on_done.is_none());
    }

    #[test]
    fn test_signal_label_lifecycle() {
        let clock = ManualClock::default();
        let feedback: TestFeedback = LabelFeedback::with_defaults(clock.clone());
        FEEDBACK.with(|f| *f.borrow_mut() = Some(feedback.clone()));
        SHOW_BUTTON.with(|show| show.set(true));

        let mut dom = VirtualDom::new(Page);
        dom.rebuild_in_place();

        let (target, other) = LABELS.with(|labels| {
            let labels = labels.borrow();
            (labels[0], labels[1])
        });

        dom.in_runtime(|| {
            assert!(target.is_attached());
            assert_eq!(target.label(), "Copied!");
            assert!(target.same_target(&target));
            assert!(!target.same_target(&other));
        });
        assert_eq!(feedback.pending_count(), 1);
        assert_eq!(clock.pending(), 1);

        // Unmount the button before its restore fires
        SHOW_BUTTON.with(|show| show.set(false));
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate(&mut NoOpMutations);

        assert_eq!(feedback.pending_count(), 0);
        assert_eq!(clock.pending(), 0);

        dom.in_runtime(|| {
            assert!(!target.is_attached());
            assert_eq!(target.label(), "");
            // Writing to a dropped label is a no-op
            target.set_label("Copy");
        });

        clock.advance_ms(1200);
    }
}
