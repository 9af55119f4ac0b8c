use dioxus::prelude::*;

use crate::hooks::{use_copy_text, CopyRequest, SignalLabel};
use crate::services::CopyResult;

/// Button that copies the text of the element matching `target`
///
/// The button's own label is passed to the copy action as the trigger, so it
/// flips to the feedback text on success and reverts after the configured delay.
/// Failures show a short message next to the button.
#[component]
pub fn CopyButton(
    // Selector of the element whose text is copied
    target: String,
    #[props(default = "Copy".to_string())]
    label: String,
    class: Option<String>,
    on_result: Option<EventHandler<CopyResult>>,
) -> Element {
    let copier = use_copy_text();
    let mut button_label = use_signal(|| label.clone());

    // A new label from the parent supersedes any pending restore
    use_effect(use_reactive((&label,), move |(label,)| {
        copier.reset.call(SignalLabel(button_label));
        if *button_label.peek() != label {
            button_label.set(label);
        }
    }));

    let handle_click = move |_| {
        let request = CopyRequest::new(target.clone())
            .with_trigger(SignalLabel(button_label))
            .on_done(on_result);
        copier.copy.call(request);
    };

    let class = class.unwrap_or_else(|| {
        "px-3 py-1 text-sm border border-border rounded-lg hover:bg-accent transition".to_string()
    });

    rsx! {
        span {
            class: "inline-flex items-center gap-2",

            if let Some(message) = copier.state.read().error() {
                span {
                    class: "text-sm text-destructive",
                    role: "status",
                    "{message}"
                }
            }

            button {
                r#type: "button",
                class: "{class}",
                aria_busy: copier.state.read().is_copying(),
                onclick: handle_click,
                "{button_label}"
            }
        }
    }
}
