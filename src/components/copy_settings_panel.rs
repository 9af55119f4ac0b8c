use dioxus::prelude::*;

use crate::services::{SelectorMatch, TextSource};
use crate::stores::copy_settings::{self, COPY_SETTINGS};

/// Editor for the persisted copy settings
#[component]
pub fn CopySettingsPanel() -> Element {
    let settings = COPY_SETTINGS.read().clone();

    // Inputs edit drafts; every publish (including a normalized no-op) resyncs them
    let mut draft_text = use_signal(|| settings.feedback_text.clone());
    let mut draft_delay = use_signal(|| settings.feedback_delay_ms.to_string());
    use_effect(move || {
        let current = COPY_SETTINGS.read();
        draft_text.set(current.feedback_text.clone());
        draft_delay.set(current.feedback_delay_ms.to_string());
    });

    let handle_text = move |evt: FormEvent| {
        let mut next = COPY_SETTINGS.read().clone();
        next.feedback_text = evt.value();
        copy_settings::update_settings(next);
    };

    let handle_delay = move |evt: FormEvent| {
        match evt.value().trim().parse::<u32>() {
            Ok(ms) => {
                let mut next = COPY_SETTINGS.read().clone();
                next.feedback_delay_ms = ms;
                copy_settings::update_settings(next);
            }
            Err(_) => {
                log::debug!("Ignoring non-numeric feedback delay");
                draft_delay.set(COPY_SETTINGS.peek().feedback_delay_ms.to_string());
            }
        }
    };

    let handle_source = move |evt: FormEvent| {
        let mut next = COPY_SETTINGS.read().clone();
        next.text_source = TextSource::from_str(&evt.value());
        copy_settings::update_settings(next);
    };

    let handle_match = move |evt: FormEvent| {
        let mut next = COPY_SETTINGS.read().clone();
        next.selector_match = SelectorMatch::from_str(&evt.value());
        copy_settings::update_settings(next);
    };

    rsx! {
        div {
            class: "bg-card border border-border rounded-xl p-4 space-y-3",

            h2 {
                class: "text-lg font-bold",
                "Copy settings"
            }

            label {
                class: "block text-sm",
                "Feedback text"
                input {
                    class: "w-full px-3 py-2 bg-background border border-border rounded-lg",
                    value: "{draft_text}",
                    oninput: move |evt: FormEvent| draft_text.set(evt.value()),
                    onchange: handle_text,
                }
            }

            label {
                class: "block text-sm",
                "Feedback delay (ms)"
                input {
                    r#type: "number",
                    min: "0",
                    class: "w-full px-3 py-2 bg-background border border-border rounded-lg",
                    value: "{draft_delay}",
                    oninput: move |evt: FormEvent| draft_delay.set(evt.value()),
                    onchange: handle_delay,
                }
            }

            label {
                class: "block text-sm",
                "Text to copy"
                select {
                    class: "w-full px-3 py-2 bg-background border border-border rounded-lg",
                    value: settings.text_source.as_str(),
                    onchange: handle_source,
                    option { value: "rendered_then_raw", "Rendered text, raw as fallback" }
                    option { value: "rendered_only", "Rendered text only" }
                    option { value: "raw_only", "Raw text only" }
                }
            }

            label {
                class: "block text-sm",
                "When a selector matches several elements"
                select {
                    class: "w-full px-3 py-2 bg-background border border-border rounded-lg",
                    value: settings.selector_match.as_str(),
                    onchange: handle_match,
                    option { value: "first", "Copy the first match" }
                    option { value: "unique", "Refuse to copy" }
                }
            }

            button {
                class: "px-4 py-2 rounded-lg hover:bg-accent transition",
                onclick: move |_| copy_settings::reset_settings(),
                "Reset to defaults"
            }
        }
    }
}
