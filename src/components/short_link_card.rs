use dioxus::prelude::*;

use crate::components::CopyButton;
use crate::services::CopyResult;

/// Result panel for a freshly shortened link
///
/// Shows the short URL with a copy button and the original target below it.
#[component]
pub fn ShortLinkCard(short_url: String, original_url: String, code: String) -> Element {
    let mut copied = use_signal(|| None::<String>);
    let element_id = format!("short-url-{}", code);

    let handle_result = move |result: CopyResult| match result {
        Ok(report) => copied.set(Some(report.text)),
        Err(_) => copied.set(None),
    };

    rsx! {
        div {
            class: "bg-card border border-border rounded-xl p-4 space-y-2",

            h3 {
                class: "font-semibold",
                "Your short link"
            }

            div {
                class: "flex items-center gap-3",
                a {
                    id: "{element_id}",
                    href: "{short_url}",
                    class: "font-mono text-primary break-all",
                    "{short_url}"
                }
                CopyButton {
                    target: format!("#{}", element_id),
                    on_result: handle_result,
                }
            }

            p {
                class: "text-sm text-muted-foreground break-all",
                "Redirects to {original_url}"
            }

            if let Some(text) = copied.read().as_ref() {
                p {
                    class: "text-xs text-muted-foreground",
                    "On your clipboard: {text}"
                }
            }
        }
    }
}
