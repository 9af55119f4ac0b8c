use dioxus::prelude::*;

use crate::components::CopyButton;

/// Preformatted snippet with a copy button
#[component]
pub fn SnippetCard(
    // Element id of the `pre` block, without the leading '#'
    id: String,
    title: String,
    content: String,
    // Selector override, defaults to `#{id}`
    target: Option<String>,
) -> Element {
    let selector = target.unwrap_or_else(|| format!("#{}", id));

    rsx! {
        div {
            class: "bg-card border border-border rounded-xl p-4 space-y-2",

            div {
                class: "flex items-center justify-between",
                h3 {
                    class: "font-semibold",
                    "{title}"
                }
                CopyButton {
                    target: selector,
                }
            }

            pre {
                id: "{id}",
                class: "bg-muted rounded-lg p-3 text-sm overflow-x-auto whitespace-pre-wrap",
                "{content}"
            }
        }
    }
}
