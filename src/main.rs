#![allow(non_snake_case)]

use dioxus::prelude::*;
use stores::copy_settings;

// Modules
mod components;
mod hooks;
mod services;
mod stores;
mod utils;

use components::{CopySettingsPanel, ShortLinkCard, SnippetCard};

const DEMO_CODE: &str = "aZ3kQ9";
const DEMO_TARGET: &str = "https://www.rust-lang.org/learn/get-started";

const SNIPPET: &str = "hello\nworld";
const INSTALL: &str = "cargo install dioxus-cli\ndx serve --platform web";

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting clipcopy");

    dioxus::launch(App);
}

/// Short link for `code` on the page's own origin
fn short_url(code: &str) -> String {
    let origin = web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:8080".to_string());
    format!("{}/{}", origin.trim_end_matches('/'), code)
}

#[component]
fn App() -> Element {
    use_effect(move || {
        copy_settings::init_settings();
    });

    rsx! {
        main {
            class: "max-w-2xl mx-auto p-6 space-y-4",

            h1 {
                class: "text-2xl font-bold",
                "Copy to clipboard"
            }

            ShortLinkCard {
                short_url: short_url(DEMO_CODE),
                original_url: DEMO_TARGET.to_string(),
                code: DEMO_CODE.to_string(),
            }

            SnippetCard {
                id: "snippet",
                title: "Snippet",
                content: SNIPPET.to_string(),
            }

            SnippetCard {
                id: "install",
                title: "Install",
                content: INSTALL.to_string(),
            }

            // Selector points at nothing, the button stays silent apart from the status line
            SnippetCard {
                id: "orphan",
                title: "Broken selector",
                content: "This card copies from #missing",
                target: "#missing".to_string(),
            }

            CopySettingsPanel {}
        }
    }
}
