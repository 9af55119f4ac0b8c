use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::services::{
    CopyOptions, SelectorMatch, TextSource, DEFAULT_FEEDBACK_DELAY, DEFAULT_FEEDBACK_TEXT,
};

/// Upper bound for the restore delay
pub const MAX_FEEDBACK_DELAY_MS: u32 = 60_000;

const SETTINGS_VERSION: u32 = 1;

/// Copy behavior settings, persisted in localStorage
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CopySettings {
    #[serde(default = "default_feedback_text")]
    pub feedback_text: String,
    #[serde(default = "default_feedback_delay_ms")]
    pub feedback_delay_ms: u32,
    #[serde(default)]
    pub text_source: TextSource,
    #[serde(default)]
    pub selector_match: SelectorMatch,
    #[serde(default)]
    pub version: u32, // Settings schema version
}

fn default_feedback_text() -> String {
    DEFAULT_FEEDBACK_TEXT.to_string()
}

fn default_feedback_delay_ms() -> u32 {
    DEFAULT_FEEDBACK_DELAY.as_millis() as u32
}

impl Default for CopySettings {
    fn default() -> Self {
        Self {
            feedback_text: default_feedback_text(),
            feedback_delay_ms: default_feedback_delay_ms(),
            text_source: TextSource::default(),
            selector_match: SelectorMatch::default(),
            version: SETTINGS_VERSION,
        }
    }
}

impl CopySettings {
    pub fn copy_options(&self) -> CopyOptions {
        CopyOptions {
            text_source: self.text_source,
            selector_match: self.selector_match,
        }
    }

    pub fn feedback_delay(&self) -> Duration {
        Duration::from_millis(self.feedback_delay_ms as u64)
    }

    /// Blank feedback text falls back to the default, delay is clamped
    pub fn normalized(mut self) -> Self {
        if self.feedback_text.trim().is_empty() {
            self.feedback_text = default_feedback_text();
        }
        self.feedback_delay_ms = self.feedback_delay_ms.min(MAX_FEEDBACK_DELAY_MS);
        self.version = SETTINGS_VERSION;
        self
    }
}

/// Global copy settings
pub static COPY_SETTINGS: GlobalSignal<CopySettings> = Signal::global(CopySettings::default);

const STORAGE_KEY: &str = "clipcopy_settings";

/// Load settings from localStorage, keeping defaults when nothing is stored
pub fn init_settings() {
    match LocalStorage::get::<CopySettings>(STORAGE_KEY) {
        Ok(settings) => {
            let settings = settings.normalized();
            log::info!("Loaded copy settings from storage: {:?}", settings);
            *COPY_SETTINGS.write() = settings;
        }
        Err(e) => {
            log::info!("Using default copy settings ({})", e);
            *COPY_SETTINGS.write() = CopySettings::default();
        }
    }
}

/// Publish settings to the global signal; true when they differ from the current value
fn publish_settings(settings: CopySettings) -> bool {
    let changed = *COPY_SETTINGS.peek() != settings;
    // Written even when unchanged so inputs holding un-normalized text re-render
    *COPY_SETTINGS.write() = settings;
    changed
}

/// Replace settings and persist them
pub fn update_settings(settings: CopySettings) {
    let settings = settings.normalized();
    if !publish_settings(settings.clone()) {
        return;
    }

    if let Err(e) = LocalStorage::set(STORAGE_KEY, &settings) {
        log::warn!("Failed to persist copy settings: {}", e);
    }
    log::info!("Copy settings changed: {:?}", settings);
}

/// Drop stored settings and go back to defaults
pub fn reset_settings() {
    LocalStorage::delete(STORAGE_KEY);
    *COPY_SETTINGS.write() = CopySettings::default();
    log::info!("Copy settings reset to defaults");
}
