// UI Components
// Copy buttons and the demo page building blocks

pub mod copy_button;
pub mod copy_settings_panel;
pub mod short_link_card;
pub mod snippet_card;

pub use copy_button::CopyButton;
pub use copy_settings_panel::CopySettingsPanel;
pub use short_link_card::ShortLinkCard;
pub use snippet_card::SnippetCard;
