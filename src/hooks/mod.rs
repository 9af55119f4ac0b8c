pub mod use_copy_text;

pub use use_copy_text::{use_copy_text, CopyRequest, SignalLabel};
