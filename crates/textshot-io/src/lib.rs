pub mod clipboard;

pub use clipboard::{ClipboardSink, SystemClipboard};
