use arboard::Clipboard;

/// The single clipboard operation the pipeline performs
pub trait ClipboardSink: Send + Sync {
    fn set_text(&self, text: &str) -> anyhow::Result<()>;
}

/// System clipboard via arboard.
///
/// The connection is opened per call; arboard handles are not Sync and the
/// pipeline copies at most once per run.
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&self, text: &str) -> anyhow::Result<()> {
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
