//! Clipboard service
//!
//! A thin seam over the system clipboard. Writes are fire-and-forget from
//! the controller's point of view: a denied or failed write is logged by
//! the caller and never reaches the event path.

use anyhow::Result;

/// Sink for copy operations
pub trait ClipboardService {
    /// Write plain text to the clipboard
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard backed by arboard
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardService for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
