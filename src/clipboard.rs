//! Clipboard integration.

use crate::error::Result;
use arboard::Clipboard;

/// Notification shown after a successful copy.
pub const COPIED_MESSAGE: &str = "Copiat al porta-retalls!";

/// Notification shown when the clipboard cannot be written.
pub const COPY_FAILED_MESSAGE: &str = "Error copiant al porta-retalls.";

/// Copy text to clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    tracing::debug!(bytes = text.len(), "Copied text to clipboard");
    Ok(())
}
