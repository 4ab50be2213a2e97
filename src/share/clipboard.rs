//! System clipboard access for the share fallback.

use arboard::Clipboard;

use super::ShareError;

/// Something that can receive plain text.
pub trait ClipboardWriter {
    fn set_text(&mut self, text: &str) -> Result<(), ShareError>;
}

/// Handler for clipboard operations.
///
/// The OS clipboard is opened on first use so a headless session only fails
/// when the user actually shares.
#[derive(Default)]
pub struct ClipboardHandler {
    clipboard: Option<Clipboard>,
}

impl ClipboardHandler {
    /// Create a new clipboard handler.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardWriter for ClipboardHandler {
    /// Write text to the system clipboard.
    fn set_text(&mut self, text: &str) -> Result<(), ShareError> {
        if self.clipboard.is_none() {
            self.clipboard = Some(Clipboard::new().map_err(|e| {
                ShareError::Clipboard(format!("Failed to open clipboard: {}", e))
            })?);
        }

        let Some(clipboard) = self.clipboard.as_mut() else {
            return Err(ShareError::Clipboard("Clipboard unavailable".to_string()));
        };
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ShareError::Clipboard(format!("Failed to set clipboard text: {}", e)))
    }
}
