//! Sharing a name: native share first, clipboard as the fallback.

mod clipboard;
mod native;

pub use clipboard::{ClipboardHandler, ClipboardWriter};
pub use native::{mailto_url, MailtoShare, NativeShare};

use thiserror::Error;

use crate::config::{NativeShareKind, ShareConfig};
use crate::model::NameRecord;

/// Title passed to the native share target.
pub const SHARE_TITLE: &str = "Baby Name Idea";

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("Native share failed: {0}")]
    Native(String),

    #[error("{0}")]
    Clipboard(String),
}

/// Result of a share attempt, as seen by the state controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Native share accepted the message.
    Shared,
    /// Native share failed or was cancelled. Never surfaced to the user.
    NativeFailed,
    /// Fallback copied the message to the clipboard.
    Copied,
    /// Fallback clipboard write failed.
    CopyFailed,
}

/// Fixed share message for a record.
pub fn share_text(record: &NameRecord) -> String {
    format!(
        "Check out this baby name I found: {}! It means \"{}\".",
        record.name, record.meaning
    )
}

/// Routes a share to the native target when one exists, else the clipboard.
pub struct Sharer {
    native: Option<Box<dyn NativeShare>>,
    clipboard: Box<dyn ClipboardWriter>,
}

impl Sharer {
    pub fn new(native: Option<Box<dyn NativeShare>>, clipboard: Box<dyn ClipboardWriter>) -> Self {
        Self { native, clipboard }
    }

    /// Sharer for the configured native target and the system clipboard.
    pub fn from_config(config: &ShareConfig) -> Self {
        let native: Option<Box<dyn NativeShare>> = match config.native {
            NativeShareKind::None => None,
            NativeShareKind::Mailto => Some(Box::new(MailtoShare)),
        };
        Self::new(native, Box::new(ClipboardHandler::new()))
    }

    pub fn share(&mut self, record: &NameRecord) -> ShareOutcome {
        let text = share_text(record);

        if let Some(native) = &self.native {
            return match native.share(SHARE_TITLE, &text) {
                Ok(()) => ShareOutcome::Shared,
                Err(err) => {
                    tracing::warn!(error = %err, name = %record.name, "Native share failed");
                    ShareOutcome::NativeFailed
                }
            };
        }

        match self.clipboard.set_text(&text) {
            Ok(()) => ShareOutcome::Copied,
            Err(err) => {
                tracing::error!(error = %err, "Failed to copy to clipboard");
                ShareOutcome::CopyFailed
            }
        }
    }
}
