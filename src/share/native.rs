//! Platform share hand-off.

use super::ShareError;

/// A platform share sheet (or the closest thing the platform has).
pub trait NativeShare {
    fn share(&self, title: &str, text: &str) -> Result<(), ShareError>;
}

/// Opens a pre-filled `mailto:` link with the system URL handler.
pub struct MailtoShare;

impl NativeShare for MailtoShare {
    fn share(&self, title: &str, text: &str) -> Result<(), ShareError> {
        let url = mailto_url(title, text);
        open::that(&url).map_err(|e| ShareError::Native(e.to_string()))
    }
}

/// `mailto:?subject=..&body=..` with RFC 3986 percent-encoding.
pub fn mailto_url(subject: &str, body: &str) -> String {
    format!(
        "mailto:?subject={}&body={}",
        percent_encode(subject),
        percent_encode(body)
    )
}

fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
