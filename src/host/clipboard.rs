//! System clipboard read via arboard.

use super::HostError;

/// Current clipboard text. `Ok(None)` covers both an empty clipboard and
/// non-text content; real failures (no display server, denied access) come
/// back as errors.
pub(super) fn read_text() -> Result<Option<String>, HostError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| HostError::Other(e.to_string()))?;
    match clipboard.get_text() {
        Ok(text) if text.trim().is_empty() => Ok(None),
        Ok(text) => Ok(Some(text)),
        Err(arboard::Error::ContentNotAvailable) => Ok(None),
        Err(e) => Err(HostError::Other(e.to_string())),
    }
}
