//! Copy saved code to the system clipboard

use anyhow::{Context, Result, bail};
use arboard::Clipboard;
use tracing::debug;

/// Upper bound on copied text (10MB)
const MAX_CLIPBOARD_BYTES: usize = 10 * 1024 * 1024;

/// Clipboard sink, so copies can be tested without a display server
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")
    }
}

fn validate_clipboard_text(text: &str) -> Result<()> {
    if text.is_empty() {
        bail!("Cannot copy empty text to clipboard");
    }
    if text.len() > MAX_CLIPBOARD_BYTES {
        bail!("Text too large for clipboard ({} bytes, max {})", text.len(), MAX_CLIPBOARD_BYTES);
    }
    Ok(())
}

/// Validate, then open the clipboard with `open` and copy
fn copy_with_provider<P, F>(text: &str, open: F) -> Result<P>
where
    P: ClipboardProvider,
    F: FnOnce() -> Result<P>,
{
    validate_clipboard_text(text)?;
    let mut provider = open()?;
    provider.set_text(text)?;
    debug!(bytes = text.len(), "copied to clipboard");
    Ok(provider)
}

/// Copy `text` to the system clipboard
///
/// # Errors
///
/// Fails before touching the clipboard when `text` is empty or larger than 10MB, and
/// afterwards when no clipboard is available (headless session, denied access).
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    copy_with_provider(text, SystemClipboard::new)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct RecordingClipboard {
        text: Option<String>,
        fail: bool,
    }

    impl ClipboardProvider for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            if self.fail {
                bail!("clipboard unavailable");
            }
            self.text = Some(text.to_string());
            Ok(())
        }
    }

    fn recording() -> Result<RecordingClipboard> {
        Ok(RecordingClipboard::default())
    }

    #[test]
    fn test_copies_code_verbatim() {
        let code = "def f():\n\treturn 1\n";

        let clipboard = copy_with_provider(code, recording).unwrap();
        assert_eq!(clipboard.text.as_deref(), Some(code));
    }

    #[test]
    fn test_provider_failure_propagates() {
        let failing = || -> Result<RecordingClipboard> {
            Ok(RecordingClipboard { fail: true, ..Default::default() })
        };
        let err = copy_with_provider("x", failing).unwrap_err();
        assert!(err.to_string().contains("clipboard unavailable"));
    }

    #[test]
    fn test_empty_text_rejected_before_open() {
        let mut opened = false;
        let err = copy_with_provider("", || {
            opened = true;
            recording()
        })
        .unwrap_err();

        assert!(err.to_string().contains("empty"));
        assert!(!opened);
    }

    #[test]
    fn test_open_failure_reported_after_validation() {
        let err = copy_with_provider("x", || -> Result<RecordingClipboard> {
            bail!("no display")
        })
        .unwrap_err();
        assert!(err.to_string().contains("no display"));
    }

    #[test]
    fn test_size_limit_in_bytes() {
        assert!(copy_with_provider(&"a".repeat(MAX_CLIPBOARD_BYTES), recording).is_ok());

        let err = copy_with_provider(&"a".repeat(MAX_CLIPBOARD_BYTES + 1), recording).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_validation_runs_before_clipboard_access() {
        let err = copy_to_clipboard("").unwrap_err();
        assert!(err.to_string().contains("empty"));
    }
}
