//! Clipboard access behind a small trait so callers can swap the system
//! clipboard for an in-memory one.

#[cfg(feature = "clipboard")]
use fprog_domain::constants::DEFAULT_CLIPBOARD_HOLD_SECS;
use std::borrow::Cow;
use std::time::{Duration, Instant};
use tracing::debug;

#[fprog_derive::fprog_error]
pub enum ClipboardError {
    /// The platform clipboard could not be opened, read or written.
    #[cfg(feature = "clipboard")]
    #[error("Clipboard access error{}: {source}", format_context(.context))]
    Access { source: arboard::Error, context: Option<Cow<'static, str>> },

    #[error("Clipboard is empty{}", format_context(.context))]
    Empty { context: Option<Cow<'static, str>> },

    #[error("Internal clipboard error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// How long copied text stays available to other programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retention {
    /// The platform keeps the text after the process exits.
    Persistent,
    /// [`Clipboard::set_text`] keeps serving the text until another program
    /// takes the clipboard or the duration elapses.
    Held(Duration),
    /// The text disappears with the process unless a clipboard manager saved it.
    UntilExit,
}

impl Retention {
    /// Retention of the system clipboard when serving copies for up to `hold`.
    ///
    /// X11 and Wayland selections are served by the copying process, so on
    /// Linux a zero `hold` leaves the text to die with the process.
    #[must_use]
    pub const fn for_platform(hold: Duration) -> Self {
        if !cfg!(target_os = "linux") {
            Self::Persistent
        } else if hold.is_zero() {
            Self::UntilExit
        } else {
            Self::Held(hold)
        }
    }

    /// Instant until which a copy made at `now` is served.
    #[must_use]
    pub fn deadline(self, now: Instant) -> Option<Instant> {
        match self {
            Self::Held(hold) => now.checked_add(hold),
            Self::Persistent | Self::UntilExit => None,
        }
    }
}

/// Text clipboard.
pub trait Clipboard {
    /// Replaces the clipboard contents with `text`.
    ///
    /// # Errors
    /// Returns [`ClipboardError`] if the clipboard cannot be written.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Reads the clipboard contents.
    ///
    /// # Errors
    /// Returns [`ClipboardError::Empty`] when there is no text to read.
    fn get_text(&mut self) -> Result<String, ClipboardError>;

    /// What happens to copied text once this process exits.
    fn retention(&self) -> Retention {
        Retention::Persistent
    }
}

/// Operating system clipboard.
#[cfg(feature = "clipboard")]
pub struct SystemClipboard {
    inner: arboard::Clipboard,
    hold: Duration,
}

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    /// Opens the platform clipboard.
    ///
    /// # Errors
    /// Returns [`ClipboardError::Access`] when no clipboard is available
    /// (e.g., a headless session without a display server).
    pub fn new() -> Result<Self, ClipboardError> {
        let inner = arboard::Clipboard::new().context("Failed to open system clipboard")?;
        Ok(Self { inner, hold: Duration::from_secs(DEFAULT_CLIPBOARD_HOLD_SECS) })
    }

    /// Serves copies for up to `hold` where the platform needs it (see [`Retention`]).
    #[must_use]
    pub const fn with_hold(mut self, hold: Duration) -> Self {
        self.hold = hold;
        self
    }
}

#[cfg(all(feature = "clipboard", target_os = "linux"))]
fn write_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    deadline: Option<Instant>,
) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    match deadline {
        Some(deadline) => clipboard.set().wait_until(deadline).text(text),
        None => clipboard.set_text(text),
    }
}

#[cfg(all(feature = "clipboard", not(target_os = "linux")))]
fn write_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    _deadline: Option<Instant>,
) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

#[cfg(feature = "clipboard")]
impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard").field("hold", &self.hold).finish_non_exhaustive()
    }
}

#[cfg(feature = "clipboard")]
impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let deadline = self.retention().deadline(Instant::now());
        if deadline.is_some() {
            debug!(hold = ?self.hold, "Serving clipboard until it is replaced");
        }
        write_text(&mut self.inner, text, deadline).context("Failed to write clipboard")?;
        debug!(bytes = text.len(), "Clipboard updated");
        Ok(())
    }

    fn get_text(&mut self) -> Result<String, ClipboardError> {
        match self.inner.get_text() {
            Ok(text) if text.trim().is_empty() => Err(ClipboardError::Empty { context: None }),
            Ok(text) => Ok(text),
            Err(arboard::Error::ContentNotAvailable) => {
                Err(ClipboardError::Empty { context: None })
            },
            Err(err) => Err(err).context("Failed to read clipboard"),
        }
    }

    fn retention(&self) -> Retention {
        Retention::for_platform(self.hold)
    }
}

/// Clipboard kept in process memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()) }
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        debug!(bytes = text.len(), "Memory clipboard updated");
        self.text = Some(text.to_owned());
        Ok(())
    }

    fn get_text(&mut self) -> Result<String, ClipboardError> {
        self.text.clone().filter(|t| !t.trim().is_empty()).ok_or(ClipboardError::Empty {
            context: Some(Cow::Borrowed("memory clipboard")),
        })
    }
}
