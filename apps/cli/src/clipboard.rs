use fprog::kernel::clipboard::{Clipboard, ClipboardError, Retention};
use std::time::Duration;

/// Platform clipboard opened on first use, so commands that never touch the
/// clipboard work on headless machines.
#[derive(Debug)]
pub struct SystemClipboardHandle {
    hold: Duration,
    #[cfg(feature = "clipboard")]
    inner: Option<fprog::kernel::clipboard::SystemClipboard>,
}

impl SystemClipboardHandle {
    /// Handle whose copies are served for up to `hold` where the platform needs it.
    #[must_use]
    pub const fn new(hold: Duration) -> Self {
        Self {
            hold,
            #[cfg(feature = "clipboard")]
            inner: None,
        }
    }

    #[cfg(feature = "clipboard")]
    fn open(&mut self) -> Result<&mut dyn Clipboard, ClipboardError> {
        use fprog::kernel::clipboard::SystemClipboard;

        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => SystemClipboard::new()?.with_hold(self.hold),
        };
        Ok(self.inner.insert(clipboard))
    }

    #[cfg(not(feature = "clipboard"))]
    #[allow(clippy::unused_self)]
    fn open(&mut self) -> Result<&mut dyn Clipboard, ClipboardError> {
        Err(ClipboardError::from("Built without clipboard support"))
    }
}

impl Clipboard for SystemClipboardHandle {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.open()?.set_text(text)
    }

    fn get_text(&mut self) -> Result<String, ClipboardError> {
        self.open()?.get_text()
    }

    fn retention(&self) -> Retention {
        Retention::for_platform(self.hold)
    }
}
