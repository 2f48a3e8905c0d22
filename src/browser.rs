use crate::app::{GnError, Result};

/// Hands a URL to something outside the terminal.
pub trait Browser: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

/// The platform's default browser, via the `open` crate.
///
/// The launcher is detached, so a slow or blocking opener never holds up the caller.
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open(&self, url: &str) -> Result<()> {
        tracing::debug!("opening {} in browser", url);
        open::that_detached(url).map_err(|e| GnError::Browser(format!("{url}: {e}")))
    }
}
