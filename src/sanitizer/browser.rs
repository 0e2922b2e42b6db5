use anyhow::{Context, Result};

/// Seam for handing a URL back to the browser, the CLI counterpart of
/// navigating the active tab.
pub trait BrowserOpener {
    fn open(&self, url: &str) -> Result<()>;
}

/// BrowserOpener implementation that launches the system default browser.
pub struct SystemBrowser;

impl BrowserOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<()> {
        open::that(url).with_context(|| format!("Failed to open URL: {}", url))?;
        Ok(())
    }
}
