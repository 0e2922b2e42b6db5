use anyhow::Result;
use log::{error, info, warn};

use super::browser::BrowserOpener;
use super::clipboard::ClipboardWriter;

#[derive(Debug, Clone)]
pub struct DeliveryOptions {
    pub copy_to_clipboard: bool,
    pub open_in_browser: bool,
    pub show_notification: bool,
}

/// Deliver sanitized URLs: one clipboard write for the whole batch, a
/// confirmation line per URL, then hand each URL to the browser. Clipboard
/// and browser failures are logged and never abort the run.
pub fn deliver(
    urls: &[String],
    options: &DeliveryOptions,
    clipboard: &mut dyn ClipboardWriter,
    browser: &dyn BrowserOpener,
) -> Result<()> {
    if urls.is_empty() {
        warn!("No sanitized URLs to deliver.");
        return Ok(());
    }

    if options.copy_to_clipboard {
        let payload = urls.join("\n");
        match clipboard.write_text(&payload) {
            Ok(()) => info!("Copied {} URL(s) to clipboard", urls.len()),
            Err(e) => warn!("Clipboard copy failed: {}", e),
        }
    }

    if options.show_notification {
        for url in urls {
            println!("Sanitized: {}", url);
        }
    }

    if options.open_in_browser {
        for url in urls {
            match browser.open(url) {
                Ok(()) => info!("Opened {} in the default browser", url),
                Err(e) => error!("Error opening {}: {}", url, e),
            }
        }
    }

    Ok(())
}
