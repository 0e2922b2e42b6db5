mod browser;
mod clipboard;
mod pipeline;
mod url_ops;
mod validation;

pub use browser::{BrowserOpener, SystemBrowser};
pub use clipboard::{ClipboardWriter, SystemClipboard};
pub use pipeline::{deliver, DeliveryOptions};
pub use url_ops::{sanitize_url, sanitize_url_with};
pub use validation::valid_url;
