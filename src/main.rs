use anyhow::Result;
use log::{debug, error, info, warn};
use std::time::Instant;

use sanitize_it::cli_args::CommandLineArgs;
use sanitize_it::sanitizer::{
    deliver, sanitize_url_with, valid_url, DeliveryOptions, SystemBrowser, SystemClipboard,
};
use sanitize_it::settings::Settings;
use sanitize_it::url_input::UrlInput;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let start_time = Instant::now();
    info!("Sanitize It v{} starting up...", env!("CARGO_PKG_VERSION"));

    debug!("Parsing command line arguments...");
    let cli_args = CommandLineArgs::parse_args();

    debug!("Loading application settings...");
    let settings = Settings::load(cli_args.settings.as_deref())?;

    let options = delivery_options(&settings, &cli_args);

    info!("Fetching URLs to process...");
    let all_urls = UrlInput::new(&cli_args)?.urls;
    info!("Found {} URL(s) to process", all_urls.len());

    let sanitized = sanitize_all(&all_urls, &settings);

    deliver(
        &sanitized,
        &options,
        &mut SystemClipboard::new(),
        &SystemBrowser,
    )?;

    let elapsed = start_time.elapsed();
    info!(
        "Sanitized {} of {} URL(s) in {:.2} seconds",
        sanitized.len(),
        all_urls.len(),
        elapsed.as_secs_f64()
    );

    Ok(())
}

fn delivery_options(settings: &Settings, cli_args: &CommandLineArgs) -> DeliveryOptions {
    DeliveryOptions {
        copy_to_clipboard: settings.copy_to_clipboard && !cli_args.no_clipboard,
        open_in_browser: settings.open_in_browser && !cli_args.no_open,
        show_notification: settings.show_notification && !cli_args.quiet,
    }
}

fn sanitize_all(all_urls: &[String], settings: &Settings) -> Vec<String> {
    let extra_patterns = settings.compiled_extra_patterns();
    let mut sanitized = Vec::new();

    for url in all_urls {
        if !valid_url(url) {
            warn!("Invalid URL '{}'. Skipping...", url);
            continue;
        }

        match sanitize_url_with(url, &extra_patterns) {
            Ok(cleaned) => {
                debug!("Sanitized '{}' -> '{}'", url, cleaned);
                sanitized.push(cleaned);
            }
            Err(e) => {
                error!("Failed to sanitize '{}': {}", url, e);
            }
        }
    }

    sanitized
}
