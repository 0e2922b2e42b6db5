use clap::Parser;
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineArgs {
    #[arg(
        long,
        value_delimiter = ',',
        help = "Comma-separated list of URLs to sanitize"
    )]
    pub urls: Vec<String>,

    #[arg(
        long = "src-files",
        value_delimiter = ',',
        help = "Comma-separated list of file paths containing URLs"
    )]
    pub src_files: Vec<String>,

    #[arg(long, help = "Path to a settings.json file")]
    pub settings: Option<String>,

    #[arg(
        long = "no-clipboard",
        help = "Do not copy the sanitized URLs to the clipboard"
    )]
    pub no_clipboard: bool,

    #[arg(
        long = "no-open",
        help = "Do not open the sanitized URLs in the default browser"
    )]
    pub no_open: bool,

    #[arg(long, help = "Suppress the per-URL confirmation output")]
    pub quiet: bool,
}

impl CommandLineArgs {
    pub fn parse_args() -> Self {
        let args = CommandLineArgs::parse();

        info!("Parsed {} URL(s) from --urls", args.urls.len());
        info!("Parsed {} file(s) from --src-files", args.src_files.len());

        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_args_default() {
        let args = CommandLineArgs {
            urls: vec![],
            src_files: vec![],
            settings: None,
            no_clipboard: false,
            no_open: false,
            quiet: false,
        };

        assert_eq!(args.urls.len(), 0);
        assert_eq!(args.src_files.len(), 0);
        assert!(args.settings.is_none());
        assert!(!args.no_clipboard);
    }

    #[test]
    fn test_command_line_args_with_data() {
        let args = CommandLineArgs {
            urls: vec!["https://example.com/page?utm_source=share".to_string()],
            src_files: vec!["/tmp/urls.txt".to_string()],
            settings: Some("/tmp/settings.json".to_string()),
            no_clipboard: true,
            no_open: true,
            quiet: false,
        };

        assert_eq!(args.urls.len(), 1);
        assert_eq!(args.src_files.len(), 1);
        assert_eq!(args.urls[0], "https://example.com/page?utm_source=share");
        assert!(args.no_clipboard);
        assert!(args.no_open);
    }
}
