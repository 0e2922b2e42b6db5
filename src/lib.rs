pub mod cli_args;
pub mod sanitizer;
pub mod settings;
pub mod url_input;
