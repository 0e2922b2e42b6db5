use anyhow::Result;
use csv::Reader;
use log::error;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::cli_args::CommandLineArgs;

pub struct UrlInput {
    pub urls: Vec<String>,
}

impl UrlInput {
    pub fn new(cli_args: &CommandLineArgs) -> Result<Self> {
        let mut input = UrlInput { urls: Vec::new() };

        input.collect_urls(cli_args)?;

        if input.urls.is_empty() {
            input.prompt_for_input()?;
        }

        Ok(input)
    }

    fn collect_urls(&mut self, cli_args: &CommandLineArgs) -> Result<()> {
        self.urls.extend(cli_args.urls.clone());

        for file_path in &cli_args.src_files {
            self.urls.extend(self.urls_from_file(file_path)?);
        }

        Ok(())
    }

    fn urls_from_file(&self, file_path: &str) -> Result<Vec<String>> {
        let path = Path::new(file_path);
        if !path.exists() {
            error!("File '{}' not found. Skipping...", file_path);
            return Ok(Vec::new());
        }

        let file = File::open(path)?;
        let mut reader = Reader::from_reader(file);
        let mut result = Vec::new();

        for record in reader.records() {
            let record = record?;
            for field in record.iter() {
                let candidate = field.trim();
                if !candidate.is_empty() {
                    result.push(candidate.to_string());
                }
            }
        }

        Ok(result)
    }

    fn prompt_for_input(&mut self) -> Result<()> {
        println!("Enter/paste the link(s) to sanitize, comma-separated:");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let mut user_in = input.trim().to_string();

        while user_in.is_empty() {
            error!("No input provided. Try again.");
            input.clear();
            io::stdin().read_line(&mut input)?;
            user_in = input.trim().to_string();
        }

        self.urls = user_in
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(())
    }
}
