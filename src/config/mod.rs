use crate::config::cli::Args;
use crate::error::Result;
use clap::Parser;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

pub mod cli;

/// Tunables for the debounced course search.
#[derive(Debug, Clone, Copy)]
pub struct SearchSettings {
    pub debounce: Duration,
    pub min_query_len: usize,
    pub max_suggestions: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
            min_query_len: 2,
            max_suggestions: 8,
        }
    }
}

pub struct Config {
    pub args: Args,
    pub http_client: Client,
}

impl Config {
    pub fn new() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(args.timeout_secs))
            .user_agent(concat!("edupath-compare/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { args, http_client })
    }

    pub fn search_settings(&self) -> SearchSettings {
        SearchSettings {
            debounce: Duration::from_millis(self.args.debounce_ms),
            min_query_len: self.args.min_query_len,
            ..SearchSettings::default()
        }
    }

    pub fn ensure_directories(&self) -> Result<()> {
        if !self.args.data_dir.exists() {
            std::fs::create_dir_all(&self.args.data_dir)?;
        }

        info!("Data dir {:?} exists", self.args.data_dir);
        Ok(())
    }
}
