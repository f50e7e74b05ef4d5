//! Command-line arguments for the Quote Client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::time::Duration;

use clap::Parser;
use quote_common::FetcherConfig;
use quote_common::net::DEFAULT_ENDPOINT;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Endpoint answering GET with a `{"content", "author"}` JSON object.
    #[clap(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Request timeout in seconds. The HTTP client default applies when omitted.
    #[clap(long)]
    pub timeout_secs: Option<u64>,

    /// Ignore HTTP(S)_PROXY settings from the environment.
    #[clap(long)]
    pub no_proxy: bool,

    /// Show a single quote and exit instead of waiting for refresh commands.
    #[clap(long)]
    pub once: bool,
}

impl Args {
    /// Fetcher settings derived from the arguments.
    pub fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig {
            endpoint: self.endpoint.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
            use_proxy: !self.no_proxy,
        }
    }
}
