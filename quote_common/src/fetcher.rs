//! Fetching quotes over HTTP.
//!
//! `QuoteSource` is the seam between the presentation layer and the network: the
//! client only ever sees `fetch() -> Result<Quote>`. `HttpQuoteFetcher` is the real
//! implementation, a blocking `reqwest` client issuing one GET per call.
use std::time::Duration;

use log::debug;
use reqwest::Url;
use reqwest::blocking::Client;

use crate::net::{DEFAULT_ENDPOINT, parse_endpoint};
use crate::quote::Quote;
use crate::result::Result;

/// Anything that can produce one random quote per call.
#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
pub trait QuoteSource: Send + Sync {
    /// Fetch a single quote. Each call is one independent request.
    fn fetch(&self) -> Result<Quote>;
}

/// Settings for [`HttpQuoteFetcher`].
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Endpoint URL answering GET with a quote object.
    pub endpoint: String,
    /// Overall request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
    /// Honour proxy settings from the environment.
    pub use_proxy: bool,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
            use_proxy: true,
        }
    }
}

/// Blocking HTTP implementation of [`QuoteSource`].
#[derive(Debug)]
pub struct HttpQuoteFetcher {
    client: Client,
    endpoint: Url,
}

impl HttpQuoteFetcher {
    /// Build a fetcher for `config`. Fails if the endpoint is not an http(s) URL
    /// or the HTTP client cannot be initialised.
    pub fn new(config: &FetcherConfig) -> Result<Self> {
        let endpoint = parse_endpoint(&config.endpoint)?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if !config.use_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        Ok(Self { client, endpoint })
    }

    /// The URL every `fetch` goes to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl QuoteSource for HttpQuoteFetcher {
    fn fetch(&self) -> Result<Quote> {
        debug!("GET {}", self.endpoint);
        let response = self.client.get(self.endpoint.clone()).send()?;
        // The status is not checked: an error page simply fails to decode.
        debug!("Response status: {}", response.status());
        let body = response.bytes()?;
        Quote::from_json_bytes(&body)
    }
}
