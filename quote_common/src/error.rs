//! Error types shared by the fetcher and the client.
//!
//! `QuoteError` unifies transport, decoding, configuration and channel failures so
//! every layer can propagate a single error type. Its `Display` text is what the
//! user sees in place of a quote when a fetch fails.
use std::io;

use thiserror::Error;

/// Unified error type for the workspace.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error originating from the standard library (stdin, stdout, sockets).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The request never produced a readable response (DNS, connect, TLS, timeout, body read).
    #[error("Could not reach the quote service: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not a JSON object with string `content` and `author`.
    #[error("Could not read the quote: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured endpoint is not an absolute http(s) URL.
    #[error("Invalid endpoint: {0}")]
    Endpoint(String),

    /// Channel send failed (e.g., receiver dropped); contains a short context string.
    #[error("Channel send failed: {0}")]
    ChannelSend(String),

    /// Channel receive failed (e.g., sender closed); contains a short context string.
    #[error("Channel receive failed: {0}")]
    ChannelRecv(String),
}

impl QuoteError {
    /// `true` for network-level failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, QuoteError::Transport(_))
    }

    /// `true` when the payload could not be decoded into a `Quote`.
    pub fn is_decode(&self) -> bool {
        matches!(self, QuoteError::Decode(_))
    }
}
