//!
//! Common types and utilities for the random quote client.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `quote` — the `Quote` payload returned by the quote API.
//! - `fetcher` — the `QuoteSource` trait and its HTTP implementation.
//! - `net` — endpoint constants and URL validation.
#![warn(missing_docs)]
pub mod error;
pub mod fetcher;
pub mod net;
pub mod quote;
pub mod result;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::QuoteError;
pub use fetcher::{FetcherConfig, HttpQuoteFetcher, QuoteSource};
pub use quote::Quote;
pub use result::Result;
