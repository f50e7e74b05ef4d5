//! Endpoint constants and helpers.

use reqwest::Url;

use crate::error::QuoteError;

/// Public endpoint returning one random quote per GET.
pub const DEFAULT_ENDPOINT: &str = "https://api.quotable.io/random";

/// Parse `raw` as an absolute `http`/`https` URL.
///
/// Surrounding whitespace and matching double quotes are stripped first, so values
/// pasted from a shell or a config file work as-is.
pub fn parse_endpoint(raw: &str) -> Result<Url, QuoteError> {
    let trimmed = raw.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);

    let url = Url::parse(unquoted)
        .map_err(|e| QuoteError::Endpoint(format!("{unquoted}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(QuoteError::Endpoint(format!(
            "{unquoted}: unsupported scheme `{other}`"
        ))),
    }
}
