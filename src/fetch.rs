//! Remote resource fetching with timing instrumentation.

use std::time::Instant;

use tracing::{Instrument, Level, Span, field, span};
use url::Url;

use crate::{Error, Result};

/// Fetch `url` with a GET request and return the raw response body.
///
/// The body is returned for any status code; callers decide what a
/// non-success payload means. Timing of the header and body phases is
/// recorded on a debug-level `fetch.resource` span.
pub async fn fetch_remote_resource(http: &reqwest::Client, url: &str) -> Result<Vec<u8>> {
    let parsed = Url::parse(url).map_err(|source| Error::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    let fetch_span = span!(
        Level::DEBUG,
        "fetch.resource",
        url = %parsed,
        status = field::Empty,
        headers_ms = field::Empty,
        body_ms = field::Empty,
        bytes = field::Empty,
    );
    let start = Instant::now();

    async move {
        let response = http.get(parsed).send().await?;

        let current = Span::current();
        current.record("status", response.status().as_u16());
        current.record("headers_ms", start.elapsed().as_millis() as u64);

        // Consumes the body on every path; dropping the response on error
        // releases the connection.
        let body = response.bytes().await?;

        current.record("body_ms", start.elapsed().as_millis() as u64);
        current.record("bytes", body.len() as u64);

        Ok(body.to_vec())
    }
    .instrument(fetch_span)
    .await
}
