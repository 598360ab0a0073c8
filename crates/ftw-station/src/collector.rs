use std::time::Duration;

use ftw_core::network::{Collector, CollectorResponse, TransportError};
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

/// Bound on a whole collector request, connection included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking HTTP client for the collector endpoint.
pub struct HttpCollector {
    client: Client,
    url: String,
}

impl HttpCollector {
    pub fn new(url: impl Into<String>) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TransportError::Failed(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl Collector for HttpCollector {
    fn endpoint(&self) -> &str {
        &self.url
    }

    fn post_json(&mut self, body: &str) -> Result<CollectorResponse, TransportError> {
        debug!("POST {} ({} bytes)", self.url, body.len());

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_owned())
            .send()
            .map_err(transport_error)?;

        // Only the status decides delivery; an unreadable body is not an error.
        let status = response.status().as_u16();
        let body = response.text().unwrap_or_else(|e| {
            debug!("Failed to read response body from {}: {}", self.url, e);
            String::new()
        });

        Ok(CollectorResponse { status, body })
    }
}

fn transport_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Failed(e.to_string())
    }
}
