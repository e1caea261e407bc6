//! HTTP transport for the Context7 API.
//!
//! Each call issues exactly one GET. There are no retries: a failed request
//! surfaces as [`Error::HttpStatus`] or [`Error::Connection`] and the
//! invocation ends there.

use crate::config::ClientConfig;
use crate::error::Error;
use crate::logging;
use crate::models::{DocsRequest, LibraryRecord, SearchQuery, SearchResponse};
use crate::request::{self, Endpoint};
use reqwest::StatusCode;
use std::time::Instant;
use tracing::debug;

pub struct Context7Client {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Context7Client {
    /// Builds a client with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the underlying HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        install_crypto_provider();
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    /// Looks up libraries by name.
    ///
    /// # Errors
    ///
    /// Transport and status failures from [`Self::fetch`], or
    /// [`Error::InvalidResponse`] if the payload is not a list of libraries.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<LibraryRecord>, Error> {
        let body = self.fetch(&Endpoint::Search(query.clone())).await?;
        let records = SearchResponse::parse(&body)?.into_records();
        debug!(count = records.len(), "search returned libraries");
        Ok(records)
    }

    /// Fetches plain-text documentation for a library id.
    ///
    /// # Errors
    ///
    /// Transport and status failures from [`Self::fetch`].
    pub async fn docs(&self, request: &DocsRequest) -> Result<String, Error> {
        self.fetch(&Endpoint::Docs(request.clone())).await
    }

    /// Sends one GET and returns the body as text.
    ///
    /// # Errors
    ///
    /// [`Error::HttpStatus`] for non-success answers (202 included: the API uses it
    /// for libraries that are still being indexed), [`Error::Connection`] when
    /// the request or the body read fails.
    pub async fn fetch(&self, endpoint: &Endpoint) -> Result<String, Error> {
        let url = endpoint.url(&self.config);
        let headers = request::build_headers(&self.config)?;

        logging::log_request("GET", &url, Some(&headers));
        let start = Instant::now();

        let response = self
            .http
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(connection_error)?;

        let status = response.status();
        let response_headers = response.headers().clone();
        let bytes = response.bytes().await.map_err(connection_error)?;
        let body = String::from_utf8_lossy(&bytes).into_owned();

        logging::log_response(
            status.as_u16(),
            start.elapsed().as_millis(),
            Some(&response_headers),
            Some(&body),
            logging::get_max_body_len(),
        );

        if !status.is_success() || status == StatusCode::ACCEPTED {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

/// Flattens a transport error and its sources into one readable reason.
fn connection_error(err: reqwest::Error) -> Error {
    let reason = if err.is_timeout() {
        "timed out".to_string()
    } else {
        let mut parts = vec![err.to_string()];
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            let text = cause.to_string();
            if !parts.iter().any(|part| part.contains(&text)) {
                parts.push(text);
            }
            source = cause.source();
        }
        parts.join(": ")
    };
    Error::Connection { reason }
}

/// reqwest is built without a bundled rustls provider; install one process-wide.
fn install_crypto_provider() {
    #[cfg(not(windows))]
    let provider = rustls::crypto::ring::default_provider();
    #[cfg(windows)]
    let provider = rustls::crypto::aws_lc_rs::default_provider();
    // Already installed on the second client in the same process.
    let _ = provider.install_default();
}
