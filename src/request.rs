//! Request construction for the two Context7 endpoints.

use crate::config::ClientConfig;
use crate::constants;
use crate::error::Error;
use crate::models::{DocsRequest, SearchQuery};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};

/// A logical API operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Search(SearchQuery),
    Docs(DocsRequest),
}

impl Endpoint {
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Search(_) => constants::PATH_LIBS_SEARCH,
            Self::Docs(_) => constants::PATH_CONTEXT,
        }
    }

    /// Query parameters in the order they are sent.
    #[must_use]
    pub fn query_params(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::Search(search) => {
                let mut params = vec![(constants::PARAM_LIBRARY_NAME, search.library_name.as_str())];
                if let Some(query) = search.query.as_deref().filter(|q| !q.is_empty()) {
                    params.push((constants::PARAM_QUERY, query));
                }
                params
            }
            Self::Docs(docs) => vec![
                (constants::PARAM_LIBRARY_ID, docs.library_id.as_str()),
                (constants::PARAM_QUERY, docs.query.as_str()),
                (constants::PARAM_TYPE, constants::DOCS_FORMAT_TXT),
            ],
        }
    }

    /// Fully-qualified URL with percent-encoded query parameters.
    #[must_use]
    pub fn url(&self, config: &ClientConfig) -> String {
        let query = self
            .query_params()
            .into_iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!(
            "{}{}?{query}",
            config.base_url.trim_end_matches('/'),
            self.path()
        )
    }
}

/// Static headers plus the bearer token when one is configured.
///
/// # Errors
///
/// Returns [`Error::Config`] if the user agent or API key cannot be sent as a header value.
pub fn build_headers(config: &ClientConfig) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        header_value(constants::HEADER_USER_AGENT, &config.user_agent)?,
    );
    headers.insert(ACCEPT, HeaderValue::from_static(constants::CONTENT_TYPE_JSON));

    if let Some(api_key) = config.api_key.as_deref() {
        let mut value = header_value(
            constants::HEADER_AUTHORIZATION,
            &format!("{} {api_key}", constants::HEADER_BEARER),
        )
        .map_err(|_| {
            Error::Config(format!(
                "{} contains characters that cannot be sent in an HTTP header",
                constants::ENV_API_KEY
            ))
        })?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, Error> {
    HeaderValue::from_str(value)
        .map_err(|e| Error::Config(format!("Invalid value for header '{name}': {e}")))
}
