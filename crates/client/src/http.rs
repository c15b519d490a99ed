// HTTP client core
//
// Builds the single configured reqwest client and applies the two
// cross-cutting functions every operation goes through: `authorize`
// decorates the outgoing request with the cached bearer token, and
// `unwrap_response` turns the HTTP response into a deserialized body or a
// logged-and-propagated error.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::error;

use docextract_session::SessionStore;

use crate::config::{ApiConfig, REQUEST_TIMEOUT};
use crate::error::{ApiError, Result};

pub struct ApiClient {
    pub(crate) config: ApiConfig,
    pub(crate) http: reqwest::Client,
    pub(crate) session: Arc<dyn SessionStore>,
}

impl ApiClient {
    /// Build a client against the given configuration.
    ///
    /// The session store is consulted on every request; a token stored after
    /// construction is picked up by the next call.
    pub fn new(config: ApiConfig, session: Arc<dyn SessionStore>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            config,
            http,
            session,
        })
    }

    /// Build a client from `DOCEXTRACT_BASE_URL`
    pub fn from_env(session: Arc<dyn SessionStore>) -> Result<Self> {
        Self::new(ApiConfig::from_env(), session)
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Request decorator: attach `Authorization: Bearer <token>` when a
    /// token is cached. Requests go out unmodified otherwise; the backend
    /// decides whether that is acceptable.
    pub(crate) fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        }
    }

    /// Decorate, send, and unwrap in one step. Every JSON operation in the
    /// resource modules funnels through here.
    pub(crate) async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.authorize(request).send().await.map_err(|err| {
            error!(error = %err, "request failed before a response arrived");
            err
        })?;
        unwrap_response(response).await
    }
}

/// Response unwrapper: success yields the deserialized body and nothing
/// else, failure is logged with its detail and propagated as-is.
pub(crate) async fn unwrap_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!(status = status.as_u16(), body = %body, "API request failed");
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }

    response.json().await.map_err(|err| {
        error!(error = %err, "failed to decode API response body");
        ApiError::Http(err)
    })
}
