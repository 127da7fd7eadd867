//! Typed access to the DevForum REST API.
//!
//! Every call funnels through [`ForumClient::request_value`], which builds the
//! headers, attaches the bearer token, and normalizes the response. Failures are
//! logged where they are detected and handed back unchanged; nothing here
//! retries.

mod auth;
mod categories;
mod error;
mod files;
mod posts;
mod request;
mod streams;
mod threads;
mod users;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod pipeline_test;

use std::{rc::Rc, time::Duration};

use reqwest::{
    Client, Method,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use shared::config::{ClientConfig, client::DEFAULT_MAX_UPLOAD_SIZE};
use tracing::{debug, error};

use crate::{storage::KeyValueStorage, token::TokenStore};

pub use error::ApiError;
pub use files::FileUpload;
pub use request::{RequestBody, RequestOptions};

/// API client for the DevForum backend.
///
/// Cloning is cheap: clones share the HTTP connection pool and token store.
#[derive(Clone, Debug)]
pub struct ForumClient {
    base_url: String,
    client: Client,
    tokens: TokenStore,
    default_timeout: Option<Duration>,
    max_upload_size: u64,
}

impl ForumClient {
    /// Create a client for `base_url` reading its bearer token from `tokens`.
    pub fn new(base_url: &str, tokens: TokenStore) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            tokens,
            default_timeout: None,
            max_upload_size: DEFAULT_MAX_UPLOAD_SIZE,
        }
    }

    /// Build a client from resolved configuration and an injected storage backend.
    pub fn from_config(config: &ClientConfig, storage: Rc<dyn KeyValueStorage>) -> Self {
        let tokens = TokenStore::new(storage, config.token_key.clone());
        Self::new(&config.api_url, tokens)
            .with_default_timeout(config.request_timeout())
            .with_max_upload_size(config.max_upload_size)
    }

    /// Timeout applied to requests that do not carry their own.
    #[must_use]
    pub fn with_default_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.default_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_max_upload_size(mut self, limit: u64) -> Self {
        self.max_upload_size = limit;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Issue one request and return its JSON payload.
    ///
    /// An empty or unparsable success body yields `{}`.
    ///
    /// # Errors
    /// Returns [`ApiError::Transport`] when the call never completes and
    /// [`ApiError::Status`] for non-success responses.
    pub async fn request_value(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Value, ApiError> {
        let method = options.method.clone();
        let result = self.dispatch(endpoint, options).await;
        if let Err(err) = &result {
            error!(%method, endpoint, error = %err, "API request failed");
        }
        result
    }

    /// Issue one request and decode its payload into `T`.
    ///
    /// # Errors
    /// Everything [`ForumClient::request_value`] returns, plus
    /// [`ApiError::Decode`] when the payload does not match `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let value = self.request_value(endpoint, options).await?;
        serde_json::from_value(value).map_err(|err| {
            error!(endpoint, error = %err, "API response did not match the expected shape");
            ApiError::Decode(err)
        })
    }

    /// Issue one request whose payload, if any, is irrelevant.
    pub(crate) async fn request_unit(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<(), ApiError> {
        self.request_value(endpoint, options).await.map(|_| ())
    }

    async fn dispatch(&self, endpoint: &str, options: RequestOptions) -> Result<Value, ApiError> {
        let RequestOptions {
            method,
            headers,
            body,
            with_auth,
            timeout,
        } = options;

        let body = if method == Method::GET { None } else { body };
        let multipart = matches!(body, Some(RequestBody::Multipart(_)));
        let headers = self.build_headers(headers, with_auth, multipart)?;
        let url = self.api_url(endpoint);
        debug!(%method, %url, with_auth, "dispatching API request");

        let mut builder = self.client.request(method, url).headers(headers);
        match body {
            Some(RequestBody::Json(value)) => {
                builder = builder.body(serde_json::to_vec(&value).map_err(ApiError::Encode)?);
            }
            Some(RequestBody::Multipart(form)) => builder = builder.multipart(form),
            None => {}
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(timeout) = timeout.or(self.default_timeout) {
                builder = builder.timeout(timeout);
            }
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        let response = builder.send().await?;
        let status = response.status();
        let payload = response.bytes().await;

        if !status.is_success() {
            return Err(ApiError::from_status(status, &payload.unwrap_or_default()));
        }
        Ok(parse_payload(&payload?))
    }

    fn build_headers(
        &self,
        caller: Option<HeaderMap>,
        with_auth: bool,
        multipart: bool,
    ) -> Result<HeaderMap, ApiError> {
        let suppress_content_type = multipart || caller.as_ref().is_some_and(HeaderMap::is_empty);

        let mut headers = HeaderMap::new();
        if !suppress_content_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        if let Some(caller) = caller {
            headers.extend(caller);
        }

        if with_auth && let Some(token) = self.tokens.get() {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ApiError::InvalidToken)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }
}

fn parse_payload(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap_or_else(|_| Value::Object(Map::new()))
}

/// Serialize a request record, logging on failure like every other pipeline error.
pub(crate) fn encode_body<T: Serialize>(endpoint: &str, payload: &T) -> Result<Value, ApiError> {
    serde_json::to_value(payload).map_err(|err| {
        error!(endpoint, error = %err, "failed to encode request body");
        ApiError::Encode(err)
    })
}
