use std::{fmt, time::Duration};

use reqwest::{Method, header::HeaderMap, multipart::Form};
use serde_json::Value;

/// Body attached to a non-GET request.
pub enum RequestBody {
    Json(Value),
    /// Multipart form; the transport supplies its own boundary `Content-Type`.
    Multipart(Form),
}

impl fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => f.debug_tuple("Json").field(value).finish(),
            Self::Multipart(_) => f.write_str("Multipart(..)"),
        }
    }
}

/// Per-call options for [`ForumClient::request`](super::ForumClient::request).
///
/// `headers` distinguishes "not given" from "given but empty": `None` keeps
/// the default `Content-Type: application/json`, while `Some` of an empty map
/// suppresses it.
#[derive(Debug)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Option<HeaderMap>,
    pub body: Option<RequestBody>,
    pub with_auth: bool,
    pub timeout: Option<Duration>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: None,
            body: None,
            with_auth: true,
            timeout: None,
        }
    }
}

impl RequestOptions {
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn post() -> Self {
        Self::with_method(Method::POST)
    }

    #[must_use]
    pub fn put() -> Self {
        Self::with_method(Method::PUT)
    }

    #[must_use]
    pub fn delete() -> Self {
        Self::with_method(Method::DELETE)
    }

    #[must_use]
    pub fn with_method(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    #[must_use]
    pub fn multipart(mut self, form: Form) -> Self {
        self.body = Some(RequestBody::Multipart(form));
        self
    }

    #[must_use]
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Skip the `Authorization` header even when a token is stored.
    #[must_use]
    pub fn anonymous(mut self) -> Self {
        self.with_auth = false;
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
