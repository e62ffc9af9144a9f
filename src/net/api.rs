//! REST API client for the BrandCraft backend.
//!
//! Browser builds send requests through `gloo-net`; native builds get a
//! transport that reports [`ApiError::Unavailable`], and tests plug in fake
//! transports.
//!
//! ERROR HANDLING
//! ==============
//! A 401 is the backend's "session invalid" signal: the session is cleared,
//! the expiry hook fires, and the call resolves to `Ok(None)` rather than an
//! error. Every other failure is logged and returned to the caller. There
//! are no retries.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use crate::config::ApiConfig;
use crate::state::session::SessionStore;
use crate::state::storage::{BrowserStorage, Storage};
use crate::util::nav::{self, Route};

/// Message used when an error body carries no usable `detail`.
pub const GENERIC_API_ERROR: &str = "API Error";

const CONTENT_TYPE: &str = "Content-Type";
const AUTHORIZATION: &str = "Authorization";
const JSON_MIME: &str = "application/json";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Caller-controlled parts of a request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    /// Send without the session token; a 401 is then an ordinary failure
    /// and does not end the session.
    pub anonymous: bool,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn delete() -> Self {
        Self {
            method: Method::Delete,
            ..Self::default()
        }
    }

    /// `POST` with `body` encoded as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Parse`] if `body` cannot be serialized.
    pub fn post_json<B: Serialize>(body: &B) -> Result<Self, ApiError> {
        Self::with_json(Method::Post, body)
    }

    /// `PUT` with `body` encoded as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Parse`] if `body` cannot be serialized.
    pub fn put_json<B: Serialize>(body: &B) -> Result<Self, ApiError> {
        Self::with_json(Method::Put, body)
    }

    fn with_json<B: Serialize>(method: Method, body: &B) -> Result<Self, ApiError> {
        Ok(Self {
            method,
            body: Some(serde_json::to_string(body)?),
            ..Self::default()
        })
    }

    #[must_use]
    pub fn anonymous(mut self) -> Self {
        self.anonymous = true;
        self
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Fully resolved request handed to a [`Transport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response with the body already read as text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One network round trip.
pub trait Transport: Clone + 'static {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, ApiError>>;
}

/// `fetch`-backed transport via `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let transport_err = |e: gloo_net::Error| ApiError::Transport(e.to_string());
            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Patch => Request::patch(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let outgoing = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(transport_err)?;
            let response = outgoing.send().await.map_err(transport_err)?;
            let body = response.text().await.map_err(transport_err)?;
            Ok(HttpResponse {
                status: response.status(),
                status_text: response.status_text(),
                body,
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}

/// Classified response, before session side effects.
#[derive(Clone, Debug, PartialEq)]
pub enum Settled {
    Body(Value),
    Empty,
    SessionExpired,
}

/// Default JSON content type, then caller headers (a caller header with the
/// same name replaces the default), then the bearer token unless the caller
/// already set `Authorization`.
pub fn build_headers(token: Option<&str>, caller: &[(String, String)]) -> Vec<(String, String)> {
    let mut headers = vec![(CONTENT_TYPE.to_owned(), JSON_MIME.to_owned())];
    for (name, value) in caller {
        match headers.iter_mut().find(|(key, _)| key.eq_ignore_ascii_case(name)) {
            Some(existing) => existing.1.clone_from(value),
            None => headers.push((name.clone(), value.clone())),
        }
    }
    if let Some(token) = token {
        if headers.iter().any(|(key, _)| key.eq_ignore_ascii_case(AUTHORIZATION)) {
            leptos::logging::debug_warn!("keeping caller-supplied Authorization header");
        } else {
            headers.push((AUTHORIZATION.to_owned(), format!("Bearer {token}")));
        }
    }
    headers
}

/// Classify a response: 401 first, then empty body, then JSON parse, then
/// status. A successful `null` body counts as empty.
///
/// # Errors
///
/// - [`ApiError::Http`] for a failed status with an empty body.
/// - [`ApiError::Parse`] for a malformed body.
/// - [`ApiError::Api`] for a failed status with a JSON body.
pub fn settle(response: &HttpResponse) -> Result<Settled, ApiError> {
    if response.status == 401 {
        return Ok(Settled::SessionExpired);
    }
    settle_body(response)
}

/// [`settle`] without the 401 rule, for anonymous requests.
fn settle_body(response: &HttpResponse) -> Result<Settled, ApiError> {
    if response.body.is_empty() {
        if !response.is_success() {
            return Err(ApiError::Http {
                status: response.status,
                status_text: response.status_text.clone(),
            });
        }
        return Ok(Settled::Empty);
    }
    let data: Value = serde_json::from_str(&response.body)?;
    if !response.is_success() {
        return Err(ApiError::Api(error_detail(&data)));
    }
    if data.is_null() {
        return Ok(Settled::Empty);
    }
    Ok(Settled::Body(data))
}

/// Backend error message: `detail` as a string, or the `msg` fields of a
/// validation-error list, else [`GENERIC_API_ERROR`].
fn error_detail(data: &Value) -> String {
    match data.get("detail") {
        Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
        Some(Value::Array(items)) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                GENERIC_API_ERROR.to_owned()
            } else {
                messages.join("; ")
            }
        }
        _ => GENERIC_API_ERROR.to_owned(),
    }
}

type ExpiryHook = Arc<dyn Fn() + Send + Sync>;

/// Authenticated client bound to one base URL and one session.
#[derive(Clone)]
pub struct ApiClient<S, T> {
    config: ApiConfig,
    session: SessionStore<S>,
    transport: T,
    on_session_expired: Option<ExpiryHook>,
}

impl<S: Storage, T: Transport> ApiClient<S, T> {
    pub fn new(config: ApiConfig, session: SessionStore<S>, transport: T) -> Self {
        Self {
            config,
            session,
            transport,
            on_session_expired: None,
        }
    }

    /// Run `hook` after a 401 has cleared the session.
    #[must_use]
    pub fn on_session_expired(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_session_expired = Some(Arc::new(hook));
        self
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Resolve URL and headers for `endpoint` against the current session.
    pub fn request_for(&self, endpoint: &str, options: RequestOptions) -> HttpRequest {
        let token = if options.anonymous { None } else { self.session.token() };
        HttpRequest {
            method: options.method,
            url: self.config.url_for(endpoint),
            headers: build_headers(token.as_deref(), &options.headers),
            body: options.body,
        }
    }

    /// Issue one request and return the parsed body, `None` for an empty
    /// body or an expired session.
    ///
    /// # Errors
    ///
    /// Returns transport, HTTP, API, and parse failures after logging them.
    pub async fn call(&self, endpoint: &str, options: RequestOptions) -> Result<Option<Value>, ApiError> {
        let anonymous = options.anonymous;
        let request = self.request_for(endpoint, options);
        let result = self.dispatch(request, anonymous).await;
        if let Err(e) = &result {
            leptos::logging::error!("API Error: {e}");
        }
        result
    }

    /// [`ApiClient::call`] with the body decoded into `R`.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::call`], plus [`ApiError::Shape`] when the body
    /// does not match `R`.
    pub async fn call_json<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Option<R>, ApiError> {
        let Some(value) = self.call(endpoint, options).await? else {
            return Ok(None);
        };
        match serde_json::from_value(value) {
            Ok(decoded) => Ok(Some(decoded)),
            Err(e) => {
                let err = ApiError::Shape(e.to_string());
                leptos::logging::error!("API Error: {err}");
                Err(err)
            }
        }
    }

    async fn dispatch(&self, request: HttpRequest, anonymous: bool) -> Result<Option<Value>, ApiError> {
        let response = self.transport.send(request).await?;
        let settled = if anonymous { settle_body(&response)? } else { settle(&response)? };
        match settled {
            Settled::Body(value) => Ok(Some(value)),
            Settled::Empty => Ok(None),
            Settled::SessionExpired => {
                self.expire_session();
                Ok(None)
            }
        }
    }

    fn expire_session(&self) {
        leptos::logging::warn!("session rejected by server, signing out");
        if let Err(e) = self.session.clear() {
            leptos::logging::error!("failed to clear expired session: {e}");
        }
        if let Some(hook) = &self.on_session_expired {
            hook();
        }
    }
}

/// Client used by the application: `localStorage` session, `fetch`
/// transport, redirect to login on expiry.
pub type AppApi = ApiClient<BrowserStorage, GlooTransport>;

pub fn browser_client(session: SessionStore<BrowserStorage>) -> AppApi {
    ApiClient::new(ApiConfig::from_build_env(), session, GlooTransport)
        .on_session_expired(|| nav::redirect(Route::Login))
}
