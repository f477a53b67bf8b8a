//! This module provides a client to connect to the BRB REST API
//!
//! [`HttpClient::request`] is the single place where URLs are built, headers are merged, and responses are checked.
//! The verb helpers ([`get`](HttpClient::get), [`post`](HttpClient::post), [`put`](HttpClient::put), [`delete`](HttpClient::delete))
//! and the typed resource clients (see [`resource`](crate::resource)) are thin layers over it.

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::form_urlencoded;

use crate::config::Settings;
use crate::error::ApiError;
use crate::resource::{Events, ResourceClient, Signs, Tasks, Todos};
use crate::traits::Transport;
use crate::transport::{HttpRequest, ReqwestTransport};

static JSON_CONTENT_TYPE: &str = "application/json";

/// How a single request should be made
#[derive(Clone, Debug)]
pub struct RequestOptions {
    method: Method,
    body: Option<String>,
    params: Vec<(String, Option<String>)>,
    headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            body: None,
            params: Vec::new(),
            headers: Vec::new(),
        }
    }

    /// Attach a JSON body
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let text = serde_json::to_string(body)
            .map_err(|err| ApiError::Decode(format!("unable to serialize request body: {}", err)))?;
        self.body = Some(text);
        Ok(self)
    }

    /// Add a query parameter
    pub fn param<K: ToString, V: ToString>(self, key: K, value: V) -> Self {
        self.optional_param(key, Some(value))
    }

    /// Add a query parameter that will be left out of the URL when `value` is `None`
    pub fn optional_param<K: ToString, V: ToString>(mut self, key: K, value: Option<V>) -> Self {
        self.params.push((key.to_string(), value.map(|v| v.to_string())));
        self
    }

    /// Add a header. Headers set here win over the client defaults
    pub fn header<K: ToString, V: ToString>(mut self, name: K, value: V) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn method(&self) -> &Method { &self.method }
}


/// A client of the REST API.
///
/// It owns the [`Settings`] that tell where the API is, and a [`Transport`] that performs the exchanges.
#[derive(Clone)]
pub struct HttpClient {
    settings: Settings,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("settings", &self.settings)
            .finish()
    }
}

impl HttpClient {
    /// Create a client that talks to a real server. This does not start a connection
    pub fn new(settings: Settings) -> Self {
        Self::with_transport(settings, Arc::new(ReqwestTransport::new()))
    }

    /// Create a client that sends its requests through a custom [`Transport`]
    pub fn with_transport(settings: Settings, transport: Arc<dyn Transport>) -> Self {
        Self { settings, transport }
    }

    pub fn settings(&self) -> &Settings { &self.settings }

    /// The absolute URL for an endpoint, with a query string appended when at least one parameter has a value
    pub fn build_url(&self, endpoint: &str, params: &[(String, Option<String>)]) -> String {
        let mut url = self.settings.endpoint_url(endpoint);

        let present: Vec<(&str, &str)> = params.iter()
            .filter_map(|(key, value)| value.as_deref().map(|v| (key.as_str(), v)))
            .collect();
        if present.is_empty() == false {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(present)
                .finish();
            url.push('?');
            url.push_str(&query);
        }
        url
    }

    /// Issue a request, and parse its JSON response as a `T`.
    ///
    /// Returns `Ok(None)` for a `204 No Content` (the body is not looked at), and `Err` for transport failures,
    /// non-2xx statuses and bodies that are not a valid `T`. Every failure is logged before being returned.
    pub async fn request<T: DeserializeOwned>(&self, endpoint: &str, options: RequestOptions) -> Result<Option<T>, ApiError> {
        let result = self.request_inner(endpoint, options).await;
        if let Err(err) = &result {
            log::error!("API request failed: {}", err);
        }
        result
    }

    async fn request_inner<T: DeserializeOwned>(&self, endpoint: &str, options: RequestOptions) -> Result<Option<T>, ApiError> {
        let RequestOptions { method, body, params, headers } = options;

        let request = HttpRequest {
            url: self.build_url(endpoint, &params),
            headers: merge_headers(headers),
            method,
            body,
        };
        log::debug!("{} {}", request.method, request.url);

        let response = self.transport.send(request).await?;
        log::debug!("  -> {}", response.status);

        if response.is_success() == false {
            return Err(ApiError::Status(response.status));
        }

        if response.status == 204 {
            return Ok(None);
        }

        let data = serde_json::from_str(&response.body)?;
        Ok(Some(data))
    }

    /// `GET` an endpoint, with optional query parameters
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str, params: &[(&str, Option<&str>)]) -> Result<Option<T>, ApiError> {
        let mut options = RequestOptions::new(Method::GET);
        for (key, value) in params {
            options = options.optional_param(key, value.as_ref());
        }
        self.request(endpoint, options).await
    }

    /// `POST` to an endpoint, with an optional JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(&self, endpoint: &str, body: Option<&B>) -> Result<Option<T>, ApiError> {
        let options = with_body(RequestOptions::new(Method::POST), body)?;
        self.request(endpoint, options).await
    }

    /// `PUT` to an endpoint, with an optional JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(&self, endpoint: &str, body: Option<&B>) -> Result<Option<T>, ApiError> {
        let options = with_body(RequestOptions::new(Method::PUT), body)?;
        self.request(endpoint, options).await
    }

    /// `DELETE` an endpoint
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Option<T>, ApiError> {
        self.request(endpoint, RequestOptions::new(Method::DELETE)).await
    }

    pub fn events(&self) -> ResourceClient<'_, Events> { ResourceClient::new(self) }
    pub fn tasks(&self)  -> ResourceClient<'_, Tasks>  { ResourceClient::new(self) }
    pub fn todos(&self)  -> ResourceClient<'_, Todos>  { ResourceClient::new(self) }
    pub fn signs(&self)  -> ResourceClient<'_, Signs>  { ResourceClient::new(self) }
}

fn with_body<B: Serialize + ?Sized>(options: RequestOptions, body: Option<&B>) -> Result<RequestOptions, ApiError> {
    match body {
        None => Ok(options),
        Some(body) => options.json(body),
    }
}

/// The default JSON content type, overridden by any caller header with the same name
fn merge_headers(custom: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut headers = vec![(CONTENT_TYPE.as_str().to_string(), JSON_CONTENT_TYPE.to_string())];
    for (name, value) in custom {
        match headers.iter_mut().find(|(existing, _)| existing.eq_ignore_ascii_case(&name)) {
            Some(header) => *header = (name, value),
            None => headers.push((name, value)),
        }
    }
    headers
}
