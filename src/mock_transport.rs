//! This module provides a scripted [`Transport`], so that the client and the views can be exercised without a server

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;

use crate::error::ApiError;
use crate::traits::Transport;
use crate::transport::{HttpRequest, HttpResponse};

/// A canned answer
#[derive(Clone, Debug)]
pub enum MockReply {
    Respond(HttpResponse),
    /// Behave as if the network was unreachable
    Fail(String),
}

impl MockReply {
    pub fn json<T: Serialize>(status: u16, value: &T) -> Self {
        let body = serde_json::to_string(value).unwrap_or_default();
        Self::Respond(HttpResponse::new(status, body))
    }
    pub fn ok<T: Serialize>(value: &T) -> Self { Self::json(200, value) }
    pub fn created<T: Serialize>(value: &T) -> Self { Self::json(201, value) }
    pub fn no_content() -> Self { Self::Respond(HttpResponse::new(204, "")) }
    pub fn status(status: u16) -> Self { Self::Respond(HttpResponse::new(status, "")) }
    pub fn raw<S: ToString>(status: u16, body: S) -> Self { Self::Respond(HttpResponse::new(status, body)) }
    pub fn unreachable() -> Self { Self::Fail("connection refused".to_string()) }
}

/// Answers requests from a script, and records every request it receives.
///
/// Replies are registered per method and URL path (query strings are ignored when matching).
/// A route matches any request path ending with it; when several do, the exact or longest one is used.
/// When several replies are queued for the same route, they are consumed in order, and the last one keeps being served.
/// Unscripted routes answer `404`.
#[derive(Debug, Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<(Method, String), VecDeque<MockReply>>>,
    history: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for `method` on `path`.
    /// `path` is the endpoint as given to the client, e.g. `/todos/3`, or an absolute URL
    pub fn on<S: ToString>(&self, method: Method, path: S, reply: MockReply) -> &Self {
        let mut routes = lock(&self.routes);
        routes.entry((method, path.to_string()))
            .or_insert_with(VecDeque::new)
            .push_back(reply);
        self
    }

    /// Every request received so far
    pub fn requests(&self) -> Vec<HttpRequest> {
        lock(&self.history).clone()
    }

    /// How many requests were received so far
    pub fn request_count(&self) -> usize {
        lock(&self.history).len()
    }

    /// The most recent request, if any
    pub fn last_request(&self) -> Option<HttpRequest> {
        lock(&self.history).last().cloned()
    }

    fn next_reply(&self, request: &HttpRequest) -> MockReply {
        let mut routes = lock(&self.routes);
        let path = request.path();
        // An exact route wins, then the longest matching suffix
        let matching = routes.iter_mut()
            .filter(|((method, route), _)| *method == request.method && path.ends_with(route.as_str()))
            .max_by_key(|((_, route), _)| (path == route.as_str(), route.len()))
            .map(|(_, replies)| replies);

        match matching {
            None => {
                log::debug!("Mock transport: no reply scripted for {} {}", request.method, path);
                MockReply::status(404)
            },
            Some(replies) => {
                if replies.len() > 1 {
                    replies.pop_front().unwrap_or_else(|| MockReply::status(404))
                } else {
                    replies.front().cloned().unwrap_or_else(|| MockReply::status(404))
                }
            },
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let reply = self.next_reply(&request);
        log::debug!("Mock transport: {} {} -> {:?}", request.method, request.url, reply);
        lock(&self.history).push(request);

        match reply {
            MockReply::Respond(response) => Ok(response),
            MockReply::Fail(reason) => Err(ApiError::Transport(reason)),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}


#[cfg(test)]
mod test {
    use super::*;

    fn get(url: &str) -> HttpRequest {
        HttpRequest { method: Method::GET, url: url.to_string(), headers: Vec::new(), body: None }
    }

    #[tokio::test]
    async fn test_mock_transport() {
        let mock = MockTransport::new();
        mock.on(Method::GET, "/todos", MockReply::status(500))
            .on(Method::GET, "/todos", MockReply::raw(200, "[]"));

        let first = mock.send(get("http://h/api/todos")).await.unwrap();
        assert_eq!(first.status, 500);
        let second = mock.send(get("http://h/api/todos?x=1")).await.unwrap();
        assert_eq!(second.status, 200);
        let third = mock.send(get("http://h/api/todos")).await.unwrap();
        assert_eq!(third.status, 200);

        let unknown = mock.send(get("http://h/api/events")).await.unwrap();
        assert_eq!(unknown.status, 404);

        let posted = mock.send(HttpRequest { method: Method::POST, ..get("http://h/api/todos") }).await.unwrap();
        assert_eq!(posted.status, 404);

        assert_eq!(mock.request_count(), 5);
    }

    #[tokio::test]
    async fn test_most_specific_route() {
        let mock = MockTransport::new();
        mock.on(Method::GET, "/todos", MockReply::status(500))
            .on(Method::GET, "/api/todos", MockReply::raw(200, "[]"))
            .on(Method::GET, "http://h/api/todos", MockReply::status(204));

        for _ in 0..5 {
            let response = mock.send(get("http://h/api/todos")).await.unwrap();
            assert_eq!(response.status, 204);
            let response = mock.send(get("http://other/api/todos")).await.unwrap();
            assert_eq!(response.status, 200);
            let response = mock.send(get("http://other/v2/todos")).await.unwrap();
            assert_eq!(response.status, 500);
        }
    }

    #[tokio::test]
    async fn test_unreachable() {
        let mock = MockTransport::new();
        mock.on(Method::DELETE, "/signs/1", MockReply::unreachable());
        let result = mock.send(HttpRequest { method: Method::DELETE, ..get("http://h/api/signs/1") }).await;
        assert!(matches!(result, Err(ApiError::Transport(_))));
        assert_eq!(mock.request_count(), 1);
    }
}
