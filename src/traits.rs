use async_trait::async_trait;

use crate::error::ApiError;
use crate::transport::{HttpRequest, HttpResponse};

/// Something that can carry an [`HttpRequest`] to the server and bring back its response.
///
/// [`ReqwestTransport`](crate::transport::ReqwestTransport) talks to a real server,
/// [`MockTransport`](crate::mock_transport::MockTransport) answers from a script.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request.
    /// Only failures to get a response at all are errors here: a 4xx or 5xx is a valid `HttpResponse`
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// An interactive yes/no prompt, asked before destructive operations
pub trait Confirm {
    /// Returns `true` if the user agreed
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}
