//! Support for library configuration options

use std::error::Error;
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use url::Url;

/// The origin of the server that hosts the API, used when no other value is given.
/// Feel free to override it when initing this library.
pub static DEFAULT_SERVER_URL: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("http://localhost:5050".to_string())));

/// Path prefix every endpoint is mounted under
pub const DEFAULT_BASE_PATH: &str = "/api";

/// Environment variable that overrides the server origin
pub const SERVER_URL_ENV: &str = "BRB_SERVER_URL";
/// Environment variable that overrides the API base path
pub const BASE_PATH_ENV: &str = "BRB_API_BASE";

/// Where the API lives
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    server_url: Url,
    base_path: String,
}

impl Settings {
    /// Create settings for a server origin (e.g. `http://localhost:5050`), using the default base path
    pub fn new<S: AsRef<str>>(server_url: S) -> Result<Self, Box<dyn Error>> {
        Self::with_base_path(server_url, DEFAULT_BASE_PATH)
    }

    pub fn with_base_path<S: AsRef<str>, T: ToString>(server_url: S, base_path: T) -> Result<Self, Box<dyn Error>> {
        let server_url = Url::parse(server_url.as_ref())?;
        if server_url.cannot_be_a_base() {
            return Err(format!("{} cannot be used as a server URL", server_url).into());
        }

        Ok(Self {
            server_url,
            base_path: normalize_base_path(&base_path.to_string()),
        })
    }

    /// Build settings from `BRB_SERVER_URL` and `BRB_API_BASE`, falling back to the defaults
    pub fn from_env() -> Result<Self, Box<dyn Error>> {
        let server_url = match std::env::var(SERVER_URL_ENV) {
            Ok(url) => url,
            Err(_) => default_server_url(),
        };
        let base_path = std::env::var(BASE_PATH_ENV).unwrap_or_else(|_| DEFAULT_BASE_PATH.to_string());
        log::debug!("Using server {} with API base {}", server_url, base_path);

        Self::with_base_path(server_url, base_path)
    }

    pub fn server_url(&self) -> &Url { &self.server_url }
    pub fn base_path(&self) -> &str  { &self.base_path }

    /// The absolute URL of an endpoint, without any query string
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        let origin = self.server_url.as_str().trim_end_matches('/');
        format!("{}{}{}", origin, self.base_path, endpoint)
    }
}

impl Default for Settings {
    fn default() -> Self {
        let server_url = Url::parse(&default_server_url())
            .unwrap_or_else(|_| Url::parse("http://localhost:5050").unwrap(/* this is a valid URL */));

        Self {
            server_url,
            base_path: DEFAULT_BASE_PATH.to_string(),
        }
    }
}

fn default_server_url() -> String {
    match DEFAULT_SERVER_URL.lock() {
        Ok(url) => url.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// `api`, `/api/` and `/api` all become `/api`. An empty path stays empty.
fn normalize_base_path(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
