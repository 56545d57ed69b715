use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use super::{Error, NodeRpc};
use crate::utils::{base_url, method_url};

pub const DEFAULT_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the node's API lives and how to reach it
#[derive(Clone)]
pub struct ClientConfig {
    pub url: Url,
    pub password: Option<String>,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            password: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_password(mut self, password: Option<String>) -> Self {
        self.password = password;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &self.url.as_str())
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// HTTP client for the Eclair API.
///
/// Every method is a `POST` to `<url>/<method>`, authenticated with basic auth
/// using an empty user name and the API password.
#[derive(Clone)]
pub struct EclairClient {
    client: Client,
    url: Url,
    password: Option<String>,
}

impl EclairClient {
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let url = base_url(config.url)?;
        let client = Client::builder().timeout(config.timeout).build()?;

        debug!("Eclair client for {}", url);

        Ok(Self {
            client,
            url,
            password: config.password,
        })
    }
}

#[async_trait]
impl NodeRpc for EclairClient {
    async fn call(&self, method: &str) -> Result<Vec<u8>, Error> {
        let url = method_url(&self.url, method);

        let mut request = self.client.post(url);
        if let Some(password) = &self.password {
            request = request.basic_auth("", Some(password));
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("{} returned {}", method, status);
            // Keep the status even when the error body can't be read
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status {
                method: method.to_string(),
                status,
                body,
            });
        }

        let body = response.bytes().await?;

        debug!("{} returned {} bytes", method, body.len());

        Ok(body.to_vec())
    }
}
