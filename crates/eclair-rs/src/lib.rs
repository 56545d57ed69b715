use async_trait::async_trait;

pub mod eclair;
pub mod error;
mod utils;

pub use eclair::{ClientConfig, EclairClient, DEFAULT_TIMEOUT, DEFAULT_URL};
pub use error::Error;
pub use url::Url;

/// Named procedure calls against a node's API
#[async_trait]
pub trait NodeRpc: Send + Sync {
    /// Call `method` without parameters and return the raw response body
    async fn call(&self, method: &str) -> Result<Vec<u8>, Error>;
}
