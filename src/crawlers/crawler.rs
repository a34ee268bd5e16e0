use crate::error::FetchError;
use async_trait::async_trait;
use url::Url;

/// Retrieves the raw HTML of a page
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch a single page with one attempt
    async fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}
