use crate::config::FetchConfig;
use crate::crawlers::crawler::PageFetcher;
use crate::error::{ConfigError, FetchError};
use crate::parsers;
use crate::results::ExtractedPage;
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use url::Url;

/// Fetches pages over HTTP with a browser User-Agent and a fixed timeout
#[derive(Debug, Clone)]
pub struct WebFetcher {
    client: Client,
}

impl WebFetcher {
    /// Build a fetcher from configuration
    pub fn new(config: &FetchConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for WebFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }
}

/// Fetches a URL and extracts its title, main content and links
pub async fn scrape_url(
    fetcher: &dyn PageFetcher,
    url: &str,
) -> Result<ExtractedPage, FetchError> {
    ::log::info!("Starting to scrape URL: {}", url);
    let start = Instant::now();

    let result = fetch_and_extract(fetcher, url).await;

    match &result {
        Ok(page) => {
            ::log::info!(
                "Successfully scraped URL: {} (took {:.2}s)",
                url,
                start.elapsed().as_secs_f64()
            );
            ::log::debug!("Page has {} links", page.links.len());
        }
        Err(e) => ::log::error!("Error scraping {}: {}", url, e),
    }

    result
}

async fn fetch_and_extract(
    fetcher: &dyn PageFetcher,
    url: &str,
) -> Result<ExtractedPage, FetchError> {
    let parsed = Url::parse(url.trim()).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    let html = fetcher.fetch(&parsed).await?;

    Ok(parsers::extract(&html, &parsed))
}
