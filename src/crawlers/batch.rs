use crate::crawlers::crawler::PageFetcher;
use crate::crawlers::web::scrape_url;
use crate::error::AppError;
use crate::results::ContentMap;

/// Scrapes every URL in order and collects the results
///
/// Blank entries are skipped. The first URL that fails aborts the whole
/// batch: no partial map is returned and later URLs are never fetched.
pub async fn fetch_content(
    fetcher: &dyn PageFetcher,
    urls: &[String],
) -> Result<ContentMap, AppError> {
    if urls.is_empty() {
        ::log::warn!("No URLs provided in request");
        return Err(AppError::validation("No URLs provided"));
    }

    ::log::info!("Processing {} URLs", urls.len());

    let mut content = ContentMap::new();
    for url in urls {
        if url.trim().is_empty() {
            continue;
        }

        let page = scrape_url(fetcher, url).await.map_err(|source| {
            ::log::error!("Failed to scrape URL: {}", url);
            AppError::Fetch {
                url: url.clone(),
                source,
            }
        })?;

        content.insert(url.clone(), page.into());
    }

    Ok(content)
}
