pub mod batch;
pub mod crawler;
pub mod web;

pub use batch::fetch_content;
pub use crawler::PageFetcher;
pub use web::{WebFetcher, scrape_url};
