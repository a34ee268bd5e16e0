//! Page fetching and question answering backend for a browser research
//! assistant.
//!
//! `POST /fetch-content` scrapes a list of pages into a [`ContentMap`];
//! `POST /ask-question` sends that content and a question to a hosted
//! language model and returns a lightly formatted answer.

pub mod answer;
pub mod config;
pub mod crawlers;
pub mod error;
pub mod llm;
pub mod parsers;
pub mod results;
pub mod server;

// Re-export commonly used types for convenience
pub use config::ServiceConfig;
pub use error::{AppError, ConfigError, FetchError, ModelError};
pub use results::{ContentMap, ExtractedPage, PageRecord};
pub use server::{AppState, router, serve};
