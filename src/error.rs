use thiserror::Error;

/// Failure while fetching a single page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request timed out")]
    Timeout,

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("HTTP status {0}")]
    Status(u16),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if let Some(status) = e.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Http(e.to_string())
        }
    }
}

/// Failure while talking to the language model
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("No response generated")]
    EmptyResponse,

    #[error("model request failed: {0}")]
    Request(String),

    #[error("model API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("could not decode model response: {0}")]
    Decode(String),
}

/// Errors surfaced to HTTP clients
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or empty required input
    #[error("{0}")]
    Validation(String),

    /// A page in a batch could not be fetched
    #[error("Error scraping {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    /// HTTP status code this error maps to
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::Validation(_) | AppError::Fetch { .. } => 400,
            AppError::Model(_) | AppError::Internal(_) => 500,
        }
    }
}

/// Startup configuration problems
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing GOOGLE_API_KEY environment variable")]
    MissingApiKey,

    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("could not build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::validation("No URLs provided").status_code(), 400);
        let fetch = AppError::Fetch {
            url: "https://a.com".into(),
            source: FetchError::Status(404),
        };
        assert_eq!(fetch.status_code(), 400);
        assert_eq!(AppError::from(ModelError::EmptyResponse).status_code(), 500);
        assert_eq!(AppError::Internal("x".into()).status_code(), 500);
    }

    #[test]
    fn test_messages() {
        let fetch = AppError::Fetch {
            url: "https://a.com".into(),
            source: FetchError::Status(404),
        };
        assert_eq!(fetch.to_string(), "Error scraping https://a.com: HTTP status 404");
        assert_eq!(
            AppError::from(ModelError::EmptyResponse).to_string(),
            "No response generated"
        );
    }
}
