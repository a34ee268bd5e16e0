use clap::Parser;
use page_oracle::ServiceConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-oracle")]
#[command(about = "Fetches web pages and answers questions about them with a hosted LLM")]
#[command(version)]
pub struct Args {
    /// JSON config file; flags and environment override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to bind to
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Port to listen on (default 3000)
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Google Generative Language API key
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Gemini model name
    #[arg(long, env = "GEMINI_MODEL")]
    pub model: Option<String>,

    /// Per-page fetch timeout in seconds
    #[arg(long)]
    pub fetch_timeout: Option<u64>,
}

impl Args {
    /// Apply command-line and environment overrides on top of `config`
    pub fn apply(self, mut config: ServiceConfig) -> ServiceConfig {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(api_key) = self.api_key {
            config.model.api_key = api_key;
        }
        if let Some(model) = self.model {
            config.model.model = model;
        }
        if let Some(timeout) = self.fetch_timeout {
            config.fetch.timeout_secs = timeout;
        }
        config
    }
}
