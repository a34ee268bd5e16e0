use clap::Parser;
use page_oracle::{AppState, ServiceConfig};
use std::io::Write;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; real environment variables still apply
    let _ = dotenvy::dotenv();

    init_logging();

    let args = Args::parse();

    let base = match &args.config {
        Some(path) => ServiceConfig::from_file(path)?,
        None => ServiceConfig::default(),
    };
    let config = args.apply(base);

    let state = match AppState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            ::log::error!("Refusing to start: {}", e);
            return Err(e.into());
        }
    };

    page_oracle::serve(&config, state).await?;

    Ok(())
}

/// `RUST_LOG` wins; otherwise log at info with a timestamped line format
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}
