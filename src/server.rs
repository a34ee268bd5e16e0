use crate::answer;
use crate::config::ServiceConfig;
use crate::crawlers::{self, PageFetcher, WebFetcher};
use crate::error::{AppError, ConfigError};
use crate::llm::{GeminiClient, LanguageModel};
use crate::results::ContentMap;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::any::Any;
use std::sync::Arc;
use std::time::Instant;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

/// Shared, read-only handles used by every request
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn PageFetcher>,
    pub model: Arc<dyn LanguageModel>,
}

impl AppState {
    pub fn new(fetcher: Arc<dyn PageFetcher>, model: Arc<dyn LanguageModel>) -> Self {
        Self { fetcher, model }
    }

    /// Build the real HTTP fetcher and Gemini client
    ///
    /// Fails when no API key is configured.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let fetcher = WebFetcher::new(&config.fetch)?;
        let model = GeminiClient::new(&config.model)?;
        Ok(Self::new(Arc::new(fetcher), Arc::new(model)))
    }
}

#[derive(Debug, Deserialize)]
pub struct FetchRequest {
    #[serde(default)]
    pub urls: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct FetchResponse {
    pub content: ContentMap,
}

#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    #[serde(default)]
    pub content: ContentMap,
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub answer: String,
}

/// Builds the HTTP router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/fetch-content", post(fetch_content))
        .route("/ask-question", post(ask_question))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds to the configured address and serves until the process exits
pub async fn serve(config: &ServiceConfig, state: AppState) -> std::io::Result<()> {
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    ::log::info!("Starting server on {}", addr);

    axum::serve(listener, router(state)).await
}

async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "status": "success",
        "message": "Server is running",
        "timestamp": chrono::Local::now()
            .naive_local()
            .format("%Y-%m-%dT%H:%M:%S%.6f")
            .to_string(),
    }))
}

async fn fetch_content(
    State(state): State<AppState>,
    payload: Result<Json<FetchRequest>, JsonRejection>,
) -> Result<Json<FetchResponse>, AppError> {
    let start = Instant::now();
    ::log::info!("Received fetch-content request");

    let result = async {
        let Json(request) = payload.map_err(rejection_to_error)?;
        let content = crawlers::fetch_content(state.fetcher.as_ref(), &request.urls).await?;
        Ok::<_, AppError>(FetchResponse { content })
    }
    .await;

    log_outcome("fetch-content", start, &result);
    result.map(Json)
}

async fn ask_question(
    State(state): State<AppState>,
    payload: Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<Json<AnswerResponse>, AppError> {
    let start = Instant::now();
    ::log::info!("Received ask-question request");

    let result = async {
        let Json(request) = payload.map_err(rejection_to_error)?;
        let answer =
            answer::ask_question(state.model.as_ref(), &request.content, &request.question)
                .await?;
        Ok::<_, AppError>(AnswerResponse { answer })
    }
    .await;

    log_outcome("ask-question", start, &result);
    result.map(Json)
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    AppError::validation(rejection.body_text())
}

fn log_outcome<T>(route: &str, start: Instant, result: &Result<T, AppError>) {
    let secs = start.elapsed().as_secs_f64();
    match result {
        Ok(_) => ::log::info!("Completed {} request successfully in {:.2}s", route, secs),
        Err(e) => ::log::error!("Error in {} after {:.2}s: {}", route, secs, e),
    }
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown error".to_string()
    };

    ::log::error!("Request handler panicked: {}", message);
    AppError::Internal(message).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
