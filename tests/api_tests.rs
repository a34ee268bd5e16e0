use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use page_oracle::crawlers::PageFetcher;
use page_oracle::llm::LanguageModel;
use page_oracle::{AppState, FetchError, ModelError, router};
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;
use url::Url;

struct FakeFetcher {
    calls: AtomicUsize,
}

#[async_trait]
impl PageFetcher for FakeFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if url.host_str() == Some("bad.invalid") {
            return Err(FetchError::Http("connection refused".into()));
        }
        Ok(r#"<html><head><title>Example</title></head><body>
            <nav>Menu</nav>
            <main>Hello from the page.</main>
            <a href="/about">About</a>
        </body></html>"#
            .to_string())
    }
}

struct FakeModel {
    reply: &'static str,
    calls: AtomicUsize,
}

#[async_trait]
impl LanguageModel for FakeModel {
    async fn generate(&self, _prompt: &str) -> Result<String, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.to_string())
    }
}

struct Harness {
    fetcher: Arc<FakeFetcher>,
    model: Arc<FakeModel>,
}

impl Harness {
    fn new(reply: &'static str) -> Self {
        Self {
            fetcher: Arc::new(FakeFetcher {
                calls: AtomicUsize::new(0),
            }),
            model: Arc::new(FakeModel {
                reply,
                calls: AtomicUsize::new(0),
            }),
        }
    }

    fn state(&self) -> AppState {
        AppState::new(self.fetcher.clone(), self.model.clone())
    }

    async fn post(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(self.state(), request).await
    }
}

async fn send(state: AppState, request: Request<Body>) -> (StatusCode, Value) {
    let response = router(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_index_reports_running() {
    let harness = Harness::new("");
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, body) = send(harness.state(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Server is running");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_fetch_content_success() {
    let harness = Harness::new("");
    let (status, body) = harness
        .post(
            "/fetch-content",
            r#"{"urls": ["https://a.com/x", "   "]}"#,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "content": {
                "https://a.com/x": {
                    "title": "Example",
                    "content": "Hello from the page.",
                    "links": ["https://a.com/about"]
                }
            }
        })
    );
    assert_eq!(harness.fetcher.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_fetch_content_requires_urls() {
    let harness = Harness::new("");
    for payload in [r#"{"urls": []}"#, "{}"] {
        let (status, body) = harness.post("/fetch-content", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No URLs provided");
    }
}

#[tokio::test]
async fn test_fetch_content_fails_fast() {
    let harness = Harness::new("");
    let (status, body) = harness
        .post(
            "/fetch-content",
            r#"{"urls": ["http://bad.invalid", "https://a.com/x"]}"#,
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("Error scraping http://bad.invalid:"));
    assert!(body.get("content").is_none());
    assert_eq!(harness.fetcher.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let harness = Harness::new("");
    let (status, body) = harness.post("/fetch-content", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_ask_question_success() {
    let harness = Harness::new("1. Answer\n\nThe page says \"Hello\"\n- point");
    let payload = json!({
        "content": {
            "https://a.com/x": {"title": "Example", "content": "Hello from the page.", "links": []}
        },
        "question": "What does it say?"
    });
    let (status, body) = harness.post("/ask-question", &payload.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["answer"],
        "<h3>1. Answer</h3><br><br>The page says <b>\"Hello\"</b>\n• point"
    );
    assert_eq!(harness.model.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_ask_question_validation_never_calls_model() {
    let harness = Harness::new("unused");
    let cases = [
        (json!({"content": {}, "question": "why?"}), "No content provided"),
        (
            json!({"content": {"https://a.com/": {"title": "A", "content": "x"}}, "question": "  "}),
            "No question provided",
        ),
        (json!({"question": "why?"}), "No content provided"),
    ];

    for (payload, message) in cases {
        let (status, body) = harness.post("/ask-question", &payload.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], message);
    }
    assert_eq!(harness.model.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_ask_question_empty_model_reply() {
    let harness = Harness::new("  ");
    let payload = json!({
        "content": {"https://a.com/": {"title": "A", "content": "x"}},
        "question": "q"
    });
    let (status, body) = harness.post("/ask-question", &payload.to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "No response generated");
}
