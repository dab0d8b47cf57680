use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use image::{ImageFormat, Rgb, RgbImage};
use moodmirror_rust::server::{handlers::AppState, router};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde_json::Value;
use std::io::Cursor;
use std::sync::Arc;
use tower::ServiceExt;

use super::mocks::{FixedCaptionProvider, RecordingImageAnalyzer};
use moodmirror_rust::analysis::{KeywordAnalyzer, StubImageAnalyzer};
use moodmirror_rust::caption::QuoteBook;

/// Boundary used by [`MultipartBuilder`]. Fixed so request bodies are
/// reproducible across test runs.
pub const TEST_BOUNDARY: &str = "moodmirror-test-boundary";

/// Build a router wired with the real stub analyzers and caption book.
pub fn test_router() -> Router {
    let state = AppState {
        text_analyzer: Arc::new(KeywordAnalyzer::new()),
        image_analyzer: Arc::new(StubImageAnalyzer::new()),
        captions: Arc::new(QuoteBook::new()),
    };
    router(state)
}

/// Build a router around an injected state, for tests that need mocks.
pub fn test_router_with_state(state: AppState) -> Router {
    router(state)
}

/// A state whose image analyzer records its calls, for asserting that
/// validation failures never reach analysis.
pub fn recording_state() -> (AppState, RecordingImageAnalyzer) {
    let analyzer = RecordingImageAnalyzer::new();
    let state = AppState {
        text_analyzer: Arc::new(KeywordAnalyzer::new()),
        image_analyzer: Arc::new(analyzer.clone()),
        captions: Arc::new(FixedCaptionProvider::new("fixed caption")),
    };
    (state, analyzer)
}

/// Encode a small but genuine PNG image in memory.
pub fn tiny_png() -> Vec<u8> {
    let img = RgbImage::from_pixel(4, 4, Rgb([120, 180, 40]));
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, ImageFormat::Png)
        .expect("Failed to encode test PNG");
    bytes.into_inner()
}

/// Encode a PNG whose size stays close to the raw pixel buffer. Seeded noise
/// pixels defeat PNG compression, so the result lands near `width * height
/// * 3` bytes.
pub fn noisy_png(width: u32, height: u32) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(4242);
    let mut raw = vec![0u8; (width as usize) * (height as usize) * 3];
    rng.fill_bytes(&mut raw);

    let img = RgbImage::from_raw(width, height, raw).expect("Buffer matches dimensions");
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, ImageFormat::Png)
        .expect("Failed to encode test PNG");
    bytes.into_inner()
}

/// Post a JSON body to the given path and return the response.
pub async fn post_json(app: Router, path: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");
    app.oneshot(request).await.expect("Request failed")
}

/// Read a response body to completion and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Response body was not valid JSON")
}

/// Assert the response carries the given status and return its JSON body.
pub async fn expect_status(response: Response<Body>, status: StatusCode) -> Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}

/// Incrementally build a `multipart/form-data` request body.
pub struct MultipartBuilder {
    body: Vec<u8>,
}

impl MultipartBuilder {
    pub fn new() -> Self {
        Self { body: Vec::new() }
    }

    /// Append a file part with the given field name, filename and content type.
    pub fn file(mut self, name: &str, filename: &str, content_type: &str, data: &[u8]) -> Self {
        self.body
            .extend_from_slice(format!("--{TEST_BOUNDARY}\r\n").as_bytes());
        self.body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n")
                .as_bytes(),
        );
        self.body
            .extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// Append a plain text part.
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body
            .extend_from_slice(format!("--{TEST_BOUNDARY}\r\n").as_bytes());
        self.body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        self.body.extend_from_slice(value.as_bytes());
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// Close the body and produce a request against the given path.
    pub fn into_request(mut self, path: &str) -> Request<Body> {
        self.body
            .extend_from_slice(format!("--{TEST_BOUNDARY}--\r\n").as_bytes());
        Request::builder()
            .method("POST")
            .uri(path)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={TEST_BOUNDARY}"),
            )
            .body(Body::from(self.body))
            .expect("Failed to build multipart request")
    }
}

impl Default for MultipartBuilder {
    fn default() -> Self {
        Self::new()
    }
}
