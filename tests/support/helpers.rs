// tests/support/helpers.rs
use axum::body::{self, Body};
use axum::http::{Request, header::CONTENT_TYPE};
use axum::response::Response;
use news_core::application::services::ApplicationServices;
use news_core::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use news_core::presentation::http::{routes::build_router, state::HttpState, views::PageRenderer};
use once_cell::sync::Lazy;
use std::sync::Arc;

static RENDERER: Lazy<Arc<PageRenderer>> =
    Lazy::new(|| Arc::new(PageRenderer::new().expect("index template must compile")));

pub fn build_test_state(
    read: Arc<dyn ArticleReadRepository>,
    write: Arc<dyn ArticleWriteRepository>,
) -> HttpState {
    let services = Arc::new(ApplicationServices::new(write, read));
    HttpState {
        services,
        renderer: Arc::clone(&RENDERER),
    }
}

pub fn make_test_router(
    read: Arc<dyn ArticleReadRepository>,
    write: Arc<dyn ArticleWriteRepository>,
) -> axum::Router {
    build_router(build_test_state(read, write))
}

pub fn get_index() -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap()
}

/// `application/x-www-form-urlencoded` の POST リクエストを組み立てる
pub fn post_form(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_string(resp: Response) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub fn content_type(resp: &Response) -> String {
    resp.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}
