//! In-process tests for the page and health routes.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use tower::ServiceExt;

use portfolio_site::http::page::SystemStatus;
use portfolio_site::{HttpServer, SiteConfig};

fn router() -> Router {
    HttpServer::new(SiteConfig::default()).unwrap().router()
}

async fn get(uri: &str) -> Response {
    router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_initial_page() {
    let response = get("/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");
    assert!(response.headers().contains_key("x-request-id"));

    let page = body_text(response).await;
    assert!(page.contains("<html lang=\"en\">"));
    assert!(page.contains("Welcome to My Portfolio"));
    assert!(page.contains("Hello World"));
    assert!(page.contains("href=\"https://github.com/KoenigWolf\""));
}

#[tokio::test]
async fn test_language_toggle_via_query() {
    let page = body_text(get("/?lang=ja").await).await;
    assert!(page.contains("<html lang=\"ja\">"));
    assert!(page.contains("私の世界へようこそ"));
    assert!(page.contains("お問い合わせ"));
    assert!(page.contains(">English<"));

    let back = body_text(get("/?lang=en").await).await;
    assert!(back.contains("Welcome to My Portfolio"));
}

#[tokio::test]
async fn test_dark_mode_and_menu_via_query() {
    let page = body_text(get("/?dark=true&menu=true").await).await;
    assert!(page.contains("id=\"mobile-menu\""));
    assert!(page.contains("fa-solid fa-sun"));
}

#[tokio::test]
async fn test_form_submission_renders_page() {
    let response = get("/?name=Ann&email=a%40b.c&message=hi&lang=ja").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("私の世界へようこそ"));
}

#[tokio::test]
async fn test_repeated_query_keys_use_last_value() {
    let response = get("/?lang=en&lang=ja").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("私の世界へようこそ"));

    let response = get("/?menu=true&menu=false").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(!body_text(response).await.contains("id=\"mobile-menu\""));

    assert_eq!(get("/?name=a&name=b").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_project_routes_not_served() {
    for path in ["/web-development", "/cloud-solutions", "/security-analysis"] {
        let response = get(path).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{path}");
        assert_eq!(body_text(response).await, "Not Found");
    }
}

#[tokio::test]
async fn test_health() {
    let response = get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let status: SystemStatus = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(status.status, "operational");
    assert_eq!(status.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_request_id_preserved() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/")
                .header("x-request-id", "abc-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "abc-123");
}
