//! HTTP renderer tests against a mock server

use coursemap::config::RendererConfig;
use coursemap::crawler::{HttpRenderer, Renderer};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config() -> RendererConfig {
    RendererConfig {
        request_timeout_secs: 5,
        connect_timeout_secs: 2,
        user_agent: "coursemap-test/1.0".to_string(),
    }
}

#[tokio::test]
async fn test_render_returns_page_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/courses/intro"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><body>course</body></html>"),
        )
        .mount(&server)
        .await;

    let renderer = HttpRenderer::new(&test_config()).unwrap();
    let url = format!("{}/courses/intro", server.uri());
    let page = renderer.render(&url).await.unwrap();

    assert_eq!(page.url, url);
    assert!(page.html.contains("course"));
}

#[tokio::test]
async fn test_render_none_on_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/courses/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let renderer = HttpRenderer::new(&test_config()).unwrap();
    let url = format!("{}/courses/gone", server.uri());
    assert!(renderer.render(&url).await.is_none());
}

#[tokio::test]
async fn test_render_none_on_connection_failure() {
    // Nothing listens here; the renderer reports absence, it never errors
    let renderer = HttpRenderer::new(&test_config()).unwrap();
    assert!(renderer.render("http://127.0.0.1:1/courses/x").await.is_none());
}
