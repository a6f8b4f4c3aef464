mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use common::HOST;
use edge_shortener::routes::router;
use edge_shortener::utils::code_generator::CODE_LENGTH;
use tower::ServiceExt;

#[tokio::test]
async fn test_shorten_success() {
    let (state, _rx, _store) = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let response = server
        .post("/shorten")
        .add_header("Host", HOST)
        .form(&[("url", "https://example.com/some/long/path")])
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let code = json["code"].as_str().unwrap();
    assert_eq!(code.len(), CODE_LENGTH);
    assert_eq!(json["originalUrl"], "https://example.com/some/long/path");
    assert_eq!(json["shortUrl"], format!("http://{HOST}/{code}"));
    assert_eq!(json["statsUrl"], format!("http://{HOST}/stats/{code}"));

    let link = state.link_service.get_link_by_code(code).await.unwrap();
    assert_eq!(link.url, "https://example.com/some/long/path");
}

#[tokio::test]
async fn test_shorten_adds_to_index() {
    let (state, _rx, _store) = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let response = server
        .post("/shorten")
        .add_header("Host", HOST)
        .form(&[("url", "https://example.com")])
        .await;
    let code = response.json::<serde_json::Value>()["code"]
        .as_str()
        .unwrap()
        .to_string();

    assert_eq!(state.link_service.list_codes(100).await.unwrap(), vec![code]);
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let (state, _rx, store) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/shorten")
        .add_header("Host", HOST)
        .form(&[("url", "   ")])
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "URL is required");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_shorten_missing_field() {
    let (state, _rx, store) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/shorten")
        .add_header("Host", HOST)
        .form(&[("other", "value")])
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "URL is required"
    );
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let (state, _rx, store) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/shorten")
        .add_header("Host", HOST)
        .form(&[("url", "not a url")])
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Invalid URL");
    assert_eq!(json["code"], "validation_error");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_shorten_keeps_url_as_submitted() {
    let (state, _rx, _store) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/shorten")
        .add_header("Host", HOST)
        .form(&[("url", "HTTPS://Example.com")])
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["originalUrl"],
        "HTTPS://Example.com"
    );
}

#[tokio::test]
async fn test_shorten_uses_uri_authority_without_host_header() {
    let (state, _rx, _store) = common::create_test_state();

    let request = Request::post(format!("https://{HOST}/shorten"))
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("url=https%3A%2F%2Fexample.com"))
        .unwrap();
    assert!(request.headers().get(header::HOST).is_none());

    let response = router(state.clone()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let code = json["code"].as_str().unwrap();
    assert_eq!(json["shortUrl"], format!("https://{HOST}/{code}"));
    assert_eq!(json["statsUrl"], format!("https://{HOST}/stats/{code}"));

    assert!(state.link_service.get_link_by_code(code).await.is_ok());
}
