//! Router tests: requests go through axum exactly as in production.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use linkboard::app::App;
use linkboard::http::router;
use linkboard::types::config::AppConfig;

fn setup() -> (App, TempDir) {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let config = AppConfig {
        database_path: tmp.path().join("links.db"),
        ..AppConfig::default()
    };
    (App::new(config).expect("Failed to init App"), tmp)
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn get_json(app: &App, uri: &str) -> Value {
    let response = router(app.clone())
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn location(response: &axum::response::Response) -> &str {
    response.headers()[header::LOCATION].to_str().unwrap()
}

#[tokio::test]
async fn test_index_returns_listing_json() {
    let (app, _tmp) = setup();
    let page = get_json(&app, "/?sort=newest&category=all").await;
    assert_eq!(page["current_sort"], "newest");
    assert_eq!(page["categories"].as_array().unwrap().len(), 5);
    assert!(page["links"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_add_then_list() {
    let (app, _tmp) = setup();
    let response = router(app.clone())
        .oneshot(post_form(
            "/add",
            "url=https%3A%2F%2Fexample.com&description=%3Cb%3EHi%3C%2Fb%3E&category_id=2&sort=az&category=2",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/?sort=az&category=2");

    let page = get_json(&app, "/?category=2").await;
    let links = page["links"].as_array().unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0]["url"], "https://example.com");
    assert_eq!(links[0]["description"], "Hi");
    assert_eq!(links[0]["category_name"], "Work");
}

#[tokio::test]
async fn test_add_invalid_url_redirects_with_error() {
    let (app, _tmp) = setup();
    let response = router(app.clone())
        .oneshot(post_form("/add", "url=ftp%3A%2F%2Fhost%2Fpath&description=x"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/?sort=oldest&category=all&error=disallowed_scheme");

    let page = get_json(&app, "/?error=disallowed_scheme").await;
    assert_eq!(page["error"]["code"], "disallowed_scheme");
    assert!(page["links"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_redirects_and_is_idempotent() {
    let (app, _tmp) = setup();
    let id = app.submit_link("https://example.com", "", "").unwrap();

    for _ in 0..2 {
        let response = router(app.clone())
            .oneshot(post_form(&format!("/delete/{}", id), "sort=newest&category=all"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/?sort=newest&category=all");
    }

    let page = get_json(&app, "/").await;
    assert!(page["links"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_without_form_body_still_deletes() {
    let (app, _tmp) = setup();
    let id = app.submit_link("https://example.com", "", "").unwrap();

    let response = router(app.clone())
        .oneshot(
            Request::post(format!("/delete/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/?sort=oldest&category=all");

    let page = get_json(&app, "/").await;
    assert!(page["links"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_with_non_integer_id_is_rejected() {
    let (app, _tmp) = setup();
    let response = router(app)
        .oneshot(post_form("/delete/abc", ""))
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_store_failure_is_internal_error() {
    let (app, tmp) = setup();
    std::fs::remove_file(tmp.path().join("links.db")).unwrap();

    let response = router(app)
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
