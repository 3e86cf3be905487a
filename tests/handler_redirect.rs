mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::json;
use shorturl::api::handlers::{redirect_handler, shorten_handler};
use sqlx::PgPool;

fn app(pool: PgPool) -> Router {
    Router::new()
        .route("/redirect", get(redirect_handler))
        .route("/shorten", post(shorten_handler))
        .with_state(common::create_test_state(pool))
}

#[sqlx::test]
async fn test_redirect_returns_original_url(pool: PgPool) {
    common::create_test_mapping(&pool, "a1b2c3", "https://example.com").await;
    let server = TestServer::new(app(pool)).unwrap();

    let response = server.get("/redirect").add_query_param("code", "a1b2c3").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["url"], "https://example.com");
}

#[sqlx::test]
async fn test_redirect_unknown_code(pool: PgPool) {
    let server = TestServer::new(app(pool)).unwrap();

    let response = server.get("/redirect").add_query_param("code", "zzzzzz").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "Short code not found");
}

#[sqlx::test]
async fn test_redirect_missing_code_parameter(pool: PgPool) {
    let server = TestServer::new(app(pool)).unwrap();

    let response = server.get("/redirect").await;

    response.assert_status_bad_request();
    assert_eq!(response.text(), "Missing code parameter");
}

#[sqlx::test]
async fn test_redirect_empty_code_parameter(pool: PgPool) {
    let server = TestServer::new(app(pool)).unwrap();

    let response = server.get("/redirect").add_query_param("code", "").await;

    response.assert_status_bad_request();
    assert_eq!(response.text(), "Missing code parameter");
}

#[sqlx::test]
async fn test_shorten_then_redirect_round_trip(pool: PgPool) {
    let server = TestServer::new(app(pool)).unwrap();

    let shorten = server
        .post("/shorten")
        .json(&json!({ "url": "https://round-trip.example.com/path?q=1" }))
        .await;
    shorten.assert_status_ok();

    let code = shorten.json::<serde_json::Value>()["shortUrl"]
        .as_str()
        .unwrap()
        .to_string();

    let redirect = server.get("/redirect").add_query_param("code", &code).await;
    redirect.assert_status_ok();

    let json = redirect.json::<serde_json::Value>();
    assert_eq!(json["url"], "https://round-trip.example.com/path?q=1");
}
