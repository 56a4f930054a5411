//! Integration tests for the Civic UI Web API.
//!
//! These tests require the `web` feature to be enabled:
//! ```bash
//! cargo test --features web web_api
//! ```

#![cfg(feature = "web")]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use civic_ui::config::Config;
use civic_ui::style::generate;
use civic_ui::theme::{ManualAmbient, MemoryStore};
use civic_ui::web::{create_router, AppState};

/// Router over an in-memory preference store and a light OS preference.
fn test_app() -> (Router, Arc<ManualAmbient>) {
    let ambient = Arc::new(ManualAmbient::new(Some(false)));
    let state = AppState::new(Config::default(), MemoryStore::new(), ambient.clone());
    (create_router(state), ambient)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");
    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes()
        .to_vec();
    (status, body)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).expect("Failed to parse JSON"))
}

async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    payload: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match payload {
        Some(payload) => {
            builder = builder.header("content-type", "application/json");
            Body::from(payload.to_string())
        }
        None => Body::empty(),
    };
    let (status, body) = send(app, builder.body(body).unwrap()).await;
    (status, serde_json::from_slice(&body).expect("Failed to parse JSON"))
}

#[tokio::test]
async fn test_health_check() {
    let (app, _ambient) = test_app();
    let (status, json) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_theme_starts_from_os_preference() {
    let (app, _ambient) = test_app();
    let (status, json) = get_json(&app, "/api/theme").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["mode"], "light");
    assert_eq!(json["isDarkMode"], false);
    assert_eq!(json["explicit"], false);
    assert!(json.get("saved").is_none());
}

#[tokio::test]
async fn test_toggle_and_set_theme() {
    let (app, _ambient) = test_app();

    let (status, json) = send_json(&app, "POST", "/api/theme/toggle", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["mode"], "dark");
    assert_eq!(json["saved"], "dark");

    let (status, json) =
        send_json(&app, "PUT", "/api/theme", Some(json!({ "mode": "light" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["isDarkMode"], false);
    assert_eq!(json["saved"], "light");
    assert_eq!(json["explicit"], true);
}

#[tokio::test]
async fn test_set_theme_rejects_unknown_mode() {
    let (app, _ambient) = test_app();
    let (status, json) =
        send_json(&app, "PUT", "/api/theme", Some(json!({ "mode": "sepia" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("sepia"));
}

#[tokio::test]
async fn test_reset_follows_os_again() {
    let (app, ambient) = test_app();
    send_json(&app, "PUT", "/api/theme", Some(json!({ "mode": "light" }))).await;

    ambient.set(Some(true));
    let (_, json) = get_json(&app, "/api/theme").await;
    assert_eq!(json["mode"], "light");

    let (status, json) = send_json(&app, "DELETE", "/api/theme", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["mode"], "dark");
    assert_eq!(json["explicit"], false);

    ambient.set(Some(false));
    let (_, json) = get_json(&app, "/api/theme").await;
    assert_eq!(json["mode"], "light");
}

#[tokio::test]
async fn test_styles_for_mode() {
    let (app, _ambient) = test_app();

    let (status, json) = get_json(&app, "/api/styles/dark").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::to_value(generate(true)).unwrap());

    let (status, json) = get_json(&app, "/api/styles/dim").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_current_styles_follow_toggle() {
    let (app, _ambient) = test_app();
    send_json(&app, "POST", "/api/theme/toggle", None).await;

    let (status, json) = get_json(&app, "/api/styles").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["isDarkMode"], true);
    assert_eq!(json["uiConfig"]["colors"]["card"], generate(true).colors.card);
}

#[tokio::test]
async fn test_button_classes() {
    let (app, _ambient) = test_app();
    let style = generate(true);

    let (status, json) = get_json(
        &app,
        "/api/classes/button?variant=destructive&size=small&mode=dark&extra=w-full",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let classes = json["classes"].as_str().unwrap();
    assert!(classes.starts_with(style.components.button.small));
    assert!(classes.contains(style.colors.button.destructive));
    assert!(classes.ends_with("w-full"));

    let (status, json) = get_json(&app, "/api/classes/button?variant=shiny").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("button variant"));
}

#[tokio::test]
async fn test_card_text_and_input_classes() {
    let (app, _ambient) = test_app();
    let style = generate(false);

    let (_, json) = get_json(&app, "/api/classes/card?variant=bordered").await;
    assert!(json["classes"]
        .as_str()
        .unwrap()
        .contains(style.components.card.bordered));

    let (_, json) = get_json(&app, "/api/classes/text?tone=muted&size=sm").await;
    assert_eq!(
        json["classes"],
        format!("{} {}", style.colors.text.muted, style.font.sm)
    );

    let (_, json) = get_json(&app, "/api/classes/input?state=error").await;
    assert!(json["classes"]
        .as_str()
        .unwrap()
        .ends_with(style.components.input.error));

    let (status, _) = get_json(&app, "/api/classes/text?size=huge").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_navigation_items_by_role() {
    let (app, _ambient) = test_app();

    let (status, json) = get_json(&app, "/api/navigation").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["authenticated"], false);
    assert_eq!(json["items"], json!([]));

    let (_, json) = get_json(&app, "/api/navigation?role=MAINTENANCE_TEAM&lang=ml").await;
    let paths: Vec<&str> = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, ["/dashboard", "/complaints"]);
    assert_eq!(json["language"], "ml");
    assert_eq!(json["items"][0]["icon"], "bar-chart-3");

    let (status, _) = get_json(&app, "/api/navigation?role=MAYOR").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_status_color() {
    let (app, _ambient) = test_app();

    let (_, json) = get_json(&app, "/api/status-color?value=RESOLVED").await;
    assert!(json["classes"].as_str().unwrap().contains("bg-green-100"));

    let (_, json) = get_json(&app, "/api/status-color?kind=priority&value=CRITICAL").await;
    assert!(json["classes"].as_str().unwrap().contains("bg-red-100"));

    let (_, json) = get_json(&app, "/api/status-color?kind=role&value=CITIZEN").await;
    assert_eq!(json["classes"], "bg-muted text-muted-foreground");

    let (status, _) = get_json(&app, "/api/status-color?kind=mood&value=x").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_page_renders_with_theme_class() {
    let (app, _ambient) = test_app();
    send_json(&app, "POST", "/api/theme/toggle", None).await;

    let request = Request::builder()
        .uri("/?role=WARD_OFFICER&path=/ward")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;
    let html = String::from_utf8(body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"class="dark""#));
    assert!(html.contains(r#"aria-current="page""#));
    assert!(html.contains(r#"data-role="showcase""#));
}
