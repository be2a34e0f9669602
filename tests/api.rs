//! HTTP-level tests for the preview host router.
//!
//! Each test builds a fresh state and drives the router in-process with
//! `tower::ServiceExt::oneshot`.

use std::{sync::Arc, time::Duration};

use axum::{
    body::{to_bytes, Body, BodyDataStream},
    http::{header, Method, Request, StatusCode},
    Router,
};
use futures::StreamExt;
use serde_json::{json, Value};
use tokio::{sync::mpsc, time::timeout};
use tower::ServiceExt;

use expedition_site::{
    booking::DEFAULT_BOOKING_URL,
    create_router,
    state::{AppState, HostSettings},
    tasks::auto_advance_task,
};

fn settings() -> HostSettings {
    HostSettings {
        host: "127.0.0.1".to_string(),
        port: 20553,
        hero_interval: Duration::from_millis(4000),
        lightbox_interval: Duration::from_millis(3000),
        booking_url: DEFAULT_BOOKING_URL.to_string(),
    }
}

fn build_app() -> (Router, Arc<AppState>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let state = Arc::new(AppState::new(settings(), tx).expect("state builds"));
    tokio::spawn(auto_advance_task(Arc::clone(&state), rx));
    (create_router(Arc::clone(&state)), state)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("valid request");

    let response = app.clone().oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::POST, uri, None).await
}

#[tokio::test]
async fn health_and_status() {
    let (app, _state) = build_app();

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    post(&app, "/hero/next").await;
    let (status, body) = get(&app, "/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["last_action"], "hero-next");
    assert_eq!(body["site"]["hero"]["index"], 1);
    assert_eq!(body["port"], 20553);
}

#[tokio::test]
async fn content_is_served() {
    let (app, _state) = build_app();

    let (status, body) = get(&app, "/content").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hero"].as_array().map(Vec::len), Some(5));
    assert_eq!(body["gallery"].as_array().map(Vec::len), Some(13));

    let (_, itinerary) = get(&app, "/content/itinerary").await;
    assert_eq!(itinerary.as_array().map(Vec::len), Some(11));
    assert_eq!(itinerary[10]["accommodation"], Value::Null);

    let (_, faq) = get(&app, "/content/faq").await;
    assert_eq!(faq[0]["question"], "Do I need professional photography experience?");

    let (_, nav) = get(&app, "/content/navigation").await;
    assert_eq!(nav[4]["id"], "pricing");

    let (status, pricing) = get(&app, "/content/pricing").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(pricing[0]["price"], 249_000);
    assert_eq!(pricing[0]["display_price"], "₹2,49,000");
    assert_eq!(pricing[0]["display_original_price"], "₹2,99,000");
    assert_eq!(pricing[0]["display_savings"], "₹50,000");
    assert_eq!(body["pricing"], pricing);

    let (status, highlights) = get(&app, "/content/highlights").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(highlights.as_array().map(Vec::len), Some(7));
    assert_eq!(highlights[3]["title"], "DC-3 Plane Wreck");
    assert_eq!(highlights[4]["best_time"], "Winter Only");

    let (status, testimonials) = get(&app, "/content/testimonials").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(testimonials.as_array().map(Vec::len), Some(3));
    assert_eq!(testimonials[1]["name"], "Rajesh Kumar");
    assert_eq!(testimonials[1]["rating"], 5);
}

#[tokio::test]
async fn hero_navigation_scenario() {
    let (app, _state) = build_app();

    for _ in 0..3 {
        post(&app, "/hero/next").await;
    }
    let (_, body) = get(&app, "/hero").await;
    assert_eq!(body["index"], 3);

    post(&app, "/hero/prev").await;
    let (_, body) = post(&app, "/hero/goto/4").await;
    assert_eq!(body["site"]["hero"]["index"], 4);

    let (_, body) = post(&app, "/hero/next").await;
    assert_eq!(body["site"]["hero"]["index"], 0);
    assert_eq!(body["site"]["hero"]["slide"]["title"], "Aurora Borealis");

    let (status, body) = post(&app, "/hero/goto/5").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], "error");

    let (status, _) = post(&app, "/hero/goto/-1").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, body) = get(&app, "/hero").await;
    assert_eq!(body["index"], 0);
}

#[tokio::test]
async fn hero_input_and_playback() {
    let (app, _state) = build_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/hero/input",
        Some(json!({ "type": "pointer_enter" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["site"]["hero"]["suspended"], true);

    let (_, body) = send(
        &app,
        Method::POST,
        "/hero/input",
        Some(json!({ "type": "select_dot", "index": 2 })),
    )
    .await;
    assert_eq!(body["site"]["hero"]["index"], 2);

    let (_, body) = post(&app, "/hero/pause").await;
    assert_eq!(body["site"]["hero"]["playing"], false);
    let (_, body) = post(&app, "/hero/play").await;
    assert_eq!(body["site"]["hero"]["playing"], true);
}

#[tokio::test]
async fn lightbox_lifecycle() {
    let (app, _state) = build_app();

    let (status, _) = post(&app, "/lightbox/next").await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = post(&app, "/lightbox/open/13").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = post(&app, "/lightbox/open/0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["site"]["lightbox"]["open"], true);
    assert_eq!(body["site"]["lightbox"]["position"], "1 of 13");

    let (_, body) = send(
        &app,
        Method::POST,
        "/lightbox/input",
        Some(json!({ "type": "key", "key": "ArrowLeft" })),
    )
    .await;
    assert_eq!(body["site"]["lightbox"]["position"], "13 of 13");

    let (_, body) = post(&app, "/lightbox/goto/6").await;
    assert_eq!(
        body["site"]["lightbox"]["current"]["slide"]["caption"],
        "Coastal Beauty"
    );

    let (_, body) = send(
        &app,
        Method::POST,
        "/lightbox/input",
        Some(json!({ "type": "key", "key": "Escape" })),
    )
    .await;
    assert_eq!(body["site"]["lightbox"]["open"], false);

    let (_, body) = get(&app, "/lightbox").await;
    assert_eq!(body["open"], false);
    assert_eq!(body["current"], Value::Null);
}

#[tokio::test]
async fn booking_builds_deep_link() {
    let (app, _state) = build_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/booking",
        Some(json!({
            "name": "Sneha Patel",
            "email": "sneha@example.com",
            "travelers": 3,
            "experience": "advanced",
            "interests": ["Drone Photography"],
            "special_requests": "Window seat"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let message = body["message"].as_str().expect("message");
    assert!(message.contains("for 3 traveler(s)"));
    assert!(message.contains("- Special Requests: Window seat"));

    let link = body["link"].as_str().expect("link");
    assert!(link.starts_with("https://wa.me/917373076000?text=Hi%21"));
    assert!(!link.contains(' '));

    let (status, body) = send(
        &app,
        Method::POST,
        "/booking",
        Some(json!({ "name": "Sneha", "travelers": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "at least one traveler is required");
}

#[tokio::test(start_paused = true)]
async fn hero_auto_advances_in_the_background() {
    let (app, state) = build_app();

    tokio::time::sleep(Duration::from_millis(8_100)).await;
    let (_, body) = get(&app, "/hero").await;
    assert_eq!(body["index"], 2);

    state.shutdown().expect("shutdown");
    tokio::time::sleep(Duration::from_secs(30)).await;
    let (_, body) = get(&app, "/hero").await;
    assert_eq!(body["index"], 2);
}

/// Read one SSE frame and return its JSON `data` payload
async fn next_event(stream: &mut BodyDataStream) -> (String, Value) {
    let mut buffer = String::new();
    while !buffer.contains("\n\n") {
        let chunk = timeout(Duration::from_secs(5), stream.next())
            .await
            .expect("event in time")
            .expect("stream still open")
            .expect("readable chunk");
        buffer.push_str(std::str::from_utf8(&chunk).expect("utf-8 frame"));
    }

    let mut event = String::new();
    let mut data = String::new();
    for line in buffer.lines() {
        if let Some(name) = line.strip_prefix("event:") {
            event = name.trim().to_string();
        } else if let Some(payload) = line.strip_prefix("data:") {
            data.push_str(payload.trim_start());
        }
    }
    (event, serde_json::from_str(&data).expect("json payload"))
}

#[tokio::test]
async fn events_stream_site_snapshots() {
    let (app, state) = build_app();

    let request = Request::builder()
        .uri("/events")
        .body(Body::empty())
        .expect("valid request");
    let response = app.oneshot(request).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/event-stream");

    let mut stream = response.into_body().into_data_stream();
    let (event, snapshot) = next_event(&mut stream).await;
    assert_eq!(event, "site");
    assert_eq!(snapshot["hero"]["index"], 0);
    assert_eq!(snapshot["lightbox"]["open"], false);

    state.lightbox_open(4).expect("lightbox opens");
    let (_, snapshot) = next_event(&mut stream).await;
    assert_eq!(snapshot["lightbox"]["position"], "5 of 13");
}
