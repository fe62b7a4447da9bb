use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use rates_server::api::build_app;
use rates_server::{Config, ServerState};

fn app() -> Router {
    let state = ServerState::initialize(&Config::default());
    build_app(&state).with_state(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn seasons(tag: &str) -> Value {
    json!({
        "peak": format!("{tag} Jul - Aug"),
        "high": format!("{tag} Sep - Oct"),
        "mid": format!("{tag} Nov - Mar"),
        "low": format!("{tag} Apr - Jun"),
    })
}

fn room_type(name: &str, rooms: &[&str]) -> Value {
    json!({
        "room_type": name,
        "total": 4,
        "size": "52 sq/m",
        "bed_options": "King or Twin",
        "features": "Private deck & plunge pool",
        "occupancy": "2 adults, 1 child",
        "rate_types": [{
            "rate_type": "Full Board",
            "rooms": rooms.iter().map(|room| json!({
                "room": room,
                "low": 950,
                "mid": 1200,
                "high": 1480.5,
                "peak": 1725,
            })).collect::<Vec<_>>(),
        }],
    })
}

fn document(year: i32) -> Value {
    json!({
        "year": year,
        "seasons": seasons("Form"),
        "rates": [
            room_type("Luxury Suite", &["Single", "Double"]),
            room_type("Family Tent", &["Per Room"]),
        ],
    })
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, body) = send_json(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_create_and_read() {
    let app = app();

    let (status, body) = send_json(&app, Method::POST, "/api/room-rates", Some(document(2025))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["year"], 2025);
    assert_eq!(body["data"]["rates"][0]["total"], 4);

    let (status, body) = send_json(&app, Method::GET, "/api/room-rates/2025", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["seasons"]["peak"], "Form Jul - Aug");

    let (_, body) = send_json(&app, Method::GET, "/api/room-rates", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_from_text_upload() {
    let app = app();
    let upload = json!({
        "seasons": seasons("Json"),
        "rates": [room_type("Tree House", &["Double"])],
    });

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/room-rates",
        Some(json!({
            "year": 2026,
            "seasons": seasons("Form"),
            "jsonUpload": upload.to_string(),
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["seasons"]["low"], "Json Apr - Jun");
    assert_eq!(body["data"]["rates"][0]["room_type"], "Tree House");
    assert!(body["data"].get("jsonUpload").is_none());
}

#[tokio::test]
async fn test_update_with_partial_upload() {
    let app = app();
    send_json(&app, Method::POST, "/api/room-rates", Some(document(2025))).await;

    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/api/room-rates/2025",
        Some(json!({ "jsonUpload": { "seasons": seasons("Upload") } })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["seasons"]["mid"], "Upload Nov - Mar");
    assert_eq!(body["data"]["rates"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_malformed_upload_rejected() {
    let app = app();
    let (_, created) = send_json(&app, Method::POST, "/api/room-rates", Some(document(2025))).await;

    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/api/room-rates/2025",
        Some(json!({ "seasons": seasons("Edited"), "jsonUpload": "{not json" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6);
    assert_eq!(body["message"], "Invalid JSON format");

    let (_, stored) = send_json(&app, Method::GET, "/api/room-rates/2025", None).await;
    assert_eq!(stored["data"], created["data"]);
}

#[tokio::test]
async fn test_validation_error() {
    let app = app();
    let mut doc = document(2025);
    doc["rates"][0]["rate_types"][0]["rooms"][1]["peak"] = json!(-1);

    let (status, body) = send_json(&app, Method::POST, "/api/room-rates", Some(doc)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "rates[0].rate_types[0].rooms[1].peak");
}

#[tokio::test]
async fn test_missing_and_duplicate_year() {
    let app = app();

    let (status, body) = send_json(&app, Method::GET, "/api/room-rates/2031", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 1001);

    send_json(&app, Method::POST, "/api/room-rates", Some(document(2025))).await;
    let (status, body) = send_json(&app, Method::POST, "/api/room-rates", Some(document(2025))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 1002);
}

#[tokio::test]
async fn test_delete() {
    let app = app();
    send_json(&app, Method::POST, "/api/room-rates", Some(document(2025))).await;

    let (status, _) = send_json(&app, Method::DELETE, "/api/room-rates/2025", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send_json(&app, Method::GET, "/api/room-rates/2025", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_grid() {
    let app = app();
    send_json(&app, Method::POST, "/api/room-rates", Some(document(2025))).await;

    let (status, body) = send_json(&app, Method::GET, "/api/room-rates/2025/grid", None).await;
    assert_eq!(status, StatusCode::OK);

    let grid = &body["data"];
    assert_eq!(grid["title"], "Room Rates 2025");
    assert_eq!(grid["seasons"][0]["key"], "peak");

    let rows = grid["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["lead"]["kind"], "room_type_start");
    assert_eq!(rows[0]["lead"]["room_type"]["rowspan"], 2);
    assert_eq!(rows[1]["lead"]["kind"], "plain");
    assert_eq!(rows[1]["group_boundary"], true);
    assert_eq!(rows[2]["group_boundary"], false);
}

#[tokio::test]
async fn test_table() {
    let app = app();
    send_json(&app, Method::POST, "/api/room-rates", Some(document(2025))).await;

    let (status, bytes) = send(&app, Method::GET, "/api/room-rates/2025/table", None).await;
    assert_eq!(status, StatusCode::OK);

    let html = String::from_utf8(bytes).unwrap();
    assert!(html.contains("Room Rates 2025"));
    assert!(html.contains("Luxury Suite (4 total)"));
    assert!(html.contains("Private deck &amp; plunge pool"));
    assert!(html.contains("1,480.5"));
    assert!(html.contains(r#"<tr class="group-boundary">"#));
}

#[tokio::test]
async fn test_render_block() {
    let app = app();
    let (_, created) = send_json(&app, Method::POST, "/api/room-rates", Some(document(2025))).await;
    let id = created["data"]["id"].clone();

    let (status, bytes) = send(
        &app,
        Method::POST,
        "/api/blocks/room-rates/render",
        Some(json!({ "anchorId": "rates", "roomRates": id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(bytes).unwrap();
    assert!(html.starts_with(r#"<section id="rates""#));
    assert!(html.contains("Family Tent (4 total)"));

    let (_, bytes) = send(
        &app,
        Method::POST,
        "/api/blocks/room-rates/render",
        Some(json!({ "roomRates": 404 })),
    )
    .await;
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        "<div>No room rates data available.</div>"
    );
}

#[tokio::test]
async fn test_render_inline_block_document() {
    let app = app();
    let doc = document(2027);

    let (status, bytes) = send(
        &app,
        Method::POST,
        "/api/blocks/room-rates/render",
        Some(json!({ "anchorId": "inline", "roomRates": doc })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let html = String::from_utf8(bytes).unwrap();
    assert!(html.starts_with(r#"<section id="inline""#));
    assert!(html.contains("Room Rates 2027"));
    assert!(html.contains("Luxury Suite (4 total)"));
}
