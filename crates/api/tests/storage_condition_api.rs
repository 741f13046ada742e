//! HTTP-level tests for the storage condition endpoints.
//!
//! The condition service runs over an in-memory store, so these need no
//! database.

mod common;

use axum::http::StatusCode;
use biostore_core::hazard::HAZARDOUS_EVENT_TYPE;
use common::{
    bearer, body_json, build_test_app, delete, get, post_json, put_json, seeded_store,
};
use serde_json::json;

fn reading(temperature: f64) -> serde_json::Value {
    json!({
        "material_id": 1,
        "temperature": temperature,
        "humidity": 50.0,
        "oxygen_level": 21.0,
    })
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_ideal_reading_is_green_and_silent() {
    let store = seeded_store();
    let app = build_test_app(store.clone());

    let auth = bearer(7);
    let response = post_json(app, "/api/v1/storage-conditions", reading(4.0), Some(&auth)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["zone"], "GREEN");
    assert_eq!(json["material_id"], 1);
    assert!(json["id"].is_number());
    assert!(json["measurement_time"].is_string());

    assert!(store.notifications().is_empty());
    let audit = store.audit_entries();
    assert_eq!(audit.len(), 1);
    assert_eq!(audit[0].actor, Some(7));
    assert_eq!(
        audit[0].message,
        "storage condition by User with ID 7. Add new  and material with ID: 1 | \
         Zone: GREEN, Oxygen Level: 21.00%, Humidity: 50.00%, Temperature: 4.00°C"
    );
}

#[tokio::test]
async fn create_hot_reading_is_red_and_notifies() {
    let store = seeded_store();
    let app = build_test_app(store.clone());

    let auth = bearer(2);
    let response = post_json(app, "/api/v1/storage-conditions", reading(20.0), Some(&auth)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["zone"], "RED");
    assert_eq!(json["zone_description"], "Critical conditions");

    let notifications = store.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].event_type, HAZARDOUS_EVENT_TYPE);
    assert_eq!(notifications[0].details, "Material in the zone: RED");
    assert_eq!(notifications[0].material_id, 1);
}

#[tokio::test]
async fn create_without_token_returns_401() {
    let store = seeded_store();
    let app = build_test_app(store.clone());

    let response = post_json(app, "/api/v1/storage-conditions", reading(4.0), None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
    assert_eq!(store.condition_count(), 0);
}

#[tokio::test]
async fn create_with_garbage_token_returns_401() {
    let app = build_test_app(seeded_store());
    let response = post_json(
        app,
        "/api/v1/storage-conditions",
        reading(4.0),
        Some("Bearer not-a-jwt"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_for_unknown_material_returns_404_without_writes() {
    let store = seeded_store();
    let app = build_test_app(store.clone());

    let auth = bearer(1);
    let body = json!({
        "material_id": 99,
        "temperature": 4.0,
        "humidity": 50.0,
        "oxygen_level": 21.0,
    });
    let response = post_json(app, "/api/v1/storage-conditions", body, Some(&auth)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");

    assert_eq!(store.condition_count(), 0);
    assert!(store.notifications().is_empty());
    assert!(store.audit_entries().is_empty());
}

#[tokio::test]
async fn create_out_of_range_humidity_returns_400() {
    let store = seeded_store();
    let app = build_test_app(store.clone());

    let auth = bearer(1);
    let body = json!({
        "material_id": 1,
        "temperature": 4.0,
        "humidity": 140.0,
        "oxygen_level": 21.0,
    });
    let response = post_json(app, "/api/v1/storage-conditions", body, Some(&auth)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert_eq!(store.condition_count(), 0);
}

// ---------------------------------------------------------------------------
// Device ingestion
// ---------------------------------------------------------------------------

#[tokio::test]
async fn device_submission_needs_no_token_and_logs_iot() {
    let store = seeded_store();
    let app = build_test_app(store.clone());

    let response = post_json(app, "/api/v1/devices/storage-conditions", reading(11.0), None).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["zone"], "YELLOW");

    let notifications = store.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].details, "Material in the zone: YELLOW");

    let audit = store.audit_entries();
    assert_eq!(audit.len(), 1);
    assert_eq!(audit[0].actor, None);
    assert!(audit[0].message.starts_with("storage condition by IOT and material with ID: 1"));
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_and_get_by_id() {
    let store = seeded_store();
    let app = build_test_app(store.clone());
    let auth = bearer(1);

    for temperature in [4.0, 20.0] {
        let response = post_json(
            app.clone(),
            "/api/v1/storage-conditions",
            reading(temperature),
            Some(&auth),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(app.clone(), "/api/v1/storage-conditions").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = json["data"].as_array().expect("data array");
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["zone"], "GREEN");
    assert_eq!(data[1]["zone"], "RED");

    let id = data[1]["id"].as_i64().expect("id");
    let response = get(app, &format!("/api/v1/storage-conditions/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["temperature"], 20.0);
}

#[tokio::test]
async fn list_is_empty_envelope_when_nothing_stored() {
    let app = build_test_app(seeded_store());
    let json = body_json(get(app, "/api/v1/storage-conditions").await).await;
    assert_eq!(json["data"], json!([]));
}

#[tokio::test]
async fn get_unknown_condition_returns_404() {
    let app = build_test_app(seeded_store());
    let response = get(app, "/api/v1/storage-conditions/404").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_rederives_zone_and_logs_update() {
    let store = seeded_store();
    let app = build_test_app(store.clone());
    let auth = bearer(5);

    let created = body_json(
        post_json(
            app.clone(),
            "/api/v1/storage-conditions",
            reading(20.0),
            Some(&auth),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().expect("id");

    let response = put_json(
        app,
        &format!("/api/v1/storage-conditions/{id}"),
        reading(4.0),
        Some(&auth),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["zone"], "GREEN");
    assert_eq!(store.condition_count(), 1);

    // Only the RED create raised a notification.
    assert_eq!(store.notifications().len(), 1);

    let audit = store.audit_entries();
    assert_eq!(audit.len(), 2);
    assert!(audit[1].message.contains("User with ID 5. Update "));
    assert!(audit[1].message.contains("Zone: GREEN"));
}

#[tokio::test]
async fn update_unknown_condition_returns_404() {
    let store = seeded_store();
    let app = build_test_app(store.clone());
    let auth = bearer(1);

    let response = put_json(
        app,
        "/api/v1/storage-conditions/12",
        reading(4.0),
        Some(&auth),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(store.audit_entries().is_empty());
}

#[tokio::test]
async fn update_without_token_returns_401() {
    let app = build_test_app(seeded_store());
    let response = put_json(app, "/api/v1/storage-conditions/1", reading(4.0), None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_returns_204_and_keeps_notifications() {
    let store = seeded_store();
    let app = build_test_app(store.clone());
    let auth = bearer(3);

    let created = body_json(
        post_json(
            app.clone(),
            "/api/v1/storage-conditions",
            reading(25.0),
            Some(&auth),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().expect("id");

    let response = delete(
        app.clone(),
        &format!("/api/v1/storage-conditions/{id}"),
        Some(&auth),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/v1/storage-conditions/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert_eq!(store.notifications().len(), 1);
    let audit = store.audit_entries();
    assert_eq!(audit.len(), 2);
    assert!(audit[1].message.contains("User with ID 3. Delete "));
    assert!(audit[1].message.contains("Temperature: 25.00°C"));
}

#[tokio::test]
async fn delete_unknown_condition_returns_404() {
    let store = seeded_store();
    let app = build_test_app(store.clone());
    let auth = bearer(1);

    let response = delete(app, "/api/v1/storage-conditions/77", Some(&auth)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(store.audit_entries().is_empty());
}
