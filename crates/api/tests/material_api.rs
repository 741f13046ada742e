//! Material and donor endpoints against a real database.
//!
//! Each write must leave an entry in `event_logs` attributed to the caller.

mod common;

use axum::http::StatusCode;
use biostore_db::repositories::EventLogRepo;
use common::{bearer, body_json, build_pg_app, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

fn donor_body(id_number: &str) -> serde_json::Value {
    json!({
        "first_name": "Ada",
        "last_name": "Byron",
        "birth_date": "1990-12-10",
        "gender": "FEMALE",
        "id_number": id_number,
        "blood_type": "A_POSITIVE",
    })
}

fn material_body(donor_id: i64) -> serde_json::Value {
    json!({
        "material_name": "Plasma",
        "expiration_date": "2099-01-01T00:00:00Z",
        "transfer_date": "2024-01-01T00:00:00Z",
        "donor_id": donor_id,
        "ideal_temperature": 4.0,
        "ideal_humidity": 50.0,
        "ideal_oxygen_level": 21.0,
    })
}

async fn create_donor(pool: &PgPool, auth: &str, id_number: &str) -> i64 {
    let app = build_pg_app(pool.clone());
    let response = post_json(app, "/api/v1/donors", donor_body(id_number), Some(auth)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().expect("donor id")
}

async fn messages(pool: &PgPool) -> Vec<String> {
    EventLogRepo::list(pool, 100, 0)
        .await
        .unwrap()
        .into_iter()
        .map(|entry| entry.message)
        .collect()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn material_writes_are_audited(pool: PgPool) {
    let auth = bearer(3);
    let donor_id = create_donor(&pool, &auth, "AB100001").await;

    let app = build_pg_app(pool.clone());
    let response = post_json(app, "/api/v1/materials", material_body(donor_id), Some(&auth)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["donor_id"], donor_id);
    assert_eq!(created["status"], "AVAILABLE");

    let app = build_pg_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/materials/{id}"),
        json!({ "material_name": "Serum" }),
        Some(&auth),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["material_name"], "Serum");

    let app = build_pg_app(pool.clone());
    let response = delete(app, &format!("/api/v1/materials/{id}"), Some(&auth)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let log = messages(&pool).await;
    assert!(log.contains(&format!(
        "biological material by User with ID 3. Add new  with ID: {id} | \
         Name: Plasma, Status: AVAILABLE"
    )));
    assert!(log.contains(&format!(
        "biological material by User with ID 3. Update  with ID: {id} | \
         Name: Serum, Status: AVAILABLE"
    )));
    assert!(log.contains(&format!(
        "biological material by User with ID 3. Delete  with ID: {id} | \
         Name: Serum, Status: AVAILABLE"
    )));

    let entries = EventLogRepo::list(&pool, 100, 0).await.unwrap();
    assert!(entries.iter().all(|entry| entry.user_id == Some(3)));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn material_with_unknown_donor_returns_404(pool: PgPool) {
    let auth = bearer(3);
    let app = build_pg_app(pool.clone());
    let response = post_json(app, "/api/v1/materials", material_body(9999), Some(&auth)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");

    assert!(messages(&pool).await.is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_missing_material_returns_404(pool: PgPool) {
    let app = build_pg_app(pool.clone());
    let response = delete(app, "/api/v1/materials/424242", Some(&bearer(3))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(messages(&pool).await.is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn donor_materials_are_listed(pool: PgPool) {
    let auth = bearer(5);
    let donor_id = create_donor(&pool, &auth, "AB100002").await;

    for _ in 0..2 {
        let app = build_pg_app(pool.clone());
        let response =
            post_json(app, "/api/v1/materials", material_body(donor_id), Some(&auth)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = build_pg_app(pool.clone());
    let response = get(app, &format!("/api/v1/donors/{donor_id}/materials")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    assert!(messages(&pool).await.contains(&format!(
        "donor by User with ID 5. Add new  with ID: {donor_id} | Name: Ada Byron"
    )));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_donor_id_number_conflicts(pool: PgPool) {
    let auth = bearer(5);
    create_donor(&pool, &auth, "AB100003").await;

    let app = build_pg_app(pool.clone());
    let response = post_json(app, "/api/v1/donors", donor_body("AB100003"), Some(&auth)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn donor_with_materials_cannot_be_deleted(pool: PgPool) {
    let auth = bearer(5);
    let donor_id = create_donor(&pool, &auth, "AB100004").await;

    let app = build_pg_app(pool.clone());
    let response = post_json(app, "/api/v1/materials", material_body(donor_id), Some(&auth)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = build_pg_app(pool.clone());
    let response = delete(app, &format!("/api/v1/donors/{donor_id}"), Some(&auth)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
