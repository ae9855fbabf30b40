//! End-to-end HTTP scenarios against a real Postgres.

mod common;

use axum::http::{Method, StatusCode};
use common::{call, TestDb};
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn org_scenario() {
    let db = TestDb::new().await;
    let app = db.app();

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/orgs",
        Some(json!({"name": "Acme", "hrms_org_id": "H1"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Org added successfully!");
    let id = body["org"]["id"].as_str().expect("assigned id").to_owned();
    assert!(!id.is_empty());

    let uri = format!("/api/orgs/{id}");
    let (status, body) = call(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Org fetched successfully!");
    assert_eq!(
        body["org"],
        json!({"id": id, "name": "Acme", "hrms_org_id": "H1"})
    );

    let (status, body) = call(&app, Method::PUT, &uri, Some(json!({"name": "Acme Corp"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["org"]["name"], "Acme Corp");
    assert_eq!(body["message"], "Org updated successfully!");

    let (_, body) = call(&app, Method::GET, &uri, None).await;
    assert_eq!(body["org"]["name"], "Acme Corp");

    let (status, body) = call(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "message": "Org deleted successfully!"}));

    let (status, body) = call(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Org not found");

    db.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn user_scenario() {
    let db = TestDb::new().await;
    let app = db.app();

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({"id": "client-chosen", "name": "Ada", "email": "ada@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_str().expect("assigned id").to_owned();
    assert_ne!(id, "client-chosen");
    assert_eq!(body["email"], "ada@example.com");

    let uri = format!("/api/users/{id}");
    let (status, body) = call(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": id, "name": "Ada", "email": "ada@example.com"}));

    let (status, body) = call(
        &app,
        Method::PUT,
        &uri,
        Some(json!({"name": "Ada L", "email": "ada@example.org", "propeak_user_id": "P7"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["propeak_user_id"], "P7");

    let (status, body) = call(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, serde_json::Value::Null);

    let (status, body) = call(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");

    db.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn list_envelope_and_defaults() {
    let db = TestDb::new().await;
    let app = db.app();

    for i in 0..12 {
        let (status, _) = call(
            &app,
            Method::POST,
            "/api/users",
            Some(json!({"name": format!("user-{i:02}")})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = call(&app, Method::GET, "/api/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 12);
    assert_eq!(body["pages"], 2);
    assert_eq!(body["page"], 1);
    assert_eq!(body["data"].as_array().unwrap().len(), 10);

    let (_, body) = call(&app, Method::GET, "/api/users?page=2&limit=10", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"][0]["name"], "user-10");

    let (_, body) = call(&app, Method::GET, "/api/users?page=9&limit=5", None).await;
    assert_eq!(body["pages"], 3);
    assert_eq!(body["data"], json!([]));

    let (_, body) = call(&app, Method::GET, "/api/orgs", None).await;
    assert_eq!(body, json!({"data": [], "total": 0, "pages": 0, "page": 1}));

    db.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn malformed_body_writes_nothing() {
    let db = TestDb::new().await;
    let app = db.app();

    let (status, _) = call(&app, Method::POST, "/api/orgs", Some(json!({"name": ["x"]}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = call(&app, Method::GET, "/api/orgs", None).await;
    assert_eq!(body["total"], 0);

    db.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn update_and_delete_missing_ids_succeed() {
    let db = TestDb::new().await;
    let app = db.app();
    let ghost = "/api/orgs/00000000-0000-0000-0000-000000000000";

    let (status, body) = call(&app, Method::PUT, ghost, Some(json!({"name": "Ghost"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["org"]["name"], "Ghost");

    let (status, _) = call(&app, Method::DELETE, ghost, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call(
        &app,
        Method::DELETE,
        "/api/users/00000000-0000-0000-0000-000000000000",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    db.teardown().await;
}
