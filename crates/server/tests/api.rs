use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use server::{Db, Store};
use tower::ServiceExt;

fn app() -> Router {
    server::router(Arc::new(Store::in_memory(Db::seed())))
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn dashboard_round_trips_through_put() {
    let app = app();
    let (status, mut dashboard) = call(&app, Method::GET, "/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dashboard["accountNumber"], "1234567890");

    dashboard["userName"] = json!("Jane Doe");
    let (status, _) = call(&app, Method::PUT, "/dashboard", Some(dashboard)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, dashboard) = call(&app, Method::GET, "/dashboard", None).await;
    assert_eq!(dashboard["userName"], "Jane Doe");
}

#[tokio::test]
async fn posted_transaction_is_listed() {
    let app = app();
    let record = json!({
        "id": 1_760_000_000_000_i64,
        "type": "debit",
        "amount": 5000,
        "description": "Airtime purchase to +2348012345678 (MTN)",
        "date": "2025-10-09"
    });
    let (status, created) = call(&app, Method::POST, "/transactions", Some(record.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, record);

    let (_, list) = call(&app, Method::GET, "/transactions", None).await;
    let list = list.as_array().unwrap();
    assert!(list.contains(&record));
}

#[tokio::test]
async fn card_lifecycle() {
    let app = app();
    let (status, card) = call(
        &app,
        Method::POST,
        "/cards",
        Some(json!({ "cardNumber": "5399 8300 0000 0001", "expiry": "01/29", "cvv": "321" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(card["status"], "active");
    let id = card["id"].as_str().unwrap().to_string();
    let uri = format!("/cards/{id}");

    let (status, blocked) =
        call(&app, Method::PATCH, &uri, Some(json!({ "status": "blocked" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(blocked["status"], "blocked");
    assert_eq!(blocked["cvv"], "321");

    let (status, replaced) = call(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "cardNumber": "5399 8300 0000 0002", "expiry": "02/30", "cvv": "999" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(replaced["id"], id.as_str());
    assert_eq!(replaced["status"], "active");

    let (status, _) = call(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = call(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains(&id));
}

#[tokio::test]
async fn unknown_card_is_404_for_every_verb() {
    let app = app();
    for method in [Method::GET, Method::DELETE] {
        let (status, body) = call(&app, method, "/cards/missing", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].is_string());
    }
    let (status, _) = call(
        &app,
        Method::PATCH,
        "/cards/missing",
        Some(json!({ "status": "blocked" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn profile_put_replaces_fields() {
    let app = app();
    let profile = json!({ "name": "Jane Doe", "email": "jane@domain.com", "phone": "08011112222" });
    let (status, saved) = call(&app, Method::PUT, "/profile", Some(profile.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved, profile);
}
