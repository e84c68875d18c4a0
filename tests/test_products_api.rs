//! End-to-end tests of the HTTP surface against the in-memory store.

mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::time::Duration;

type TestResult = Result<(), Box<dyn std::error::Error>>;

const MISSING_ID: &str = "2f1b6c9e-8d2a-4c3e-9b7f-1a2b3c4d5e6f";

fn lamp() -> Value {
    json!({
        "name": "Desk Lamp",
        "description": "LED desk lamp",
        "price": 29.99,
        "category": "Home",
        "stock": 12
    })
}

async fn create(app: &TestApp, body: &Value) -> Result<Value, reqwest::Error> {
    let resp = app
        .client
        .post(app.url("/api/v1/products"))
        .json(body)
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await?;
    Ok(body["product"].clone())
}

async fn list(app: &TestApp) -> Result<Vec<Value>, reqwest::Error> {
    let resp = app.client.get(app.url("/api/v1/products")).send().await?;
    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await
}

#[tokio::test]
async fn root_describes_available_operations() -> TestResult {
    let app = TestApp::spawn().await;
    let resp = app.client.get(app.url("/api/v1")).send().await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await?;
    assert_eq!(body["message"], "✅ Product CRUD API v1 is up and running!");
    assert_eq!(body["endpoints"]["list"], "GET /api/v1/products");
    assert_eq!(body["endpoints"]["create"], "POST /api/v1/products");
    assert_eq!(body["endpoints"]["getOne"], "GET /api/v1/products/:id");
    assert_eq!(body["endpoints"]["update"], "PUT /api/v1/products/:id");
    assert_eq!(body["endpoints"]["delete"], "DELETE /api/v1/products/:id");
    Ok(())
}

#[tokio::test]
async fn create_then_get_returns_same_record() -> TestResult {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/api/v1/products"))
        .json(&lamp())
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await?;
    assert_eq!(body["message"], "Product added successfully!");

    let created = &body["product"];
    let id = created["_id"].as_str().unwrap();
    assert_eq!(created["name"], "Desk Lamp");
    assert_eq!(created["createdAt"], created["updatedAt"]);

    let resp = app
        .client
        .get(app.url(&format!("/api/v1/products/{}", id)))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = resp.json().await?;
    assert_eq!(&fetched, created);
    Ok(())
}

#[tokio::test]
async fn create_applies_defaults() -> TestResult {
    let app = TestApp::spawn().await;
    let product = create(
        &app,
        &json!({"name": "Mug", "description": "Ceramic mug", "price": 8}),
    )
    .await?;
    assert_eq!(product["category"], "Uncategorized");
    assert_eq!(product["stock"], 0);
    Ok(())
}

#[tokio::test]
async fn create_without_name_persists_nothing() -> TestResult {
    let app = TestApp::spawn().await;
    create(&app, &lamp()).await?;
    let before = list(&app).await?.len();

    let resp = app
        .client
        .post(app.url("/api/v1/products"))
        .json(&json!({"description": "No name", "price": 1}))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await?;
    assert_eq!(body["message"], "Product name is required");

    assert_eq!(list(&app).await?.len(), before);
    Ok(())
}

#[tokio::test]
async fn create_with_negative_stock_fails() -> TestResult {
    let app = TestApp::spawn().await;
    let mut body = lamp();
    body["stock"] = json!(-1);

    let resp = app
        .client
        .post(app.url("/api/v1/products"))
        .json(&body)
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await?;
    assert!(body["message"].as_str().unwrap().contains("stock"));
    assert!(app.store.is_empty().await);
    Ok(())
}

#[tokio::test]
async fn malformed_json_is_a_client_fault() -> TestResult {
    let app = TestApp::spawn().await;
    let resp = app
        .client
        .post(app.url("/api/v1/products"))
        .header("content-type", "application/json")
        .body("{\"name\": ")
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await?;
    assert!(body["message"].as_str().unwrap().starts_with("Invalid JSON body"));
    Ok(())
}

#[tokio::test]
async fn list_returns_newest_first() -> TestResult {
    let app = TestApp::spawn().await;
    for i in 0..4 {
        create(
            &app,
            &json!({"name": format!("item-{}", i), "description": "d", "price": i}),
        )
        .await?;
    }

    let names: Vec<String> = list(&app)
        .await?
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["item-3", "item-2", "item-1", "item-0"]);
    Ok(())
}

#[tokio::test]
async fn update_changes_only_named_fields() -> TestResult {
    let app = TestApp::spawn().await;
    let created = create(&app, &lamp()).await?;
    let id = created["_id"].as_str().unwrap();

    tokio::time::sleep(Duration::from_millis(10)).await;

    let resp = app
        .client
        .put(app.url(&format!("/api/v1/products/{}", id)))
        .json(&json!({"price": 19.5}))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await?;
    assert_eq!(body["message"], "Product updated successfully!");

    let updated = &body["product"];
    assert_eq!(updated["price"], 19.5);
    for field in ["_id", "name", "description", "category", "stock", "createdAt"] {
        assert_eq!(updated[field], created[field], "field {} changed", field);
    }
    assert_ne!(updated["updatedAt"], created["updatedAt"]);

    let fetched: Value = app
        .client
        .get(app.url(&format!("/api/v1/products/{}", id)))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(&fetched, updated);
    Ok(())
}

#[tokio::test]
async fn invalid_update_changes_nothing() -> TestResult {
    let app = TestApp::spawn().await;
    let created = create(&app, &lamp()).await?;
    let id = created["_id"].as_str().unwrap();

    for (patch, message) in [
        (json!({"name": ""}), "Product name is required"),
        (json!({"description": null}), "Description is required"),
        (
            json!({"stock": -5}),
            "Path `stock` (-5) is less than minimum allowed value (0).",
        ),
    ] {
        let resp = app
            .client
            .put(app.url(&format!("/api/v1/products/{}", id)))
            .json(&patch)
            .send()
            .await?;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = resp.json().await?;
        assert_eq!(body["message"], message);
    }

    let fetched: Value = app
        .client
        .get(app.url(&format!("/api/v1/products/{}", id)))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(fetched, created);
    Ok(())
}

#[tokio::test]
async fn delete_then_get_is_not_found() -> TestResult {
    let app = TestApp::spawn().await;
    let created = create(&app, &lamp()).await?;
    let url = app.url(&format!("/api/v1/products/{}", created["_id"].as_str().unwrap()));

    let resp = app.client.delete(&url).send().await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await?;
    assert_eq!(body, json!({"message": "🗑️ Product deleted successfully"}));

    let resp = app.client.get(&url).send().await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await?;
    assert_eq!(body["message"], "Product not found");
    Ok(())
}

#[tokio::test]
async fn malformed_ids_are_client_faults() -> TestResult {
    let app = TestApp::spawn().await;
    let url = app.url("/api/v1/products/abc");

    let responses = vec![
        app.client.get(&url).send().await?,
        app.client.put(&url).json(&json!({"price": 1})).send().await?,
        app.client.delete(&url).send().await?,
    ];
    for resp in responses {
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = resp.json().await?;
        assert_eq!(body["message"], "Invalid product ID");
    }
    Ok(())
}

#[tokio::test]
async fn unknown_ids_are_not_found() -> TestResult {
    let app = TestApp::spawn().await;
    let url = app.url(&format!("/api/v1/products/{}", MISSING_ID));

    let responses = vec![
        app.client.get(&url).send().await?,
        app.client.put(&url).json(&json!({"price": 1})).send().await?,
        app.client.delete(&url).send().await?,
    ];
    for resp in responses {
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = resp.json().await?;
        assert_eq!(body["message"], "Product not found");
    }
    Ok(())
}

#[tokio::test]
async fn storage_outage_is_a_server_fault() -> TestResult {
    let app = TestApp::spawn().await;
    app.store.set_unavailable(true);

    let resp = app.client.get(app.url("/api/v1/products")).send().await?;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = resp.json().await?;
    assert!(body["message"].as_str().unwrap().contains("unavailable"));

    let resp = app.client.get(app.url("/health")).send().await?;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    app.store.set_unavailable(false);
    let resp = app.client.get(app.url("/health")).send().await?;
    assert_eq!(resp.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn serves_openapi_document() -> TestResult {
    let app = TestApp::spawn().await;
    let doc: Value = app
        .client
        .get(app.url("/api-docs/openapi.json"))
        .send()
        .await?
        .json()
        .await?;
    assert!(doc["paths"]["/api/v1/products"].is_object());
    assert!(doc["paths"]["/api/v1/products/{id}"].is_object());
    Ok(())
}

#[tokio::test]
async fn undecodable_id_segment_is_invalid_id() -> TestResult {
    let app = TestApp::spawn().await;
    let url = app.url("/api/v1/products/%FF");

    let responses = vec![
        app.client.get(&url).send().await?,
        app.client.put(&url).json(&json!({"price": 1})).send().await?,
        app.client.delete(&url).send().await?,
    ];
    for resp in responses {
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = resp.json().await?;
        assert_eq!(body["message"], "Invalid product ID");
    }
    Ok(())
}

#[tokio::test]
async fn nul_in_text_is_a_client_fault() -> TestResult {
    let app = TestApp::spawn().await;
    let resp = app
        .client
        .post(app.url("/api/v1/products"))
        .json(&json!({"name": "a\u{0000}b", "description": "d", "price": 1}))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await?;
    assert_eq!(body["message"], "Path `name` must not contain NUL characters.");
    assert!(app.store.is_empty().await);

    let created = create(&app, &lamp()).await?;
    let resp = app
        .client
        .put(app.url(&format!("/api/v1/products/{}", created["_id"].as_str().unwrap())))
        .json(&json!({"description": "x\u{0000}"}))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn out_of_range_stock_is_rejected() -> TestResult {
    let app = TestApp::spawn().await;
    let mut body = lamp();
    body["stock"] = json!(u64::MAX);

    let resp = app
        .client
        .post(app.url("/api/v1/products"))
        .json(&body)
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await?;
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Cast to Number failed"));
    assert!(app.store.is_empty().await);
    Ok(())
}

#[tokio::test]
async fn storage_outage_fails_every_operation_as_server_fault() -> TestResult {
    let app = TestApp::spawn().await;
    let created = create(&app, &lamp()).await?;
    let item_url = app.url(&format!("/api/v1/products/{}", created["_id"].as_str().unwrap()));
    app.store.set_unavailable(true);

    let responses = vec![
        app.client
            .post(app.url("/api/v1/products"))
            .json(&lamp())
            .send()
            .await?,
        app.client.get(&item_url).send().await?,
        app.client
            .put(&item_url)
            .json(&json!({"price": 2}))
            .send()
            .await?,
        app.client.delete(&item_url).send().await?,
    ];
    for resp in responses {
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = resp.json().await?;
        assert!(body["message"].as_str().unwrap().contains("unavailable"));
    }

    app.store.set_unavailable(false);
    assert_eq!(app.store.len().await, 1);
    Ok(())
}
