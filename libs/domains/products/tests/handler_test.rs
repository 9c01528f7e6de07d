//! Handler tests for Products domain
//!
//! Drive the products router end to end over the in-memory store:
//! - Request deserialization and validation
//! - Response serialization and status codes
//! - `Location` header on create
//! - Error bodies

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum_helpers::ErrorResponse;
use domain_products::*;
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app(repo: InMemoryProductRepository) -> Router {
    Router::new().nest("/products", handlers::router(ProductService::new(repo)))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

async fn seeded() -> InMemoryProductRepository {
    let repo = InMemoryProductRepository::new();
    for (name, price) in [("Laptop", 99999), ("Mouse", 1999), ("Laptop Stand", 4999)] {
        repo.save(Product {
            id: None,
            name: name.to_string(),
            description: None,
            price: Decimal::new(price, 2),
        })
        .await
        .unwrap();
    }
    repo
}

fn names(products: Vec<Product>) -> Vec<String> {
    products.into_iter().map(|p| p.name).collect()
}

#[tokio::test]
async fn test_create_product_returns_201_with_location() {
    let repo = InMemoryProductRepository::new();

    let response = app(repo.clone())
        .oneshot(json_request(
            "POST",
            "/products",
            json!({"name": "Laptop", "description": "14 inch", "price": 999.99}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()[header::LOCATION], "/products/1");

    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.id, Some(1));
    assert_eq!(product.name, "Laptop");
    assert_eq!(product.description.as_deref(), Some("14 inch"));
    assert_eq!(product.price, Decimal::new(99999, 2));

    assert!(repo.exists_by_id(1).await.unwrap());
}

#[tokio::test]
async fn test_create_product_validates_input() {
    let repo = InMemoryProductRepository::new();

    let response = app(repo.clone())
        .oneshot(json_request("POST", "/products", json!({"name": "", "price": -1})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(body.error, "VALIDATION_ERROR");
    let details = body.details.unwrap();
    assert!(details.get("name").is_some());
    assert!(details.get("price").is_some());

    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_product_rejects_missing_price() {
    let response = app(InMemoryProductRepository::new())
        .oneshot(json_request("POST", "/products", json!({"name": "Mouse"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(body.error, "JSON_EXTRACTION");
}

#[tokio::test]
async fn test_list_products_returns_all() {
    let response = app(seeded().await).oneshot(get("/products")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(names(products), vec!["Laptop", "Mouse", "Laptop Stand"]);
}

#[tokio::test]
async fn test_blank_query_returns_all() {
    let response = app(seeded().await)
        .oneshot(get("/products?q=%20%20"))
        .await
        .unwrap();

    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 3);
}

#[tokio::test]
async fn test_search_ignores_case() {
    let repo = seeded().await;

    for q in ["lap", "LAP", "lAp"] {
        let response = app(repo.clone())
            .oneshot(get(&format!("/products?q={}", q)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let products: Vec<Product> = json_body(response.into_body()).await;
        assert_eq!(names(products), vec!["Laptop", "Laptop Stand"], "q={}", q);
    }
}

#[tokio::test]
async fn test_get_product() {
    let response = app(seeded().await).oneshot(get("/products/2")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(
        body,
        json!({"id": 2, "name": "Mouse", "description": null, "price": 19.99})
    );
}

#[tokio::test]
async fn test_get_missing_product_returns_404_message() {
    let response = app(seeded().await)
        .oneshot(get("/products/999"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(body.message, "Product not found");
}

#[tokio::test]
async fn test_update_product_keeps_id() {
    let repo = seeded().await;

    let response = app(repo.clone())
        .oneshot(json_request(
            "PUT",
            "/products/2",
            json!({"name": "Wireless Mouse", "description": "2.4 GHz", "price": 29.5}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.id, Some(2));
    assert_eq!(product.name, "Wireless Mouse");
    assert_eq!(product.description.as_deref(), Some("2.4 GHz"));
    assert_eq!(product.price, Decimal::new(295, 1));

    let stored = repo.find_by_id(2).await.unwrap().unwrap();
    assert_eq!(stored, product);
    assert_eq!(repo.count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_update_missing_product_returns_404() {
    let repo = seeded().await;

    let response = app(repo.clone())
        .oneshot(json_request(
            "PUT",
            "/products/999",
            json!({"name": "Ghost", "price": 1}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(repo.count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_update_validates_input() {
    let response = app(seeded().await)
        .oneshot(json_request("PUT", "/products/1", json!({"name": " ", "price": 1})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_product_returns_204_then_404() {
    let repo = seeded().await;

    let response = app(repo.clone())
        .oneshot(
            Request::delete("/products/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    let response = app(repo).oneshot(get("/products/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_product_returns_404() {
    let response = app(seeded().await)
        .oneshot(
            Request::delete("/products/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_count_products() {
    let response = app(seeded().await)
        .oneshot(get("/products/count"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let count: u64 = json_body(response.into_body()).await;
    assert_eq!(count, 3);
}

#[tokio::test]
async fn test_create_accepts_long_name_and_precise_price() {
    let name = "x".repeat(300);

    let response = app(InMemoryProductRepository::new())
        .oneshot(json_request(
            "POST",
            "/products",
            json!({"name": name, "price": 9.999}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.name.len(), 300);
    assert_eq!(product.price, Decimal::new(9999, 3));
}
