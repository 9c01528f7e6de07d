//! API routes module

pub mod health;
pub mod products;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

/// `/ready` endpoint bound to the application state
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment, StoreKind};
    use crate::openapi::ApiDoc;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum_helpers::ShutdownCoordinator;
    use core_config::{app_info, server::ServerConfig};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use std::time::Duration;
    use tower::ServiceExt;

    fn memory_state() -> AppState {
        AppState {
            config: Config {
                app: app_info!(),
                server: ServerConfig::default(),
                environment: Environment::Development,
                store: StoreKind::Memory,
                database: None,
                run_migrations: false,
                shutdown_timeout: Duration::from_secs(1),
            },
            db: None,
            shutdown: ShutdownCoordinator::new(),
        }
    }

    fn app(state: &AppState) -> Router {
        axum_helpers::create_router::<ApiDoc>(routes(state), &state.config.server)
            .unwrap()
            .merge(ready_router(state.clone()))
    }

    async fn json_body(body: Body) -> Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_location_includes_api_prefix() {
        let state = memory_state();

        let response = app(&state)
            .oneshot(
                Request::post("/api/products")
                    .header("content-type", "application/json")
                    .body(Body::from(json!({"name": "Laptop", "price": 999.99}).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::LOCATION], "/api/products/1");
    }

    #[tokio::test]
    async fn test_ready_without_database() {
        let state = memory_state();

        let response = app(&state)
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response.into_body()).await["status"], "ready");
    }

    #[tokio::test]
    async fn test_ready_reports_unavailable_during_shutdown() {
        let state = memory_state();
        state.shutdown.shutdown();

        let response = app(&state)
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_openapi_lists_product_paths() {
        let state = memory_state();

        let response = app(&state)
            .oneshot(
                Request::get("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let doc = json_body(response.into_body()).await;
        assert!(doc["paths"].get("/api/products").is_some());
        assert!(doc["paths"].get("/api/products/{id}").is_some());
    }
}
