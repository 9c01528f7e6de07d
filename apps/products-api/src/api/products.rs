//! Products API routes

use axum::Router;
use domain_products::{
    InMemoryProductRepository, PgProductRepository, ProductService, handlers,
};

use crate::state::AppState;

/// Create products router over the configured store
pub fn router(state: &AppState) -> Router {
    match &state.db {
        Some(db) => {
            let repository = PgProductRepository::new(db.clone());
            handlers::router(ProductService::new(repository))
        }
        None => {
            let repository = InMemoryProductRepository::new();
            handlers::router(ProductService::new(repository))
        }
    }
}
