use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::Product;

/// Repository trait for Product persistence
///
/// Implementations: [`InMemoryProductRepository`](crate::memory::InMemoryProductRepository)
/// and [`PgProductRepository`](crate::postgres::PgProductRepository).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, ordered by id
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    /// Products whose name contains `fragment`, ignoring case.
    /// An empty fragment matches every product.
    async fn find_by_name_containing(&self, fragment: &str) -> ProductResult<Vec<Product>>;

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Insert when `product.id` is `None`, otherwise overwrite the stored record.
    ///
    /// Overwriting an id that is not stored fails with `NotFound`.
    async fn save(&self, product: Product) -> ProductResult<Product>;

    /// Remove `product`. Unsaved products are ignored.
    async fn delete(&self, product: &Product) -> ProductResult<()>;

    /// Returns whether a record was removed
    async fn delete_by_id(&self, id: i64) -> ProductResult<bool>;

    async fn exists_by_id(&self, id: i64) -> ProductResult<bool>;

    async fn count(&self) -> ProductResult<u64>;
}
