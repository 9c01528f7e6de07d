//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// Inputs arrive already validated; the service owns existence checks and
/// copying input fields onto the stored entity.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List every product, or only those whose name contains `query` (ignoring case).
    ///
    /// A missing, empty or whitespace-only query lists everything.
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: Option<&str>) -> ProductResult<Vec<Product>> {
        match query {
            Some(q) if !q.trim().is_empty() => self.repository.find_by_name_containing(q).await,
            _ => self.repository.find_all().await,
        }
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i64) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        self.repository.save(Product::new(input)).await
    }

    /// Replace name, description and price of an existing product
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: i64, input: ProductInput) -> ProductResult<Product> {
        let mut product = self.get_product(id).await?;
        product.apply(input);
        self.repository.save(product).await
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> ProductResult<()> {
        let product = self.get_product(id).await?;
        self.repository.delete(&product).await
    }

    #[instrument(skip(self))]
    pub async fn count_products(&self) -> ProductResult<u64> {
        self.repository.count().await
    }
}
