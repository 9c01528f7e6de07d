use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;
use crate::repository::ProductRepository;

/// Process-local product store.
///
/// Ids start at 1 and are never reused. Clones share the same store.
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<i64, Product>>>,
    last_id: Arc<AtomicI64>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        Ok(self.products.read().await.values().cloned().collect())
    }

    async fn find_by_name_containing(&self, fragment: &str) -> ProductResult<Vec<Product>> {
        let needle = fragment.to_lowercase();
        let products = self.products.read().await;

        Ok(products
            .values()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        Ok(self.products.read().await.get(&id).cloned())
    }

    async fn save(&self, mut product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let id = match product.id {
            Some(id) if products.contains_key(&id) => id,
            Some(id) => return Err(ProductError::NotFound(id)),
            None => {
                let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
                product.id = Some(id);
                id
            }
        };

        products.insert(id, product.clone());
        tracing::info!(product_id = id, "Saved product");
        Ok(product)
    }

    async fn delete(&self, product: &Product) -> ProductResult<()> {
        if let Some(id) = product.id {
            self.delete_by_id(id).await?;
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> ProductResult<bool> {
        let removed = self.products.write().await.remove(&id).is_some();
        if removed {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(removed)
    }

    async fn exists_by_id(&self, id: i64) -> ProductResult<bool> {
        Ok(self.products.read().await.contains_key(&id))
    }

    async fn count(&self) -> ProductResult<u64> {
        Ok(self.products.read().await.len() as u64)
    }
}
