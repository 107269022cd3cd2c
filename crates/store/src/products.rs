//! Product catalog records

use std::collections::HashMap;

use common::models::Product;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Catalog of products and their stored EcoScores.
///
/// Products are replaced whole on update; the score is computed by the
/// caller before the record is stored, so a stored score always matches the
/// profile next to it.
pub struct ProductStore {
    products: RwLock<HashMap<Uuid, Product>>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(HashMap::new()),
        }
    }

    /// Insert or replace a product. The original creation time survives an
    /// update.
    pub async fn upsert(&self, mut product: Product) -> Product {
        let mut products = self.products.write().await;
        if let Some(existing) = products.get(&product.id) {
            product.created_at = existing.created_at;
        }
        products.insert(product.id, product.clone());
        product
    }

    pub async fn get(&self, id: Uuid) -> Option<Product> {
        self.products.read().await.get(&id).cloned()
    }

    pub async fn list(&self) -> Vec<Product> {
        let mut all: Vec<Product> = self.products.read().await.values().cloned().collect();
        all.sort_by_key(|p| p.created_at);
        all
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}
