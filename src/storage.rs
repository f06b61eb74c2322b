use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domains::entities::{Borrower, LoanUpdate, Product, Service};
use crate::error::Result;
use crate::interfaces::storage::{EntityLookup, SyncStore};

/// In-memory implementation of the storage collaborators, used by the
/// daemon when no relational store is wired in and by the test suite.
#[derive(Default)]
pub struct MemoryStore {
    loans: RwLock<HashMap<i64, LoanUpdate>>,
    borrowers: RwLock<HashMap<i64, Borrower>>,
    services: RwLock<HashMap<i64, Service>>,
    products: RwLock<HashMap<i64, Product>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_service(&self, service: Service) {
        self.services.write().await.insert(service.id, service);
    }

    pub async fn insert_product(&self, product: Product) {
        self.products.write().await.insert(product.id, product);
    }

    pub async fn loan(&self, id: i64) -> Option<LoanUpdate> {
        self.loans.read().await.get(&id).cloned()
    }

    pub async fn borrower(&self, id: i64) -> Option<Borrower> {
        self.borrowers.read().await.get(&id).cloned()
    }

    pub async fn loan_count(&self) -> usize {
        self.loans.read().await.len()
    }

    pub async fn borrower_count(&self) -> usize {
        self.borrowers.read().await.len()
    }
}

#[async_trait]
impl SyncStore for MemoryStore {
    async fn upsert_loan(&self, loan: LoanUpdate) -> Result<()> {
        self.loans.write().await.insert(loan.id, loan);
        Ok(())
    }

    async fn upsert_borrower(&self, borrower: Borrower) -> Result<()> {
        self.borrowers.write().await.insert(borrower.id, borrower);
        Ok(())
    }
}

#[async_trait]
impl EntityLookup for MemoryStore {
    async fn service_by_id(&self, id: i64) -> Result<Option<Service>> {
        Ok(self.services.read().await.get(&id).cloned())
    }

    async fn product_by_id(&self, id: i64) -> Result<Option<Product>> {
        Ok(self.products.read().await.get(&id).cloned())
    }
}
