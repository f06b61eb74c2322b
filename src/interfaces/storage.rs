use async_trait::async_trait;

use crate::domains::entities::{Borrower, LoanUpdate, Product, Service};
use crate::error::Result;

/// Local-storage writes performed when applying inbound mutations. Saves are
/// upserts keyed by id: they must succeed whether or not the row exists, and
/// re-applying the same save must leave storage unchanged.
#[async_trait]
pub trait SyncStore: Send + Sync {
    async fn upsert_loan(&self, loan: LoanUpdate) -> Result<()>;
    async fn upsert_borrower(&self, borrower: Borrower) -> Result<()>;
}

/// Read-only lookups the payload shaper uses to denormalize referenced
/// names at publish time.
#[async_trait]
pub trait EntityLookup: Send + Sync {
    async fn service_by_id(&self, id: i64) -> Result<Option<Service>>;
    async fn product_by_id(&self, id: i64) -> Result<Option<Product>>;
}
