use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::domains::entities::{
    BankProduct, BankProductProjection, BankService, BankServiceProjection, DeletionRecord,
    LoanUpdate,
};
use crate::domains::kind;
use crate::error::{LendSyncError, Result};
use crate::interfaces::storage::EntityLookup;

/// Maps an entity and its kind tag to the projection the peer service
/// receives. Most kinds pass through unshaped; deletes always collapse to a
/// tombstone; `loan`, `bank_service` and `bank_product` are reduced, the
/// latter two with a name denormalized from local storage at publish time.
#[derive(Clone)]
pub struct Shaper {
    lookup: Arc<dyn EntityLookup>,
}

impl Shaper {
    pub fn new(lookup: Arc<dyn EntityLookup>) -> Self {
        Self { lookup }
    }

    /// Returns `Ok(None)` when the entity yields no projection (a tombstone
    /// whose id cannot be extracted); the caller skips the publish.
    pub async fn shape<T: Serialize>(&self, entity: &T, kind_tag: &str) -> Result<Option<Value>> {
        let value = serde_json::to_value(entity)
            .map_err(|e| LendSyncError::Serialization(e.to_string()))?;

        if let Some(model) = kind::delete_model(kind_tag) {
            let Some(id) = value.get("id").and_then(Value::as_i64) else {
                return Ok(None);
            };
            let record = DeletionRecord {
                id,
                model: model.to_string(),
                delete: true,
            };
            return Ok(Some(to_value(&record)?));
        }

        match kind_tag {
            kind::LOAN => {
                let update: LoanUpdate = from_value(value)?;
                Ok(Some(to_value(&update)?))
            }
            kind::BANK_SERVICE => {
                let row: BankService = from_value(value)?;
                let name = self.service_name(row.service_id).await;
                let projection = BankServiceProjection {
                    id: row.id,
                    name,
                    bank_id: row.bank_id,
                    image_id: row.image_id,
                    status: row.status,
                };
                Ok(Some(to_value(&projection)?))
            }
            kind::BANK_PRODUCT => {
                let row: BankProduct = from_value(value)?;
                let name = self.product_name(row.product_id).await;
                let projection = BankProductProjection {
                    id: row.id,
                    name,
                    bank_service_id: row.bank_service_id,
                    min_timespan: row.min_timespan,
                    max_timespan: row.max_timespan,
                    interest: row.interest,
                    min_loan: row.min_loan,
                    max_loan: row.max_loan,
                    fees: row.fees,
                    collaterals: row.collaterals,
                    financing_sector: row.financing_sector,
                    assurance: row.assurance,
                    status: row.status,
                };
                Ok(Some(to_value(&projection)?))
            }
            _ => Ok(Some(value)),
        }
    }

    // Lookup failure never fails the publish; the denormalized name is left
    // at its zero value.
    async fn service_name(&self, id: i64) -> String {
        match self.lookup.service_by_id(id).await {
            Ok(Some(service)) => service.name,
            Ok(None) => String::new(),
            Err(err) => {
                warn!(service_id = id, error = %err, "service lookup failed while shaping");
                String::new()
            }
        }
    }

    async fn product_name(&self, id: i64) -> String {
        match self.lookup.product_by_id(id).await {
            Ok(Some(product)) => product.name,
            Ok(None) => String::new(),
            Err(err) => {
                warn!(product_id = id, error = %err, "product lookup failed while shaping");
                String::new()
            }
        }
    }
}

fn to_value<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| LendSyncError::Serialization(e.to_string()))
}

fn from_value<T: serde::de::DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| LendSyncError::Serialization(e.to_string()))
}
