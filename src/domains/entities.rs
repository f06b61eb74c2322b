//! Tracked entities shared between the lender- and borrower-facing services,
//! plus the reduced projections that actually cross the wire for the kinds
//! that are redacted or denormalized before send.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub logo_id: i64,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Borrower {
    pub id: i64,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub bank_id: i64,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: i64,
    pub bank_id: i64,
    pub borrower_id: i64,
    pub bank_product_id: i64,
    pub amount: f64,
    pub timespan: i64,
    pub purpose: Option<String>,
    pub status: String,
    pub disburse_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankService {
    pub id: i64,
    pub bank_id: i64,
    pub service_id: i64,
    pub image_id: i64,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankProduct {
    pub id: i64,
    pub bank_id: i64,
    pub product_id: i64,
    pub bank_service_id: i64,
    pub min_timespan: i64,
    pub max_timespan: i64,
    pub interest: f64,
    pub min_loan: f64,
    pub max_loan: f64,
    pub fees: f64,
    pub collaterals: String,
    pub financing_sector: String,
    pub assurance: String,
    pub status: String,
}

/// The minimal loan shape exchanged between the services: the peer only
/// needs status transitions, never the full loan record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanUpdate {
    pub id: i64,
    pub status: String,
    pub disburse_date: Option<String>,
}

/// Tombstone payload sent for every `*_delete` kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletionRecord {
    pub id: i64,
    pub model: String,
    pub delete: bool,
}

/// Outbound shape for `bank_service`: `name` belongs to the referenced
/// service and is resolved at publish time, not copied from the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankServiceProjection {
    pub id: i64,
    pub name: String,
    pub bank_id: i64,
    pub image_id: i64,
    pub status: String,
}

/// Outbound shape for `bank_product`, with `name` resolved from the
/// referenced product at publish time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankProductProjection {
    pub id: i64,
    pub name: String,
    pub bank_service_id: i64,
    pub min_timespan: i64,
    pub max_timespan: i64,
    pub interest: f64,
    pub min_loan: f64,
    pub max_loan: f64,
    pub fees: f64,
    pub collaterals: String,
    pub financing_sector: String,
    pub assurance: String,
    pub status: String,
}
