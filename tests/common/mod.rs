#![allow(dead_code)]

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use lendsync::domains::entities::{
    Bank, BankProduct, BankService, Borrower, Loan, LoanUpdate, Product, Service,
};
use lendsync::error::{LendSyncError, Result};
use lendsync::interfaces::sink::{EventSink, MessageSource};
use lendsync::interfaces::storage::SyncStore;

/// Sink that records every framed message instead of touching a broker.
#[derive(Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<Vec<u8>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn raw(&self) -> Vec<Vec<u8>> {
        self.messages.lock().await.clone()
    }

    /// Splits each recorded message on the first colon and parses the JSON
    /// payload.
    pub async fn envelopes(&self) -> Vec<(String, Value)> {
        self.raw()
            .await
            .into_iter()
            .map(|raw| {
                let text = String::from_utf8(raw).unwrap();
                let (kind, payload) = text.split_once(':').unwrap();
                (kind.to_string(), serde_json::from_str(payload).unwrap())
            })
            .collect()
    }
}

#[async_trait]
impl EventSink for RecordingSink {
    async fn send(&self, message: Vec<u8>) -> Result<()> {
        self.messages.lock().await.push(message);
        Ok(())
    }
}

pub struct FailingSink;

#[async_trait]
impl EventSink for FailingSink {
    async fn send(&self, _message: Vec<u8>) -> Result<()> {
        Err(LendSyncError::Bus("broker unreachable".to_string()))
    }
}

/// Sink whose sends take a fixed amount of time, for checking that
/// publishes do not serialize each other.
pub struct SlowSink {
    pub delay: Duration,
}

#[async_trait]
impl EventSink for SlowSink {
    async fn send(&self, _message: Vec<u8>) -> Result<()> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

pub enum SourceStep {
    Message(Vec<u8>),
    Error(String),
}

/// Source that replays a fixed script and then reports closure.
pub struct ScriptedSource {
    steps: VecDeque<SourceStep>,
}

impl ScriptedSource {
    pub fn new(steps: Vec<SourceStep>) -> Self {
        Self {
            steps: VecDeque::from(steps),
        }
    }

    pub fn message(text: &str) -> SourceStep {
        SourceStep::Message(text.as_bytes().to_vec())
    }
}

#[async_trait]
impl MessageSource for ScriptedSource {
    async fn next(&mut self) -> Result<Option<Vec<u8>>> {
        match self.steps.pop_front() {
            Some(SourceStep::Message(raw)) => Ok(Some(raw)),
            Some(SourceStep::Error(text)) => Err(LendSyncError::Bus(text)),
            None => Ok(None),
        }
    }
}

/// Source that never yields, for exercising deterministic shutdown.
pub struct PendingSource;

#[async_trait]
impl MessageSource for PendingSource {
    async fn next(&mut self) -> Result<Option<Vec<u8>>> {
        std::future::pending::<()>().await;
        unreachable!()
    }
}

pub struct FailingStore;

#[async_trait]
impl SyncStore for FailingStore {
    async fn upsert_loan(&self, _loan: LoanUpdate) -> Result<()> {
        Err(LendSyncError::Storage("save failed".to_string()))
    }

    async fn upsert_borrower(&self, _borrower: Borrower) -> Result<()> {
        Err(LendSyncError::Storage("save failed".to_string()))
    }
}

pub fn sample_bank() -> Bank {
    Bank {
        id: 12,
        name: "Unity Bank".to_string(),
        address: "Bole Road".to_string(),
        phone: "+251911000000".to_string(),
        email: "info@unitybank.example".to_string(),
        logo_id: 4,
        status: "active".to_string(),
    }
}

pub fn sample_borrower() -> Borrower {
    Borrower {
        id: 9,
        full_name: "Abebe Kebede".to_string(),
        phone: "+251911111111".to_string(),
        email: "abebe@example.com".to_string(),
        address: "Adama".to_string(),
        status: "active".to_string(),
    }
}

pub fn sample_loan() -> Loan {
    Loan {
        id: 7,
        bank_id: 12,
        borrower_id: 9,
        bank_product_id: 3,
        amount: 250_000.0,
        timespan: 24,
        purpose: Some("working capital".to_string()),
        status: "approved".to_string(),
        disburse_date: Some("2026-09-01".to_string()),
    }
}

pub fn sample_service() -> Service {
    Service {
        id: 5,
        name: "Payroll Advance".to_string(),
        description: "Short-term advance against payroll".to_string(),
        status: "active".to_string(),
    }
}

pub fn sample_product() -> Product {
    Product {
        id: 6,
        name: "SME Term Loan".to_string(),
        description: "Term financing for small businesses".to_string(),
        status: "active".to_string(),
    }
}

pub fn sample_bank_service() -> BankService {
    BankService {
        id: 31,
        bank_id: 12,
        service_id: 5,
        image_id: 44,
        status: "active".to_string(),
    }
}

pub fn sample_bank_product() -> BankProduct {
    BankProduct {
        id: 21,
        bank_id: 12,
        product_id: 6,
        bank_service_id: 31,
        min_timespan: 6,
        max_timespan: 36,
        interest: 14.5,
        min_loan: 50_000.0,
        max_loan: 2_000_000.0,
        fees: 1.5,
        collaterals: "vehicle,building".to_string(),
        financing_sector: "manufacturing".to_string(),
        assurance: "insurance".to_string(),
        status: "active".to_string(),
    }
}
