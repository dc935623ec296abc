//! In-memory PaymentRecordRepository.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{PaymentRecord, PaymentRecordRepository};

/// In-memory payment audit trail.
pub struct InMemoryPaymentRecordRepository {
    records: RwLock<Vec<PaymentRecord>>,
}

impl InMemoryPaymentRecordRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPaymentRecordRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentRecordRepository for InMemoryPaymentRecordRepository {
    async fn append(&self, record: PaymentRecord) -> Result<(), DomainError> {
        self.records.write().await.push(record);
        Ok(())
    }

    async fn list_for_owner(&self, owner_id: UserId) -> Result<Vec<PaymentRecord>, DomainError> {
        let records = self.records.read().await;
        let mut owned: Vec<PaymentRecord> = records
            .iter()
            .filter(|r| r.owner_id == Some(owner_id))
            .cloned()
            .collect();
        owned.reverse();
        Ok(owned)
    }
}
