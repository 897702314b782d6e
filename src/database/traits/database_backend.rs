use async_trait::async_trait;
use crate::database::errors::DatabaseError;

/// Durable put/get capability over the `historicData` bucket.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatabaseBackend: Send + Sync {
    /// `Ok(None)` when the key was never written.
    async fn get_record(&self, key: &str) -> Result<Option<Vec<u8>>, DatabaseError>;

    /// Writes every record in one transaction; nothing is committed on error.
    async fn save_records(&self, records: Vec<(String, Vec<u8>)>) -> Result<(), DatabaseError>;

    async fn close(&self);
}
