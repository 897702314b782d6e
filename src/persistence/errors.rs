use thiserror::Error;
use crate::database::errors::DatabaseError;
use crate::snapshot::errors::SnapshotError;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Snapshot error: {0}")]
    SnapshotError(#[from] SnapshotError),

    #[error("Database error: {0}")]
    DatabaseError(#[from] DatabaseError),
}
