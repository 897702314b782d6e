use std::fmt;
use std::path::Path;
use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::database::errors::DatabaseError;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::database::traits::database_backend::DatabaseBackend;

impl DatabaseConnector {
    /// Opens the store file named in the configuration, creating it and its
    /// bucket when missing.
    pub async fn new(config: Arc<Configuration>) -> Result<DatabaseConnector, DatabaseError>
    {
        let sqlite = DatabaseConnectorSQLite::open(&config).await?;
        Ok(DatabaseConnector {
            engine: "sqlite3",
            backend: Arc::new(sqlite),
        })
    }

    pub fn with_backend(engine: &'static str, backend: Arc<dyn DatabaseBackend>) -> DatabaseConnector
    {
        DatabaseConnector { engine, backend }
    }

    /// Whether the store's backing file is already on disk.
    pub fn exists(config: &Configuration) -> bool
    {
        Path::new(&config.database.path).exists()
    }

    pub fn engine(&self) -> &'static str
    {
        self.engine
    }

    pub async fn get_record(&self, key: &str) -> Result<Option<Vec<u8>>, DatabaseError>
    {
        self.backend.get_record(key).await
    }

    pub async fn save_records(&self, records: Vec<(String, Vec<u8>)>) -> Result<(), DatabaseError>
    {
        self.backend.save_records(records).await
    }

    pub async fn close(&self)
    {
        self.backend.close().await
    }
}

impl fmt::Debug for DatabaseConnector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConnector")
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}
