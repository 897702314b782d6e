use crate::config::structs::configuration::Configuration;
use crate::database::errors::DatabaseError;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::database::traits::database_backend::DatabaseBackend;
use async_trait::async_trait;
use log::{debug, error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{ConnectOptions, Error, Pool, Row, Sqlite};
use std::time::Duration;

const LOG_PREFIX: &str = "[SQLite]";

impl DatabaseConnectorSQLite {
    #[tracing::instrument(level = "debug")]
    pub async fn create(path: &str) -> Result<Pool<Sqlite>, Error> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Full)
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
    }

    #[tracing::instrument(level = "debug")]
    pub async fn open(config: &Configuration) -> Result<DatabaseConnectorSQLite, DatabaseError> {
        let path = config.database.path.clone();
        let pool = match DatabaseConnectorSQLite::create(&path).await {
            Ok(pool) => pool,
            Err(source) => {
                error!("{LOG_PREFIX} Unable to open store {path}: {source}");
                return Err(DatabaseError::OpenError { path, source });
            }
        };
        let connector = DatabaseConnectorSQLite {
            pool,
            structure: config.database_structure.clone(),
        };
        if let Err(source) = connector.create_bucket().await {
            error!("{LOG_PREFIX} Unable to create bucket {} in {path}: {source}", connector.structure.table_name);
            connector.pool.close().await;
            return Err(DatabaseError::OpenError { path, source });
        }
        info!("{LOG_PREFIX} Opened store {path}");
        Ok(connector)
    }

    async fn create_bucket(&self) -> Result<(), Error> {
        let structure = &self.structure;
        debug!("{LOG_PREFIX} Creating bucket {} if not exists", structure.table_name);
        let query = format!(
            "CREATE TABLE IF NOT EXISTS `{}` (`{}` TEXT PRIMARY KEY NOT NULL, `{}` BLOB NOT NULL)",
            structure.table_name, structure.column_key, structure.column_value
        );
        sqlx::query(&query).execute(&self.pool).await?;
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_record(&self, key: &str) -> Result<Option<Vec<u8>>, DatabaseError> {
        let structure = &self.structure;
        let query = format!(
            "SELECT `{}` FROM `{}` WHERE `{}` = ?",
            structure.column_value, structure.table_name, structure.column_key
        );
        let row = match sqlx::query(&query).bind(key).fetch_optional(&self.pool).await {
            Ok(row) => row,
            Err(e) => {
                error!("{LOG_PREFIX} Error reading key {key}: {e}");
                return Err(e.into());
            }
        };
        match row {
            None => Ok(None),
            Some(row) => Ok(Some(row.try_get::<Vec<u8>, _>(0)?)),
        }
    }

    #[tracing::instrument(level = "debug", skip(self, records))]
    pub async fn save_records(&self, records: Vec<(String, Vec<u8>)>) -> Result<(), DatabaseError> {
        let structure = &self.structure;
        let query = format!(
            "INSERT INTO `{}` (`{}`, `{}`) VALUES (?, ?) ON CONFLICT(`{}`) DO UPDATE SET `{}` = excluded.`{}`",
            structure.table_name,
            structure.column_key,
            structure.column_value,
            structure.column_key,
            structure.column_value,
            structure.column_value
        );
        let mut transaction = self.pool.begin().await?;
        for (key, value) in records.iter() {
            if let Err(e) = sqlx::query(&query)
                .bind(key.as_str())
                .bind(value.as_slice())
                .execute(&mut *transaction)
                .await
            {
                error!("{LOG_PREFIX} Error writing key {key}: {e}");
                return Err(e.into());
            }
        }
        if let Err(e) = transaction.commit().await {
            error!("{LOG_PREFIX} Error committing {} records: {e}", records.len());
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl DatabaseBackend for DatabaseConnectorSQLite {
    async fn get_record(&self, key: &str) -> Result<Option<Vec<u8>>, DatabaseError> {
        DatabaseConnectorSQLite::get_record(self, key).await
    }

    async fn save_records(&self, records: Vec<(String, Vec<u8>)>) -> Result<(), DatabaseError> {
        DatabaseConnectorSQLite::save_records(self, records).await
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
