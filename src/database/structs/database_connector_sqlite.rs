use sqlx::{Pool, Sqlite};
use crate::config::structs::database_structure_config::DatabaseStructureConfig;

#[derive(Debug, Clone)]
pub struct DatabaseConnectorSQLite {
    pub(crate) pool: Pool<Sqlite>,
    pub(crate) structure: DatabaseStructureConfig,
}
