use std::sync::Arc;
use crate::database::traits::database_backend::DatabaseBackend;

#[derive(Clone)]
pub struct DatabaseConnector {
    pub(crate) engine: &'static str,
    pub(crate) backend: Arc<dyn DatabaseBackend>,
}
