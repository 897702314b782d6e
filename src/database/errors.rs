use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Unable to open store {path}: {source}")]
    OpenError {
        path: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Query error: {0}")]
    QueryError(#[from] sqlx::Error),
}
