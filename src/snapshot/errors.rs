use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Unable to encode {record} snapshot: {source}")]
    EncodeError {
        record: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed {record} snapshot: {source}")]
    DecodeError {
        record: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
