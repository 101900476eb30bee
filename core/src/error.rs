use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Cannot read source {path}: {source}")]
    SourceRead {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type EtlResult<T> = Result<T, EtlError>;
