//! Data-loading error type.

use thiserror::Error;

use tp_network::NetworkError;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("data parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Network(#[from] NetworkError),
}

pub type DataResult<T> = Result<T, DataError>;
