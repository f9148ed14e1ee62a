//! Network-subsystem error type.

use thiserror::Error;

use tp_core::NodeId;

/// Errors produced by `tp-network`.
///
/// All of these indicate malformed static data and surface at startup, while
/// the tables and graph are being constructed; nothing here is transient.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// A scheduled route references a stop or station absent from the tables.
    #[error("route {service} references unknown stop {stop}")]
    UnknownRouteStop { service: String, stop: NodeId },

    #[error("node {0} not found in the location tables")]
    UnknownNode(NodeId),

    #[error("duplicate bus stop code {0:?}")]
    DuplicateStop(String),

    #[error("duplicate station name {0:?}")]
    DuplicateStation(String),

    #[error("duplicate house block {0:?}")]
    DuplicateHouse(String),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
