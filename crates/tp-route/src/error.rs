//! Planner error type.

use thiserror::Error;

use tp_core::NodeId;
use tp_network::NetworkError;

/// Errors produced when planning a route.
///
/// `NoWalkableAccess` and `NoPath` are definitive negatives, not transient
/// failures; callers may collapse them into a single "no route found"
/// message but should log them apart.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The start station does not exist in the tables — a caller error.
    #[error("unknown start station {0:?}")]
    UnknownStart(String),

    /// The destination block does not exist in the tables — a caller error.
    #[error("unknown destination block {0:?}")]
    UnknownDestination(String),

    /// No stop or station lies within walking range of the destination.
    #[error("no stop or station within walking range of block {block}")]
    NoWalkableAccess { block: String },

    /// Walkable candidates exist, but none is reachable from the start.
    #[error("no path from {start} reaches block {block}")]
    NoPath { start: NodeId, block: String },

    /// No path between two graph nodes.
    #[error("no route from {from} to {to}")]
    NoRoute { from: NodeId, to: NodeId },

    #[error(transparent)]
    Network(#[from] NetworkError),
}

pub type PlanResult<T> = Result<T, PlanError>;
