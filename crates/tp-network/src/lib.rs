//! `tp-network` — location tables, spatial index, and transit graph.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`places`] | `Stop`/`Station`/`House` tables, `Places` (+R-tree), `nodes_within` |
//! | [`route`]  | `ScheduledRoute`, `RouteStop` feed types                   |
//! | [`graph`]  | `TransitGraph`, `TransitGraphBuilder`, `build_graph`       |
//! | [`error`]  | `NetworkError`, `NetworkResult<T>`                         |
//!
//! The tables and the graph are constructed once at startup and immutable
//! afterwards, so they are safe to share across request threads without
//! synchronization.

pub mod error;
pub mod graph;
pub mod places;
pub mod route;

#[cfg(test)]
mod tests;

pub use error::{NetworkError, NetworkResult};
pub use graph::{EdgeKey, TransitGraph, TransitGraphBuilder, build_graph};
pub use places::{House, NearbyNode, Places, Station, Stop};
pub use route::{RouteStop, ScheduledRoute};
