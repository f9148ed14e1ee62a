//! `tp-core` — foundational value types for the `rust_tp` transit planner.
//!
//! This crate is a dependency of every other `tp-*` crate.  It intentionally
//! has no `tp-*` dependencies and no mandatory external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`geo`]     | `GeoPoint`, haversine distance                        |
//! | [`node`]    | `NodeId`, `NodeKind`, `Node`                          |
//! | [`service`] | `Mode`, `ServiceLabel`                                |
//! | [`cost`]    | `CostModel` + preset constructors, `DEFAULT_MAX_WALK_KM` |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.  |

pub mod cost;
pub mod geo;
pub mod node;
pub mod service;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cost::{CostModel, DEFAULT_MAX_WALK_KM};
pub use geo::GeoPoint;
pub use node::{Node, NodeId, NodeKind};
pub use service::{Mode, ServiceLabel};
