//! `tp-route` — shortest-path search, egress selection, and itineraries.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`search`]    | `shortest_path`, `PathStep`                             |
//! | [`select`]    | `RoutePlanner`, `PlannedRoute`, `EGRESS_WALK_FACTOR`    |
//! | [`itinerary`] | `route_segments`, `describe_route`, `LegSegment`        |
//! | [`error`]     | `PlanError`, `PlanResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                        |
//! |------------|---------------------------------------------------------------|
//! | `parallel` | Evaluate egress candidates on the Rayon pool (same results).  |

pub mod error;
pub mod itinerary;
pub mod search;
pub mod select;


pub use error::{PlanError, PlanResult};
pub use itinerary::{LegSegment, describe_route, route_segments};
pub use search::{PathStep, shortest_path};
pub use select::{EGRESS_WALK_FACTOR, PlannedRoute, RoutePlanner};
