//! Scheduled-route feed types.
//!
//! A `ScheduledRoute` is one directed service pattern: an ordered stop
//! sequence with per-stop cumulative distances, exactly as published by the
//! route feed.  Loaders (`tp-data`) group flat feed records into these; the
//! graph builder consumes them.

use tp_core::{Mode, NodeId, ServiceLabel};

/// One stop along a scheduled route, in sequence order.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteStop {
    pub node: NodeId,
    /// Cumulative along-route distance in km; `None` where the feed omits it.
    pub cumulative_km: Option<f64>,
}

/// A directed scheduled service: its identity plus the ordered stops it
/// calls at.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledRoute {
    pub service: String,
    pub direction: u8,
    pub mode: Mode,
    pub stops: Vec<RouteStop>,
}

impl ScheduledRoute {
    /// The label carried by every edge this route contributes to the graph.
    pub fn label(&self) -> ServiceLabel {
        ServiceLabel::new(self.service.clone(), self.direction, self.mode)
    }
}
