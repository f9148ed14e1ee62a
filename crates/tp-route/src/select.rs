//! Egress selection: which node to leave the network at.
//!
//! A destination address is not a graph node.  The planner enumerates every
//! stop/station within walking range of the address, runs the search to each,
//! and keeps the candidate minimizing walking-weighted total distance.

use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use tp_core::{CostModel, DEFAULT_MAX_WALK_KM, Node, NodeId};
use tp_network::{House, NearbyNode, Places, TransitGraph};

use crate::search::{PathStep, shortest_path};
use crate::{PlanError, PlanResult};

/// Weight applied to the final walking leg when scoring egress candidates
/// against in-graph distance.
pub const EGRESS_WALK_FACTOR: f64 = 3.0;

/// A fully planned route from a start station to a house.
#[derive(Clone, Debug)]
pub struct PlannedRoute {
    /// Node-by-node path from the start station to the egress node.
    pub path: Vec<PathStep>,
    /// Total in-graph distance, km.
    pub graph_km: f64,
    /// The stop or station where the traveller leaves the network.
    pub egress: Node,
    /// Final walking distance from the egress node to the house, km.
    pub egress_walk_km: f64,
    /// The destination house record.
    pub house: House,
}

impl PlannedRoute {
    /// In-graph distance plus the final walk, km.
    pub fn total_km(&self) -> f64 {
        self.graph_km + self.egress_walk_km
    }
}

/// Plans minimum-cost routes over an immutable graph and location tables.
///
/// Build one at startup and share it freely: planning takes `&self` plus a
/// per-request [`CostModel`], so concurrent requests never interfere.
pub struct RoutePlanner {
    graph: TransitGraph,
    places: Places,
    max_walk_km: f64,
}

/// An egress candidate that survived the search, ready for scoring.
struct Scored {
    score: f64,
    walk_km: f64,
    graph_km: f64,
    node: Node,
    path: Vec<PathStep>,
}

impl RoutePlanner {
    pub fn new(graph: TransitGraph, places: Places) -> Self {
        Self { graph, places, max_walk_km: DEFAULT_MAX_WALK_KM }
    }

    /// Override the walking radius used for egress candidates.
    pub fn with_max_walk_km(mut self, km: f64) -> Self {
        self.max_walk_km = km;
        self
    }

    pub fn graph(&self) -> &TransitGraph {
        &self.graph
    }

    pub fn places(&self) -> &Places {
        &self.places
    }

    /// Plan a route from `start_station` to the house at `block`.
    ///
    /// Each reachable candidate within walking range of the house is scored
    /// `walk_km · EGRESS_WALK_FACTOR + graph_km`; the minimum wins, with
    /// ties broken by walking distance and then node id so the outcome does
    /// not depend on candidate enumeration order.
    pub fn plan(
        &self,
        costs: &CostModel,
        start_station: &str,
        block: &str,
    ) -> PlanResult<PlannedRoute> {
        let start = self
            .places
            .station(start_station)
            .ok_or_else(|| PlanError::UnknownStart(start_station.to_owned()))?;
        let house = self
            .places
            .house(block)
            .ok_or_else(|| PlanError::UnknownDestination(block.to_owned()))?;

        let candidates = self.places.nodes_within(house.location, self.max_walk_km);
        if candidates.is_empty() {
            return Err(PlanError::NoWalkableAccess { block: house.block.clone() });
        }
        log::debug!(
            "block {}: {} egress candidates within {} km",
            house.block,
            candidates.len(),
            self.max_walk_km
        );

        let start_id = NodeId::station(start.name.clone());

        #[cfg(not(feature = "parallel"))]
        let best = candidates
            .into_iter()
            .filter_map(|c| self.evaluate(costs, &start_id, c))
            .reduce(better_scored);

        #[cfg(feature = "parallel")]
        let best = candidates
            .into_par_iter()
            .filter_map(|c| self.evaluate(costs, &start_id, c))
            .reduce_with(better_scored);

        let chosen = best.ok_or_else(|| PlanError::NoPath {
            start: start_id.clone(),
            block: house.block.clone(),
        })?;

        Ok(PlannedRoute {
            path: chosen.path,
            graph_km: chosen.graph_km,
            egress: chosen.node,
            egress_walk_km: chosen.walk_km,
            house: house.clone(),
        })
    }

    /// Search to one candidate.  `shortest_path` only fails with `NoRoute`,
    /// and an unreachable candidate is simply skipped.
    fn evaluate(&self, costs: &CostModel, start: &NodeId, nearby: NearbyNode) -> Option<Scored> {
        let (graph_km, path) = shortest_path(&self.graph, costs, start, &nearby.node.id).ok()?;
        Some(Scored {
            score: nearby.walk_km * EGRESS_WALK_FACTOR + graph_km,
            walk_km: nearby.walk_km,
            graph_km,
            node: nearby.node,
            path,
        })
    }
}

/// Min-reduction over candidates with a total, deterministic order.
fn better_scored(a: Scored, b: Scored) -> Scored {
    let ordering = a
        .score
        .total_cmp(&b.score)
        .then_with(|| a.walk_km.total_cmp(&b.walk_km))
        .then_with(|| a.node.id.cmp(&b.node.id));
    match ordering {
        Ordering::Greater => b,
        _ => a,
    }
}
