//! Transit graph and its builder.
//!
//! # Data layout
//!
//! Adjacency is a map from node to outgoing edges, each edge keyed by
//! `(target, service label)`.  The same ordered node pair may be connected
//! by several services at different distances — the graph is a multigraph —
//! and re-adding an existing `(target, label)` pair replaces its distance.
//!
//! The graph is built once at startup and read-only afterwards; concurrent
//! readers need no synchronization.

use rustc_hash::FxHashMap;

use tp_core::{NodeId, ServiceLabel};

use crate::{NetworkError, NetworkResult, Places, ScheduledRoute};

// ── TransitGraph ──────────────────────────────────────────────────────────────

/// Composite adjacency key: the edge target and the service covering it.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct EdgeKey {
    pub to: NodeId,
    pub service: ServiceLabel,
}

/// Immutable directed multigraph over stops and stations.  Distances are in
/// km and always non-negative.  Do not construct directly; use
/// [`TransitGraphBuilder`] or [`build_graph`].
#[derive(Debug)]
pub struct TransitGraph {
    adjacency: FxHashMap<NodeId, FxHashMap<EdgeKey, f64>>,
    edge_count: usize,
}

impl TransitGraph {
    /// Number of nodes with at least one outgoing edge.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterator over the outgoing edges of `node` with their distances.
    /// Empty for nodes the graph has never seen as a source.
    pub fn edges_from<'a>(
        &'a self,
        node: &NodeId,
    ) -> impl Iterator<Item = (&'a EdgeKey, f64)> + 'a {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(key, &dist)| (key, dist)))
    }

    /// Distance of the `(from, to, service)` edge, if present.
    pub fn edge(&self, from: &NodeId, to: &NodeId, service: &ServiceLabel) -> Option<f64> {
        let key = EdgeKey { to: to.clone(), service: service.clone() };
        self.adjacency.get(from).and_then(|edges| edges.get(&key)).copied()
    }
}

// ── TransitGraphBuilder ───────────────────────────────────────────────────────

/// Construct a [`TransitGraph`] incrementally, then call
/// [`build`](Self::build).
pub struct TransitGraphBuilder {
    adjacency: FxHashMap<NodeId, FxHashMap<EdgeKey, f64>>,
}

impl TransitGraphBuilder {
    pub fn new() -> Self {
        Self { adjacency: FxHashMap::default() }
    }

    /// Add a directed edge.  `dist_km` must be non-negative; a repeated
    /// `(from, to, service)` triple replaces the earlier distance.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, service: ServiceLabel, dist_km: f64) {
        debug_assert!(dist_km >= 0.0, "edge distance must be non-negative");
        self.adjacency
            .entry(from)
            .or_default()
            .insert(EdgeKey { to, service }, dist_km);
    }

    /// Consume the builder and produce an immutable [`TransitGraph`].
    pub fn build(self) -> TransitGraph {
        let edge_count = self.adjacency.values().map(|edges| edges.len()).sum();
        TransitGraph { adjacency: self.adjacency, edge_count }
    }
}

impl Default for TransitGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ── Graph construction ────────────────────────────────────────────────────────

/// Build the full transit graph from scheduled routes and location tables.
/// Executed once at startup; the result is the sole graph for the process.
///
/// Two passes:
///
/// 1. For each route, one directed edge per consecutive stop pair, labeled
///    with the route's service, weighted by the non-negative difference of
///    cumulative distances (0 when either side is missing from the feed).
///    A route stop absent from the tables fails the build — a phantom node
///    would silently absorb traffic.
/// 2. For each station, one outward walking edge to every node within
///    `max_walk_km`, weighted by great-circle distance.  Walking links are
///    added outward from stations only; nothing walks back in, and no two
///    stops are linked.
pub fn build_graph(
    routes: &[ScheduledRoute],
    places: &Places,
    max_walk_km: f64,
) -> NetworkResult<TransitGraph> {
    let mut builder = TransitGraphBuilder::new();

    for route in routes {
        for stop in &route.stops {
            let known = match &stop.node {
                NodeId::BusStop(code) => places.stop(code).is_some(),
                NodeId::Station(name) => places.station(name).is_some(),
            };
            if !known {
                return Err(NetworkError::UnknownRouteStop {
                    service: route.service.clone(),
                    stop: stop.node.clone(),
                });
            }
        }

        let label = route.label();
        for pair in route.stops.windows(2) {
            let dist_km = match (pair[0].cumulative_km, pair[1].cumulative_km) {
                (Some(a), Some(b)) => (b - a).max(0.0),
                _ => 0.0,
            };
            builder.add_edge(pair[0].node.clone(), pair[1].node.clone(), label.clone(), dist_km);
        }
    }

    for station in places.stations() {
        let from = NodeId::station(station.name.clone());
        for nearby in places.nodes_within(station.location, max_walk_km) {
            builder.add_edge(from.clone(), nearby.node.id, ServiceLabel::walk(), nearby.walk_km);
        }
    }

    let graph = builder.build();
    log::info!(
        "transit graph built: {} nodes, {} edges ({} routes, walk radius {} km)",
        graph.node_count(),
        graph.edge_count(),
        routes.len(),
        max_walk_km
    );
    Ok(graph)
}
