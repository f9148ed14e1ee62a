//! Cost-augmented shortest-path search.
//!
//! # Search state
//!
//! The search state is `(node, arrived_by)`, not the node alone.  Two
//! arrivals at the same node on different services are distinct states: the
//! transfer penalty of the *next* hop depends on the incoming service, so a
//! per-node visited set would discard arrivals that only pay off later.
//!
//! # Cost vs. distance
//!
//! Cost orders the priority queue; distance in km rides along purely for
//! reporting.  Every step cost is non-negative, so Dijkstra's
//! first-close-is-final property holds over the augmented state space.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use tp_core::{CostModel, Mode, NodeId, ServiceLabel};
use tp_network::TransitGraph;

use crate::{PlanError, PlanResult};

/// Route distances contribute to cost at 10 units per kilometre.
const KM_COST_SCALE: f64 = 10.0;

/// One hop of a computed path: the node reached, the label of the edge that
/// reached it (`None` only for the starting step), and that edge's length.
#[derive(Clone, Debug, PartialEq)]
pub struct PathStep {
    pub node: NodeId,
    pub service: Option<ServiceLabel>,
    pub distance_km: f64,
}

/// Search state: a node together with the service that reached it.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
struct SearchKey {
    node: NodeId,
    arrived_by: Option<ServiceLabel>,
}

/// Heap record.  Ordered strictly by accumulated cost; ties break by
/// accumulated distance, then by `SearchKey` ordering, so two runs of the
/// same query always pop in the same order.
#[derive(Clone, Debug)]
struct HeapEntry {
    cost: f64,
    distance_km: f64,
    key: SearchKey,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.distance_km.total_cmp(&other.distance_km))
            .then_with(|| self.key.cmp(&other.key))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

// ── Cost rules ────────────────────────────────────────────────────────────────

/// Flat penalty for continuing on `next` after arriving via `prev`.
///
/// Charged whenever the previous leg ran under a different label on a
/// non-walk service.  A previous *walking* leg is never something to
/// transfer from; stepping off a service onto a walking edge, however, does
/// count as leaving that service and is charged.
fn transfer_penalty(costs: &CostModel, prev: Option<&ServiceLabel>, next: &ServiceLabel) -> f64 {
    match prev {
        Some(p) if p.mode != Mode::Walk && p != next => costs.transfer_cost,
        _ => 0.0,
    }
}

/// Cost of traversing one edge of length `dist_km` under `label`.
fn step_cost(costs: &CostModel, label: &ServiceLabel, dist_km: f64) -> f64 {
    match label.mode {
        Mode::Bus => costs.bus_stop_cost + dist_km * KM_COST_SCALE,
        Mode::Train => costs.train_stop_cost + dist_km * KM_COST_SCALE,
        Mode::Walk => (costs.walk_cost_per_km + 1.0) * dist_km * KM_COST_SCALE,
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

/// Minimum-cost path from `start` to `end` under `costs`.
///
/// Returns the total in-graph distance in km together with the path, which
/// always begins with `(start, None, 0.0)`.  When `start == end` the path
/// is that single step and the distance is 0.  `Err(PlanError::NoRoute)`
/// when `end` is unreachable — a definite negative, not an exception path.
pub fn shortest_path(
    graph: &TransitGraph,
    costs: &CostModel,
    start: &NodeId,
    end: &NodeId,
) -> PlanResult<(f64, Vec<PathStep>)> {
    let start_key = SearchKey { node: start.clone(), arrived_by: None };

    // Best known cost per state.  Doubles as the closed set: a popped entry
    // whose cost exceeds its state's best is stale and gets skipped.
    let mut best: FxHashMap<SearchKey, f64> = FxHashMap::default();
    // Predecessor state and incoming-edge length of each state's best arrival.
    let mut prev: FxHashMap<SearchKey, (SearchKey, f64)> = FxHashMap::default();
    let mut heap = BinaryHeap::new();

    best.insert(start_key.clone(), 0.0);
    heap.push(Reverse(HeapEntry { cost: 0.0, distance_km: 0.0, key: start_key }));

    while let Some(Reverse(entry)) = heap.pop() {
        if entry.key.node == *end {
            return Ok((entry.distance_km, reconstruct(&prev, entry.key)));
        }
        if best.get(&entry.key).is_some_and(|&c| entry.cost > c) {
            continue; // stale
        }

        for (edge, dist_km) in graph.edges_from(&entry.key.node) {
            let cost = entry.cost
                + transfer_penalty(costs, entry.key.arrived_by.as_ref(), &edge.service)
                + step_cost(costs, &edge.service, dist_km);
            let key = SearchKey {
                node: edge.to.clone(),
                arrived_by: Some(edge.service.clone()),
            };

            if best.get(&key).is_none_or(|&c| cost < c) {
                best.insert(key.clone(), cost);
                prev.insert(key.clone(), (entry.key.clone(), dist_km));
                heap.push(Reverse(HeapEntry {
                    cost,
                    distance_km: entry.distance_km + dist_km,
                    key,
                }));
            }
        }
    }

    Err(PlanError::NoRoute { from: start.clone(), to: end.clone() })
}

/// Walk the predecessor map back from the final state to the start.
///
/// The start state is the only one with `arrived_by == None`, and it is the
/// only state with no predecessor entry, so the walk terminates there.
fn reconstruct(prev: &FxHashMap<SearchKey, (SearchKey, f64)>, last: SearchKey) -> Vec<PathStep> {
    let mut steps = Vec::new();
    let mut cur = last;
    while let Some((before, dist_km)) = prev.get(&cur) {
        let dist_km = *dist_km;
        let before = before.clone();
        steps.push(PathStep { node: cur.node, service: cur.arrived_by, distance_km: dist_km });
        cur = before;
    }
    steps.push(PathStep { node: cur.node, service: cur.arrived_by, distance_km: 0.0 });
    steps.reverse();
    steps
}
