//! Per-query cost weights.
//!
//! A `CostModel` is a plain value constructed fresh for every request and
//! passed explicitly through the search.  It is never stored in shared
//! mutable state: concurrent requests with different presets would otherwise
//! corrupt each other's in-flight searches.
//!
//! The search itself accepts any weight tuple; the named constructors are
//! just the tuples the surrounding application exposes as user options.

/// Default walking radius in kilometres, used both when wiring stations to
/// nearby nodes at graph-build time and when enumerating egress candidates
/// around a destination address.
pub const DEFAULT_MAX_WALK_KM: f64 = 0.35;

/// Weights biasing the shortest-path search.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostModel {
    /// Flat penalty for switching between two different non-walk services.
    pub transfer_cost: f64,
    /// Per-hop cost of riding a bus one stop further.
    pub bus_stop_cost: f64,
    /// Per-hop cost of riding a train one station further.
    pub train_stop_cost: f64,
    /// Distance weight applied to walking legs.
    pub walk_cost_per_km: f64,
}

const WALK_COST_PER_KM: f64 = 40.0;

impl CostModel {
    pub fn new(
        transfer_cost: f64,
        bus_stop_cost: f64,
        train_stop_cost: f64,
        walk_cost_per_km: f64,
    ) -> Self {
        Self { transfer_cost, bus_stop_cost, train_stop_cost, walk_cost_per_km }
    }

    /// "Shortest Route" — balanced weights.
    pub fn shortest_route() -> Self {
        Self::new(3.0, 7.0, 5.0, WALK_COST_PER_KM)
    }

    /// "Least Transfers" — changing services is effectively prohibitive.
    pub fn least_transfers() -> Self {
        Self::new(99.0, 7.0, 5.0, WALK_COST_PER_KM)
    }

    /// "Prefer Bus" — free bus hops, prohibitive train hops.
    pub fn prefer_bus() -> Self {
        Self::new(0.0, 0.0, 99.0, WALK_COST_PER_KM)
    }

    /// "Prefer Train" — free train hops, prohibitive bus hops.
    pub fn prefer_train() -> Self {
        Self::new(0.0, 99.0, 0.0, WALK_COST_PER_KM)
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self::shortest_route()
    }
}
