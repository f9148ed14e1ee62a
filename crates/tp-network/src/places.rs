//! Static location tables and the spatial proximity index.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) holds every stop and station as a 2-D
//! `[lat, lon]` point.  Proximity queries pre-filter in degree space with a
//! conservative radius, then apply the exact haversine rule
//! `0 < d < radius`, so the result set is identical to scanning the whole
//! table.  Houses are addressable destinations, not graph nodes, and are
//! kept out of the index.
//!
//! All tables are immutable once [`Places`] is constructed; every query
//! takes `&self` and is safe to call concurrently.

use rstar::{AABB, PointDistance, RTree, RTreeObject};
use rustc_hash::FxHashMap;

use tp_core::{GeoPoint, Node, NodeId, NodeKind};

use crate::{NetworkError, NetworkResult};

// ── Table records ─────────────────────────────────────────────────────────────

/// A bus stop: code, display name, position.
#[derive(Clone, Debug, PartialEq)]
pub struct Stop {
    pub code: String,
    pub name: String,
    pub location: GeoPoint,
}

/// A train station.  The name doubles as the identifier.
#[derive(Clone, Debug, PartialEq)]
pub struct Station {
    pub name: String,
    pub location: GeoPoint,
}

/// An addressable house, reachable only by walking from a nearby node.
#[derive(Clone, Debug, PartialEq)]
pub struct House {
    pub block: String,
    pub address: String,
    pub location: GeoPoint,
}

/// A stop or station found within walking range of a query point.
#[derive(Clone, Debug)]
pub struct NearbyNode {
    pub node: Node,
    /// Great-circle distance from the query point, km.
    pub walk_km: f64,
}

impl NearbyNode {
    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.node.kind()
    }
}

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the spatial index: a `[lat, lon]` point plus the kind and
/// table index of the place it refers to.
#[derive(Clone)]
struct PlaceEntry {
    point: [f64; 2],
    kind: NodeKind,
    idx: usize,
}

impl RTreeObject for PlaceEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for PlaceEntry {
    /// Squared Euclidean distance in degree space.  Only used for the
    /// coarse pre-filter; the exact haversine check runs afterwards.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── Places ────────────────────────────────────────────────────────────────────

/// Immutable location tables plus lookup maps and the spatial index.
pub struct Places {
    stops: Vec<Stop>,
    stations: Vec<Station>,
    houses: Vec<House>,
    stop_by_code: FxHashMap<String, usize>,
    station_by_name: FxHashMap<String, usize>,
    house_by_block: FxHashMap<String, usize>,
    spatial_idx: RTree<PlaceEntry>,
}

impl Places {
    /// Build the tables, rejecting duplicate identifiers.
    pub fn new(
        stops: Vec<Stop>,
        stations: Vec<Station>,
        houses: Vec<House>,
    ) -> NetworkResult<Self> {
        let mut stop_by_code = FxHashMap::default();
        for (i, stop) in stops.iter().enumerate() {
            if stop_by_code.insert(stop.code.clone(), i).is_some() {
                return Err(NetworkError::DuplicateStop(stop.code.clone()));
            }
        }

        let mut station_by_name = FxHashMap::default();
        for (i, station) in stations.iter().enumerate() {
            if station_by_name.insert(station.name.clone(), i).is_some() {
                return Err(NetworkError::DuplicateStation(station.name.clone()));
            }
        }

        let mut house_by_block = FxHashMap::default();
        for (i, house) in houses.iter().enumerate() {
            if house_by_block.insert(house.block.clone(), i).is_some() {
                return Err(NetworkError::DuplicateHouse(house.block.clone()));
            }
        }

        // Bulk-load the R-tree over stops + stations (not houses).
        let entries: Vec<PlaceEntry> = stops
            .iter()
            .enumerate()
            .map(|(i, s)| PlaceEntry {
                point: [s.location.lat, s.location.lon],
                kind: NodeKind::BusStop,
                idx: i,
            })
            .chain(stations.iter().enumerate().map(|(i, s)| PlaceEntry {
                point: [s.location.lat, s.location.lon],
                kind: NodeKind::Station,
                idx: i,
            }))
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        Ok(Self {
            stops,
            stations,
            houses,
            stop_by_code,
            station_by_name,
            house_by_block,
            spatial_idx,
        })
    }

    // ── Table access ──────────────────────────────────────────────────────

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn houses(&self) -> &[House] {
        &self.houses
    }

    pub fn stop(&self, code: &str) -> Option<&Stop> {
        self.stop_by_code.get(code).map(|&i| &self.stops[i])
    }

    pub fn station(&self, name: &str) -> Option<&Station> {
        self.station_by_name.get(name).map(|&i| &self.stations[i])
    }

    pub fn house(&self, block: &str) -> Option<&House> {
        self.house_by_block.get(block).map(|&i| &self.houses[i])
    }

    /// Resolve a graph node id to its display name and position.
    pub fn node(&self, id: &NodeId) -> Option<Node> {
        match id {
            NodeId::BusStop(code) => self.stop(code).map(|s| Node {
                id: id.clone(),
                name: s.name.clone(),
                location: s.location,
            }),
            NodeId::Station(name) => self.station(name).map(|s| Node {
                id: id.clone(),
                name: s.name.clone(),
                location: s.location,
            }),
        }
    }

    /// Like [`node`](Self::node), but failing with `UnknownNode`.
    pub fn require_node(&self, id: &NodeId) -> NetworkResult<Node> {
        self.node(id)
            .ok_or_else(|| NetworkError::UnknownNode(id.clone()))
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Every stop and station strictly within `radius_km` of `point`.
    ///
    /// A node exactly at `point` (distance 0) is excluded, so a destination
    /// sitting on top of a stop is never offered that stop as its own egress
    /// candidate.  No ordering guarantee.
    pub fn nodes_within(&self, point: GeoPoint, radius_km: f64) -> Vec<NearbyNode> {
        if radius_km <= 0.0 {
            return Vec::new();
        }

        // Conservative degree radius for the R-tree pre-filter: one degree
        // spans at least ~110.57 km of latitude and ~111.32·cos(lat) km of
        // longitude, so dividing by 110·cos(lat) over-covers on both axes.
        // ×2 on the squared bound accounts for the per-axis diagonal.
        let cos_lat = point.lat.to_radians().cos().abs().max(1e-3);
        let max_deg = radius_km / (110.0 * cos_lat);

        self.spatial_idx
            .locate_within_distance([point.lat, point.lon], 2.0 * max_deg * max_deg)
            .filter_map(|entry| {
                let node = self.entry_node(entry);
                let d = point.distance_km(node.location);
                (d > 0.0 && d < radius_km).then(|| NearbyNode { node, walk_km: d })
            })
            .collect()
    }

    fn entry_node(&self, entry: &PlaceEntry) -> Node {
        match entry.kind {
            NodeKind::BusStop => {
                let stop = &self.stops[entry.idx];
                Node {
                    id: NodeId::bus_stop(stop.code.clone()),
                    name: stop.name.clone(),
                    location: stop.location,
                }
            }
            NodeKind::Station => {
                let station = &self.stations[entry.idx];
                Node {
                    id: NodeId::station(station.name.clone()),
                    name: station.name.clone(),
                    location: station.location,
                }
            }
        }
    }
}
