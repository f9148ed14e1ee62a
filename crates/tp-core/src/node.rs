//! Node identity for the transit graph.
//!
//! Bus stops are identified by their numeric stop code, train stations by
//! their display name.  The two identifier spaces are disjoint; `NodeId`
//! keeps them apart as a tagged union from load time onward, so nothing
//! downstream ever inspects the shape of a string to decide what it refers
//! to.

use std::fmt;

use crate::GeoPoint;

/// Which kind of place a graph node is.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    BusStop,
    Station,
}

/// Identifier of a stop or station in the transit graph.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeId {
    /// A bus stop, keyed by its stop code (e.g. `"65011"`).
    BusStop(String),
    /// A train station, keyed by its name (e.g. `"Punggol"`).
    Station(String),
}

impl NodeId {
    pub fn bus_stop(code: impl Into<String>) -> Self {
        NodeId::BusStop(code.into())
    }

    pub fn station(name: impl Into<String>) -> Self {
        NodeId::Station(name.into())
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeId::BusStop(_) => NodeKind::BusStop,
            NodeId::Station(_) => NodeKind::Station,
        }
    }

    /// The raw identifier string (stop code or station name).
    pub fn as_str(&self) -> &str {
        match self {
            NodeId::BusStop(code) => code,
            NodeId::Station(name) => name,
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::BusStop(code) => write!(f, "BusStop({code})"),
            NodeId::Station(name) => write!(f, "Station({name})"),
        }
    }
}

/// A stop or station with its display name and position.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub location: GeoPoint,
}

impl Node {
    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.id.kind()
    }
}
