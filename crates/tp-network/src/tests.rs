//! Unit tests for tp-network.
//!
//! All tests use hand-built tables; no data files are read.

#[cfg(test)]
mod helpers {
    use tp_core::GeoPoint;

    use crate::{House, Places, Station, Stop};

    /// Degrees per kilometre along a meridian (and, this close to the
    /// equator, along a parallel too).
    pub const DEG_PER_KM: f64 = 1.0 / 111.195;

    /// A point `lat_km`/`lon_km` kilometres from the origin.
    pub fn pt(lat_km: f64, lon_km: f64) -> GeoPoint {
        GeoPoint::new(lat_km * DEG_PER_KM, lon_km * DEG_PER_KM)
    }

    pub fn stop(code: &str, name: &str, at: GeoPoint) -> Stop {
        Stop { code: code.into(), name: name.into(), location: at }
    }

    pub fn station(name: &str, at: GeoPoint) -> Station {
        Station { name: name.into(), location: at }
    }

    pub fn house(block: &str, address: &str, at: GeoPoint) -> House {
        House { block: block.into(), address: address.into(), location: at }
    }

    /// Stations Alpha (origin) and Beta (0.2 km east), stop 1001 between
    /// them (0.1 km east), stop 1002 far away (5 km east), one house.
    pub fn small_places() -> Places {
        Places::new(
            vec![
                stop("1001", "Alpha Gate", pt(0.0, 0.1)),
                stop("1002", "Far End", pt(0.0, 5.0)),
            ],
            vec![station("Alpha", pt(0.0, 0.0)), station("Beta", pt(0.0, 0.2))],
            vec![house("128A", "12 Alpha Rd", pt(0.05, 0.1))],
        )
        .unwrap()
    }
}

// ── Table lookups ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod places {
    use tp_core::NodeId;

    use super::helpers::{house, pt, small_places, station, stop};
    use crate::{NetworkError, Places};

    #[test]
    fn lookups() {
        let places = small_places();
        assert_eq!(places.stop("1001").unwrap().name, "Alpha Gate");
        assert!(places.stop("9999").is_none());
        assert_eq!(places.station("Beta").unwrap().name, "Beta");
        assert!(places.station("Gamma").is_none());
        assert_eq!(places.house("128A").unwrap().address, "12 Alpha Rd");
        assert!(places.house("999Z").is_none());
    }

    #[test]
    fn node_resolution() {
        let places = small_places();
        let node = places.node(&NodeId::bus_stop("1001")).unwrap();
        assert_eq!(node.name, "Alpha Gate");

        // Stop codes and station names live in different identifier spaces.
        assert!(places.node(&NodeId::station("1001")).is_none());

        let err = places.require_node(&NodeId::station("Gamma")).unwrap_err();
        assert!(matches!(err, NetworkError::UnknownNode(_)));
    }

    #[test]
    fn duplicate_stop_rejected() {
        let result = Places::new(
            vec![stop("1001", "A", pt(0.0, 0.0)), stop("1001", "B", pt(0.0, 1.0))],
            vec![],
            vec![],
        );
        assert!(matches!(result, Err(NetworkError::DuplicateStop(code)) if code == "1001"));
    }

    #[test]
    fn duplicate_station_rejected() {
        let result = Places::new(
            vec![],
            vec![station("Alpha", pt(0.0, 0.0)), station("Alpha", pt(0.0, 1.0))],
            vec![],
        );
        assert!(matches!(result, Err(NetworkError::DuplicateStation(_))));
    }

    #[test]
    fn duplicate_house_rejected() {
        let result = Places::new(
            vec![],
            vec![],
            vec![house("128A", "a", pt(0.0, 0.0)), house("128A", "b", pt(0.0, 1.0))],
        );
        assert!(matches!(result, Err(NetworkError::DuplicateHouse(_))));
    }
}

// ── Spatial proximity ─────────────────────────────────────────────────────────

#[cfg(test)]
mod spatial {
    use tp_core::NodeKind;

    use super::helpers::{pt, small_places};

    #[test]
    fn radius_filters_and_tags() {
        let places = small_places();
        // From the house: stop 1001 (~0.11 km), Alpha and Beta (~0.11 km and
        // ~0.11 km) are in range; 1002 (≈4.9 km) is not.
        let mut found = places.nodes_within(pt(0.05, 0.1), 0.35);
        found.sort_by(|a, b| a.node.id.cmp(&b.node.id));

        let ids: Vec<_> = found.iter().map(|n| n.node.id.as_str().to_owned()).collect();
        assert_eq!(ids, ["1001", "Alpha", "Beta"]);
        assert_eq!(found[0].kind(), NodeKind::BusStop);
        assert_eq!(found[1].kind(), NodeKind::Station);
        for n in &found {
            assert!(n.walk_km > 0.0 && n.walk_km < 0.35, "walk_km {}", n.walk_km);
        }
    }

    #[test]
    fn coincident_node_excluded() {
        let places = small_places();
        // Querying from Alpha's own position: Alpha itself (distance 0) must
        // not come back; 1001 and Beta must.
        let found = places.nodes_within(pt(0.0, 0.0), 0.35);
        assert!(found.iter().all(|n| n.node.id.as_str() != "Alpha"));
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn radius_is_exclusive() {
        let places = small_places();
        // A radius exactly equal to Beta's distance excludes Beta: the
        // filter is 0 < d < radius, both bounds strict.
        let beta_km = pt(0.0, 0.0).distance_km(pt(0.0, 0.2));
        let found = places.nodes_within(pt(0.0, 0.0), beta_km);
        assert!(found.iter().all(|n| n.node.id.as_str() != "Beta"));
    }

    #[test]
    fn zero_radius_finds_nothing() {
        let places = small_places();
        assert!(places.nodes_within(pt(0.0, 0.1), 0.0).is_empty());
    }

    #[test]
    fn distances_match_haversine() {
        let places = small_places();
        let query = pt(0.05, 0.1);
        for n in places.nodes_within(query, 0.35) {
            let expect = query.distance_km(n.node.location);
            assert!((n.walk_km - expect).abs() < 1e-12);
        }
    }
}

// ── Graph construction ────────────────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use tp_core::{Mode, NodeId, ServiceLabel};

    use super::helpers::small_places;
    use crate::{NetworkError, RouteStop, ScheduledRoute, TransitGraphBuilder, build_graph};

    fn bus_route(service: &str, stops: &[(&str, Option<f64>)]) -> ScheduledRoute {
        ScheduledRoute {
            service: service.into(),
            direction: 1,
            mode: Mode::Bus,
            stops: stops
                .iter()
                .map(|(code, km)| RouteStop {
                    node: NodeId::bus_stop(*code),
                    cumulative_km: *km,
                })
                .collect(),
        }
    }

    fn train_route(service: &str, stops: &[(&str, Option<f64>)]) -> ScheduledRoute {
        ScheduledRoute {
            service: service.into(),
            direction: 1,
            mode: Mode::Train,
            stops: stops
                .iter()
                .map(|(name, km)| RouteStop {
                    node: NodeId::station(*name),
                    cumulative_km: *km,
                })
                .collect(),
        }
    }

    #[test]
    fn consecutive_pairs_become_edges() {
        let places = small_places();
        let routes = [bus_route("84", &[("1001", Some(0.2)), ("1002", Some(5.1))])];
        let graph = build_graph(&routes, &places, 0.0).unwrap();

        let label = ServiceLabel::new("84", 1, Mode::Bus);
        let dist = graph
            .edge(&NodeId::bus_stop("1001"), &NodeId::bus_stop("1002"), &label)
            .unwrap();
        assert!((dist - 4.9).abs() < 1e-12);
        // Directed: no reverse edge.
        assert!(
            graph
                .edge(&NodeId::bus_stop("1002"), &NodeId::bus_stop("1001"), &label)
                .is_none()
        );
    }

    #[test]
    fn missing_cumulative_distance_is_zero_length() {
        let places = small_places();
        let routes = [bus_route("84", &[("1001", None), ("1002", Some(5.1))])];
        let graph = build_graph(&routes, &places, 0.0).unwrap();
        let label = ServiceLabel::new("84", 1, Mode::Bus);
        assert_eq!(
            graph.edge(&NodeId::bus_stop("1001"), &NodeId::bus_stop("1002"), &label),
            Some(0.0)
        );
    }

    #[test]
    fn decreasing_cumulative_distance_clamps_to_zero() {
        let places = small_places();
        let routes = [bus_route("84", &[("1001", Some(3.0)), ("1002", Some(2.0))])];
        let graph = build_graph(&routes, &places, 0.0).unwrap();
        let label = ServiceLabel::new("84", 1, Mode::Bus);
        assert_eq!(
            graph.edge(&NodeId::bus_stop("1001"), &NodeId::bus_stop("1002"), &label),
            Some(0.0)
        );
    }

    #[test]
    fn unknown_route_stop_fails_fast() {
        let places = small_places();
        let routes = [bus_route("84", &[("1001", Some(0.0)), ("9999", Some(1.0))])];
        let err = build_graph(&routes, &places, 0.0).unwrap_err();
        match err {
            NetworkError::UnknownRouteStop { service, stop } => {
                assert_eq!(service, "84");
                assert_eq!(stop, NodeId::bus_stop("9999"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn same_pair_under_two_services_keeps_both_edges() {
        let places = small_places();
        let routes = [
            bus_route("84", &[("1001", Some(0.0)), ("1002", Some(4.9))]),
            bus_route("85", &[("1001", Some(0.0)), ("1002", Some(5.3))]),
        ];
        let graph = build_graph(&routes, &places, 0.0).unwrap();
        let from = NodeId::bus_stop("1001");
        assert_eq!(graph.edges_from(&from).count(), 2);
    }

    #[test]
    fn repeated_edge_replaces_distance() {
        let mut b = TransitGraphBuilder::new();
        let label = ServiceLabel::new("84", 1, Mode::Bus);
        b.add_edge(NodeId::bus_stop("1"), NodeId::bus_stop("2"), label.clone(), 1.0);
        b.add_edge(NodeId::bus_stop("1"), NodeId::bus_stop("2"), label.clone(), 2.0);
        let graph = b.build();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge(&NodeId::bus_stop("1"), &NodeId::bus_stop("2"), &label), Some(2.0));
    }

    #[test]
    fn train_edges_between_stations() {
        let places = small_places();
        let routes = [train_route("EW", &[("Alpha", Some(0.0)), ("Beta", Some(0.2))])];
        let graph = build_graph(&routes, &places, 0.0).unwrap();
        let label = ServiceLabel::new("EW", 1, Mode::Train);
        let dist = graph
            .edge(&NodeId::station("Alpha"), &NodeId::station("Beta"), &label)
            .unwrap();
        assert!((dist - 0.2).abs() < 1e-12);
    }
}

// ── Walking links ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod walking {
    use tp_core::{NodeId, ServiceLabel};

    use super::helpers::{pt, small_places};
    use crate::build_graph;

    #[test]
    fn stations_walk_out_to_nearby_nodes() {
        let places = small_places();
        let graph = build_graph(&[], &places, 0.35).unwrap();

        let walk = ServiceLabel::walk();
        let alpha = NodeId::station("Alpha");

        // Alpha reaches the nearby stop and the nearby station, weighted by
        // great-circle distance.
        let to_stop = graph.edge(&alpha, &NodeId::bus_stop("1001"), &walk).unwrap();
        assert!((to_stop - pt(0.0, 0.0).distance_km(pt(0.0, 0.1))).abs() < 1e-12);
        assert!(graph.edge(&alpha, &NodeId::station("Beta"), &walk).is_some());

        // The far stop is out of range.
        assert!(graph.edge(&alpha, &NodeId::bus_stop("1002"), &walk).is_none());
    }

    /// Walking links are one-directional by design: stations walk out, but
    /// no stop walks anywhere — not back to a station, not to another stop.
    #[test]
    fn stops_never_walk() {
        let places = small_places();
        let graph = build_graph(&[], &places, 0.35).unwrap();
        assert_eq!(graph.edges_from(&NodeId::bus_stop("1001")).count(), 0);
    }

    #[test]
    fn zero_radius_adds_no_walk_links() {
        let places = small_places();
        let graph = build_graph(&[], &places, 0.0).unwrap();
        assert!(graph.is_empty());
    }
}
