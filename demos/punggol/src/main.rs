//! punggol — end-to-end demo of the rust_tp transit planner.
//!
//! Plans routes over a miniature Punggol-area dataset (a few LRT stations,
//! one bus service, two houses) and prints the itinerary the planner picks
//! under each cost preset.  Swap the embedded constants for
//! `tp_data::load_dataset` pointed at real exports to run at full scale.

use std::io::Cursor;

use anyhow::Result;

use tp_core::{CostModel, DEFAULT_MAX_WALK_KM};
use tp_data::{
    load_bus_routes_reader, load_houses_reader, load_stations_reader, load_stops_reader,
    load_train_routes_reader,
};
use tp_network::{Places, build_graph};
use tp_route::{RoutePlanner, describe_route};

// ── Query ─────────────────────────────────────────────────────────────────────

const START_STATION: &str = "Punggol";
const DEST_BLOCK: &str = "128A";

// ── Embedded dataset ──────────────────────────────────────────────────────────

const STOPS_CSV: &str = "\
code,name,latitude,longitude
65011,Punggol Temp Int,1.4047,103.9031
65199,Aft Punggol Field,1.4005,103.9080
65209,Blk 128 CP,1.3965,103.9135
65271,Blk 156,1.3942,103.9172
";

const STATIONS_CSV: &str = "\
name,latitude,longitude
Punggol,1.4053,103.9024
Cove,1.3994,103.9059
Meridian,1.3969,103.9089
Coral Edge,1.3939,103.9126
Riviera,1.3945,103.9161
Kadaloor,1.3996,103.9165
";

const HOUSES_CSV: &str = "\
block,address,latitude,longitude
128A,128A Punggol Field Walk,1.3960,103.9140
171C,171C Punggol Field,1.4013,103.9068
";

const BUS_ROUTES_JSON: &str = r#"[
    {"ServiceNo": "84", "Direction": 1, "BusStopCode": "65011", "Distance": 0.0},
    {"ServiceNo": "84", "Direction": 1, "BusStopCode": "65199", "Distance": 0.7},
    {"ServiceNo": "84", "Direction": 1, "BusStopCode": "65209", "Distance": 1.5},
    {"ServiceNo": "84", "Direction": 1, "BusStopCode": "65271", "Distance": 2.1}
]"#;

const TRAIN_ROUTES_JSON: &str = r#"[
    {"ServiceName": "PE", "Direction": 1, "StationName": "Punggol", "Distance": 0.0},
    {"ServiceName": "PE", "Direction": 1, "StationName": "Cove", "Distance": 0.8},
    {"ServiceName": "PE", "Direction": 1, "StationName": "Meridian", "Distance": 1.2},
    {"ServiceName": "PE", "Direction": 1, "StationName": "Coral Edge", "Distance": 1.7},
    {"ServiceName": "PE", "Direction": 1, "StationName": "Riviera", "Distance": 2.1},
    {"ServiceName": "PE", "Direction": 1, "StationName": "Kadaloor", "Distance": 2.7}
]"#;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== punggol — rust_tp transit planner ===");
    println!();

    // 1. Load tables and route feeds.
    let stops = load_stops_reader(Cursor::new(STOPS_CSV))?;
    let stations = load_stations_reader(Cursor::new(STATIONS_CSV))?;
    let houses = load_houses_reader(Cursor::new(HOUSES_CSV))?;
    let mut routes = load_bus_routes_reader(Cursor::new(BUS_ROUTES_JSON))?;
    routes.extend(load_train_routes_reader(Cursor::new(TRAIN_ROUTES_JSON))?);
    println!(
        "Tables: {} stops, {} stations, {} houses, {} routes",
        stops.len(),
        stations.len(),
        houses.len(),
        routes.len()
    );

    // 2. Build the graph — once; it is immutable afterwards.
    let places = Places::new(stops, stations, houses)?;
    let graph = build_graph(&routes, &places, DEFAULT_MAX_WALK_KM)?;
    println!("Graph:  {} nodes, {} edges", graph.node_count(), graph.edge_count());

    // 3. One planner, shared; a fresh CostModel per query.
    let planner = RoutePlanner::new(graph, places);
    let presets = [
        ("Shortest Route", CostModel::shortest_route()),
        ("Least Transfers", CostModel::least_transfers()),
        ("Prefer Bus", CostModel::prefer_bus()),
        ("Prefer Train", CostModel::prefer_train()),
    ];

    for (name, costs) in presets {
        let route = planner.plan(&costs, START_STATION, DEST_BLOCK)?;
        println!();
        println!("{name}: {START_STATION} → BLK {DEST_BLOCK}");
        for line in describe_route(&route, planner.places())? {
            println!("  {line}");
        }
    }

    Ok(())
}
