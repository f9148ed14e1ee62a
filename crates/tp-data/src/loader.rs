//! CSV table loaders and JSON route-feed loaders.
//!
//! # CSV formats
//!
//! One row per record, headers required:
//!
//! ```csv
//! code,name,latitude,longitude          # stops.csv
//! name,latitude,longitude               # stations.csv
//! block,address,latitude,longitude      # houses.csv
//! ```
//!
//! # Route feeds
//!
//! The route feeds are JSON arrays of flat per-stop records in sequence
//! order, one array per mode:
//!
//! ```json
//! [{"ServiceNo": "84", "Direction": 1, "BusStopCode": "65011", "Distance": 0.0}, …]
//! [{"ServiceName": "PE", "Direction": 1, "StationName": "Punggol", "Distance": 0.0}, …]
//! ```
//!
//! `Distance` is the cumulative along-route distance and may be `null`.
//! Records are grouped into one [`ScheduledRoute`] per `(service,
//! direction)`, preserving file order within each group.
//!
//! Every loader comes in a `_csv`/`_json` path flavour and a `_reader`
//! flavour accepting any `Read` source, which is what the tests and the
//! demo use (pass a `std::io::Cursor`).

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use tp_core::{GeoPoint, Mode, NodeId};
use tp_network::{House, Places, RouteStop, ScheduledRoute, Station, Stop};

use crate::{DataError, DataResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct StopRecord {
    code: String,
    name: String,
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct StationRecord {
    name: String,
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct HouseRecord {
    block: String,
    address: String,
    latitude: f64,
    longitude: f64,
}

// ── JSON records ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct BusRouteRecord {
    #[serde(rename = "ServiceNo")]
    service_no: String,
    #[serde(rename = "Direction")]
    direction: u8,
    #[serde(rename = "BusStopCode")]
    bus_stop_code: String,
    #[serde(rename = "Distance")]
    distance: Option<f64>,
}

#[derive(Deserialize)]
struct TrainRouteRecord {
    #[serde(rename = "ServiceName")]
    service_name: String,
    #[serde(rename = "Direction")]
    direction: u8,
    #[serde(rename = "StationName")]
    station_name: String,
    #[serde(rename = "Distance")]
    distance: Option<f64>,
}

// ── Table loaders ─────────────────────────────────────────────────────────────

pub fn load_stops_csv(path: &Path) -> DataResult<Vec<Stop>> {
    load_stops_reader(std::fs::File::open(path)?)
}

pub fn load_stops_reader<R: Read>(reader: R) -> DataResult<Vec<Stop>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize::<StopRecord>()
        .map(|row| {
            let row = row.map_err(|e| DataError::Parse(e.to_string()))?;
            Ok(Stop {
                code: row.code,
                name: row.name,
                location: GeoPoint::new(row.latitude, row.longitude),
            })
        })
        .collect()
}

pub fn load_stations_csv(path: &Path) -> DataResult<Vec<Station>> {
    load_stations_reader(std::fs::File::open(path)?)
}

pub fn load_stations_reader<R: Read>(reader: R) -> DataResult<Vec<Station>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize::<StationRecord>()
        .map(|row| {
            let row = row.map_err(|e| DataError::Parse(e.to_string()))?;
            Ok(Station {
                name: row.name,
                location: GeoPoint::new(row.latitude, row.longitude),
            })
        })
        .collect()
}

pub fn load_houses_csv(path: &Path) -> DataResult<Vec<House>> {
    load_houses_reader(std::fs::File::open(path)?)
}

pub fn load_houses_reader<R: Read>(reader: R) -> DataResult<Vec<House>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize::<HouseRecord>()
        .map(|row| {
            let row = row.map_err(|e| DataError::Parse(e.to_string()))?;
            Ok(House {
                block: row.block,
                address: row.address,
                location: GeoPoint::new(row.latitude, row.longitude),
            })
        })
        .collect()
}

// ── Route-feed loaders ────────────────────────────────────────────────────────

pub fn load_bus_routes_json(path: &Path) -> DataResult<Vec<ScheduledRoute>> {
    load_bus_routes_reader(std::fs::File::open(path)?)
}

pub fn load_bus_routes_reader<R: Read>(reader: R) -> DataResult<Vec<ScheduledRoute>> {
    let records: Vec<BusRouteRecord> =
        serde_json::from_reader(reader).map_err(|e| DataError::Parse(e.to_string()))?;
    Ok(group_routes(
        records.into_iter().map(|r| {
            (
                r.service_no,
                r.direction,
                Mode::Bus,
                RouteStop { node: NodeId::bus_stop(r.bus_stop_code), cumulative_km: r.distance },
            )
        }),
    ))
}

pub fn load_train_routes_json(path: &Path) -> DataResult<Vec<ScheduledRoute>> {
    load_train_routes_reader(std::fs::File::open(path)?)
}

pub fn load_train_routes_reader<R: Read>(reader: R) -> DataResult<Vec<ScheduledRoute>> {
    let records: Vec<TrainRouteRecord> =
        serde_json::from_reader(reader).map_err(|e| DataError::Parse(e.to_string()))?;
    Ok(group_routes(
        records.into_iter().map(|r| {
            (
                r.service_name,
                r.direction,
                Mode::Train,
                RouteStop { node: NodeId::station(r.station_name), cumulative_km: r.distance },
            )
        }),
    ))
}

/// Group flat per-stop records into one `ScheduledRoute` per
/// `(service, direction)`, in first-appearance order, preserving record
/// order within each group.
fn group_routes(
    records: impl Iterator<Item = (String, u8, Mode, RouteStop)>,
) -> Vec<ScheduledRoute> {
    let mut routes: Vec<ScheduledRoute> = Vec::new();
    let mut index: FxHashMap<(String, u8), usize> = FxHashMap::default();

    for (service, direction, mode, stop) in records {
        let key = (service.clone(), direction);
        let idx = *index.entry(key).or_insert_with(|| {
            routes.push(ScheduledRoute { service, direction, mode, stops: Vec::new() });
            routes.len() - 1
        });
        routes[idx].stops.push(stop);
    }

    routes
}

// ── Dataset assembly ──────────────────────────────────────────────────────────

/// Load a complete dataset from a directory holding `stops.csv`,
/// `stations.csv`, `houses.csv`, `bus_routes.json`, and `train_routes.json`.
pub fn load_dataset(dir: &Path) -> DataResult<(Places, Vec<ScheduledRoute>)> {
    let stops = load_stops_csv(&dir.join("stops.csv"))?;
    let stations = load_stations_csv(&dir.join("stations.csv"))?;
    let houses = load_houses_csv(&dir.join("houses.csv"))?;

    let mut routes = load_bus_routes_json(&dir.join("bus_routes.json"))?;
    routes.extend(load_train_routes_json(&dir.join("train_routes.json"))?);

    log::info!(
        "loaded dataset from {}: {} stops, {} stations, {} houses, {} routes",
        dir.display(),
        stops.len(),
        stations.len(),
        houses.len(),
        routes.len()
    );

    let places = Places::new(stops, stations, houses)?;
    Ok((places, routes))
}
