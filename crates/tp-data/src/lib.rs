//! `tp-data` — loading the planner's static data.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`loader`] | CSV table loaders, JSON route-feed loaders, `load_dataset`|
//! | [`error`]  | `DataError`, `DataResult<T>`                              |
//!
//! Everything here runs once at startup; the loaded tables and routes feed
//! `tp_network::build_graph` and are immutable afterwards.

pub mod error;
pub mod loader;


pub use error::{DataError, DataResult};
pub use loader::{
    load_bus_routes_json, load_bus_routes_reader, load_dataset, load_houses_csv,
    load_houses_reader, load_stations_csv, load_stations_reader, load_stops_csv,
    load_stops_reader, load_train_routes_json, load_train_routes_reader,
};
