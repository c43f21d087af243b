//! Autobahn Dashboard Library.
//! Core-Funktionalitaet als Library exportiert fuer Tests und Wiederverwendung.

pub mod app;
pub mod client;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AddOutcome, AppCommand, AppController, AppIntent, AppState, MarkerRecord, MarkerRegistry,
    SelectionState, TableState, UiState, ViewState,
};
pub use client::{FetchService, HttpTrafficClient, TrafficApi, TrafficError};
pub use crate::core::{
    Category, Coordinate, GeoBounds, GeoPoint, Item, ItemDetail, ItemRow, MapCamera, PopupContent,
    GERMANY_BOUNDS, GERMANY_CENTER,
};
pub use shared::DashboardOptions;
