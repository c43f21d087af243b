//! Domaenenmodell: Kategorien, Items, Geo-Koordinaten, Kamera, Popups.

pub mod camera;
pub mod category;
pub mod geo;
pub mod item;
pub mod popup;

pub use camera::MapCamera;
pub use category::Category;
pub use geo::{parse_coordinate, CoordinateParseError, GeoBounds, GeoPoint, GERMANY_BOUNDS, GERMANY_CENTER};
pub use item::{blocked_display, format_start_timestamp, Coordinate, Item, ItemDetail, ItemRow};
pub use popup::PopupContent;
