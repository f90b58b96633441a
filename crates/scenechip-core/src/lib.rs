//! scenechip-core - Pure feature-engineering helpers for satellite imagery
//!
//! Given a ground sample (latitude, longitude, date), this crate computes
//! the catalog search inputs (bounding box, date range) and picks the best
//! matching scene from candidate catalog items. Everything here is a pure
//! function of its inputs; catalog search and raster access live elsewhere.

pub mod bbox;
pub mod daterange;
pub mod error;
pub mod models;
pub mod select;

pub use bbox::{bounding_box, DEFAULT_METER_BUFFER};
pub use daterange::{date_range, parse_date, DEFAULT_TIME_BUFFER_DAYS};
pub use error::{Result, SceneChipError};
pub use models::{BoundingBox, SceneAsset, SceneItem, SceneProperties};
pub use select::{select_best_scene, BestScene};
