//! Catalog item models shared across the scenechip crates.
//!
//! Lightweight serde models for the subset of a STAC Item this library
//! reads: acquisition datetime, platform, bounding box, and asset hrefs.
//! Items are produced by an external catalog client and never mutated here.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::daterange::parse_date;
use crate::error::{Result, SceneChipError};

/// Rectangular geographic extent in lon/lat degrees (EPSG:4326).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self { min_lon, min_lat, max_lon, max_lat }
    }

    /// The `[minx, miny, maxx, maxy]` layout used by STAC search requests.
    pub fn to_array(&self) -> [f64; 4] {
        [self.min_lon, self.min_lat, self.max_lon, self.max_lat]
    }

    /// Strict containment: a point exactly on an edge is outside.
    pub fn contains_strict(&self, longitude: f64, latitude: f64) -> bool {
        self.min_lat < latitude
            && latitude < self.max_lat
            && self.min_lon < longitude
            && longitude < self.max_lon
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from(b: [f64; 4]) -> Self {
        Self::new(b[0], b[1], b[2], b[3])
    }
}

/// A single scene from a spatio-temporal asset catalog (GeoJSON Feature).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SceneItem {
    /// Unique item identifier.
    pub id: String,

    /// Bounding box `[west, south, east, north]`.
    #[serde(default)]
    pub bbox: Vec<f64>,

    pub properties: SceneProperties,

    #[serde(default)]
    pub assets: HashMap<String, SceneAsset>,

    /// Collection this item belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
}

impl SceneItem {
    /// Get an asset by key.
    pub fn asset(&self, key: &str) -> Option<&SceneAsset> {
        self.assets.get(key)
    }

    /// Platform name, if the catalog reported one.
    pub fn platform(&self) -> Option<&str> {
        self.properties.platform.as_deref()
    }

    /// The item's spatial extent, when the bbox has the 2-D layout.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        if self.bbox.len() == 4 {
            Some(BoundingBox::new(self.bbox[0], self.bbox[1], self.bbox[2], self.bbox[3]))
        } else {
            None
        }
    }

    /// Acquisition date (day granularity) parsed from `properties.datetime`.
    pub fn acquired_on(&self) -> Result<NaiveDate> {
        let raw = self.properties.datetime.as_deref().ok_or_else(|| {
            SceneChipError::MissingField {
                item_id: self.id.clone(),
                field: "datetime".to_string(),
            }
        })?;
        parse_date(raw)
    }
}

/// STAC Item properties.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SceneProperties {
    /// ISO 8601 acquisition datetime.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,

    /// Platform name (e.g., "sentinel-2a", "landsat-8").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    /// Cloud cover percentage (EO extension).
    #[serde(rename = "eo:cloud_cover", default, skip_serializing_if = "Option::is_none")]
    pub eo_cloud_cover: Option<f64>,

    /// All other properties we don't model explicitly.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// A single scene asset (file reference).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SceneAsset {
    /// URL to the asset file; must be signed before access on catalogs
    /// that gate their storage.
    pub href: String,

    /// Media type (e.g., `"image/tiff; application=geotiff"`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    /// Human-readable title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Roles: `["data"]`, `["visual"]`, `["thumbnail"]`, etc.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}
