//! Port trait definitions
//!
//! These traits are the seams to the external collaborators: the asset
//! signing service and the raster I/O library that does the actual decode,
//! windowed read, and clip. Implementations must release any raster
//! handles they open on every exit path, including I/O errors.

use async_trait::async_trait;
use ndarray::{Array2, Array3};
use scenechip_core::BoundingBox;

use crate::error::Result;

/// Port for producing authorized asset URLs.
#[async_trait]
pub trait AssetSigner: Send + Sync {
    /// Turn a raw asset href into one the raster reader may fetch.
    async fn sign(&self, href: &str) -> Result<String>;
}

/// Port for windowed raster reads, in geographic coordinates (EPSG:4326).
///
/// A single attempt per call; unreachable assets, non-intersecting
/// bounding boxes, and malformed raster data surface as errors.
#[async_trait]
pub trait RasterReader: Send + Sync {
    /// Read a single-band asset clipped to `bbox`, as a (height, width)
    /// array of native pixel values.
    async fn read_band(&self, href: &str, bbox: &BoundingBox) -> Result<Array2<f64>>;

    /// Read a multi-band visual asset clipped to `bbox`, as a
    /// (band, height, width) array of native pixel values.
    async fn read_visual(&self, href: &str, bbox: &BoundingBox) -> Result<Array3<f64>>;
}
