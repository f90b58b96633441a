//! Crop RGB chips from selected scenes.
//!
//! Two product families, one cropper each. Landsat scenes expose separate
//! red/green/blue band assets that get stacked and min-max rescaled into
//! [0, 255]; Sentinel-2 scenes ship a pre-composited `visual` asset whose
//! native pixel values are returned as-is. The rescaling asymmetry is
//! deliberate; downstream consumers expect it.

use ndarray::{Array3, Axis};
use scenechip_core::{BoundingBox, SceneItem};

use crate::error::{RasterError, Result};
use crate::ports::{AssetSigner, RasterReader};

/// Band asset keys read for a Landsat chip, in channel order.
pub const LANDSAT_RGB_BANDS: [&str; 3] = ["red", "green", "blue"];

/// Asset key of the pre-composited Sentinel-2 RGB product.
pub const VISUAL_ASSET: &str = "visual";

/// An RGB chip with axes (channel, height, width).
pub type ImageChip = Array3<f64>;

/// Crop an RGB chip from a Landsat scene.
///
/// Reads the red, green, and blue band assets clipped to `bbox`, stacks
/// them into a (3, height, width) array, and min-max rescales the stack
/// into [0, 255]. The rescale is over the whole chip, not per band.
pub async fn crop_landsat_chip(
    item: &SceneItem,
    bbox: &BoundingBox,
    signer: &dyn AssetSigner,
    reader: &dyn RasterReader,
) -> Result<ImageChip> {
    let mut bands = Vec::with_capacity(LANDSAT_RGB_BANDS.len());
    for key in LANDSAT_RGB_BANDS {
        let asset = item.asset(key).ok_or_else(|| RasterError::MissingAsset {
            key: key.to_string(),
            item_id: item.id.clone(),
        })?;
        let href = signer.sign(&asset.href).await?;
        bands.push(reader.read_band(&href, bbox).await?);
    }

    let views: Vec<_> = bands.iter().map(|b| b.view()).collect();
    let stacked = ndarray::stack(Axis(0), &views)?;

    let chip = rescale_to_u8_range(stacked);
    tracing::debug!(item_id = %item.id, shape = ?chip.shape(), "cropped landsat chip");
    Ok(chip)
}

/// Crop an RGB chip from a Sentinel-2 scene.
///
/// Clips the `visual` asset to `bbox` in geographic coordinates and
/// returns the native pixel values without rescaling.
pub async fn crop_sentinel_chip(
    item: &SceneItem,
    bbox: &BoundingBox,
    signer: &dyn AssetSigner,
    reader: &dyn RasterReader,
) -> Result<ImageChip> {
    let asset = item.asset(VISUAL_ASSET).ok_or_else(|| RasterError::MissingAsset {
        key: VISUAL_ASSET.to_string(),
        item_id: item.id.clone(),
    })?;
    let href = signer.sign(&asset.href).await?;

    let chip = reader.read_visual(&href, bbox).await?;
    tracing::debug!(item_id = %item.id, shape = ?chip.shape(), "cropped sentinel chip");
    Ok(chip)
}

/// Linearly rescale all values into [0, 255] using the chip-wide min and
/// max. A constant chip maps to all zeros.
fn rescale_to_u8_range(mut chip: Array3<f64>) -> Array3<f64> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in chip.iter() {
        if v < lo {
            lo = v;
        }
        if v > hi {
            hi = v;
        }
    }

    if !lo.is_finite() || !hi.is_finite() || hi == lo {
        chip.fill(0.0);
        return chip;
    }

    let scale = 255.0 / (hi - lo);
    chip.mapv_inplace(|v| (v - lo) * scale);
    chip
}
