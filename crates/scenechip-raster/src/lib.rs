//! scenechip-raster - Chip extraction for Landsat and Sentinel-2 scenes
//!
//! The I/O-facing half of scenechip: port traits for the external raster
//! reader and asset signer, a Planetary Computer SAS signer, and the two
//! chip croppers. The croppers make a single attempt per call and
//! propagate reader errors unmodified; any timeout or retry policy
//! belongs to the caller.

pub mod crop;
pub mod error;
pub mod ports;
pub mod signing;

pub use crop::{
    crop_landsat_chip, crop_sentinel_chip, ImageChip, LANDSAT_RGB_BANDS, VISUAL_ASSET,
};
pub use error::{RasterError, Result};
pub use ports::{AssetSigner, RasterReader};
pub use signing::{NoopSigner, PlanetaryComputerSigner, PC_SIGN_ENDPOINT};
