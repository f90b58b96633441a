//! Error types for scenechip-raster

use thiserror::Error;

/// Errors produced while signing assets or extracting chips.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("asset '{key}' not found in item '{item_id}'")]
    MissingAsset { key: String, item_id: String },

    #[error("asset signing failed: {0}")]
    Signing(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("band shapes do not stack: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("raster read failed: {reason}")]
    Read { reason: String },

    #[error(transparent)]
    Core(#[from] scenechip_core::SceneChipError),
}

pub type Result<T> = std::result::Result<T, RasterError>;
