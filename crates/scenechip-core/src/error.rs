//! Error types for scenechip-core

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneChipError {
    #[error("unparseable date: {0}")]
    DateParse(#[from] chrono::ParseError),

    #[error("item '{item_id}' is missing required field '{field}'")]
    MissingField { item_id: String, field: String },
}

pub type Result<T> = std::result::Result<T, SceneChipError>;
