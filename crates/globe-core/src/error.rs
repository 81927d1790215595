use thiserror::Error;

/// Failures while decoding the world data the globe is built from.
#[derive(Debug, Error)]
pub enum GlobeError {
    #[error("invalid topology json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("topology has no object named `{0}`")]
    MissingObject(String),
    #[error("arc index {index} out of range ({count} arcs)")]
    ArcIndex { index: i64, count: usize },
    #[error("country name table is missing the `{0}` column")]
    MissingColumn(&'static str),
    #[error("invalid color `{0}`")]
    Color(String),
}

pub type Result<T> = std::result::Result<T, GlobeError>;
