use aruco_targets_core::{CanvasError, FontError};
use aruco_targets_dict::{DictionaryError, MarkerError};

/// Errors returned while composing or writing printable markers.
#[derive(thiserror::Error, Debug)]
pub enum PrintError {
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
    #[error(transparent)]
    Marker(#[from] MarkerError),
    #[error(transparent)]
    Canvas(#[from] CanvasError),
    #[error(transparent)]
    Font(#[from] FontError),
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
    #[error("rendered marker does not decode as id {id}")]
    VerificationFailed { id: u32 },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Png(#[from] png::EncodingError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
