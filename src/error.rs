use std::path::PathBuf;
use thiserror::Error;

use crate::geometry::GeometryError;
use crate::markup::DimensionMismatch;

/// The main error type for marquee operations.
#[derive(Debug, Error)]
pub enum MarqueeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid LED geometry: {0}")]
    InvalidGeometry(#[from] GeometryError),

    #[error("Invalid grid {columns}x{rows}: LED counts must be positive")]
    InvalidGrid { columns: u32, rows: u32 },

    #[error("Invalid render scale {0}: must be between 1 and {max}", max = crate::config::MAX_SCALE)]
    InvalidScale(u32),

    #[error("Pixel buffer holds {actual} pixels, expected {expected} for {width}x{height}")]
    PixelBufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("Failed to decode image {path}: {source}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to read image dimensions from {path}: {source}")]
    ImageDimensionRead {
        path: PathBuf,
        #[source]
        source: imagesize::ImageError,
    },

    #[error("Image dimension {value} in {path} does not fit in u32")]
    ImageTooLarge { path: PathBuf, value: usize },

    #[error("Failed to parse board profile JSON from {path}: {source}")]
    BoardJsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse board profile YAML from {path}: {source}")]
    BoardYamlParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to write JSON report: {0}")]
    ReportJson(#[source] serde_json::Error),

    #[error("{0}")]
    DimensionMismatch(DimensionMismatch),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
