use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ArborError {
    #[error("no rows for {commodity} / {variant}")]
    EmptySubset { commodity: String, variant: String },

    #[error("commodity '{0}' not found in dataset")]
    UnknownCommodity(String),

    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("unsupported input format: {0}. Use .csv or .xlsx")]
    UnsupportedFormat(String),

    #[error("failed to read table: {0}")]
    TableRead(String),

    #[error("failed to load style from {path}: {reason}")]
    StyleLoad { path: PathBuf, reason: String },

    #[error("invalid style: {0}")]
    StyleInvalid(String),

    #[error("unknown style preset '{name}'. Available: {available}")]
    UnknownPreset { name: String, available: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
