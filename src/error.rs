//! Error types for the mod package compiler.

use thiserror::Error;

/// Result type alias using WrightError.
pub type Result<T> = std::result::Result<T, WrightError>;

/// Main error type for package generation operations.
#[derive(Error, Debug)]
pub enum WrightError {
    /// Failed to read or parse a ZIP archive.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Failed to parse JSON data.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to read or process an image.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Asset not found in the asset bundle.
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    /// Invalid asset bundle structure.
    #[error("Invalid asset bundle: {0}")]
    InvalidAssetBundle(String),

    /// Shape catalog is structurally incomplete or inconsistent.
    #[error("Invalid shape catalog: {0}")]
    InvalidCatalog(String),

    /// A block id was registered twice in the same package.
    #[error("Duplicate block: {0}")]
    DuplicateBlock(String),

    /// A trigger sheet id was registered twice in the same package.
    #[error("Duplicate trigger sheet: {0}")]
    DuplicateTriggerSheet(String),

    /// Failed to write the mod package.
    #[error("Export error: {0}")]
    Export(String),
}
