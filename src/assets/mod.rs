//! Asset bundle loading.
//!
//! An asset bundle (directory or ZIP) holds the authored inputs of a
//! generation run: geometry definitions under `models/`, PNG textures
//! under `textures/` and shape-catalog manifests under `catalog/`.
//! Geometry files are carried as opaque JSON; this crate never interprets
//! their contents.

pub mod loader;
pub mod texture;

pub use texture::TextureData;

use crate::catalog::CatalogManifest;
use crate::error::Result;
use std::collections::HashMap;

/// A loaded asset bundle.
#[derive(Debug, Default, Clone)]
pub struct AssetLibrary {
    /// Opaque geometry definitions by asset id (path without extension,
    /// e.g. "pipe/straight").
    pub models: HashMap<String, serde_json::Value>,

    /// Textures by asset id (path without extension).
    pub textures: HashMap<String, TextureData>,

    /// Catalog manifests by name (file stem, e.g. "pipes").
    pub catalogs: HashMap<String, CatalogManifest>,
}

impl AssetLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a file path (ZIP or directory).
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        loader::load_from_path(path)
    }

    /// Load from ZIP bytes.
    pub fn load_from_bytes(data: &[u8]) -> Result<Self> {
        loader::load_from_bytes(data)
    }

    pub fn get_model(&self, asset_id: &str) -> Option<&serde_json::Value> {
        self.models.get(asset_id)
    }

    pub fn get_texture(&self, asset_id: &str) -> Option<&TextureData> {
        self.textures.get(asset_id)
    }

    pub fn get_catalog(&self, name: &str) -> Option<&CatalogManifest> {
        self.catalogs.get(name)
    }

    pub fn add_model(&mut self, asset_id: &str, model: serde_json::Value) {
        self.models.insert(asset_id.to_string(), model);
    }

    pub fn add_texture(&mut self, asset_id: &str, texture: TextureData) {
        self.textures.insert(asset_id.to_string(), texture);
    }

    pub fn add_catalog(&mut self, name: &str, manifest: CatalogManifest) {
        self.catalogs.insert(name.to_string(), manifest);
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    pub fn catalog_count(&self) -> usize {
        self.catalogs.len()
    }
}
