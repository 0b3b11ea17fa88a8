//! Asset bundle loading from ZIP files and directories.

use super::texture::load_texture_from_bytes;
use super::AssetLibrary;
use crate::catalog::CatalogManifest;
use crate::error::{Result, WrightError};
use std::io::Read;
use std::path::Path;

/// Load an asset bundle from a file path.
///
/// Supports both ZIP files and directories.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<AssetLibrary> {
    let path = path.as_ref();

    if path.is_dir() {
        load_from_directory(path)
    } else {
        let data = std::fs::read(path)?;
        load_from_bytes(&data)
    }
}

/// Load an asset bundle from bytes (ZIP data).
pub fn load_from_bytes(data: &[u8]) -> Result<AssetLibrary> {
    let cursor = std::io::Cursor::new(data);
    let mut archive = zip::ZipArchive::new(cursor)?;

    let mut library = AssetLibrary::new();

    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        let file_path = file.name().to_string();

        if file.is_dir() {
            continue;
        }

        if let Some((section, asset_path)) = split_section(&file_path) {
            match section {
                "models" => {
                    if let Some(asset_id) = asset_path.strip_suffix(".json") {
                        let mut contents = String::new();
                        file.read_to_string(&mut contents)?;
                        add_model(&mut library, asset_id, &contents);
                    }
                }
                "textures" => {
                    if let Some(asset_id) = asset_path.strip_suffix(".png") {
                        let mut data = Vec::new();
                        file.read_to_end(&mut data)?;
                        add_texture(&mut library, asset_id, &data);
                    }
                }
                "catalog" => {
                    if let Some(name) = asset_path.strip_suffix(".json") {
                        let mut contents = String::new();
                        file.read_to_string(&mut contents)?;
                        add_catalog(&mut library, name, &contents);
                    }
                }
                _ => {}
            }
        }
    }

    validate(library)
}

/// Load an asset bundle from a directory.
fn load_from_directory(path: &Path) -> Result<AssetLibrary> {
    let mut library = AssetLibrary::new();

    let models_path = path.join("models");
    if models_path.exists() {
        walk_files(&models_path, &models_path, &mut |asset_id, file| {
            if let Some(asset_id) = asset_id.strip_suffix(".json") {
                let contents = std::fs::read_to_string(file)?;
                add_model(&mut library, asset_id, &contents);
            }
            Ok(())
        })?;
    }

    let textures_path = path.join("textures");
    if textures_path.exists() {
        walk_files(&textures_path, &textures_path, &mut |asset_id, file| {
            if let Some(asset_id) = asset_id.strip_suffix(".png") {
                let data = std::fs::read(file)?;
                add_texture(&mut library, asset_id, &data);
            }
            Ok(())
        })?;
    }

    let catalog_path = path.join("catalog");
    if catalog_path.exists() {
        walk_files(&catalog_path, &catalog_path, &mut |asset_id, file| {
            if let Some(name) = asset_id.strip_suffix(".json") {
                let contents = std::fs::read_to_string(file)?;
                add_catalog(&mut library, name, &contents);
            }
            Ok(())
        })?;
    }

    validate(library)
}

fn validate(library: AssetLibrary) -> Result<AssetLibrary> {
    if library.models.is_empty() {
        return Err(WrightError::InvalidAssetBundle(
            "no models/ entries found".to_string(),
        ));
    }
    Ok(library)
}

fn add_model(library: &mut AssetLibrary, asset_id: &str, contents: &str) {
    match serde_json::from_str::<serde_json::Value>(contents) {
        Ok(model) => library.add_model(asset_id, model),
        Err(e) => {
            log::warn!("failed to parse model {}: {}", asset_id, e);
        }
    }
}

fn add_texture(library: &mut AssetLibrary, asset_id: &str, data: &[u8]) {
    match load_texture_from_bytes(data) {
        Ok(texture) => library.add_texture(asset_id, texture),
        Err(e) => {
            log::warn!("failed to load texture {}: {}", asset_id, e);
        }
    }
}

fn add_catalog(library: &mut AssetLibrary, name: &str, contents: &str) {
    match serde_json::from_str::<CatalogManifest>(contents) {
        Ok(manifest) => library.add_catalog(name, manifest),
        Err(e) => {
            log::warn!("failed to parse catalog manifest {}: {}", name, e);
        }
    }
}

/// Split a bundle-relative path into its section and the remainder.
/// "models/pipe/straight.json" -> ("models", "pipe/straight.json")
fn split_section(file_path: &str) -> Option<(&str, &str)> {
    file_path.split_once('/')
}

/// Call `handler` with the base-relative path (forward slashes) of every
/// file under `dir`, recursively.
fn walk_files<F>(base: &Path, dir: &Path, handler: &mut F) -> Result<()>
where
    F: FnMut(&str, &Path) -> Result<()>,
{
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            walk_files(base, &path, handler)?;
        } else {
            let relative = path
                .strip_prefix(base)
                .expect("walked path is under base")
                .to_string_lossy()
                .replace('\\', "/");
            handler(&relative, &path)?;
        }
    }
    Ok(())
}
