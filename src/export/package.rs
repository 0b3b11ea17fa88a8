//! Serializing a finished package to disk.

use crate::assets::AssetLibrary;
use crate::error::{Result, WrightError};
use crate::registry::ModPackage;
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

/// Writes a [`ModPackage`] and the assets it references to a directory
/// or a `.zip` archive. Entries are emitted in sorted path order so two
/// runs over the same inputs produce identical output.
pub struct PackageWriter<'a> {
    package: &'a ModPackage,
    assets: &'a AssetLibrary,
}

impl<'a> PackageWriter<'a> {
    pub fn new(package: &'a ModPackage, assets: &'a AssetLibrary) -> Self {
        Self { package, assets }
    }

    /// All output entries as (path, bytes) pairs, sorted by path.
    pub fn entries(&self) -> Result<Vec<(String, Vec<u8>)>> {
        let ns = &self.package.namespace;
        let mut entries = Vec::new();

        for block in self.package.blocks() {
            entries.push((
                format!("{}/blocks/{}.json", ns, block.id),
                to_pretty_json(block)?,
            ));
        }

        for sheet in self.package.trigger_sheets() {
            entries.push((
                format!("{}/trigger_sheets/{}.json", ns, sheet.id),
                to_pretty_json(sheet)?,
            ));
        }

        // Registered model handles, plus one copy of every authored asset
        // they reference. Assets live under models/base/ so an asset id
        // can never collide with a registered model id.
        let mut referenced: BTreeSet<&str> = BTreeSet::new();
        for (model_id, model) in self.package.models() {
            entries.push((
                format!("{}/models/{}.json", ns, model_id),
                to_pretty_json(model)?,
            ));
            referenced.extend(model.assets());
        }
        for asset_id in referenced {
            let model = self.assets.get_model(asset_id).ok_or_else(|| {
                WrightError::Export(format!(
                    "registered model references missing asset '{}'",
                    asset_id
                ))
            })?;
            entries.push((
                format!("{}/models/base/{}.json", ns, asset_id),
                to_pretty_json(model)?,
            ));
        }

        let mut texture_ids: Vec<&String> = self.assets.textures.keys().collect();
        texture_ids.sort();
        for texture_id in texture_ids {
            let texture = &self.assets.textures[texture_id];
            entries.push((
                format!("{}/textures/{}.png", ns, texture_id),
                texture.source_png.clone(),
            ));
        }

        entries.push((
            format!("{}/lang/en_us.json", ns),
            to_pretty_json(self.package.lang())?,
        ));

        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(entries)
    }

    /// Write to a path: a `.zip` extension selects archive output,
    /// anything else is treated as a directory root.
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if path.extension().is_some_and(|ext| ext == "zip") {
            let bytes = self.write_zip_bytes()?;
            std::fs::write(path, bytes)?;
        } else {
            for (entry_path, data) in self.entries()? {
                let target = path.join(&entry_path);
                if let Some(parent) = target.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(target, data)?;
            }
        }
        Ok(())
    }

    /// Write the whole package as ZIP bytes.
    pub fn write_zip_bytes(&self) -> Result<Vec<u8>> {
        let mut zip = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
        let options = zip::write::SimpleFileOptions::default();

        for (entry_path, data) in self.entries()? {
            zip.start_file(entry_path, options)?;
            zip.write_all(&data)?;
        }

        Ok(zip.finish()?.into_inner())
    }
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Block, ModelRef};

    fn sample() -> (ModPackage, AssetLibrary) {
        let mut assets = AssetLibrary::new();
        assets.add_model("pipe/straight", serde_json::json!({ "elements": [] }));

        let mut package = ModPackage::new("mods");
        let mut block = Block::new("pipe");
        let state = block.create_state(Default::default());
        state.set_model("pipe/down+up");
        package.add_block(block).unwrap();
        package.register_model("pipe/down+up", ModelRef::rotated("pipe/straight", [90, 0, 0]));
        package.add_block_lang("pipe", "Pipe");

        (package, assets)
    }

    #[test]
    fn test_entry_layout() {
        let (package, assets) = sample();
        let writer = PackageWriter::new(&package, &assets);
        let entries = writer.entries().unwrap();
        let paths: Vec<&str> = entries.iter().map(|(p, _)| p.as_str()).collect();

        assert_eq!(
            paths,
            vec![
                "mods/blocks/pipe.json",
                "mods/lang/en_us.json",
                "mods/models/base/pipe/straight.json",
                "mods/models/pipe/down+up.json",
            ]
        );

        // Sorted and therefore stable across runs.
        let again = writer.entries().unwrap();
        assert_eq!(entries, again);
    }

    #[test]
    fn test_missing_referenced_asset_fails() {
        let (mut package, assets) = sample();
        package.register_model("pipe/bad", ModelRef::base("pipe/ghost"));

        let writer = PackageWriter::new(&package, &assets);
        assert!(matches!(writer.entries(), Err(WrightError::Export(_))));
    }

    #[test]
    fn test_write_to_directory() {
        let (package, assets) = sample();
        let dir = tempfile::tempdir().unwrap();

        PackageWriter::new(&package, &assets)
            .write_to_path(dir.path())
            .unwrap();

        let block_json =
            std::fs::read_to_string(dir.path().join("mods/blocks/pipe.json")).unwrap();
        let block: serde_json::Value = serde_json::from_str(&block_json).unwrap();
        assert_eq!(block["id"], "pipe");
        assert_eq!(block["states"][0]["model"], "pipe/down+up");

        let lang_json =
            std::fs::read_to_string(dir.path().join("mods/lang/en_us.json")).unwrap();
        let lang: serde_json::Value = serde_json::from_str(&lang_json).unwrap();
        assert_eq!(lang["block.mods.pipe"], "Pipe");
    }

    #[test]
    fn test_zip_round_trip() {
        let (package, assets) = sample();
        let bytes = PackageWriter::new(&package, &assets)
            .write_zip_bytes()
            .unwrap();

        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 4);
        assert!(archive.by_name("mods/models/pipe/down+up.json").is_ok());
        assert!(archive
            .by_name("mods/models/base/pipe/straight.json")
            .is_ok());
    }
}
