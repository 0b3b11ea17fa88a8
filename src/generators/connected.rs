//! The six-way connected block generator.
//!
//! Unlike the pipe generator, which picks one canonical shape per state,
//! this one composes each state's model from up to six directional face
//! parts. Parts are authored once for the north face and rotated into
//! place for the other five; a face that is connected contributes no part
//! at all.

use crate::assets::AssetLibrary;
use crate::error::{Result, WrightError};
use crate::registry::{
    Block, ModPackage, ModelPart, ModelRef, Predicate, TriggerAction, TriggerSheet,
};
use crate::types::{Direction, DirectionSet};
use std::collections::BTreeMap;

/// Options for [`generate_connected_block`].
#[derive(Debug, Clone)]
pub struct ConnectedOptions {
    pub id: String,
    pub display_name: String,
    /// Asset directory holding the side face parts ("none", "up",
    /// "up-left", ... named by which face-local neighbors are connected).
    pub model_dir: String,
    /// Overrides `model_dir` for the top face.
    pub up_model_dir: Option<String>,
    /// Overrides the top-face directory for the bottom face.
    pub down_model_dir: Option<String>,
}

impl ConnectedOptions {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        model_dir: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            model_dir: model_dir.into(),
            up_model_dir: None,
            down_model_dir: None,
        }
    }
}

/// Generate a connected block into `package`.
///
/// A state connects to any neighbor carrying the block's own tag
/// (`<namespace>:<id>`). Missing combination-specific face parts degrade
/// to the directory's "none" part with a logged notice; a directory
/// without even that part is an error.
pub fn generate_connected_block(
    package: &mut ModPackage,
    assets: &AssetLibrary,
    options: &ConnectedOptions,
) -> Result<()> {
    let tag = format!("{}:{}", package.namespace, options.id);

    let side_dir = options.model_dir.as_str();
    let up_dir = options.up_model_dir.as_deref().unwrap_or(side_dir);
    let down_dir = options.down_model_dir.as_deref().unwrap_or(up_dir);

    let mut sheet = TriggerSheet::new(&options.id);
    sheet.set_parent("base:block_events_default");
    sheet.on_update(TriggerAction::set_params(all_false_params()));
    for direction in Direction::ALL {
        let mut params = BTreeMap::new();
        params.insert(direction.to_string(), "true".to_string());
        sheet.on_update(
            TriggerAction::set_params(params)
                .when(Predicate::block_at(direction.offset(), tag.clone())),
        );
    }

    let mut block = Block::new(&options.id);
    block.fallback_params.catalog_hidden = true;
    block.fallback_params.tags.push(tag.clone());

    for directions in DirectionSet::enumerate_all() {
        let north = directions.contains(Direction::North);
        let east = directions.contains(Direction::East);
        let south = directions.contains(Direction::South);
        let west = directions.contains(Direction::West);
        let up = directions.contains(Direction::Up);
        let down = directions.contains(Direction::Down);

        // Each face sees its four surrounding faces in its own local
        // (up, down, left, right) frame; the lookups below translate
        // world connections into that frame per face.
        let mut parts = Vec::new();
        if !north {
            parts.push(ModelPart {
                asset: face_part(assets, side_dir, [up, down, east, west])?,
                rotation: [0, 0, 0],
            });
        }
        if !east {
            parts.push(ModelPart {
                asset: face_part(assets, side_dir, [up, down, south, north])?,
                rotation: [0, 90, 0],
            });
        }
        if !south {
            parts.push(ModelPart {
                asset: face_part(assets, side_dir, [up, down, west, east])?,
                rotation: [0, 180, 0],
            });
        }
        if !west {
            parts.push(ModelPart {
                asset: face_part(assets, side_dir, [up, down, north, south])?,
                rotation: [0, -90, 0],
            });
        }
        if !up {
            parts.push(ModelPart {
                asset: face_part(assets, up_dir, [north, south, west, east])?,
                rotation: [-90, 0, 0],
            });
        }
        if !down {
            parts.push(ModelPart {
                asset: face_part(assets, down_dir, [south, north, west, east])?,
                rotation: [90, 0, 0],
            });
        }

        let model_id = format!("{}/{}", options.id, directions);
        package.register_model(&model_id, ModelRef::Composite { parts });

        let mut params = BTreeMap::new();
        for direction in Direction::ALL {
            params.insert(direction.to_string(), directions.contains(direction).to_string());
        }
        let state = block.create_state(params);
        state.set_trigger_sheet(&options.id);
        state.set_model(model_id);
        if directions.is_empty() {
            state.catalog_hidden = Some(false);
        }
    }

    package.add_trigger_sheet(sheet)?;
    package.add_block(block)?;
    package.add_block_lang(&options.id, &options.display_name);

    Ok(())
}

/// Resolve the asset for one face part. `connected` is which of the
/// face-local (up, down, left, right) neighbors are connected.
fn face_part(
    assets: &AssetLibrary,
    directory: &str,
    connected: [bool; 4],
) -> Result<String> {
    let mut names = Vec::new();
    for (flag, name) in connected.into_iter().zip(["up", "down", "left", "right"]) {
        if flag {
            names.push(name);
        }
    }
    let name = if names.is_empty() {
        "none".to_string()
    } else {
        names.join("-")
    };

    let asset = format!("{}/{}", directory, name);
    if assets.get_model(&asset).is_some() {
        return Ok(asset);
    }

    let fallback = format!("{}/none", directory);
    if name != "none" && assets.get_model(&fallback).is_some() {
        log::info!("no model at {}; defaulting to {}", asset, fallback);
        return Ok(fallback);
    }

    Err(WrightError::AssetNotFound(format!(
        "no face part model at {} and no {} to default to",
        asset, fallback
    )))
}

fn all_false_params() -> BTreeMap<String, String> {
    Direction::ALL
        .into_iter()
        .map(|d| (d.to_string(), "false".to_string()))
        .collect()
}
