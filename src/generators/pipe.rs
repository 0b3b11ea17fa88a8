//! The pipe block generator.
//!
//! Produces one block with 64 states, one per subset of the six axis
//! directions. Each state's model is a canonical catalog shape rotated
//! into place by the resolver; a trigger sheet keeps the direction params
//! in sync with tagged neighbors.

use crate::assets::AssetLibrary;
use crate::catalog::ShapeCatalog;
use crate::error::{Result, WrightError};
use crate::registry::{
    Block, ModPackage, ModelRef, Predicate, TriggerAction, TriggerSheet,
};
use crate::resolver::PipeResolver;
use crate::types::{Direction, DirectionSet};
use std::collections::BTreeMap;

/// Options for [`generate_pipe_block`].
#[derive(Debug, Clone)]
pub struct PipeOptions {
    /// Block id, also used as the model id prefix and trigger sheet id.
    pub id: String,
    /// Display name for the lang file.
    pub display_name: String,
    /// Name of the catalog manifest inside the asset bundle.
    pub catalog: String,
}

impl PipeOptions {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            catalog: "pipes".to_string(),
        }
    }
}

/// Generate a pipe block into `package` from the shapes in `assets`.
///
/// Fails fast when the catalog manifest is missing or references a model
/// the bundle does not contain. A connection pattern no catalog shape can
/// be rotated onto is not fatal; the resolver substitutes the fallback
/// shape for that state and generation continues.
pub fn generate_pipe_block(
    package: &mut ModPackage,
    assets: &AssetLibrary,
    options: &PipeOptions,
) -> Result<()> {
    let manifest = assets.get_catalog(&options.catalog).ok_or_else(|| {
        WrightError::AssetNotFound(format!("catalog manifest '{}'", options.catalog))
    })?;
    let catalog = ShapeCatalog::from_manifest(manifest)?;

    for shape in catalog.iter() {
        if assets.get_model(&shape.model).is_none() {
            return Err(WrightError::InvalidCatalog(format!(
                "catalog '{}' references missing model '{}'",
                options.catalog, shape.model
            )));
        }
    }

    let namespace = package.namespace.clone();
    let connectable_tag = format!("{}:connectable/{}", namespace, options.id);
    let generic_tag = format!("{}:connectable", namespace);

    let mut sheet = TriggerSheet::new(&options.id);
    sheet.set_parent("base:block_events_default");
    sheet.on_update(TriggerAction::set_params(all_false_params()));
    for direction in Direction::ALL {
        let mut params = BTreeMap::new();
        params.insert(direction.to_string(), "true".to_string());
        let offset = direction.offset();
        sheet.on_update(TriggerAction::set_params(params).when(Predicate::any(vec![
            Predicate::block_at(offset, connectable_tag.clone()),
            Predicate::block_at(offset, generic_tag.clone()),
        ])));
    }

    let mut block = Block::new(&options.id);
    block.fallback_params.catalog_hidden = true;
    block.fallback_params.is_opaque = false;
    block.fallback_params.light_attenuation = 1;

    let resolver = PipeResolver::new(&catalog);

    for directions in DirectionSet::enumerate_all() {
        let mut params = BTreeMap::new();
        for direction in Direction::ALL {
            params.insert(direction.to_string(), directions.contains(direction).to_string());
        }

        let resolved = resolver.resolve(directions);
        let model_id = format!("{}/{}", options.id, directions);
        let model = if resolved.rotation.is_identity() {
            ModelRef::base(&resolved.shape.model)
        } else {
            ModelRef::rotated(&resolved.shape.model, resolved.rotation.degrees())
        };
        package.register_model(&model_id, model);

        let state = block.create_state(params);
        state.tags.push(connectable_tag.clone());
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

fn all_false_params() -> BTreeMap<String, String> {
    Direction::ALL
        .into_iter()
        .map(|d| (d.to_string(), "false".to_string()))
        .collect()
}
