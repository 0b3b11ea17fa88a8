//! The in-memory mod package being generated.
//!
//! Blocks, block states, registered model handles and trigger sheets
//! accumulate here during a generation run; the export module serializes
//! the result. All maps are ordered so output is deterministic.

pub mod trigger;

pub use trigger::{NeighborQuery, Predicate, TriggerAction, TriggerSheet};

use crate::error::{Result, WrightError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A geometry handle registered in the package: either a raw authored
/// asset, a rotated clone of one, or a composite assembled from rotated
/// parts. Geometry is never parsed or mutated here; rotation travels as
/// data next to the asset reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ModelRef {
    /// An authored asset, as-is.
    Base { asset: String },
    /// A clone of an authored asset with 90-degree axis turns applied in
    /// X, Y, Z order (degrees).
    Rotated { asset: String, rotation: [i32; 3] },
    /// Several rotated parts composed into one model.
    Composite { parts: Vec<ModelPart> },
}

impl ModelRef {
    pub fn base(asset: impl Into<String>) -> Self {
        ModelRef::Base {
            asset: asset.into(),
        }
    }

    pub fn rotated(asset: impl Into<String>, rotation: [i32; 3]) -> Self {
        ModelRef::Rotated {
            asset: asset.into(),
            rotation,
        }
    }

    /// Every authored asset this handle references.
    pub fn assets(&self) -> Vec<&str> {
        match self {
            ModelRef::Base { asset } => vec![asset],
            ModelRef::Rotated { asset, .. } => vec![asset],
            ModelRef::Composite { parts } => parts.iter().map(|p| p.asset.as_str()).collect(),
        }
    }
}

/// One part of a composite model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelPart {
    pub asset: String,
    pub rotation: [i32; 3],
}

/// Block-wide defaults, overridable per state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockParams {
    pub catalog_hidden: bool,
    pub is_opaque: bool,
    pub light_attenuation: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Default for BlockParams {
    fn default() -> Self {
        Self {
            catalog_hidden: false,
            is_opaque: true,
            light_attenuation: 15,
            tags: Vec::new(),
        }
    }
}

/// One concrete state of a block: a param assignment plus its visual and
/// behavioral bindings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockState {
    pub params: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_sheet: Option<String>,
    /// Overrides the block-wide `catalog_hidden` when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_hidden: Option<bool>,
}

impl BlockState {
    pub fn new(params: BTreeMap<String, String>) -> Self {
        Self {
            params,
            model: None,
            tags: Vec::new(),
            trigger_sheet: None,
            catalog_hidden: None,
        }
    }

    pub fn set_model(&mut self, model_id: impl Into<String>) {
        self.model = Some(model_id.into());
    }

    pub fn set_trigger_sheet(&mut self, sheet_id: impl Into<String>) {
        self.trigger_sheet = Some(sheet_id.into());
    }
}

/// A block type with its states.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    pub fallback_params: BlockParams,
    pub states: Vec<BlockState>,
}

impl Block {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fallback_params: BlockParams::default(),
            states: Vec::new(),
        }
    }

    /// Create a state and return it for further setup.
    pub fn create_state(&mut self, params: BTreeMap<String, String>) -> &mut BlockState {
        self.states.push(BlockState::new(params));
        self.states.last_mut().expect("just pushed")
    }
}

/// Everything registered for one mod, keyed for deterministic output.
#[derive(Debug, Clone)]
pub struct ModPackage {
    pub namespace: String,
    blocks: BTreeMap<String, Block>,
    trigger_sheets: BTreeMap<String, TriggerSheet>,
    models: BTreeMap<String, ModelRef>,
    lang: BTreeMap<String, String>,
}

impl ModPackage {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            blocks: BTreeMap::new(),
            trigger_sheets: BTreeMap::new(),
            models: BTreeMap::new(),
            lang: BTreeMap::new(),
        }
    }

    /// Register a fully built block. Ids are unique per package.
    pub fn add_block(&mut self, block: Block) -> Result<()> {
        if self.blocks.contains_key(&block.id) {
            return Err(WrightError::DuplicateBlock(block.id));
        }
        self.blocks.insert(block.id.clone(), block);
        Ok(())
    }

    /// Register a trigger sheet. Ids are unique per package.
    pub fn add_trigger_sheet(&mut self, sheet: TriggerSheet) -> Result<()> {
        if self.trigger_sheets.contains_key(&sheet.id) {
            return Err(WrightError::DuplicateTriggerSheet(sheet.id));
        }
        self.trigger_sheets.insert(sheet.id.clone(), sheet);
        Ok(())
    }

    /// Register a model handle under a package-local id. Re-registering
    /// the same id overwrites, which lets generators share clones.
    pub fn register_model(&mut self, model_id: impl Into<String>, model: ModelRef) {
        self.models.insert(model_id.into(), model);
    }

    /// Register the display name for a block, under the conventional
    /// `block.<namespace>.<id>` lang key.
    pub fn add_block_lang(&mut self, block_id: &str, display_name: impl Into<String>) {
        let key = format!("block.{}.{}", self.namespace, block_id);
        self.lang.insert(key, display_name.into());
    }

    pub fn get_block(&self, id: &str) -> Option<&Block> {
        self.blocks.get(id)
    }

    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.values()
    }

    pub fn trigger_sheets(&self) -> impl Iterator<Item = &TriggerSheet> {
        self.trigger_sheets.values()
    }

    pub fn models(&self) -> impl Iterator<Item = (&str, &ModelRef)> {
        self.models.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get_model(&self, model_id: &str) -> Option<&ModelRef> {
        self.models.get(model_id)
    }

    pub fn lang(&self) -> &BTreeMap<String, String> {
        &self.lang
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }
}
