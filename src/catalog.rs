//! Canonical shape catalogs.
//!
//! A catalog groups pre-authored geometry assets by connection count.
//! Each shape is tagged with the one connection pattern it was modeled
//! for; the resolver rotates those patterns to cover the rest.

use crate::error::{Result, WrightError};
use crate::types::{Direction, DirectionSet};
use serde::{Deserialize, Serialize};

/// One shape entry in a catalog manifest (`catalog/*.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeEntry {
    /// Geometry asset id, e.g. "pipe/straight".
    pub model: String,
    /// The connection pattern the asset was authored for.
    pub connections: Vec<Direction>,
}

/// A parsed catalog manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogManifest {
    pub shapes: Vec<ShapeEntry>,
}

/// A pre-authored geometry asset tagged with its canonical connection set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalShape {
    /// Opaque geometry handle (asset id).
    pub model: String,
    /// The canonical direction set the shape was drawn for.
    pub connections: DirectionSet,
}

/// Canonical shapes grouped by connection count (0..=6), preserving the
/// manifest order within each group. Immutable for the duration of a
/// generation run.
#[derive(Debug, Clone)]
pub struct ShapeCatalog {
    groups: [Vec<CanonicalShape>; 7],
}

impl ShapeCatalog {
    /// Build a catalog from a manifest, failing fast on structural
    /// defects: duplicate directions within one entry, or a catalog
    /// without a 0-connection fallback shape. A missing count group is
    /// not an error here; it degrades to the resolver fallback per state.
    pub fn from_manifest(manifest: &CatalogManifest) -> Result<Self> {
        let mut groups: [Vec<CanonicalShape>; 7] = Default::default();

        for entry in &manifest.shapes {
            let connections: DirectionSet = entry.connections.iter().copied().collect();
            if connections.len() != entry.connections.len() {
                return Err(WrightError::InvalidCatalog(format!(
                    "shape '{}' lists a duplicate direction",
                    entry.model
                )));
            }
            groups[connections.len()].push(CanonicalShape {
                model: entry.model.clone(),
                connections,
            });
        }

        if groups[0].is_empty() {
            return Err(WrightError::InvalidCatalog(
                "no 0-connection fallback shape defined".to_string(),
            ));
        }

        Ok(Self { groups })
    }

    /// Parse and build from manifest JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let manifest: CatalogManifest = serde_json::from_str(json)?;
        Self::from_manifest(&manifest)
    }

    /// Candidate shapes whose canonical set has the given cardinality.
    /// `count` must be 0..=6; anything larger is a caller bug.
    pub fn shapes_for(&self, count: usize) -> &[CanonicalShape] {
        &self.groups[count]
    }

    /// The 0-connection shape used when no rotation of any candidate
    /// matches a requested set.
    pub fn fallback(&self) -> &CanonicalShape {
        &self.groups[0][0]
    }

    /// Total number of shapes across all count groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate all shapes, by ascending connection count then manifest order.
    pub fn iter(&self) -> impl Iterator<Item = &CanonicalShape> {
        self.groups.iter().flatten()
    }
}
