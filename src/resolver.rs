//! Pipe shape resolution.
//!
//! Given a requested connection set, find the canonical shape and the
//! 90-degree axis rotation that maps its authored connection pattern onto
//! the request. This is a pure combinatorial search over the catalog's
//! candidate shapes and the fixed 64-member rotation enumeration.

use crate::catalog::{CanonicalShape, ShapeCatalog};
use crate::types::{AxisRotation, DirectionSet};

/// The outcome of resolving one connection set: the chosen shape plus the
/// rotation that maps its canonical connection set onto the request.
/// Applying exactly this rotation (axis order X, Y, Z) to the shape's
/// geometry orients it for the requested state.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedPipe<'a> {
    pub shape: &'a CanonicalShape,
    pub rotation: AxisRotation,
    /// True when no candidate matched and the 0-connection shape was
    /// substituted. The state renders visibly wrong but generation goes on.
    pub fallback: bool,
}

/// Resolves connection sets to oriented canonical shapes.
pub struct PipeResolver<'a> {
    catalog: &'a ShapeCatalog,
}

impl<'a> PipeResolver<'a> {
    pub fn new(catalog: &'a ShapeCatalog) -> Self {
        Self { catalog }
    }

    /// Resolve a requested connection set. Pure and deterministic: the
    /// same catalog and request always yield the same shape and angles.
    ///
    /// Candidates are restricted to shapes whose canonical set has the
    /// same cardinality as the request. Every candidate is tried against
    /// all 64 enumerated rotations; among the matches, the pair with the
    /// maximum [`AxisRotation::weight`] wins, ties going to the later
    /// entry in candidate-then-rotation iteration order.
    ///
    /// A request with no match is an authoring gap in the catalog, not a
    /// runtime fault: it is logged and the fallback shape is substituted
    /// with an identity rotation, so one missing pattern cannot abort a
    /// whole generation run.
    pub fn resolve(&self, requested: DirectionSet) -> ResolvedPipe<'a> {
        // The empty set is fixed by every rotation; report the canonical
        // representative instead of letting the weight rule inflate it to
        // a redundant full-turn triple.
        if requested.is_empty() {
            if let Some(shape) = self.catalog.shapes_for(0).first() {
                return ResolvedPipe {
                    shape,
                    rotation: AxisRotation::IDENTITY,
                    fallback: false,
                };
            }
        }

        let candidates = self.catalog.shapes_for(requested.len());
        let rotations = AxisRotation::enumerate();

        let mut matches: Vec<(&CanonicalShape, AxisRotation)> = Vec::new();
        for shape in candidates {
            for rotation in &rotations {
                if rotation.apply_set(shape.connections) == requested {
                    matches.push((shape, *rotation));
                }
            }
        }

        // max_by keeps the last of equally-maximum elements, which makes
        // ties resolve to the later enumeration entry.
        match matches
            .into_iter()
            .max_by(|a, b| a.1.weight().total_cmp(&b.1.weight()))
        {
            Some((shape, rotation)) => ResolvedPipe {
                shape,
                rotation,
                fallback: false,
            },
            None => {
                log::warn!(
                    "no shape in catalog matches {} connection(s): {}",
                    requested.len(),
                    requested
                );
                ResolvedPipe {
                    shape: self.catalog.fallback(),
                    rotation: AxisRotation::IDENTITY,
                    fallback: true,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    /// The shape library the generator ships with: one or two authored
    /// shapes per connection count.
    fn full_catalog() -> ShapeCatalog {
        ShapeCatalog::from_json(
            r#"{
            "shapes": [
                { "model": "pipe/none", "connections": [] },
                { "model": "pipe/straight", "connections": ["up"] },
                { "model": "pipe/straight", "connections": ["down", "up"] },
                { "model": "pipe/turn", "connections": ["down", "north"] },
                { "model": "pipe/tee", "connections": ["down", "up", "north"] },
                { "model": "pipe/corner", "connections": ["west", "down", "north"] },
                { "model": "pipe/cross", "connections": ["down", "up", "north", "south"] },
                { "model": "pipe/cross_alt", "connections": ["west", "east", "down", "north"] },
                { "model": "pipe/five", "connections": ["west", "east", "down", "up", "north"] },
                { "model": "pipe/all", "connections": ["west", "east", "down", "up", "north", "south"] }
            ]
        }"#,
        )
        .unwrap()
    }

    fn set(directions: &[Direction]) -> DirectionSet {
        directions.iter().copied().collect()
    }

    #[test]
    fn test_empty_set_is_identity() {
        let catalog = full_catalog();
        let resolver = PipeResolver::new(&catalog);

        let resolved = resolver.resolve(DirectionSet::EMPTY);
        assert_eq!(resolved.shape.model, "pipe/none");
        assert_eq!(resolved.rotation, AxisRotation::IDENTITY);
        assert!(!resolved.fallback);
    }

    #[test]
    fn test_opposite_pair_selects_straight() {
        let catalog = full_catalog();
        let resolver = PipeResolver::new(&catalog);

        let requested = set(&[Direction::Up, Direction::Down]);
        let resolved = resolver.resolve(requested);

        assert_eq!(resolved.shape.model, "pipe/straight");
        assert!(!resolved.fallback);
        // The returned rotation really maps the canonical set onto the request.
        assert_eq!(
            resolved.rotation.apply_set(resolved.shape.connections),
            requested
        );
    }

    #[test]
    fn test_adjacent_pair_selects_turn() {
        let catalog = full_catalog();
        let resolver = PipeResolver::new(&catalog);

        // No rotation of an opposite pair can produce an adjacent pair, so
        // only the turn shape can satisfy {north, east}.
        let requested = set(&[Direction::North, Direction::East]);
        let resolved = resolver.resolve(requested);

        assert_eq!(resolved.shape.model, "pipe/turn");
        assert!(!resolved.fallback);
        assert!(!resolved.rotation.is_identity());
        assert_eq!(
            resolved.rotation.apply_set(resolved.shape.connections),
            requested
        );
    }

    #[test]
    fn test_every_request_is_satisfied() {
        // The shipped library covers the whole power set: every request
        // must resolve without the fallback, with a correct rotation and a
        // candidate of matching cardinality.
        let catalog = full_catalog();
        let resolver = PipeResolver::new(&catalog);

        for requested in DirectionSet::enumerate_all() {
            let resolved = resolver.resolve(requested);
            assert!(!resolved.fallback, "no match for {}", requested);
            assert_eq!(resolved.shape.connections.len(), requested.len());
            assert_eq!(
                resolved.rotation.apply_set(resolved.shape.connections),
                requested,
                "bad rotation for {}",
                requested
            );
        }
    }

    #[test]
    fn test_determinism() {
        let catalog = full_catalog();
        let resolver = PipeResolver::new(&catalog);

        for requested in DirectionSet::enumerate_all() {
            let a = resolver.resolve(requested);
            let b = resolver.resolve(requested);
            assert_eq!(a.shape.model, b.shape.model);
            assert_eq!(a.rotation, b.rotation);
            assert_eq!(a.fallback, b.fallback);
        }
    }

    #[test]
    fn test_fallback_on_catalog_gap() {
        // A catalog with no 3-connection shapes: any 3-connection request
        // degrades to the fallback shape with identity rotation.
        let catalog = ShapeCatalog::from_json(
            r#"{
            "shapes": [
                { "model": "pipe/none", "connections": [] },
                { "model": "pipe/straight", "connections": ["down", "up"] }
            ]
        }"#,
        )
        .unwrap();
        let resolver = PipeResolver::new(&catalog);

        let requested = set(&[Direction::Up, Direction::Down, Direction::North]);
        let resolved = resolver.resolve(requested);

        assert!(resolved.fallback);
        assert_eq!(resolved.shape.model, "pipe/none");
        assert_eq!(resolved.rotation, AxisRotation::IDENTITY);
    }

    #[test]
    fn test_unmatchable_pattern_falls_back() {
        // Count matches but no rotation does: {north, east} against a
        // catalog whose only 2-connection shape is an opposite pair.
        let catalog = ShapeCatalog::from_json(
            r#"{
            "shapes": [
                { "model": "pipe/none", "connections": [] },
                { "model": "pipe/straight", "connections": ["down", "up"] }
            ]
        }"#,
        )
        .unwrap();
        let resolver = PipeResolver::new(&catalog);

        let resolved = resolver.resolve(set(&[Direction::North, Direction::East]));
        assert!(resolved.fallback);
        assert_eq!(resolved.shape.model, "pipe/none");
    }

    #[test]
    fn test_tie_break_prefers_heavier_rotation() {
        // {down, up} is preserved both by a single-axis turn (x=180) and by
        // multi-axis combinations; the weight rule must pick a multi-axis
        // rotation over any single-axis one.
        let catalog = full_catalog();
        let resolver = PipeResolver::new(&catalog);

        let requested = set(&[Direction::Up, Direction::Down]);
        let resolved = resolver.resolve(requested);

        let single_axis = AxisRotation::new(180, 0, 0);
        assert_eq!(single_axis.apply_set(resolved.shape.connections), requested);
        assert!(resolved.rotation.axes_used() > 1);
        assert!(resolved.rotation.weight() > single_axis.weight());

        // And the global maximum weight among matches is what wins: all
        // three axes at 180 degrees preserves a vertical opposite pair.
        assert_eq!(resolved.rotation, AxisRotation::new(180, 180, 180));
    }

    #[test]
    fn test_cardinality_invariant() {
        // Only candidates of the request's cardinality are ever chosen,
        // even though a same-shape asset is registered at two counts.
        let catalog = full_catalog();
        let resolver = PipeResolver::new(&catalog);

        let resolved = resolver.resolve(set(&[Direction::East]));
        assert_eq!(resolved.shape.connections.len(), 1);
        assert_eq!(resolved.shape.model, "pipe/straight");
    }
}
