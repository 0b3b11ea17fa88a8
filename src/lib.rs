//! # Modwright
//!
//! A Rust library for compiling voxel-game mod content: block
//! definitions, connection rules and oriented models, generated from
//! authored asset bundles and written out as a mod package.
//!
//! ## Overview
//!
//! This library takes an asset bundle (geometry definitions, textures
//! and shape catalogs, as a directory or ZIP) as input, runs block
//! generators over it, and produces a mod package as output. The heart
//! of the pipeline is the pipe-orientation resolver: given the set of
//! directions a block state connects in, it finds the pre-authored
//! canonical shape and the 90-degree axis rotation that orients it for
//! that state.
//!
//! ## Quick Start
//!
//! ```ignore
//! use modwright::{
//!     generate_pipe_block, AssetLibrary, ModPackage, PackageWriter, PipeOptions,
//! };
//!
//! // Load the authored assets
//! let assets = AssetLibrary::load_from_path("path/to/assets.zip")?;
//!
//! // Generate a pipe block with all 64 connection states
//! let mut package = ModPackage::new("mods");
//! generate_pipe_block(&mut package, &assets, &PipeOptions::new("pipe", "Pipe"))?;
//!
//! // Write the package
//! PackageWriter::new(&package, &assets).write_to_path("out/my_mod.zip")?;
//! ```
//!
//! ## Using the resolver directly
//!
//! ```ignore
//! use modwright::{Direction, DirectionSet, PipeResolver, ShapeCatalog};
//!
//! let catalog = ShapeCatalog::from_json(manifest_json)?;
//! let resolver = PipeResolver::new(&catalog);
//!
//! let requested: DirectionSet = [Direction::Up, Direction::North].into_iter().collect();
//! let resolved = resolver.resolve(requested);
//! println!("{} rotated by {}", resolved.shape.model, resolved.rotation);
//! ```

pub mod assets;
pub mod catalog;
pub mod error;
pub mod export;
pub mod generators;
pub mod registry;
pub mod resolver;
pub mod types;

// Re-export main types for convenience
pub use assets::{AssetLibrary, TextureData};
pub use catalog::{CanonicalShape, CatalogManifest, ShapeCatalog, ShapeEntry};
pub use error::{Result, WrightError};
pub use export::PackageWriter;
pub use generators::{
    generate_connected_block, generate_pipe_block, ConnectedOptions, PipeOptions,
};
pub use registry::{
    Block, BlockParams, BlockState, ModPackage, ModelPart, ModelRef, Predicate, TriggerAction,
    TriggerSheet,
};
pub use resolver::{PipeResolver, ResolvedPipe};
pub use types::{Axis, AxisRotation, Direction, DirectionSet};
