//! Modwright CLI
//!
//! Generate voxel-game mod content from authored asset bundles.

use clap::{Parser, Subcommand};
use modwright::{
    generate_connected_block, generate_pipe_block, AssetLibrary, ConnectedOptions, Direction,
    DirectionSet, ModPackage, PackageWriter, PipeOptions, PipeResolver, ShapeCatalog,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "modwright")]
#[command(author, version, about = "Generate voxel-game mod content from asset bundles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a mod package from an asset bundle
    Generate {
        /// Path to the asset bundle (ZIP or directory)
        #[arg(short, long)]
        assets: PathBuf,

        /// Output path (directory, or ZIP when it ends in .zip)
        #[arg(short, long)]
        output: PathBuf,

        /// Namespace for all generated content
        #[arg(short, long, default_value = "mods")]
        namespace: String,

        /// Id of the generated pipe block
        #[arg(long, default_value = "pipe")]
        pipe_id: String,

        /// Display name of the generated pipe block
        #[arg(long, default_value = "Pipe")]
        pipe_name: String,

        /// Catalog manifest name inside the bundle
        #[arg(short, long, default_value = "pipes")]
        catalog: String,

        /// Also generate a connected block from this part directory
        #[arg(long)]
        connected: Option<String>,

        /// Id of the generated connected block
        #[arg(long, default_value = "connected")]
        connected_id: String,

        /// Display name of the generated connected block
        #[arg(long, default_value = "Connected Block")]
        connected_name: String,

        /// Force ZIP output regardless of the output path's extension
        #[arg(long)]
        zip: bool,
    },

    /// Resolve one connection set against a catalog (useful for debugging)
    Resolve {
        /// Connection directions, comma-separated (e.g. "up,north"), or "none"
        #[arg(short = 'd', long)]
        connections: String,

        /// Path to the asset bundle (ZIP or directory)
        #[arg(short, long)]
        assets: PathBuf,

        /// Catalog manifest name inside the bundle
        #[arg(short, long, default_value = "pipes")]
        catalog: String,
    },

    /// Show information about an asset bundle
    Info {
        /// Path to the asset bundle (ZIP or directory)
        #[arg(short, long)]
        assets: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            assets,
            output,
            namespace,
            pipe_id,
            pipe_name,
            catalog,
            connected,
            connected_id,
            connected_name,
            zip,
        } => {
            generate(
                &assets,
                &output,
                &namespace,
                &pipe_id,
                &pipe_name,
                &catalog,
                connected.as_deref(),
                &connected_id,
                &connected_name,
                zip,
            )?;
        }
        Commands::Resolve {
            connections,
            assets,
            catalog,
        } => {
            resolve_single(&connections, &assets, &catalog)?;
        }
        Commands::Info { assets } => {
            show_bundle_info(&assets)?;
        }
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn generate(
    assets_path: &PathBuf,
    output_path: &PathBuf,
    namespace: &str,
    pipe_id: &str,
    pipe_name: &str,
    catalog: &str,
    connected_dir: Option<&str>,
    connected_id: &str,
    connected_name: &str,
    force_zip: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Loading asset bundle from {:?}...", assets_path);
    let assets = AssetLibrary::load_from_path(assets_path)?;
    println!(
        "  Found {} models, {} textures, {} catalogs",
        assets.model_count(),
        assets.texture_count(),
        assets.catalog_count()
    );

    let mut package = ModPackage::new(namespace);

    println!("Generating pipe block '{}:{}'...", namespace, pipe_id);
    let mut pipe_options = PipeOptions::new(pipe_id, pipe_name);
    pipe_options.catalog = catalog.to_string();
    generate_pipe_block(&mut package, &assets, &pipe_options)?;

    if let Some(model_dir) = connected_dir {
        println!(
            "Generating connected block '{}:{}' from {}/...",
            namespace, connected_id, model_dir
        );
        let options = ConnectedOptions::new(connected_id, connected_name, model_dir);
        generate_connected_block(&mut package, &assets, &options)?;
    }

    println!(
        "  Registered {} block(s), {} model(s)",
        package.block_count(),
        package.model_count()
    );

    let writer = PackageWriter::new(&package, &assets);
    if force_zip {
        let bytes = writer.write_zip_bytes()?;
        std::fs::write(output_path, bytes)?;
    } else {
        writer.write_to_path(output_path)?;
    }
    println!("Wrote package to {:?}", output_path);

    Ok(())
}

fn resolve_single(
    connections: &str,
    assets_path: &PathBuf,
    catalog_name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let requested = parse_connections(connections)?;

    println!("Loading asset bundle from {:?}...", assets_path);
    let assets = AssetLibrary::load_from_path(assets_path)?;
    let manifest = assets
        .get_catalog(catalog_name)
        .ok_or_else(|| format!("no catalog manifest named '{}'", catalog_name))?;
    let catalog = ShapeCatalog::from_manifest(manifest)?;

    let resolver = PipeResolver::new(&catalog);
    let resolved = resolver.resolve(requested);

    println!("Requested: {}", requested);
    println!("  Shape:    {} ({})", resolved.shape.model, resolved.shape.connections);
    println!("  Rotation: {}", resolved.rotation);
    println!("  Weight:   {}", resolved.rotation.weight());
    println!("  Fallback: {}", resolved.fallback);

    Ok(())
}

fn show_bundle_info(assets_path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let assets = AssetLibrary::load_from_path(assets_path)?;

    println!("Asset bundle {:?}:", assets_path);
    println!("  Models:   {}", assets.model_count());
    println!("  Textures: {}", assets.texture_count());
    println!("  Catalogs: {}", assets.catalog_count());

    let mut catalog_names: Vec<&String> = assets.catalogs.keys().collect();
    catalog_names.sort();
    for name in catalog_names {
        let manifest = &assets.catalogs[name];
        println!("  Catalog '{}': {} shape(s)", name, manifest.shapes.len());
        for shape in &manifest.shapes {
            let connections: DirectionSet = shape.connections.iter().copied().collect();
            println!("    {} <- {}", shape.model, connections);
        }
    }

    Ok(())
}

fn parse_connections(s: &str) -> Result<DirectionSet, String> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("none") {
        return Ok(DirectionSet::EMPTY);
    }

    let mut set = DirectionSet::EMPTY;
    for part in s.split(',') {
        let part = part.trim();
        let direction = Direction::from_str(part)
            .ok_or_else(|| format!("unknown direction '{}' (expected down/up/north/south/west/east)", part))?;
        set.insert(direction);
    }
    Ok(set)
}
